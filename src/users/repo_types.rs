use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use time::PrimitiveDateTime;

/// One row of the `users` table.
///
/// Field order mirrors the `userid, fname, name, signupdate` columns.
/// `User::default()` is the empty record, filled field by field before an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,                            // userid
    pub first_name: Option<String>,              // fname, may be NULL
    pub name: Option<String>,                    // name, may be NULL
    pub signup_date: Option<PrimitiveDateTime>,  // signupdate, no time zone, may be NULL
}

impl User {
    /// Record with `name` and `signup_date` present.
    pub fn new(
        user_id: i64,
        first_name: Option<String>,
        name: impl Into<String>,
        signup_date: PrimitiveDateTime,
    ) -> Self {
        Self {
            user_id,
            first_name,
            name: Some(name.into()),
            signup_date: Some(signup_date),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.user_id,
            self.first_name.as_deref().unwrap_or("null"),
            self.name.as_deref().unwrap_or("null"),
        )?;
        match &self.signup_date {
            Some(signup_date) => write!(f, "{signup_date}"),
            None => f.write_str("null"),
        }
    }
}

// Columns are read by name so `SELECT *` column order does not matter.
impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            user_id: user_id_from(row)?,
            first_name: row.try_get("fname")?,
            name: row.try_get("name")?,
            signup_date: row.try_get("signupdate")?,
        })
    }
}

/// `userid` is BIGINT in most deployments; INTEGER columns are widened.
fn user_id_from(row: &PgRow) -> Result<i64, sqlx::Error> {
    match row.try_get::<i64, _>("userid") {
        Err(sqlx::Error::ColumnDecode { .. }) => row.try_get::<i32, _>("userid").map(i64::from),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn display_matches_listing_format() {
        let user = User::new(1, Some("A".into()), "Alice", datetime!(2023-05-01 12:30));
        assert!(user.to_string().starts_with("1 A Alice 2023-05-01 12:30"));
    }

    #[test]
    fn display_renders_missing_first_name_as_null() {
        let user = User::new(7, None, "Bob", datetime!(2020-01-01 0:00));
        assert!(user.to_string().starts_with("7 null Bob "));
    }

    #[test]
    fn display_renders_missing_name_and_signup_date_as_null() {
        let user = User {
            user_id: 9,
            first_name: Some("I".into()),
            name: None,
            signup_date: None,
        };
        assert_eq!(user.to_string(), "9 I null null");
    }

    #[test]
    fn default_is_empty_record() {
        let user = User::default();
        assert_eq!(user.user_id, 0);
        assert!(user.first_name.is_none());
        assert!(user.name.is_none());
        assert!(user.signup_date.is_none());
        assert_eq!(user.to_string(), "0 null null null");
    }

    #[test]
    fn fields_can_be_filled_after_default() {
        let mut user = User::default();
        user.user_id = 3;
        user.first_name = Some("C".into());
        user.name = Some("Carol".into());
        user.signup_date = Some(datetime!(2021-02-03 4:05:06));
        assert_eq!(
            user,
            User::new(3, Some("C".into()), "Carol", datetime!(2021-02-03 4:05:06))
        );
    }

    #[test]
    fn serializes_to_json() {
        let user = User::new(2, Some("B".into()), "Bob", datetime!(2022-06-07 8:09:10));
        let value = serde_json::to_value(&user).expect("serialize user");
        assert_eq!(value["user_id"], 2);
        assert_eq!(value["first_name"], "B");
        assert_eq!(value["name"], "Bob");
        assert!(value["signup_date"].is_string());
    }

    #[test]
    fn serializes_missing_values_as_null() {
        let value = serde_json::to_value(User::default()).expect("serialize user");
        assert!(value["name"].is_null());
        assert!(value["signup_date"].is_null());
    }
}
