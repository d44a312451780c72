use sqlx::PgExecutor;
use tracing::debug;

use crate::error::StoreResult;
use crate::users::repo_types::User;

pub(crate) const SELECT_ALL_USERS: &str = "SELECT * FROM users";
pub(crate) const SELECT_USER_BY_ID: &str = "SELECT * FROM users WHERE userid = $1";
pub(crate) const UPDATE_USER: &str =
    "UPDATE users SET fname = $1, name = $2, signupdate = $3 WHERE userid = $4";

/// Return every row of `users`, in whatever order the server yields them.
pub async fn fetch_all<'e, E>(db: E) -> StoreResult<Vec<User>>
where
    E: PgExecutor<'e>,
{
    let users = sqlx::query_as::<_, User>(SELECT_ALL_USERS)
        .fetch_all(db)
        .await?;
    debug!(count = users.len(), "fetched all users");
    Ok(users)
}

/// Look up a single user. `Ok(None)` when no row carries `user_id`.
pub async fn fetch_by_id<'e, E>(db: E, user_id: i64) -> StoreResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(SELECT_USER_BY_ID)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    debug!(user_id, found = user.is_some(), "fetched user by id");
    Ok(user)
}

/// Overwrite fname, name and signupdate of the row keyed by `user.user_id`.
///
/// Returns the number of rows touched. An unknown id touches nothing and is
/// reported as `Ok(0)`.
pub async fn update<'e, E>(db: E, user: &User) -> StoreResult<u64>
where
    E: PgExecutor<'e>,
{
    let rows_affected = sqlx::query(UPDATE_USER)
        .bind(&user.first_name)
        .bind(&user.name)
        .bind(user.signup_date)
        .bind(user.user_id)
        .execute(db)
        .await?
        .rows_affected();
    debug!(user_id = user.user_id, rows_affected, "updated user");
    Ok(rows_affected)
}
