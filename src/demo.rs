use std::io::Write;

use anyhow::Context;
use sqlx::PgConnection;

use crate::users;

/// List every user, look one up, then rename it. Progress goes to `out`.
pub async fn run<W: Write>(
    conn: &mut PgConnection,
    user_id: i64,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "Querying all users:")?;
    for user in users::fetch_all(&mut *conn).await.context("fetch all users")? {
        writeln!(out, "{user}")?;
    }

    writeln!(out, "\nQuerying user by ID:")?;
    let found = users::fetch_by_id(&mut *conn, user_id)
        .await
        .with_context(|| format!("fetch user {user_id}"))?;
    match &found {
        Some(user) => writeln!(out, "Found user: {user}")?,
        None => writeln!(out, "User not found")?,
    }

    writeln!(out, "\nUpdating user:")?;
    let Some(mut user) = found else {
        return Ok(());
    };
    user.first_name = Some("New fName".into());
    user.name = Some("New name".into());
    let rows = users::update(&mut *conn, &user)
        .await
        .with_context(|| format!("update user {user_id}"))?;
    tracing::info!(user_id, rows_affected = rows, "user updated");
    writeln!(out, "User updated")?;

    Ok(())
}
