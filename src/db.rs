use anyhow::Context;
use sqlx::{Connection, PgConnection};

use crate::config::AppConfig;

/// Open a single dedicated connection. The caller closes it.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgConnection> {
    let conn = PgConnection::connect(&config.database_url)
        .await
        .context("connect to database")?;
    tracing::debug!("database connection established");
    Ok(conn)
}
