use anyhow::Context;
use sqlx::Connection;

use userstore::config::AppConfig;
use userstore::{db, demo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userstore=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env().context("read configuration")?;
    let mut conn = db::connect(&config).await?;

    let outcome = demo::run(&mut conn, config.demo_user_id, &mut std::io::stdout()).await;
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "closing database connection failed");
    }
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "demo failed");
    }
    outcome
}
