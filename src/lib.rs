//! Typed access to the `users` table.
//!
//! The caller owns the connection and hands it to each operation:
//!
//! ```ignore
//! let mut conn = PgConnection::connect(&database_url).await?;
//! let everyone = userstore::users::fetch_all(&mut conn).await?;
//! if let Some(mut user) = userstore::users::fetch_by_id(&mut conn, 1).await? {
//!     user.name = Some("Alice2".into());
//!     userstore::users::update(&mut conn, &user).await?;
//! }
//! ```
//!
//! Tests that talk to Postgres are `#[ignore = "requires database"]`; a plain
//! `cargo test` skips them. Point them at a scratch database with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`. Each one works on a
//! TEMPORARY `users` table.

pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod users;

pub use error::{StoreError, StoreResult};
pub use users::User;
