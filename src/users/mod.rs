pub mod repo;
pub mod repo_types;

pub use repo::{fetch_all, fetch_by_id, update};
pub use repo_types::User;
