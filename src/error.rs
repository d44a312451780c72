use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a storage operation against the `users` table.
///
/// Connectivity loss, rejected statements, permission errors and row decode
/// failures all land here. A missing row is not an error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_sqlx_error() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
        assert!(err.to_string().starts_with("database error:"));
    }
}
