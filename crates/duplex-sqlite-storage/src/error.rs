//! Error types for the SQLite storage implementation.

/// Error type for SQLite storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from rusqlite
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    /// Error during database migration
    #[error("Migration error: {0}")]
    Refinery(#[from] refinery::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_rusqlite() {
        let err: Error = rusqlite::Error::InvalidQuery.into();
        assert!(err.to_string().contains("SQLite error"));
    }

    #[test]
    fn test_error_debug() {
        let err: Error = rusqlite::Error::InvalidQuery.into();
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Rusqlite"));
    }
}
