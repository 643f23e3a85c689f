use thiserror::Error;

/// Storage-layer failures. Never retried; each surfaces to the caller
/// as a 5xx response.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database unavailable: {0}")]
    Unavailable(#[from] r2d2::Error),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
