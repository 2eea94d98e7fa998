// errors.rs
use thiserror::Error;

/// Errors originating from the storage layer or from schema setup.
///
/// Composition, ranking and filtering never fail, so nothing here
/// describes them.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Schema Error: {0}")]
    SchemaError(String),
}

impl From<rusqlite::Error> for EngineError {
    fn from(e: rusqlite::Error) -> Self {
        EngineError::DbError(e.to_string())
    }
}
