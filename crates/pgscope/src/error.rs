//! Error types for pgscope

use thiserror::Error;

pub type ScopeResult<T> = Result<T, ScopeError>;

/// Failures of the host statement. Building scopes never fails.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The database URL could not be parsed.
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// A statement that must return a row returned none.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Misuse caught before execution (`where_raw` arity, unknown operator).
    #[error("Validation error: {0}")]
    Validation(String),

    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),
}

impl ScopeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for ScopeError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
