use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Pipeline-level misconfiguration, aborts before any row is touched.
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
