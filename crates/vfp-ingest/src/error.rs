use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("input file holds no data rows")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, IngestError>;
