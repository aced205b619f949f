use polars::prelude::PolarsError;
use thiserror::Error;

use crate::version::VersionComponent;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("version does not adhere to the expected format: {0}")]
    MalformedVersion(String),

    /// The model artifact may not be combined with this tool build.
    #[error(
        "tool {component} version {tool} is not compatible with model {component} version {model}"
    )]
    IncompatibleVersion {
        component: VersionComponent,
        tool: String,
        model: String,
    },

    #[error("detected required column(s) not present within input dataset: {0}")]
    MissingColumns(String),

    #[error("loaded dataset does not have enough columns, is a valid header present?")]
    NotEnoughColumns,

    #[error("detected gap in {0} column, please supply a complete dataset")]
    IncompleteColumn(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
