use thiserror::Error;

#[derive(Debug, Error)]
pub enum VfpError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Pipeline-level misconfiguration. Fatal before any row is processed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A column the caller declared as required is absent from the dataset.
    #[error("required column(s) not present within input dataset: {0}")]
    MissingColumns(String),

    /// The model artifact is structurally unusable.
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VfpError>;
