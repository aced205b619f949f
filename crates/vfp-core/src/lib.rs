//! Pipeline orchestration: wiring ingest, transform, validation and the
//! classifier into the train and predict flows.

pub mod artifact_io;
pub mod context;
pub mod pipeline;

pub use artifact_io::{load_artifact, save_artifact};
pub use context::PipelineContext;
pub use pipeline::{PredictOutcome, TrainOutcome, predict, predict_with, train};
