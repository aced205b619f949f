//! Pipeline context.
//!
//! One context is created per invocation and passed down explicitly;
//! no component reads process-wide state. It carries the running tool
//! version (gated against the model artifact before anything is
//! loaded) and the run configuration that is not data.

#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Version of the running tool, compared against the model
    /// artifact's version before any prediction.
    pub tool_version: String,

    /// Raw annotation columns to process at train time. Ignored by the
    /// predict pipeline, which takes the list from the model artifact.
    pub train_features: Vec<String>,
}

impl PipelineContext {
    pub fn new(tool_version: impl Into<String>) -> Self {
        Self {
            tool_version: tool_version.into(),
            train_features: Vec::new(),
        }
    }

    pub fn with_train_features(mut self, features: Vec<String>) -> Self {
        self.train_features = features;
        self
    }
}
