//! Annotation file loading and result export.

pub mod error;
pub mod export;
pub mod postprocess;
pub mod reader;

pub use error::{IngestError, Result};
pub use export::write_tsv;
pub use postprocess::apply_column_renames;
pub use reader::read_annotations;
