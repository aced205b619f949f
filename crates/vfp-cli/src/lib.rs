//! Library surface of the pipeline CLI: logging setup shared with tests.

pub mod logging;
