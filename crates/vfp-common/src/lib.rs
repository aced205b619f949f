//! Shared helpers for the variant feature pipeline crates.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
    parse_i64,
};
