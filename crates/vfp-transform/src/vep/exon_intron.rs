//! Exon and intron rank parser.
//!
//! The annotator reports exon and intron ranks as `<number>/<total>` or
//! `<number>-<number>/<total>` when a variant spans several. Three
//! columns are derived: the first affected rank, the count of affected
//! ranks, and the total. A reversed range is treated as malformed
//! rather than an error.

use polars::prelude::*;
use tracing::warn;
use vfp_common::parse_i64;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

pub struct ExonIntron {
    input: &'static str,
}

impl ExonIntron {
    pub fn exon() -> Self {
        Self { input: "Exon" }
    }

    pub fn intron() -> Self {
        Self { input: "Intron" }
    }
}

fn parse_cell(input: &str, value: &str) -> (Option<i64>, Option<i64>, Option<i64>) {
    let (rank_part, total_part) = match value.split_once('/') {
        Some((rank, total)) => (rank, Some(total)),
        None => (value, None),
    };
    let total = total_part.and_then(parse_i64);
    match rank_part.split_once('-') {
        Some((start, end)) => {
            let start = parse_i64(start);
            let end = parse_i64(end);
            match (start, end) {
                (Some(start), Some(end)) if end >= start => {
                    (Some(start), Some(end - start + 1), total)
                }
                (Some(start), Some(end)) => {
                    warn!("reversed {input} range {start}-{end}, treating as missing");
                    (None, None, total)
                }
                _ => (None, None, total),
            }
        }
        None => {
            let rank = parse_i64(rank_part);
            (rank, rank.map(|_| 1), total)
        }
    }
}

impl Transformer for ExonIntron {
    fn name(&self) -> &str {
        self.input
    }

    fn columns(&self) -> Vec<String> {
        vec![
            format!("{}_number", self.input),
            format!("{}_number_affected", self.input),
            format!("{}_total", self.input),
        ]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.input)?;
        let mut numbers: Vec<Option<i64>> = Vec::with_capacity(cells.len());
        let mut affected: Vec<Option<i64>> = Vec::with_capacity(cells.len());
        let mut totals: Vec<Option<i64>> = Vec::with_capacity(cells.len());
        for cell in &cells {
            let (number, count, total) = match cell.as_deref() {
                Some(value) => parse_cell(self.input, value),
                None => (None, None, None),
            };
            numbers.push(number);
            affected.push(count);
            totals.push(total);
        }
        let names = self.columns();
        df.with_column(Series::new(names[0].as_str().into(), numbers))?;
        df.with_column(Series::new(names[1].as_str().into(), affected))?;
        df.with_column(Series::new(names[2].as_str().into(), totals))?;
        Ok(())
    }
}
