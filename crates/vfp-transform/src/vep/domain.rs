//! Protein-domain source classifier.
//!
//! The `DOMAINS` column is an ampersand-separated list of
//! `source:identifier` pairs. Each source maps to a priority level
//! (0 is the highest-signal bucket, 5 the catch-all) and the row is
//! classified by the minimum level found across its entries.

use polars::prelude::*;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

const OUTPUT: &str = "Domain";

const NCOILS: u8 = 0;
const SIGNAL_PEPTIDE: u8 = 1;
const LOW_COMPLEXITY: u8 = 2;
const DOMAIN: u8 = 3;
const PANTHER: u8 = 4;
const OTHER: u8 = 5;

fn entry_level(entry: &str) -> u8 {
    let source = entry.split_once(':').map_or(entry, |(source, _)| source);
    match source {
        "PANTHER" => PANTHER,
        "ndomain" => DOMAIN,
        "Low_complexity_(Seg)" => LOW_COMPLEXITY,
        "Cleavage_site_(Signalp)" => SIGNAL_PEPTIDE,
        "Coiled-coils_(Ncoils)" => NCOILS,
        other if other.contains("_domain") || other.contains("_profile") => DOMAIN,
        _ => OTHER,
    }
}

fn level_label(level: u8) -> &'static str {
    match level {
        NCOILS => "ncoils",
        SIGNAL_PEPTIDE => "sigp",
        LOW_COMPLEXITY => "lcompl",
        DOMAIN => "ndomain",
        PANTHER => "hmmpanther",
        _ => "other",
    }
}

pub struct Domains;

impl Transformer for Domains {
    fn name(&self) -> &str {
        "DOMAINS"
    }

    fn columns(&self) -> Vec<String> {
        vec![OUTPUT.to_string()]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.name())?;
        let labels: Vec<Option<&str>> = cells
            .iter()
            .map(|cell| {
                cell.as_deref().map(|value| {
                    let level = value
                        .split('&')
                        .map(entry_level)
                        .min()
                        .unwrap_or(OTHER);
                    level_label(level)
                })
            })
            .collect();
        df.with_column(Series::new(OUTPUT.into(), labels))?;
        Ok(())
    }

    fn fill_null_outputs(&self, df: &mut DataFrame) -> Result<()> {
        let height = df.height();
        df.with_column(Series::new(OUTPUT.into(), vec![None::<&str>; height]))?;
        Ok(())
    }
}
