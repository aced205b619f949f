//! Position-fraction parser for cDNA, CDS and protein positions.
//!
//! The annotator reports these positions as `<start>/<total>`,
//! `<start>-<end>/<total>` or `<start>-<end>`, optionally with `?-` or
//! `-?` markers for open-ended ranges. Only the first number of a range
//! is kept as the position; the `/`-delimited field, when present, is
//! the total (denominator). Malformed cells become null.

use polars::prelude::*;
use vfp_common::parse_f64;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

pub struct PositionFraction {
    input: &'static str,
    position_output: &'static str,
    total_output: &'static str,
}

impl PositionFraction {
    pub fn cdna() -> Self {
        Self {
            input: "cDNA_position",
            position_output: "cDNApos",
            total_output: "relcDNApos",
        }
    }

    pub fn cds() -> Self {
        Self {
            input: "CDS_position",
            position_output: "CDSpos",
            total_output: "relCDSpos",
        }
    }

    pub fn protein() -> Self {
        Self {
            input: "Protein_position",
            position_output: "protPos",
            total_output: "relProtPos",
        }
    }
}

fn parse_cell(value: &str) -> (Option<f64>, Option<f64>) {
    // Open-ended range markers carry no positional information.
    let value = value
        .trim()
        .trim_start_matches("?-")
        .trim_end_matches("-?");
    let (position_part, total_part) = match value.split_once('/') {
        Some((position, total)) => (position, Some(total)),
        None => (value, None),
    };
    let first = position_part
        .split_once('-')
        .map_or(position_part, |(start, _)| start);
    (parse_f64(first), total_part.and_then(parse_f64))
}

impl Transformer for PositionFraction {
    fn name(&self) -> &str {
        self.input
    }

    fn columns(&self) -> Vec<String> {
        vec![self.position_output.to_string(), self.total_output.to_string()]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.input)?;
        let mut positions: Vec<Option<f64>> = Vec::with_capacity(cells.len());
        let mut totals: Vec<Option<f64>> = Vec::with_capacity(cells.len());
        for cell in &cells {
            let (position, total) = match cell.as_deref() {
                Some(value) => parse_cell(value),
                None => (None, None),
            };
            positions.push(position);
            totals.push(total);
        }
        df.with_column(Series::new(self.position_output.into(), positions))?;
        df.with_column(Series::new(self.total_output.into(), totals))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(cells: Vec<Option<&str>>) -> DataFrame {
        DataFrame::new(vec![Series::new("cDNA_position".into(), cells).into()]).unwrap()
    }

    #[test]
    fn plain_fraction() {
        let mut df = frame(vec![Some("305/702")]);
        PositionFraction::cdna().process(&mut df).unwrap();
        assert_eq!(df.column("cDNApos").unwrap().f64().unwrap().get(0), Some(305.0));
        assert_eq!(df.column("relcDNApos").unwrap().f64().unwrap().get(0), Some(702.0));
    }

    #[test]
    fn range_without_denominator() {
        let mut df = frame(vec![Some("483-486")]);
        PositionFraction::cdna().process(&mut df).unwrap();
        assert_eq!(df.column("cDNApos").unwrap().f64().unwrap().get(0), Some(483.0));
        assert_eq!(df.column("relcDNApos").unwrap().f64().unwrap().get(0), None);
    }

    #[test]
    fn range_with_denominator_keeps_first() {
        let mut df = frame(vec![Some("112-115/900")]);
        PositionFraction::cdna().process(&mut df).unwrap();
        assert_eq!(df.column("cDNApos").unwrap().f64().unwrap().get(0), Some(112.0));
        assert_eq!(df.column("relcDNApos").unwrap().f64().unwrap().get(0), Some(900.0));
    }

    #[test]
    fn open_ended_markers_are_stripped() {
        let mut df = frame(vec![Some("?-84/1000"), Some("84-?/1000")]);
        PositionFraction::cdna().process(&mut df).unwrap();
        let positions = df.column("cDNApos").unwrap().f64().unwrap();
        assert_eq!(positions.get(0), Some(84.0));
        assert_eq!(positions.get(1), Some(84.0));
    }

    #[test]
    fn malformed_cell_becomes_null() {
        let mut df = frame(vec![Some("?"), Some("abc/10"), None]);
        PositionFraction::cdna().process(&mut df).unwrap();
        let positions = df.column("cDNApos").unwrap().f64().unwrap();
        assert_eq!(positions.get(0), None);
        assert_eq!(positions.get(1), None);
        assert_eq!(positions.get(2), None);
        // The denominator still parses even when the position does not.
        assert_eq!(df.column("relcDNApos").unwrap().f64().unwrap().get(1), Some(10.0));
    }

    #[test]
    fn numeric_input_passes_through() {
        let mut df = DataFrame::new(vec![
            Series::new("Protein_position".into(), vec![Some(42i64), None]).into(),
        ])
        .unwrap();
        PositionFraction::protein().process(&mut df).unwrap();
        assert_eq!(df.column("protPos").unwrap().f64().unwrap().get(0), Some(42.0));
        assert_eq!(df.column("relProtPos").unwrap().f64().unwrap().get(0), None);
    }

    #[test]
    fn variant_output_names() {
        assert_eq!(PositionFraction::cds().columns(), vec!["CDSpos", "relCDSpos"]);
        assert_eq!(PositionFraction::protein().columns(), vec!["protPos", "relProtPos"]);
    }
}
