//! Category/score splitter for `category(value)` style annotations.

use polars::prelude::*;
use vfp_common::parse_f64;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

pub struct CategoryScore {
    input: &'static str,
    category_output: &'static str,
    value_output: &'static str,
}

impl CategoryScore {
    pub fn sift() -> Self {
        Self {
            input: "SIFT",
            category_output: "SIFTcat",
            value_output: "SIFTval",
        }
    }

    pub fn polyphen() -> Self {
        Self {
            input: "PolyPhen",
            category_output: "PolyPhenCat",
            value_output: "PolyPhenVal",
        }
    }
}

impl Transformer for CategoryScore {
    fn name(&self) -> &str {
        self.input
    }

    fn columns(&self) -> Vec<String> {
        vec![self.category_output.to_string(), self.value_output.to_string()]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.input)?;
        let mut categories: Vec<Option<String>> = Vec::with_capacity(cells.len());
        let mut values: Vec<Option<f64>> = Vec::with_capacity(cells.len());
        for cell in &cells {
            match cell.as_deref() {
                Some(text) => match text.split_once('(') {
                    Some((category, rest)) => {
                        categories.push(Some(category.to_string()));
                        values.push(parse_f64(rest.trim_end_matches(')')));
                    }
                    None => {
                        categories.push(Some(text.to_string()));
                        values.push(None);
                    }
                },
                None => {
                    categories.push(None);
                    values.push(None);
                }
            }
        }
        df.with_column(Series::new(self.category_output.into(), categories))?;
        df.with_column(Series::new(self.value_output.into(), values))?;
        Ok(())
    }

    fn fill_null_outputs(&self, df: &mut DataFrame) -> Result<()> {
        let height = df.height();
        df.with_column(Series::new(
            self.category_output.into(),
            vec![None::<&str>; height],
        ))?;
        df.with_column(Series::new(self.value_output.into(), vec![None::<f64>; height]))?;
        Ok(())
    }
}
