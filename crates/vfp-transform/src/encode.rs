//! Categorical encoding with train/predict consistency.
//!
//! At train time the encoder learns, per categorical column, the top 5
//! values by frequency and expands the column into one indicator per
//! retained value. Values outside the retained set (and nulls) collapse
//! into a catch-all bucket named by a collision-proof sentinel, never
//! the literal word "other". The learned [`CategoryTable`] is persisted
//! with the model; at predict time it is replayed verbatim and never
//! recomputed, so the indicator schema is identical across runs.

use std::collections::BTreeMap;

use polars::prelude::*;
use tracing::{debug, info};
use vfp_model::{CategoryTable, columns};

use crate::error::{Result, TransformError};
use crate::transformer::string_cells;

/// Number of values retained per categorical feature before the
/// catch-all bucket takes over.
const TOP_VALUES: usize = 5;

/// Encoder configuration: exactly one mode must be supplied.
pub enum EncoderMode<'a> {
    /// Learn a fresh table over these processable feature names.
    Train(&'a [String]),
    /// Replay a previously learned table.
    Predict(&'a CategoryTable),
}

/// Build the preserved variant identity column from the four identity
/// columns, so rows stay identifiable after encoding drops and reshapes
/// annotation columns.
pub fn create_preservation_column(df: &mut DataFrame) -> Result<()> {
    let chr = string_cells(df, columns::CHR)?;
    let pos = string_cells(df, columns::POS)?;
    let reference = string_cells(df, columns::REF)?;
    let alternate = string_cells(df, columns::ALT)?;
    let keys: Vec<String> = (0..df.height())
        .map(|idx| {
            [&chr[idx], &pos[idx], &reference[idx], &alternate[idx]]
                .iter()
                .map(|cell| cell.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(columns::KEY_SEPARATOR)
        })
        .collect();
    df.with_column(Series::new(columns::CHR_POS_REF_ALT.into(), keys))?;
    Ok(())
}

/// Encode every categorical feature in place.
///
/// Returns the category table in effect: freshly learned in train mode,
/// a clone of the supplied one in predict mode. Supplying neither a
/// feature list nor a table is a configuration error, detected before
/// any row is touched.
pub fn encode(df: &mut DataFrame, mode: Option<EncoderMode<'_>>) -> Result<CategoryTable> {
    match mode {
        Some(EncoderMode::Train(processable)) => encode_train(df, processable),
        Some(EncoderMode::Predict(table)) => {
            encode_predict(df, table)?;
            Ok(table.clone())
        }
        None => Err(TransformError::Configuration(
            "categorical encoder requires either processable features or a predetermined \
             category table"
                .to_string(),
        )),
    }
}

/// String-typed columns among the processable features, excluding
/// identity and bookkeeping columns.
fn categorical_columns(df: &DataFrame, processable: &[String]) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .filter(|name| {
            processable.iter().any(|feature| feature == name)
                && !columns::ENCODING_EXCLUDED.contains(&name.as_str())
        })
        .collect()
}

/// Learn the retained value set for each categorical feature and expand
/// it into indicator columns.
pub fn encode_train(df: &mut DataFrame, processable: &[String]) -> Result<CategoryTable> {
    let mut table = CategoryTable::default();
    for feature in categorical_columns(df, processable) {
        let cells = string_cells(df, &feature)?;
        let retained = rank_values(&cells);
        info!(
            feature = feature.as_str(),
            retained = retained.join(", "),
            "learned categorical feature values"
        );
        expand_feature(df, &feature, &retained, &cells)?;
        table.insert(feature, retained);
    }
    Ok(table)
}

/// Replay a learned table over the dataset. A feature absent from the
/// dataset still gets its full indicator set, filled with null.
pub fn encode_predict(df: &mut DataFrame, table: &CategoryTable) -> Result<()> {
    let height = df.height();
    for feature in table.features() {
        let retained = table
            .get(feature)
            .ok_or_else(|| TransformError::Message(format!("category table lost {feature}")))?;
        if df.column(feature).is_err() {
            debug!("categorical feature {feature} absent, emitting null indicators");
            for value in retained {
                let name = format!("{feature}_{value}");
                df.with_column(Series::new(name.as_str().into(), vec![None::<f64>; height]))?;
            }
            continue;
        }
        let cells = string_cells(df, feature)?;
        expand_feature(df, feature, retained, &cells)?;
    }
    Ok(())
}

/// Frequency-ranked distinct values, ties broken by first appearance.
/// The catch-all sentinel is appended when anything falls outside the
/// top set: more distinct values than the cap, or null cells.
fn rank_values(cells: &[Option<String>]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut nulls = 0usize;
    for cell in cells {
        match cell.as_deref() {
            Some(value) => {
                if let Some(&slot) = index.get(value) {
                    counts[slot].1 += 1;
                } else {
                    index.insert(value, counts.len());
                    counts.push((value.to_string(), 1));
                }
            }
            None => nulls += 1,
        }
    }
    let distinct = counts.len();
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let mut retained: Vec<String> = counts
        .into_iter()
        .take(TOP_VALUES)
        .map(|(value, _)| value)
        .collect();
    if distinct > TOP_VALUES || nulls > 0 {
        retained.push(columns::OTHER_BUCKET.to_string());
    }
    retained
}

/// Replace a categorical column with its indicator columns. Cells whose
/// value is not retained map to the sentinel when the table carries it;
/// otherwise the row ends up all zero.
fn expand_feature(
    df: &mut DataFrame,
    feature: &str,
    retained: &[String],
    cells: &[Option<String>],
) -> Result<()> {
    let bucketed: Vec<Option<&str>> = cells
        .iter()
        .map(|cell| match cell.as_deref() {
            Some(value) if retained.iter().any(|r| r == value) => Some(value),
            _ if retained.iter().any(|r| r == columns::OTHER_BUCKET) => {
                Some(columns::OTHER_BUCKET)
            }
            _ => None,
        })
        .collect();
    for value in retained {
        let name = format!("{feature}_{value}");
        let indicators: Vec<i32> = bucketed
            .iter()
            .map(|cell| i32::from(*cell == Some(value.as_str())))
            .collect();
        df.with_column(Series::new(name.as_str().into(), indicators))?;
    }
    df.drop_in_place(feature)?;
    Ok(())
}
