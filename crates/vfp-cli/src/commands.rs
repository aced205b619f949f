//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;
use polars::prelude::{ChunkAgg, DataFrame};
use tracing::info;
use vfp_core::{PipelineContext, load_artifact, save_artifact};
use vfp_ingest::{read_annotations, write_tsv};
use vfp_model::{ModelArtifact, columns};

use crate::cli::{PredictArgs, TrainArgs};

/// Identity columns exported alongside the score, in output order.
const OUTPUT_COLUMNS: &[&str] = &[
    columns::CHR,
    columns::POS,
    columns::REF,
    columns::ALT,
    columns::GENE_NAME,
    columns::GENE_ID,
    columns::ID_SOURCE,
    columns::FEATURE,
    columns::FEATURE_TYPE,
    columns::SCORE,
];

pub struct PredictResult {
    pub rows: usize,
    pub output: PathBuf,
    pub min_score: f64,
    pub max_score: f64,
}

pub struct TrainResult {
    pub rows: usize,
    pub feature_count: usize,
    /// Categorical feature name and its retained value count.
    pub categorical: Vec<(String, usize)>,
    pub artifact_path: PathBuf,
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictResult> {
    let artifact = load_artifact(&args.model)?;
    let context = PipelineContext::new(env!("CARGO_PKG_VERSION"));
    let df = read_annotations(&args.input)?;
    let outcome = vfp_core::predict(&context, &artifact, df)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("scores.tsv"));
    let exported = select_output_columns(&outcome.frame)?;
    write_tsv(&exported, &output)?;

    let scores = outcome.frame.column(columns::SCORE)?.f64()?;
    Ok(PredictResult {
        rows: outcome.frame.height(),
        output,
        min_score: scores.min().unwrap_or(f64::NAN),
        max_score: scores.max().unwrap_or(f64::NAN),
    })
}

pub fn run_train(args: &TrainArgs) -> Result<TrainResult> {
    let context = PipelineContext::new(env!("CARGO_PKG_VERSION"))
        .with_train_features(args.features.clone());
    let df = read_annotations(&args.input)?;
    let outcome = vfp_core::train(&context, df)?;

    let categorical: Vec<(String, usize)> = outcome
        .metadata
        .category_table
        .features()
        .map(|feature| {
            let count = outcome
                .metadata
                .category_table
                .get(feature)
                .map_or(0, <[String]>::len);
            (feature.to_string(), count)
        })
        .collect();
    let feature_count = outcome.metadata.feature_names.len();
    let rows = outcome.frame.height();

    let artifact = ModelArtifact {
        metadata: outcome.metadata,
        booster: None,
    };
    save_artifact(&artifact, &args.output)?;
    if let Some(path) = &args.matrix_output {
        write_tsv(&outcome.frame, path)?;
        info!(path = %path.display(), "wrote training matrix");
    }

    Ok(TrainResult {
        rows,
        feature_count,
        categorical,
        artifact_path: args.output.clone(),
    })
}

/// Keep the identity columns that survived the pipeline plus the score.
fn select_output_columns(df: &DataFrame) -> Result<DataFrame> {
    let present: Vec<&str> = OUTPUT_COLUMNS
        .iter()
        .copied()
        .filter(|name| df.column(name).is_ok())
        .collect();
    Ok(df.select(present)?)
}
