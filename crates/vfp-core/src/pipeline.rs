//! Train and predict pipeline orchestration.
//!
//! Both pipelines share the front half: rename annotator columns,
//! validate the frame, build the preserved variant key and run the
//! transform dispatch. They diverge at encoding: training learns the
//! category table and derives the final feature schema, prediction
//! replays the artifact's table, reconciles against the artifact's
//! feature list and scores the matrix.

use anyhow::{Context, Result, anyhow};
use polars::prelude::*;
use tracing::info;
use vfp_model::{Classifier, ModelArtifact, ModelMetadata, columns};
use vfp_transform::{
    EncoderMode, FeatureMap, create_preservation_column, dispatch, encode, reconcile,
    select_matrix,
};
use vfp_validate::{
    validate_chrom_pos, validate_features_present, validate_min_columns,
    validate_required_columns, validate_versions_compatible,
};

use crate::context::PipelineContext;

#[derive(Debug)]
pub struct PredictOutcome {
    /// The input frame with the score column appended.
    pub frame: DataFrame,
    pub feature_map: FeatureMap,
}

pub struct TrainOutcome {
    /// The fully transformed and encoded frame, ready for an external
    /// booster fit.
    pub frame: DataFrame,
    /// Everything the predict pipeline needs to reproduce this schema.
    pub metadata: ModelMetadata,
    pub feature_map: FeatureMap,
}

/// Score a dataset with the artifact's own booster.
pub fn predict(
    context: &PipelineContext,
    artifact: &ModelArtifact,
    df: DataFrame,
) -> Result<PredictOutcome> {
    let booster = artifact
        .booster
        .as_ref()
        .ok_or_else(|| anyhow!("model artifact carries no booster, cannot score"))?;
    predict_with(context, &artifact.metadata, booster, df)
}

/// Score a dataset with an explicitly supplied classifier.
pub fn predict_with(
    context: &PipelineContext,
    metadata: &ModelMetadata,
    classifier: &dyn Classifier,
    mut df: DataFrame,
) -> Result<PredictOutcome> {
    validate_versions_compatible(&context.tool_version, &metadata.model_version)?;

    prepare_frame(&mut df, &[])?;
    let feature_map = dispatch(&mut df, &metadata.vep_features)?;

    // Every feature the model consumes must exist, in its pre-encoding
    // form, before the table replay reshapes the frame.
    let required = pre_encoding_features(metadata);
    validate_features_present(&df, &required)?;

    encode(&mut df, Some(EncoderMode::Predict(&metadata.category_table)))?;
    reconcile(&mut df, &metadata.feature_names)?;

    let matrix = select_matrix(&df, &metadata.feature_names)?;
    let scores = classifier.predict_proba(&matrix)?;
    df.with_column(Series::new(columns::SCORE.into(), scores))?;
    info!(rows = df.height(), "scored dataset");
    Ok(PredictOutcome {
        frame: df,
        feature_map,
    })
}

/// Transform and encode a training dataset, learning the feature schema.
pub fn train(context: &PipelineContext, mut df: DataFrame) -> Result<TrainOutcome> {
    if context.train_features.is_empty() {
        return Err(anyhow!("no training features configured"));
    }

    prepare_frame(&mut df, &[])?;
    let feature_map = dispatch(&mut df, &context.train_features)?;

    let processable = reset_processing_features(&context.train_features, &feature_map);
    let category_table = encode(&mut df, Some(EncoderMode::Train(&processable)))?;
    let feature_names = expand_feature_names(&processable, &category_table);

    // The trainer consumes the same padded matrix the predictor will.
    reconcile(&mut df, &feature_names)?;
    info!(
        features = feature_names.len(),
        categorical = category_table.len(),
        "learned feature schema"
    );

    let metadata = ModelMetadata {
        model_version: context.tool_version.clone(),
        vep_features: context.train_features.clone(),
        category_table,
        feature_names,
    };
    Ok(TrainOutcome {
        frame: df,
        metadata,
        feature_map,
    })
}

/// Shared front half: renames, sanity checks, preserved variant key.
fn prepare_frame(df: &mut DataFrame, required: &[&str]) -> Result<()> {
    vfp_ingest::apply_column_renames(df).context("renaming annotation columns")?;
    validate_min_columns(df)?;
    validate_required_columns(df, required)?;
    validate_chrom_pos(df)?;
    create_preservation_column(df)?;
    Ok(())
}

/// Replace each raw input column that produced derived columns with its
/// outputs; inputs untouched by any transformer stay as-is (they are
/// consumed directly, e.g. numeric annotation scores).
fn reset_processing_features(requested: &[String], feature_map: &FeatureMap) -> Vec<String> {
    let mut features = Vec::new();
    for name in requested {
        match feature_map.outputs(name) {
            Some(outputs) => features.extend(outputs.iter().cloned()),
            None => features.push(name.clone()),
        }
    }
    features
}

/// Expand categorical features into their indicator column names; the
/// rest keep their own name. This is the model's final feature order.
fn expand_feature_names(
    processable: &[String],
    table: &vfp_model::CategoryTable,
) -> Vec<String> {
    let mut names = Vec::new();
    for feature in processable {
        match table.get(feature) {
            Some(values) => {
                names.extend(values.iter().map(|value| format!("{feature}_{value}")));
            }
            None => names.push(feature.clone()),
        }
    }
    names
}

/// The pre-encoding column set implied by the model's feature list:
/// indicator columns collapse back to their categorical feature, plain
/// features stay themselves.
pub fn pre_encoding_features(metadata: &ModelMetadata) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();
    for name in &metadata.feature_names {
        let original = metadata
            .category_table
            .features()
            .find(|feature| {
                metadata
                    .category_table
                    .get(feature)
                    .is_some_and(|values| {
                        values.iter().any(|value| name == &format!("{feature}_{value}"))
                    })
            })
            .map_or_else(|| name.clone(), str::to_string);
        if !features.contains(&original) {
            features.push(original);
        }
    }
    features
}
