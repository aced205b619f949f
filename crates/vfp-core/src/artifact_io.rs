//! Model artifact persistence.
//!
//! Artifacts are stored as JSON. Loading validates the structure before
//! anything downstream dereferences it.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use vfp_model::ModelArtifact;

pub fn load_artifact(path: &Path) -> Result<ModelArtifact> {
    let file = File::open(path)
        .with_context(|| format!("opening model artifact {}", path.display()))?;
    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing model artifact {}", path.display()))?;
    artifact.validate()?;
    info!(
        version = artifact.metadata.model_version,
        features = artifact.metadata.feature_names.len(),
        "loaded model artifact"
    );
    Ok(artifact)
}

pub fn save_artifact(artifact: &ModelArtifact, path: &Path) -> Result<()> {
    artifact.validate()?;
    let file = File::create(path)
        .with_context(|| format!("creating model artifact {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), artifact)?;
    info!(path = %path.display(), "wrote model artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfp_model::{CategoryTable, ModelMetadata};

    fn artifact() -> ModelArtifact {
        let mut category_table = CategoryTable::new();
        category_table.insert("Type", vec!["SNV".into(), "DELINS".into()]);
        ModelArtifact {
            metadata: ModelMetadata {
                model_version: "4.0.0".into(),
                vep_features: vec!["REF".into()],
                category_table,
                feature_names: vec!["Length".into(), "Type_SNV".into(), "Type_DELINS".into()],
            },
            booster: None,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let original = artifact();
        save_artifact(&original, &path).unwrap();
        let loaded = load_artifact(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn invalid_artifact_is_rejected_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut broken = artifact();
        broken.metadata.feature_names.clear();
        assert!(save_artifact(&broken, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_json_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_artifact(&path).is_err());
    }
}
