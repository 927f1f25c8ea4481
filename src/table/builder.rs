use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::cardinal::converter::render;
use crate::cardinal::MAX_CARDINAL;
use crate::table::artifact::{table_version, TableArtifact, TableBuildConfig};

#[derive(Debug, Error)]
pub enum TableBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output artifact already exists: {0}")]
    OutputExists(PathBuf),
}

/// TableBuilder is single-threaded and non-reentrant by design.
/// Runs offline; the runtime path only ever reads the artifact.
pub struct TableBuilder {
    config: TableBuildConfig,
}

impl TableBuilder {
    pub fn new(config: TableBuildConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, output_path: &Path) -> Result<TableArtifact, TableBuildError> {
        if output_path.exists() {
            return Err(TableBuildError::OutputExists(output_path.to_path_buf()));
        }

        // Enumerate the full domain through the direct rendering rule,
        // in index order, so the artifact and the direct path agree by
        // construction.
        let entries: Vec<String> = (0..=MAX_CARDINAL).map(render).collect();

        let table_version = table_version(&self.config, &entries)?;

        let artifact = TableArtifact {
            table_version,
            build_config: self.config.clone(),
            created_at: Utc::now(),
            entry_count: entries.len(),
            entries,
        };

        // Write to a temp path, then atomic rename. The suffix comes
        // from the version hash so concurrent builds of different
        // configs into the same parent dir cannot collide.
        let temp_suffix = format!("tmp.{}", &artifact.table_version[7..19]);
        let temp_path = output_path.with_extension(temp_suffix);

        // Clean up a stale temp file from a crashed previous run of
        // THIS specific version
        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        let f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&f, &artifact)?;
        f.sync_all()?;

        fs::rename(&temp_path, output_path)?;

        Ok(artifact)
    }
}
