// This is intentionally thin:
// no mutation
// no rebuild methods
// runtime reads only

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::cardinal::{ConvertError, Converter, DirectConverter};
use crate::table::artifact::{table_version, TableArtifact, TABLE_ENTRIES};

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Artifact entry count mismatch: expected {expected}, found {found}")]
    EntryCount { expected: usize, found: usize },
    #[error("Artifact version mismatch: manifest says {manifest}, content hashes to {computed}")]
    VersionMismatch { manifest: String, computed: String },
}

/// Read-only conversion table loaded from a verified artifact.
#[derive(Debug)]
pub struct TableConverter {
    entries: Vec<String>,
}

impl TableConverter {
    /// Load and verify an artifact. The version hash is recomputed
    /// from the loaded entries and checked against the manifest, so a
    /// tampered or truncated artifact never reaches the hot path.
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let f = fs::File::open(path)?;
        let artifact: TableArtifact = serde_json::from_reader(f)?;

        if artifact.entry_count != TABLE_ENTRIES || artifact.entries.len() != TABLE_ENTRIES {
            return Err(TableLoadError::EntryCount {
                expected: TABLE_ENTRIES,
                found: artifact.entries.len(),
            });
        }

        let computed = table_version(&artifact.build_config, &artifact.entries)?;
        if computed != artifact.table_version {
            return Err(TableLoadError::VersionMismatch {
                manifest: artifact.table_version,
                computed,
            });
        }

        Ok(Self {
            entries: artifact.entries,
        })
    }
}

impl Converter for TableConverter {
    fn convert(&self, n: u16) -> Result<String, ConvertError> {
        self.entries
            .get(n as usize)
            .cloned()
            .ok_or(ConvertError::OutOfRange(n))
    }
}

/// The converter actually in use, chosen once at startup. Per-call
/// paths never re-check artifact availability.
#[derive(Debug)]
pub enum Backend {
    Table(TableConverter),
    Direct(DirectConverter),
}

impl Backend {
    /// Artifact failures are recovered here, once, by degrading to
    /// direct computation; callers never observe them, and output is
    /// byte-identical on either path.
    pub fn select(artifact: Option<&Path>) -> Self {
        match artifact {
            Some(path) => match TableConverter::load(path) {
                Ok(table) => Backend::Table(table),
                Err(_) => Backend::Direct(DirectConverter),
            },
            None => Backend::Direct(DirectConverter),
        }
    }
}

impl Converter for Backend {
    fn convert(&self, n: u16) -> Result<String, ConvertError> {
        match self {
            Backend::Table(table) => table.convert(n),
            Backend::Direct(direct) => direct.convert(n),
        }
    }
}
