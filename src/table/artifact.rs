use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::cardinal::MAX_CARDINAL;

/// Number of entries a well-formed artifact carries: one per value in
/// [0, 1000].
pub const TABLE_ENTRIES: usize = MAX_CARDINAL as usize + 1;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableBuildConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl TableBuildConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

/// The serialized lookup table: an opaque, versioned, immutable
/// artifact built offline from the same rendering rule the direct
/// path uses. Consumed read-only; never mutated after build.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TableArtifact {
    pub table_version: String,
    pub build_config: TableBuildConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub entry_count: usize,
    pub entries: Vec<String>,
}

/// Content hash over the build config and every entry in index order.
/// Recomputed on load to detect tampered or truncated artifacts.
/// `created_at` is deliberately excluded so rebuilds of the same table
/// hash identically.
pub fn table_version(
    config: &TableBuildConfig,
    entries: &[String],
) -> Result<String, serde_json::Error> {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_vec(config)?;
    hasher.update(&config_json);

    for (index, words) in entries.iter().enumerate() {
        let line = format!("{index}:{words}");
        hasher.update(line.as_bytes());
    }

    let hash_bytes = hasher.finalize();
    Ok(format!("sha256:{}", hex::encode(hash_bytes)))
}
