//! Build entry configuration loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{Error, Result};

/// One configured unit of work mapping a source root to an output artifact.
///
/// Every field defaults so an absent key deserializes cleanly: a missing
/// `source`/`target` is `None` (reported by the validator), a missing
/// `enabled` flag means disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildEntry {
    /// Source directory to collect TypeScript files from
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Output artifact path handed to esbuild
    #[serde(default)]
    pub target: Option<PathBuf>,

    /// Whether this entry participates in the run
    #[serde(default)]
    pub enabled: bool,
}

/// Loads the ordered entry list from a JSON config file.
///
/// Order is preserved; it defines processing order and the `i/N` progress
/// positions. Read or parse failure is fatal for the run.
pub async fn load_entries(path: &Path) -> Result<Vec<BuildEntry>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;

    serde_json::from_str(&raw).map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })
}
