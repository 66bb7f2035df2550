//! Synthetic aggregating entry files.
//!
//! esbuild wants a single entry point, so each entry gets a transient file
//! whose only content is one import line per collected source file. The file
//! is written into the source root itself, which keeps its relative imports
//! resolvable from the importing file's own location.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use super::collect::SOURCE_EXTENSION;
use super::error::{Error, Result};
use super::report::LOG_PREFIX;

/// Name prefix of transient entry files; collection skips anything carrying it.
pub const TEMP_ENTRY_PREFIX: &str = "bundle_temp_";

/// A transient aggregating entry file on disk.
///
/// Owned by exactly one entry's processing: created before the engine is
/// invoked, removed once the engine call resolves.
#[derive(Debug)]
pub struct SyntheticEntry {
    path: PathBuf,
}

impl SyntheticEntry {
    /// Renders the import lines for `files`, relative to `root`.
    ///
    /// Each line is `import './<relative-path>';` with directory separators
    /// normalized to `/` and the source extension stripped.
    pub fn render(root: &Path, files: &[PathBuf]) -> String {
        let suffix = format!(".{SOURCE_EXTENSION}");
        let imports: Vec<String> = files
            .iter()
            .map(|file| {
                let relative = file.strip_prefix(root).unwrap_or(file);
                let mut specifier = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                if let Some(stripped) = specifier.strip_suffix(&suffix) {
                    specifier = stripped.to_string();
                }
                format!("import './{specifier}';")
            })
            .collect();

        imports.join("\n")
    }

    /// Writes the rendered imports to a freshly named file inside `root`.
    ///
    /// On write failure the partially created file is removed best-effort
    /// before the error is returned.
    pub async fn write(root: &Path, files: &[PathBuf]) -> Result<Self> {
        let path = root.join(unique_name());
        let content = Self::render(root, files);

        if let Err(source) = tokio::fs::write(&path, content).await {
            // A partial file must not survive a failed write
            let _ = tokio::fs::remove_file(&path).await;
            return Err(Error::WriteEntry { path, source });
        }

        Ok(Self { path })
    }

    /// Path of the entry file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the entry file if it still exists.
    pub async fn remove(self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::error!(
                "{} Failed to clean up temporary entry file '{}': {}",
                LOG_PREFIX,
                self.path.display(),
                e
            ),
        }
    }
}

/// Unix-millis timestamp plus a v4 UUID; the timestamp alone would collide
/// across entries dispatched within the same millisecond.
fn unique_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{TEMP_ENTRY_PREFIX}{millis}_{}.{SOURCE_EXTENSION}", Uuid::new_v4().simple())
}
