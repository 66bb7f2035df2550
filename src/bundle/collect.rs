//! Source file discovery.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::synth::TEMP_ENTRY_PREFIX;

/// File extension of collectible source files.
pub const SOURCE_EXTENSION: &str = "ts";

/// Transient entry name used by a historical version of this tool; still
/// excluded so trees it left behind keep bundling cleanly.
const LEGACY_TEMP_ENTRY: &str = "main_temp.ts";

/// Recursively collects the TypeScript files under `root`.
///
/// Paths are sorted by file name so the resulting import order is
/// deterministic per run. Transient entry files are excluded: the legacy
/// `main_temp.ts` name and anything carrying the live [`TEMP_ENTRY_PREFIX`],
/// since synthetic entries from crashed runs would otherwise be re-imported.
pub fn collect_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.map_err(|source| Error::Collect { root: root.to_path_buf(), source })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == LEGACY_TEMP_ENTRY || name.starts_with(TEMP_ENTRY_PREFIX) {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.expect("mkdir");
        }
        tokio::fs::write(path, "export {};").await.expect("write");
    }

    #[tokio::test]
    async fn finds_nested_sources_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("y.ts")).await;
        touch(&dir.path().join("nested/deep/x.ts")).await;
        touch(&dir.path().join("a.ts")).await;

        let files = collect_sources(dir.path()).expect("collect");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).expect("under root").to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.ts"),
                PathBuf::from("nested/deep/x.ts"),
                PathBuf::from("y.ts"),
            ]
        );
    }

    #[tokio::test]
    async fn excludes_non_source_and_transient_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("keep.ts")).await;
        touch(&dir.path().join("readme.md")).await;
        touch(&dir.path().join("main_temp.ts")).await;
        touch(&dir.path().join("bundle_temp_1692000000000_abc.ts")).await;

        let files = collect_sources(dir.path()).expect("collect");
        assert_eq!(files, vec![dir.path().join("keep.ts")]);
    }

    #[tokio::test]
    async fn empty_root_yields_empty_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(collect_sources(dir.path()).expect("collect").is_empty());
    }

    #[test]
    fn missing_root_is_a_collect_error() {
        let err = collect_sources(Path::new("/nonexistent/resources")).expect_err("bad root");
        assert!(matches!(err, Error::Collect { .. }));
    }
}
