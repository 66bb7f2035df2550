//! Target cleanup before rebundling.

use std::io;
use std::path::Path;
use tokio::fs;

use super::error::{Error, Result};

/// Removes a pre-existing artifact at `target`, whether file or directory.
///
/// Stale partial outputs from failed prior runs must not be reused, so the
/// target is cleared before the engine writes a fresh artifact. A missing
/// target is not an error. Returns whether anything was removed.
pub async fn clean_target(target: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(target).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(Error::CleanTarget { path: target.to_path_buf(), source });
        }
    };

    let removal = if metadata.is_dir() {
        fs::remove_dir_all(target).await
    } else {
        fs::remove_file(target).await
    };

    match removal {
        Ok(()) => Ok(true),
        // Lost a race with concurrent removal; the target is gone either way
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::CleanTarget { path: target.to_path_buf(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("a.js");
        tokio::fs::write(&target, "stale").await.expect("write");

        assert!(clean_target(&target).await.expect("clean"));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn removes_existing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("out");
        tokio::fs::create_dir_all(target.join("nested")).await.expect("mkdir");
        tokio::fs::write(target.join("nested/a.js"), "stale").await.expect("write");

        assert!(clean_target(&target).await.expect("clean"));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn missing_target_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("never-built.js");

        assert!(!clean_target(&target).await.expect("clean"));
    }
}
