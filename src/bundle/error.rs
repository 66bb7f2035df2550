//! Error taxonomy for entry processing.
//!
//! One variant per failure kind the pipeline can hit. Config errors abort
//! the whole run; everything else cancels exactly one entry, and engine
//! errors are reported asynchronously after the dispatch loop has moved on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the per-entry bundling pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Config file could not be read (fatal for the run)
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed (fatal for the run)
    #[error("failed to parse config '{path}': {source}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Stale artifact at the target path could not be removed
    #[error("failed to clean target '{path}': {source}")]
    CleanTarget {
        /// Target path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Source root traversal failed
    #[error("failed to fetch TypeScript files from '{root}': {source}")]
    Collect {
        /// Source root
        root: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// Source root contains no TypeScript files after exclusion filtering
    #[error("no TypeScript files found in '{root}'")]
    NoSources {
        /// Source root
        root: PathBuf,
    },

    /// Transient entry file could not be written
    #[error("failed to write temporary entry file '{path}': {source}")]
    WriteEntry {
        /// Transient entry file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// No esbuild binary available for this invocation
    #[error("esbuild not found in PATH (install esbuild or pass --esbuild)")]
    EngineUnavailable,

    /// esbuild could not be spawned
    #[error("failed to spawn esbuild: {source}")]
    EngineSpawn {
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// esbuild ran but reported failure
    #[error("esbuild exited with status {code:?}: {stderr}")]
    EngineFailed {
        /// Process exit code, if any
        code: Option<i32>,
        /// Captured stderr, trimmed
        stderr: String,
    },
}

impl Error {
    /// An empty source set cancels an entry but is a no-op skip, not an
    /// error; the orchestrator logs it at warn severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::NoSources { .. })
    }
}
