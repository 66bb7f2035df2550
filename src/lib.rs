//! Batch TypeScript resource bundler library.
//!
//! This library turns a declarative list of "source directory → output
//! artifact" entries into built artifacts by:
//! - validating each configured entry,
//! - cleaning any stale output at the target path,
//! - collecting the TypeScript files under the source root,
//! - writing a transient entry file that imports every collected file, and
//! - submitting that single entry point to esbuild.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundle;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
