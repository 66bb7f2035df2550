//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Batch TypeScript resource bundler
#[derive(Parser, Debug)]
#[command(
    name = "ts_resource_bundler",
    version,
    about = "Batch TypeScript resource bundler driving esbuild",
    long_about = "Bundles every enabled entry of a JSON config file by collecting the
TypeScript files under its source directory, writing a transient entry file
that imports all of them, and handing that single entry point to esbuild.

Usage:
  ts_resource_bundler
  ts_resource_bundler --config resources/bundle.json
  ts_resource_bundler --esbuild ./node_modules/.bin/esbuild

Entry-level failures are logged and never abort the run; a config file that
cannot be read or parsed is fatal (exit code 1)."
)]
pub struct Args {
    /// Path to the bundle configuration file (JSON array of entries)
    #[arg(short = 'c', long, value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Explicit esbuild binary to use instead of the one on PATH
    #[arg(long, value_name = "PATH")]
    pub esbuild: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.config.as_os_str().is_empty() {
            return Err("Config path cannot be empty".to_string());
        }

        if let Some(esbuild) = &self.esbuild {
            if esbuild.as_os_str().is_empty() {
                return Err("esbuild path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
