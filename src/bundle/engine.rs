//! External bundling engine interface.
//!
//! The engine is an opaque collaborator with an asynchronous
//! request/response contract: it gets a [`BundleRequest`] and eventually
//! answers with success or an error. Production use shells out to the
//! esbuild command line via [`EsbuildCli`]; tests substitute their own
//! [`Engine`] impls.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::error::{Error, Result};

/// Module names the engine leaves unresolved; the game runtime supplies
/// them at load time.
const RUNTIME_EXTERNALS: &[&str] =
    &["@citizenfx/server/natives_server", "@citizenfx/server/natives_client"];

/// Output language level handed to the engine.
const TARGET_LEVEL: &str = "es2020";

/// Target platform identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Browser-style globals and resolution
    Browser,
    /// Node-style resolution
    Node,
    /// No platform assumptions
    Neutral,
}

impl Platform {
    /// Flag value understood by esbuild.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Browser => "browser",
            Platform::Node => "node",
            Platform::Neutral => "neutral",
        }
    }
}

/// Output module format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Immediately-invoked function expression
    Iife,
    /// CommonJS
    Cjs,
    /// ECMAScript modules
    Esm,
}

impl Format {
    /// Flag value understood by esbuild.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Iife => "iife",
            Format::Cjs => "cjs",
            Format::Esm => "esm",
        }
    }
}

/// The fixed parameter set handed to the engine for one entry.
///
/// No field is optional at the call site; what varies per entry is only the
/// entry point and the output path.
#[derive(Debug, Clone)]
pub struct BundleRequest {
    /// The single aggregating entry point
    pub entry_point: PathBuf,
    /// Output artifact path
    pub outfile: PathBuf,
    /// Whole-program bundling
    pub bundle: bool,
    /// Target platform
    pub platform: Platform,
    /// Target language level
    pub target: String,
    /// Output module format
    pub format: Format,
    /// Minification
    pub minify: bool,
    /// Source map emission
    pub sourcemap: bool,
    /// Module names resolved by the runtime instead of the engine
    pub external: Vec<String>,
}

impl BundleRequest {
    /// Request for bundling one synthetic entry file to its configured target.
    pub fn for_entry(entry_point: &Path, outfile: &Path) -> Self {
        Self {
            entry_point: entry_point.to_path_buf(),
            outfile: outfile.to_path_buf(),
            bundle: true,
            platform: Platform::Browser,
            target: TARGET_LEVEL.to_string(),
            format: Format::Iife,
            minify: false,
            sourcemap: false,
            external: RUNTIME_EXTERNALS.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

/// Asynchronous request/response contract with the bundling engine.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Bundles one request to completion.
    async fn bundle(&self, request: BundleRequest) -> Result<()>;
}

/// esbuild located on PATH, resolved once per process.
static ESBUILD_ON_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    match which::which("esbuild") {
        Ok(path) => {
            log::debug!("Found esbuild at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("esbuild not found in PATH: {}", e);
            None
        }
    }
});

/// Engine backed by the esbuild command line.
#[derive(Debug, Default)]
pub struct EsbuildCli {
    binary: Option<PathBuf>,
}

impl EsbuildCli {
    /// Engine using the esbuild binary found on PATH.
    pub fn new() -> Self {
        Self { binary: None }
    }

    /// Engine using an explicit esbuild binary.
    pub fn with_binary(binary: PathBuf) -> Self {
        Self { binary: Some(binary) }
    }

    /// Binary for this invocation; a missing binary is a per-invocation
    /// failure, not a fatal one, so runs with nothing to bundle still
    /// complete.
    fn resolve(&self) -> Result<PathBuf> {
        if let Some(binary) = &self.binary {
            return Ok(binary.clone());
        }
        ESBUILD_ON_PATH.clone().ok_or(Error::EngineUnavailable)
    }

    /// Maps a request onto esbuild's flag syntax.
    fn build_args(request: &BundleRequest) -> Vec<String> {
        let mut args = vec![
            request.entry_point.display().to_string(),
            format!("--outfile={}", request.outfile.display()),
        ];
        if request.bundle {
            args.push("--bundle".to_string());
        }
        args.push(format!("--platform={}", request.platform.as_str()));
        args.push(format!("--target={}", request.target));
        args.push(format!("--format={}", request.format.as_str()));
        if request.minify {
            args.push("--minify".to_string());
        }
        if request.sourcemap {
            args.push("--sourcemap".to_string());
        }
        for name in &request.external {
            args.push(format!("--external:{name}"));
        }
        args
    }
}

#[async_trait]
impl Engine for EsbuildCli {
    async fn bundle(&self, request: BundleRequest) -> Result<()> {
        let binary = self.resolve()?;

        let output = tokio::process::Command::new(&binary)
            .args(Self::build_args(&request))
            .output()
            .await
            .map_err(|source| Error::EngineSpawn { source })?;

        if !output.status.success() {
            return Err(Error::EngineFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
