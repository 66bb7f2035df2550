//! Per-entry bundling pipeline.
//!
//! Each configured [`BuildEntry`] flows through the same steps:
//!
//! 1. [`validate`] — skip disabled or malformed entries
//! 2. [`clean_target`] — remove any stale artifact at the target path
//! 3. [`collect_sources`] — discover the TypeScript files under the source root
//! 4. [`SyntheticEntry::write`] — generate the transient aggregating entry file
//! 5. [`Engine::bundle`] — submit the entry point to esbuild
//! 6. [`SyntheticEntry::remove`] — reap the transient file once the engine is done
//!
//! The [`Runner`] drives these steps over the ordered entry list with each
//! entry's failure isolated from the rest of the run.
//!
//! [`validate`]: validate::validate
//! [`clean_target`]: clean::clean_target
//! [`collect_sources`]: collect::collect_sources

mod clean;
mod collect;
mod config;
mod engine;
mod error;
mod orchestrator;
pub mod report;
mod synth;
mod validate;

pub use clean::clean_target;
pub use collect::{SOURCE_EXTENSION, collect_sources};
pub use config::{BuildEntry, load_entries};
pub use engine::{BundleRequest, Engine, EsbuildCli, Format, Platform};
pub use error::{Error, Result};
pub use orchestrator::{RunReport, Runner};
pub use synth::{SyntheticEntry, TEMP_ENTRY_PREFIX};
pub use validate::{SkipReason, Validation, validate};
