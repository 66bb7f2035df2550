//! Command line interface for the resource bundler.
//!
//! Loads the configured entry list, builds the esbuild engine, and drives
//! the run orchestrator. Entry-level failures are reported by the
//! orchestrator and never change the exit code; only an unreadable or
//! unparseable config file is fatal.

mod args;

pub use args::Args;

use std::time::Instant;

use crate::bundle::{self, EsbuildCli, Runner, report};
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let engine = match &args.esbuild {
        Some(binary) => EsbuildCli::with_binary(binary.clone()),
        None => EsbuildCli::new(),
    };
    let runner = Runner::new(engine);

    // One run, one timer; the fatal-config path reports through it too.
    let started = Instant::now();

    let entries = match bundle::load_entries(&args.config).await {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("{} {}", report::LOG_PREFIX, err);
            report::footer(started.elapsed());
            return Ok(1);
        }
    };

    let run_report = runner.run(&entries, started).await;
    log::debug!(
        "{} run report: {} dispatched, {} skipped, {} canceled, {} bundle failures",
        report::LOG_PREFIX,
        run_report.dispatched,
        run_report.skipped,
        run_report.canceled,
        run_report.bundle_failures,
    );

    // Entry-level failures are logged, not escalated to the exit code.
    Ok(0)
}
