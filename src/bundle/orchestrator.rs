//! Run orchestration over configured entries.
//!
//! The [`Runner`] iterates the entry list in order and runs the full
//! pipeline per entry: validate, clean the target, collect sources, write
//! the synthetic entry file, submit the engine request. Any step's failure
//! is caught, logged with the entry's `i/N` position, and never aborts the
//! loop over the remaining entries.
//!
//! Engine work is submitted without blocking the loop: each invocation runs
//! on a spawned task whose continuation logs the outcome and reaps the
//! synthetic entry file once the engine call resolves. The timing footer
//! therefore covers the dispatch loop only; completions may land in any
//! order afterwards, and [`Runner::run`] joins them all before returning so
//! no task outlives the run.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::clean::clean_target;
use super::collect::collect_sources;
use super::config::BuildEntry;
use super::engine::{BundleRequest, Engine};
use super::error::{Error, Result};
use super::report::{
    self, EntryPosition, LOG_PREFIX, MSG_BEGINNING, MSG_BUNDLED, MSG_CANCELING, MSG_FAILED,
    MSG_SKIPPING,
};
use super::synth::SyntheticEntry;
use super::validate::{Validation, validate};

/// Aggregate results of one run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Wall-clock time of the dispatch loop, not of engine completions
    pub elapsed: Duration,
    /// Entries submitted to the engine
    pub dispatched: usize,
    /// Entries skipped by validation
    pub skipped: usize,
    /// Entries canceled by a pipeline failure
    pub canceled: usize,
    /// Dispatched entries whose engine invocation eventually failed
    pub bundle_failures: usize,
}

/// Outcome of dispatching one entry.
enum Dispatch {
    /// Engine request submitted; completion pending on the handle
    Submitted(JoinHandle<bool>),
    /// Validation skipped the entry before any file-system work
    Skipped,
    /// A pipeline step failed and canceled the entry
    Canceled,
}

/// Drives the per-entry pipeline over an ordered entry list.
///
/// Entries share no state, so one entry's failure is invisible to the next.
pub struct Runner<E> {
    engine: Arc<E>,
}

impl<E: Engine + 'static> Runner<E> {
    /// Creates a runner around the given engine.
    pub fn new(engine: E) -> Self {
        Self { engine: Arc::new(engine) }
    }

    /// Processes every entry in order and reports aggregate results.
    ///
    /// `started` is the run's timer; the footer reports its elapsed value
    /// once the dispatch loop is done. Pending engine tasks are joined
    /// afterwards, so the returned report includes their failures even
    /// though the footer does not wait for them.
    pub async fn run(&self, entries: &[BuildEntry], started: Instant) -> RunReport {
        let total = entries.len();
        let mut run_report = RunReport::default();
        let mut pending = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            let position = EntryPosition { index: idx + 1, total };
            log::info!("{LOG_PREFIX} ----- Processing bundle entry {position} -----");

            match self.dispatch(entry, position).await {
                Dispatch::Submitted(handle) => {
                    run_report.dispatched += 1;
                    pending.push(handle);
                }
                Dispatch::Skipped => run_report.skipped += 1,
                Dispatch::Canceled => run_report.canceled += 1,
            }
        }

        run_report.elapsed = started.elapsed();
        report::footer(run_report.elapsed);

        for handle in pending {
            match handle.await {
                Ok(true) => {}
                Ok(false) => run_report.bundle_failures += 1,
                Err(e) => {
                    log::error!("{LOG_PREFIX} Bundle task panicked: {e}");
                    run_report.bundle_failures += 1;
                }
            }
        }

        run_report
    }

    /// Validates one entry and, if processable, runs its pipeline.
    async fn dispatch(&self, entry: &BuildEntry, position: EntryPosition) -> Dispatch {
        let (source, target) = match validate(entry) {
            Validation::Proceed { source, target } => (source, target),
            Validation::Skip(reason) => {
                if reason.is_error() {
                    log::error!("{LOG_PREFIX} {MSG_SKIPPING} {position} ({})", reason.describe());
                } else {
                    log::info!("{LOG_PREFIX} {MSG_SKIPPING} {position} ({})", reason.describe());
                }
                return Dispatch::Skipped;
            }
        };

        log::info!(
            "{LOG_PREFIX} {MSG_BEGINNING} {position} from '{}' to '{}'",
            source.display(),
            target.display()
        );

        match self.prepare_and_submit(&source, &target, position).await {
            Ok(handle) => Dispatch::Submitted(handle),
            Err(err) if err.is_warning() => {
                log::warn!("{LOG_PREFIX} {MSG_CANCELING} {position} ({err})");
                Dispatch::Canceled
            }
            Err(err) => {
                log::error!("{LOG_PREFIX} {MSG_CANCELING} {position} ({err})");
                Dispatch::Canceled
            }
        }
    }

    /// Runs clean → collect → synthesize, then submits the engine request.
    ///
    /// The returned handle resolves to whether the engine succeeded. The
    /// synthetic entry file must outlive the engine's read of it, so its
    /// removal is sequenced after the engine call resolves, success or not.
    async fn prepare_and_submit(
        &self,
        source: &Path,
        target: &Path,
        position: EntryPosition,
    ) -> Result<JoinHandle<bool>> {
        log::info!("{LOG_PREFIX} Cleaning target '{}'...", target.display());
        if clean_target(target).await? {
            log::info!("{LOG_PREFIX} Cleaned '{}'", target.display());
        }

        log::info!("{LOG_PREFIX} Collecting TypeScript files from '{}'...", source.display());
        let files = collect_sources(source)?;
        if files.is_empty() {
            return Err(Error::NoSources { root: source.to_path_buf() });
        }

        let entry_file = SyntheticEntry::write(source, &files).await?;
        log::info!(
            "{LOG_PREFIX} Built temporary entry file '{}' ({} imports)",
            entry_file.path().display(),
            files.len()
        );

        let request = BundleRequest::for_entry(entry_file.path(), target);
        let engine = Arc::clone(&self.engine);
        let target = target.to_path_buf();

        Ok(tokio::spawn(async move {
            let result = engine.bundle(request).await;
            let entry_path = entry_file.path().to_path_buf();
            entry_file.remove().await;

            match result {
                Ok(()) => {
                    log::info!(
                        "{LOG_PREFIX} {MSG_BUNDLED} {position} via '{}' to '{}'",
                        entry_path.display(),
                        target.display()
                    );
                    true
                }
                Err(err) => {
                    log::error!("{LOG_PREFIX} {MSG_FAILED} {position} ({err})");
                    false
                }
            }
        }))
    }
}
