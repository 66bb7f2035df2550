//! Progress reporting vocabulary.
//!
//! Every progress line carries the same fixed prefix so runs are easy to
//! grep out of surrounding build output.

use std::fmt;
use std::time::Duration;

/// Fixed prefix on every progress line.
pub const LOG_PREFIX: &str = "[typescript-resource-bundler]";

/// Per-entry message stems.
pub const MSG_SKIPPING: &str = "Skipping bundling of config entry";
pub const MSG_BEGINNING: &str = "Beginning bundling of config entry";
pub const MSG_CANCELING: &str = "Canceling bundling of config entry";
pub const MSG_BUNDLED: &str = "Successfully bundled config entry";
pub const MSG_FAILED: &str = "Failed bundling config entry";

/// Position of an entry in the run, displayed as `i/N` (1-based).
#[derive(Debug, Clone, Copy)]
pub struct EntryPosition {
    /// 1-based index of the entry
    pub index: usize,
    /// Total number of configured entries
    pub total: usize,
}

impl fmt::Display for EntryPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

/// Logs the run footer with the dispatch-loop elapsed time.
pub fn footer(elapsed: Duration) {
    log::info!(
        "{LOG_PREFIX} ----- All bundle entries processed in {} ms -----",
        elapsed.as_millis()
    );
}
