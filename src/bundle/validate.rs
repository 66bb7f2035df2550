//! Entry validation.

use std::path::PathBuf;

use super::config::BuildEntry;

/// Outcome of validating one entry.
#[derive(Debug)]
pub enum Validation {
    /// Entry is processable; owned copies of the required paths
    Proceed {
        /// Source root to collect from
        source: PathBuf,
        /// Output artifact path
        target: PathBuf,
    },
    /// Entry is skipped before any file-system work
    Skip(SkipReason),
}

/// Why an entry was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `enabled` is false (or absent)
    Disabled,
    /// No usable `source` field
    MissingSource,
    /// No usable `target` field
    MissingTarget,
}

impl SkipReason {
    /// Short reason text used in the skip log line.
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::Disabled => "entry disabled",
            SkipReason::MissingSource => "source undefined",
            SkipReason::MissingTarget => "target undefined",
        }
    }

    /// Disabled entries are expected control flow; missing fields are
    /// reported as errors.
    pub fn is_error(self) -> bool {
        !matches!(self, SkipReason::Disabled)
    }
}

/// Validates one entry without side effects.
///
/// Checked in order: the enabled flag first, so a disabled entry with
/// missing fields is reported as disabled rather than malformed. An empty
/// path counts as missing.
pub fn validate(entry: &BuildEntry) -> Validation {
    if !entry.enabled {
        return Validation::Skip(SkipReason::Disabled);
    }

    let source = match &entry.source {
        Some(source) if !source.as_os_str().is_empty() => source.clone(),
        _ => return Validation::Skip(SkipReason::MissingSource),
    };

    let target = match &entry.target {
        Some(target) if !target.as_os_str().is_empty() => target.clone(),
        _ => return Validation::Skip(SkipReason::MissingTarget),
    };

    Validation::Proceed { source, target }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(source: Option<&str>, target: Option<&str>, enabled: bool) -> BuildEntry {
        BuildEntry {
            source: source.map(PathBuf::from),
            target: target.map(PathBuf::from),
            enabled,
        }
    }

    #[test]
    fn proceeds_with_both_paths() {
        match validate(&entry(Some("a"), Some("out/a.js"), true)) {
            Validation::Proceed { source, target } => {
                assert_eq!(source, Path::new("a"));
                assert_eq!(target, Path::new("out/a.js"));
            }
            Validation::Skip(reason) => panic!("unexpected skip: {reason:?}"),
        }
    }

    #[test]
    fn disabled_wins_over_missing_fields() {
        // Tie-break: enabled-ness is checked before field presence
        match validate(&entry(None, None, false)) {
            Validation::Skip(SkipReason::Disabled) => {}
            other => panic!("expected disabled skip, got {other:?}"),
        }
    }

    #[test]
    fn missing_source_before_missing_target() {
        match validate(&entry(None, None, true)) {
            Validation::Skip(SkipReason::MissingSource) => {}
            other => panic!("expected missing source, got {other:?}"),
        }
    }

    #[test]
    fn missing_target_reported() {
        match validate(&entry(Some("a"), None, true)) {
            Validation::Skip(SkipReason::MissingTarget) => {}
            other => panic!("expected missing target, got {other:?}"),
        }
    }

    #[test]
    fn empty_paths_count_as_missing() {
        match validate(&entry(Some(""), Some("out/a.js"), true)) {
            Validation::Skip(SkipReason::MissingSource) => {}
            other => panic!("expected missing source, got {other:?}"),
        }
        match validate(&entry(Some("a"), Some(""), true)) {
            Validation::Skip(SkipReason::MissingTarget) => {}
            other => panic!("expected missing target, got {other:?}"),
        }
    }

    #[test]
    fn only_disabled_is_non_error() {
        assert!(!SkipReason::Disabled.is_error());
        assert!(SkipReason::MissingSource.is_error());
        assert!(SkipReason::MissingTarget.is_error());
    }
}
