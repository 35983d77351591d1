//! Logger configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when the log file cannot be reopened or written mid-run.
///
/// There is no caller to report to at that point, so the choice is between
/// stopping the process and losing the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Print a diagnostic to stderr and abort the process (default).
    #[default]
    Abort,
    /// Drop the line and carry on.
    Discard,
}

/// Options for opening a [`FileLogger`](crate::FileLogger).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOptions {
    /// Module label prefixed to every line. Empty means no label.
    #[serde(default)]
    pub module: String,
    /// Path of the log file.
    pub filename: PathBuf,
    /// Whether debug lines are written.
    #[serde(default)]
    pub verbose: bool,
    /// Append to an existing file instead of truncating it.
    #[serde(default)]
    pub append: bool,
    /// Behaviour when a mid-run reopen or write fails.
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

impl LogOptions {
    /// Create options for the given log file.
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Set the module label.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Write debug lines.
    #[must_use]
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Append to the file instead of truncating it.
    #[must_use]
    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    /// Set the mid-run failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}
