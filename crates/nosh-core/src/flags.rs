//! Per-invocation operation flags.

use serde::{Deserialize, Serialize};

/// Modifiers attached to a single `cp`/`mv`/`rm` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// Descend into directories (copy or remove whole subtrees).
    #[serde(default)]
    pub recursive: bool,
    /// Swallow per-path failures and keep going (`rm` only).
    #[serde(default)]
    pub ignore_errors: bool,
}

impl Flags {
    /// No modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags with `recursive` set.
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            ..Default::default()
        }
    }

    /// Flags with `ignore_errors` set.
    pub fn ignore_errors() -> Self {
        Self {
            ignore_errors: true,
            ..Default::default()
        }
    }

    /// Set the recursive flag.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the ignore-errors flag.
    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }
}
