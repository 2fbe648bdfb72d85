//! Shell configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a shell context.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ShellConfig {
    /// Working directory every pattern is resolved against.
    pub cwd: PathBuf,

    /// Let wildcards match dot-files even when the pattern itself does not
    /// start with a dot.
    #[builder(default = "false")]
    #[serde(default)]
    pub include_hidden: bool,

    /// Case-insensitive glob matching.
    #[builder(default = "false")]
    #[serde(default)]
    pub case_insensitive: bool,

    /// Expand a leading `~` to the home directory.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub expand_tilde: bool,
}

fn default_true() -> bool {
    true
}

impl ShellConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref cwd) = self.cwd {
            if cwd.as_os_str().is_empty() {
                return Err("Working directory cannot be empty".to_string());
            }
        } else {
            return Err("Working directory is required".to_string());
        }
        Ok(())
    }
}

impl ShellConfig {
    /// Create a new shell config builder.
    pub fn builder() -> ShellConfigBuilder {
        ShellConfigBuilder::default()
    }

    /// Create a config with default settings rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            include_hidden: false,
            case_insensitive: false,
            expand_tilde: true,
        }
    }

    /// Whether a directory entry may be matched by a wildcard component.
    ///
    /// Dot-files are only reachable through a component that itself starts
    /// with a dot, unless hidden entries are enabled.
    pub fn should_match_hidden(&self, name: &str, component: &str) -> bool {
        !name.starts_with('.') || self.include_hidden || component.starts_with('.')
    }
}
