//! Shell-style path expansion.
//!
//! Patterns are resolved against the configured working directory. Literal
//! patterns become a single absolute path without any existence check. Glob
//! patterns are matched component by component against directory listings;
//! when nothing matches, the literal pattern is passed through on its own,
//! the way an interactive shell hands an unmatched glob to the command.

use std::fs;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use nosh_core::path::{absolutize, expand_home, has_glob_meta, normalize};
use nosh_core::{PathKind, Result, ShellConfig};
use tracing::trace;

/// Expands patterns relative to a shell configuration.
#[derive(Debug, Clone, Copy)]
pub struct PathExpander<'a> {
    config: &'a ShellConfig,
}

impl<'a> PathExpander<'a> {
    /// Create an expander bound to `config`.
    pub fn new(config: &'a ShellConfig) -> Self {
        Self { config }
    }

    /// Lexically resolve `pattern` to an absolute path. Never globs.
    pub fn resolve(&self, pattern: &str) -> PathBuf {
        absolutize(&self.config.cwd, self.home_expanded(pattern))
    }

    /// Expand a single pattern.
    ///
    /// Never returns an empty vector: a glob with no matches yields the
    /// resolved literal pattern.
    pub fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let literal = self.resolve(pattern);
        if !has_glob_meta(pattern) {
            return Ok(vec![literal]);
        }

        let matches = self.glob(pattern);
        if matches.is_empty() {
            trace!(pattern, "glob matched nothing, passing literal through");
            return Ok(vec![literal]);
        }

        trace!(pattern, count = matches.len(), "glob expanded");
        Ok(matches)
    }

    /// Expand every pattern and concatenate the results in argument order.
    ///
    /// Duplicates are kept.
    pub fn expand_many<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            paths.extend(self.expand(pattern.as_ref())?);
        }
        Ok(paths)
    }

    fn home_expanded(&self, pattern: &str) -> PathBuf {
        if self.config.expand_tilde {
            expand_home(pattern)
        } else {
            PathBuf::from(pattern)
        }
    }

    /// Walk the pattern one component at a time, keeping every candidate
    /// path that still exists.
    ///
    /// A trailing separator restricts the result to directories. A component
    /// that is not valid glob syntax (such as an unclosed `[`) is matched as
    /// a literal name.
    fn glob(&self, pattern: &str) -> Vec<PathBuf> {
        let path = self.home_expanded(pattern);
        let dirs_only = pattern.ends_with('/') || pattern.ends_with(MAIN_SEPARATOR);
        let mut candidates = if path.is_absolute() {
            vec![PathBuf::new()]
        } else {
            vec![normalize(&self.config.cwd)]
        };

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    for candidate in &mut candidates {
                        candidate.push(component.as_os_str());
                    }
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    for candidate in &mut candidates {
                        candidate.pop();
                    }
                }
                Component::Normal(name) => {
                    let text = name.to_string_lossy();
                    let matcher = if has_glob_meta(&text) {
                        self.compile(&text)
                    } else {
                        None
                    };
                    candidates = match matcher {
                        Some(matcher) => candidates
                            .iter()
                            .flat_map(|dir| self.matching_children(dir, &matcher, &text))
                            .collect(),
                        None => candidates
                            .into_iter()
                            .map(|dir| dir.join(name))
                            .filter(|path| fs::symlink_metadata(path).is_ok())
                            .collect(),
                    };
                }
            }

            if candidates.is_empty() {
                break;
            }
        }

        if dirs_only {
            candidates.retain(|path| PathKind::of(path).is_dir());
        }
        candidates
    }

    fn compile(&self, component: &str) -> Option<GlobMatcher> {
        match GlobBuilder::new(component)
            .literal_separator(true)
            .case_insensitive(self.config.case_insensitive)
            .build()
        {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                trace!(component, error = %e, "not a valid glob, matching literally");
                None
            }
        }
    }

    /// Entries of `dir` matching one wildcard component, in listing order.
    ///
    /// Unreadable directories contribute nothing.
    fn matching_children(
        &self,
        dir: &Path,
        matcher: &GlobMatcher,
        component: &str,
    ) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name();
                let visible = self
                    .config
                    .should_match_hidden(&name.to_string_lossy(), component);
                (visible && matcher.is_match(Path::new(&name))).then(|| dir.join(&name))
            })
            .collect()
    }
}
