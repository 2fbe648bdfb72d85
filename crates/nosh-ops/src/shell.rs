//! The `Shell` facade: every command, resolved against an explicit working
//! directory.

use std::path::{Path, PathBuf};

use nosh_core::path::{absolutize, normalize};
use nosh_core::{Flags, PathKind, Result, ShellConfig, ShellError};
use tracing::debug;

use crate::copy::execute_copy;
use crate::create::{create_directory, create_directory_all, touch_file};
use crate::expand::PathExpander;
use crate::list::list_directory;
use crate::move_op::execute_move;
use crate::operation::OperationType;
use crate::remove::execute_remove;
use crate::resolve::{OperationPlan, TargetResolver};

/// Shell-like file operations rooted at a working directory.
///
/// The working directory lives on the value rather than in the process, so
/// separate shells never observe each other's `cd`.
#[derive(Debug, Clone)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    /// Create a shell with default settings rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self::with_config(ShellConfig::new(cwd))
    }

    /// Create a shell from a full configuration.
    ///
    /// A relative `cwd` is anchored at the process working directory.
    pub fn with_config(mut config: ShellConfig) -> Self {
        config.cwd = std::path::absolute(&config.cwd)
            .map(|cwd| normalize(&cwd))
            .unwrap_or(config.cwd);
        Self { config }
    }

    /// Create a shell rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ShellError::io(".", e))?;
        Ok(Self::new(cwd))
    }

    /// The active configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The working directory.
    pub fn cwd(&self) -> &Path {
        &self.config.cwd
    }

    /// Absolute path of the working directory.
    pub fn pwd(&self) -> PathBuf {
        self.config.cwd.clone()
    }

    /// Change this shell's working directory. The process directory is not
    /// touched.
    pub fn cd(&mut self, path: &str) -> Result<()> {
        let target = self.expand_path(path);
        match PathKind::of(&target) {
            PathKind::Directory => {
                debug!(from = %self.config.cwd.display(), to = %target.display(), "cd");
                self.config.cwd = target;
                Ok(())
            }
            PathKind::File => Err(ShellError::NotADirectory { path: target }),
            PathKind::Missing => Err(ShellError::NotFound { path: target }),
        }
    }

    /// The expander bound to this shell.
    pub fn expander(&self) -> PathExpander<'_> {
        PathExpander::new(&self.config)
    }

    /// Resolve `pattern` to an absolute path without globbing.
    pub fn expand_path(&self, pattern: &str) -> PathBuf {
        self.expander().resolve(pattern)
    }

    /// Expand a single pattern. See [`PathExpander::expand`].
    pub fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        self.expander().expand(pattern)
    }

    /// Expand several patterns, concatenated in argument order.
    pub fn expand_many<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<PathBuf>> {
        self.expander().expand_many(patterns)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match path.to_str() {
            Some(path) => self.expand_path(path),
            None => absolutize(&self.config.cwd, path),
        }
    }

    /// Create a single directory; fails if anything already exists there.
    pub fn mkdir(&self, path: impl AsRef<Path>) -> Result<()> {
        create_directory(&self.resolve_path(path.as_ref()))
    }

    /// Create a directory and any missing parents.
    pub fn mkdir_all(&self, path: impl AsRef<Path>) -> Result<()> {
        create_directory_all(&self.resolve_path(path.as_ref()))
    }

    /// Create an empty file if absent.
    pub fn touch(&self, path: impl AsRef<Path>) -> Result<()> {
        touch_file(&self.resolve_path(path.as_ref()))
    }

    /// Plan a copy without executing it.
    pub fn plan_copy<S: AsRef<str>>(
        &self,
        sources: &[S],
        destination: &str,
        flags: Flags,
    ) -> Result<OperationPlan> {
        self.plan_transfer(OperationType::Copy, sources, destination, flags)
    }

    /// Plan a move without executing it.
    pub fn plan_move<S: AsRef<str>>(
        &self,
        sources: &[S],
        destination: &str,
    ) -> Result<OperationPlan> {
        self.plan_transfer(OperationType::Move, sources, destination, Flags::new())
    }

    fn plan_transfer<S: AsRef<str>>(
        &self,
        operation: OperationType,
        sources: &[S],
        destination: &str,
        flags: Flags,
    ) -> Result<OperationPlan> {
        if sources.is_empty() {
            return Err(ShellError::missing_arguments(operation.command()));
        }

        let sources = self.expand_many(sources)?;
        let destination = self.expand_path(destination);
        TargetResolver::new(operation, flags).resolve(sources, destination)
    }

    /// Copy the files matched by `sources` to `destination`.
    ///
    /// Directory sources are skipped unless `flags.recursive` is set.
    pub fn cp<S: AsRef<str>>(&self, sources: &[S], destination: &str, flags: Flags) -> Result<()> {
        let plan = self.plan_copy(sources, destination, flags)?;
        execute_copy(&plan).map(drop)
    }

    /// Move the files and directories matched by `sources` to `destination`.
    pub fn mv<S: AsRef<str>>(&self, sources: &[S], destination: &str) -> Result<()> {
        let plan = self.plan_move(sources, destination)?;
        execute_move(&plan)
    }

    /// Remove everything matched by `patterns`.
    pub fn rm<S: AsRef<str>>(&self, patterns: &[S], flags: Flags) -> Result<()> {
        if patterns.is_empty() {
            return Err(ShellError::missing_arguments(OperationType::Remove.command()));
        }

        let targets = self.expand_many(patterns)?;
        let plan = TargetResolver::new(OperationType::Remove, flags).removal(targets)?;
        execute_remove(&plan).map(drop)
    }

    /// List entries.
    ///
    /// With no patterns, returns the entry names of the working directory.
    /// Otherwise returns the concatenated expansions of `patterns`.
    pub fn ls<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<PathBuf>> {
        if patterns.is_empty() {
            list_directory(&self.config.cwd)
        } else {
            self.expand_many(patterns)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(".")
    }
}
