//! Scoped process working-directory changes.
//!
//! The process working directory is global: a guard held on one thread is
//! visible to every other thread. Serialize use of [`CurrentDirectory`]
//! externally, or prefer an explicit [`Shell`](crate::Shell) root.

use std::env;
use std::path::{Path, PathBuf};

use nosh_core::{Result, ShellError};
use tracing::{debug, warn};

use crate::shell::Shell;

/// Changes the process working directory and restores the previous one when
/// dropped, including on early return and unwinding.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct CurrentDirectory {
    previous: PathBuf,
    current: PathBuf,
}

impl CurrentDirectory {
    /// Enter `dir`, remembering the directory to return to.
    pub fn enter(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let previous = env::current_dir().map_err(|e| ShellError::io(".", e))?;
        env::set_current_dir(dir).map_err(|e| ShellError::io(dir, e))?;
        let current = env::current_dir().map_err(|e| ShellError::io(dir, e))?;

        debug!(from = %previous.display(), to = %current.display(), "entered directory");
        Ok(Self { previous, current })
    }

    /// The directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }

    /// The directory entered.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// A shell rooted at the entered directory.
    pub fn shell(&self) -> Shell {
        Shell::new(&self.current)
    }
}

impl Drop for CurrentDirectory {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                path = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

/// Run `f` with the process working directory set to `dir`.
pub fn with_current_directory<T>(
    dir: impl AsRef<Path>,
    f: impl FnOnce(&CurrentDirectory) -> T,
) -> Result<T> {
    let guard = CurrentDirectory::enter(dir)?;
    Ok(f(&guard))
}
