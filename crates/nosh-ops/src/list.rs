//! Directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use nosh_core::{Result, ShellError};
use tracing::debug;

use crate::operation::OperationType;

/// Entry names of `dir`, in the order the platform lists them.
pub(crate) fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    debug!(operation = %OperationType::List, path = %dir.display(), "ls");
    let entries = fs::read_dir(dir).map_err(|e| ShellError::io(dir, e))?;

    entries
        .map(|entry| {
            entry
                .map(|entry| PathBuf::from(entry.file_name()))
                .map_err(|e| ShellError::io(dir, e))
        })
        .collect()
}
