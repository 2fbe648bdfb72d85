//! File and directory creation.

use std::fs::{self, OpenOptions};
use std::path::Path;

use nosh_core::{Result, ShellError};
use tracing::debug;

use crate::operation::OperationType;

/// Create exactly one directory. Fails with `AlreadyExists` if anything is
/// already at `path`.
pub(crate) fn create_directory(path: &Path) -> Result<()> {
    debug!(operation = %OperationType::CreateDirectory, path = %path.display(), "mkdir");
    fs::create_dir(path).map_err(|e| ShellError::io(path, e))
}

/// Create a directory and any missing parents. An existing directory is fine.
pub(crate) fn create_directory_all(path: &Path) -> Result<()> {
    debug!(operation = %OperationType::CreateDirectory, path = %path.display(), "mkdir -p");
    fs::create_dir_all(path).map_err(|e| ShellError::io(path, e))
}

/// Create an empty file if absent; an existing file is left as it is.
pub(crate) fn touch_file(path: &Path) -> Result<()> {
    debug!(operation = %OperationType::CreateFile, path = %path.display(), "touch");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|e| ShellError::io(path, e))
}
