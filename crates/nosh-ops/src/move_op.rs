//! Move execution.

use std::fs;
use std::io;
use std::path::Path;

use nosh_core::{Result, ShellError};
use tracing::debug;

use crate::copy::{copy_file, copy_tree};
use crate::resolve::{OperationPlan, PlanEntry};

/// Execute a resolved move plan, stopping at the first failure.
pub(crate) fn execute_move(plan: &OperationPlan) -> Result<()> {
    for entry in &plan.entries {
        move_entry(entry)?;
    }
    Ok(())
}

fn move_entry(entry: &PlanEntry) -> Result<()> {
    let Some(dest) = entry.destination.as_deref() else {
        return Ok(());
    };

    debug!(
        source = %entry.source.display(),
        dest = %dest.display(),
        kind = %entry.source_kind,
        "mv"
    );

    move_item(&entry.source, dest, entry.source_kind.is_dir())
}

/// Rename `source` to `dest`, falling back to copy and delete when the two
/// live on different filesystems.
fn move_item(source: &Path, dest: &Path, is_dir: bool) -> Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(source = %source.display(), "mv: crossing devices, copying instead");
            if is_dir {
                copy_tree(source, dest)?;
                fs::remove_dir_all(source).map_err(|e| ShellError::io(source, e))
            } else {
                copy_file(source, dest)?;
                fs::remove_file(source).map_err(|e| ShellError::io(source, e))
            }
        }
        Err(e) => Err(ShellError::io(source, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        let dest = temp.path().join("b.txt");
        fs::write(&source, b"moved").unwrap();

        move_item(&source, &dest, false).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"moved");
    }

    #[test]
    fn test_move_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("dir");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("sub/file.txt"), b"x").unwrap();
        let dest = temp.path().join("renamed");

        move_item(&source, &dest, true).unwrap();

        assert!(!source.exists());
        assert!(dest.join("sub/file.txt").exists());
    }

    #[test]
    fn test_move_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = move_item(&temp.path().join("nope"), &temp.path().join("dest"), false)
            .unwrap_err();
        assert!(matches!(err, ShellError::NotFound { .. }));
    }
}
