//! Copy execution.

use std::fs;
use std::path::Path;

use nosh_core::{Result, ShellError};
use tracing::debug;

use crate::resolve::{OperationPlan, PlanEntry};

/// Execute a resolved copy plan, stopping at the first failure.
///
/// Returns the number of bytes copied.
pub(crate) fn execute_copy(plan: &OperationPlan) -> Result<u64> {
    for skipped in &plan.skipped {
        debug!(path = %skipped.display(), "cp: skipping directory (not recursive)");
    }

    let mut bytes = 0;
    for entry in &plan.entries {
        bytes += copy_entry(entry)?;
    }
    Ok(bytes)
}

fn copy_entry(entry: &PlanEntry) -> Result<u64> {
    let Some(dest) = entry.destination.as_deref() else {
        return Ok(0);
    };

    debug!(
        source = %entry.source.display(),
        dest = %dest.display(),
        kind = %entry.source_kind,
        "cp"
    );

    if entry.source_kind.is_dir() {
        copy_tree(&entry.source, dest)
    } else {
        copy_file(&entry.source, dest)
    }
}

/// Copy a single file's contents, overwriting `dest`.
pub(crate) fn copy_file(source: &Path, dest: &Path) -> Result<u64> {
    fs::copy(source, dest).map_err(|e| {
        let culprit = if source.exists() { dest } else { source };
        ShellError::io(culprit, e)
    })
}

/// Recursively copy the contents of `source` into `dest`, creating it.
pub(crate) fn copy_tree(source: &Path, dest: &Path) -> Result<u64> {
    fs::create_dir_all(dest).map_err(|e| ShellError::io(dest, e))?;

    let mut options = fs_extra::dir::CopyOptions::new();
    options.content_only = true;
    options.overwrite = true;

    fs_extra::dir::copy(source, dest, &options).map_err(|e| ShellError::Copy {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_preserves_bytes() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("blob.bin");
        let dest = temp.path().join("copy.bin");
        let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        fs::write(&source, &content).unwrap();

        let bytes = copy_file(&source, &dest).unwrap();
        assert_eq!(bytes, 4096);
        assert_eq!(fs::read(&dest).unwrap(), content);
    }

    #[test]
    fn test_copy_file_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = copy_file(&temp.path().join("nope"), &temp.path().join("dest")).unwrap_err();
        assert!(matches!(err, ShellError::NotFound { ref path } if path.ends_with("nope")));
    }

    #[test]
    fn test_copy_tree_mirrors_subtree() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir_all(source.join("nested/deeper")).unwrap();
        fs::write(source.join("top.txt"), b"top").unwrap();
        fs::write(source.join("nested/deeper/leaf.txt"), b"leaf").unwrap();

        let dest = temp.path().join("dest");
        copy_tree(&source, &dest).unwrap();

        assert_eq!(fs::read(dest.join("top.txt")).unwrap(), b"top");
        assert_eq!(fs::read(dest.join("nested/deeper/leaf.txt")).unwrap(), b"leaf");
        assert!(source.join("top.txt").exists());
    }
}
