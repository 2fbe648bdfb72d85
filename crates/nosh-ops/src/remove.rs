//! Remove execution.

use std::fs;

use nosh_core::{PathKind, Result, ShellError};
use tracing::debug;

use crate::resolve::{OperationPlan, PlanEntry};

/// Execute a resolved removal plan.
///
/// Without `ignore_errors` the first failure is returned and the remaining
/// entries are left untouched. With it, failures are logged and skipped.
/// Returns the number of entries removed.
pub(crate) fn execute_remove(plan: &OperationPlan) -> Result<usize> {
    let mut removed = 0;

    for entry in &plan.entries {
        match remove_entry(entry, plan.flags.recursive) {
            Ok(()) => removed += 1,
            Err(e) if plan.flags.ignore_errors => {
                debug!(path = %entry.source.display(), error = %e, "rm: ignoring failure");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(removed)
}

fn remove_entry(entry: &PlanEntry, recursive: bool) -> Result<()> {
    let path = &entry.source;
    debug!(path = %path.display(), kind = %entry.source_kind, "rm");

    match entry.source_kind {
        PathKind::Directory if recursive => {
            fs::remove_dir_all(path).map_err(|e| ShellError::io(path, e))
        }
        PathKind::Directory => Err(ShellError::IsADirectory { path: path.clone() }),
        PathKind::File | PathKind::Missing => {
            fs::remove_file(path).map_err(|e| ShellError::io(path, e))
        }
    }
}
