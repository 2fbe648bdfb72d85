//! Target resolution: turning expanded sources and a destination into a
//! validated plan.
//!
//! The destination is classified exactly once, before anything touches the
//! filesystem, and every source is planned against that classification.
//! All validation happens here so that an invalid request leaves the
//! filesystem untouched.

use std::path::{Path, PathBuf};

use nosh_core::path::same_file;
use nosh_core::{Flags, PathKind, Result, ShellError};
use serde::{Deserialize, Serialize};

use crate::operation::OperationType;

/// How sources relate to the destination of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// One source written over an existing file or to a new name.
    FileToFile,
    /// One source placed inside an existing directory.
    FileToDirectory,
    /// Several sources placed inside an existing directory.
    FilesToDirectory,
}

/// A single step of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Expanded source path.
    pub source: PathBuf,
    /// Final path of the source after a transfer; `None` for removals.
    pub destination: Option<PathBuf>,
    /// What the source was when the plan was made.
    pub source_kind: PathKind,
}

/// A resolved, validated operation.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// The operation this plan executes.
    pub operation: OperationType,
    /// Source/destination relationship for transfers.
    pub mode: Option<TargetMode>,
    /// Destination argument, resolved.
    pub destination: Option<PathBuf>,
    /// Destination classification shared by every entry.
    pub destination_kind: Option<PathKind>,
    /// Steps to execute, in source order.
    pub entries: Vec<PlanEntry>,
    /// Directory sources left alone because the operation is not recursive.
    pub skipped: Vec<PathBuf>,
    /// Flags the plan was made with.
    pub flags: Flags,
}

impl OperationPlan {
    /// Check if the plan has nothing to execute.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(source, destination)` pairs of a transfer plan.
    pub fn transfers(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.entries.iter().filter_map(|entry| {
            entry
                .destination
                .as_deref()
                .map(|dest| (entry.source.as_path(), dest))
        })
    }
}

/// Plans `cp`, `mv` and `rm` invocations.
#[derive(Debug, Clone, Copy)]
pub struct TargetResolver {
    operation: OperationType,
    flags: Flags,
}

impl TargetResolver {
    /// Create a resolver for one invocation.
    pub fn new(operation: OperationType, flags: Flags) -> Self {
        Self { operation, flags }
    }

    /// Whether directory sources take part in the operation.
    fn descends(&self) -> bool {
        self.flags.recursive || self.operation.moves_directories()
    }

    /// Resolve a copy or move of `sources` to `destination`.
    ///
    /// | sources | dest is directory | dest is file | dest missing |
    /// |---|---|---|---|
    /// | 1 | into dir | over the file | as new name |
    /// | >1 | each into dir | `InvalidTarget` | `InvalidTarget` |
    pub fn resolve(&self, sources: Vec<PathBuf>, destination: PathBuf) -> Result<OperationPlan> {
        if sources.is_empty() {
            return Err(ShellError::missing_arguments(self.operation.command()));
        }

        let destination_kind = PathKind::of(&destination);
        let into_directory = destination_kind.is_dir();

        if sources.len() > 1 && !into_directory {
            return Err(ShellError::InvalidTarget {
                operation: self.operation.command().to_string(),
                sources: sources.len(),
                destination,
            });
        }

        let mode = match (sources.len(), into_directory) {
            (_, false) => TargetMode::FileToFile,
            (1, true) => TargetMode::FileToDirectory,
            _ => TargetMode::FilesToDirectory,
        };

        let mut entries = Vec::with_capacity(sources.len());
        let mut skipped = Vec::new();

        for source in sources {
            let source_kind = PathKind::of(&source);

            if source_kind.is_dir() && destination_kind.is_file() {
                return Err(ShellError::TargetFileExists {
                    source_path: source,
                    destination,
                });
            }

            if source_kind.is_dir() && !self.descends() {
                skipped.push(source);
                continue;
            }

            let target = if into_directory {
                let Some(name) = source.file_name() else {
                    return Err(ShellError::InvalidPath {
                        path: source,
                        message: "path has no file name".to_string(),
                    });
                };
                destination.join(name)
            } else {
                destination.clone()
            };

            // A link to the source is the source: copying onto it truncates it.
            if target == source || (source_kind.exists() && same_file(&source, &target)) {
                return Err(ShellError::SameFile {
                    source_path: source,
                    destination: target,
                });
            }

            if source_kind.is_dir() && target.starts_with(&source) {
                return Err(ShellError::SourceIsAncestor {
                    source_path: source,
                    destination: target,
                });
            }

            entries.push(PlanEntry {
                source,
                destination: Some(target),
                source_kind,
            });
        }

        Ok(OperationPlan {
            operation: self.operation,
            mode: Some(mode),
            destination: Some(destination),
            destination_kind: Some(destination_kind),
            entries,
            skipped,
            flags: self.flags,
        })
    }

    /// Plan a removal of `targets`.
    pub fn removal(&self, targets: Vec<PathBuf>) -> Result<OperationPlan> {
        if targets.is_empty() {
            return Err(ShellError::missing_arguments(self.operation.command()));
        }

        let entries = targets
            .into_iter()
            .map(|source| PlanEntry {
                source_kind: PathKind::of(&source),
                source,
                destination: None,
            })
            .collect();

        Ok(OperationPlan {
            operation: self.operation,
            mode: None,
            destination: None,
            destination_kind: None,
            entries,
            skipped: Vec::new(),
            flags: self.flags,
        })
    }
}
