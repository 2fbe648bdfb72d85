//! Error types for shell operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout nosh.
pub type Result<T, E = ShellError> = std::result::Result<T, E>;

/// Errors that can occur while expanding, planning or executing an operation.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Target of an exclusive create is already present.
    #[error("Already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Several sources resolved against a destination that is not a directory.
    #[error("Cannot {operation} {sources} sources to {destination}: target is not a directory")]
    InvalidTarget {
        operation: String,
        sources: usize,
        destination: PathBuf,
    },

    /// A directory source collides with an existing plain file.
    #[error("Cannot overwrite file {destination} with directory {source_path}")]
    TargetFileExists {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// A command was called without the source operands it needs.
    #[error("{command}: missing operand")]
    MissingArguments { command: String },

    /// `rm` on a directory without the recursive flag.
    #[error("Is a directory: {path}")]
    IsADirectory { path: PathBuf },

    /// A path that must be a directory is something else.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Source and destination resolve to the same path.
    #[error("{source_path} and {destination} are the same file")]
    SameFile {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// A directory copied or moved into its own subtree.
    #[error("Cannot copy/move {source_path} into itself ({destination})")]
    SourceIsAncestor {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// Path cannot take part in the operation (e.g. has no final component).
    #[error("Invalid path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// Subtree copy failed.
    #[error("Failed to copy {path}: {message}")]
    Copy { path: PathBuf, message: String },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad class an error surfaces as, mirroring the classic shell/OS split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// The arguments were well-formed but describe an impossible plan.
    Value,
    /// Something already occupies the target path.
    FileExists,
    /// Too few operands.
    Arity,
    /// A primitive filesystem call failed.
    Os,
}

impl ShellError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            std::io::ErrorKind::IsADirectory => Self::IsADirectory { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a missing-operand error for a command.
    pub fn missing_arguments(command: impl Into<String>) -> Self {
        Self::MissingArguments {
            command: command.into(),
        }
    }

    /// The class this error surfaces as.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTarget { .. }
            | Self::SameFile { .. }
            | Self::SourceIsAncestor { .. }
            | Self::InvalidPath { .. } => ErrorCategory::Value,
            Self::AlreadyExists { .. } | Self::TargetFileExists { .. } => {
                ErrorCategory::FileExists
            }
            Self::MissingArguments { .. } => ErrorCategory::Arity,
            Self::IsADirectory { .. }
            | Self::NotADirectory { .. }
            | Self::PermissionDenied { .. }
            | Self::NotFound { .. }
            | Self::Copy { .. }
            | Self::Io { .. } => ErrorCategory::Os,
        }
    }

    /// The path most closely associated with this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::AlreadyExists { path }
            | Self::IsADirectory { path }
            | Self::NotADirectory { path }
            | Self::InvalidPath { path, .. }
            | Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::Copy { path, .. }
            | Self::Io { path, .. } => Some(path.as_path()),
            Self::InvalidTarget { destination, .. }
            | Self::TargetFileExists { destination, .. }
            | Self::SameFile { destination, .. }
            | Self::SourceIsAncestor { destination, .. } => Some(destination.as_path()),
            Self::MissingArguments { .. } => None,
        }
    }
}
