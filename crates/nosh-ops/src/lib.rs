//! Glob-aware file operations engine for nosh.
//!
//! Patterns are expanded against a working directory ([`PathExpander`]),
//! resolved into a validated [`OperationPlan`] ([`TargetResolver`]) and then
//! executed with plain filesystem calls. [`Shell`] ties the three together
//! behind `cp`, `mv`, `rm`, `ls`, `mkdir`, `touch` and `pwd`.

mod copy;
mod create;
mod cwd;
mod expand;
mod list;
mod move_op;
mod operation;
mod remove;
mod resolve;
mod shell;

pub use cwd::{CurrentDirectory, with_current_directory};
pub use expand::PathExpander;
pub use operation::OperationType;
pub use resolve::{OperationPlan, PlanEntry, TargetMode, TargetResolver};
pub use shell::Shell;

pub use nosh_core::{ErrorCategory, Flags, PathKind, Result, ShellConfig, ShellError};
