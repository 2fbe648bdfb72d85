//! nosh - shell-style file operations as plain function calls.
//!
//! ```no_run
//! use nosh::{Flags, Shell};
//!
//! # fn main() -> nosh::Result<()> {
//! let shell = Shell::new("/tmp/work");
//! shell.mkdir("backup")?;
//! shell.cp(&["*.txt"], "backup", Flags::new())?;
//! shell.rm(&["*.log", "cache"], Flags::recursive().with_ignore_errors(true))?;
//! for path in shell.ls(&["backup/*"])? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub use nosh_core::path;
pub use nosh_core::{
    ErrorCategory, Flags, PathKind, Result, ShellConfig, ShellConfigBuilder, ShellError,
};
pub use nosh_ops::{
    CurrentDirectory, OperationPlan, OperationType, PathExpander, PlanEntry, Shell, TargetMode,
    TargetResolver, with_current_directory,
};
