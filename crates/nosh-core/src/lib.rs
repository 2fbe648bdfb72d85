//! Core types for nosh.
//!
//! This crate provides the error taxonomy, configuration, per-call flags and
//! lexical path helpers shared by the operation engine.

mod config;
mod error;
mod flags;
pub mod path;

pub use config::{ShellConfig, ShellConfigBuilder};
pub use error::{ErrorCategory, Result, ShellError};
pub use flags::Flags;
pub use path::PathKind;
