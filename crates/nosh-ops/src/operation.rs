//! Operation kinds.

use serde::{Deserialize, Serialize};

/// The type of operation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Copy,
    Move,
    Remove,
    List,
    CreateFile,
    CreateDirectory,
}

impl OperationType {
    /// Shell command name, used in diagnostics.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Copy => "cp",
            Self::Move => "mv",
            Self::Remove => "rm",
            Self::List => "ls",
            Self::CreateFile => "touch",
            Self::CreateDirectory => "mkdir",
        }
    }

    /// Whether directory sources are carried over without an explicit
    /// recursive flag.
    pub fn moves_directories(&self) -> bool {
        matches!(self, Self::Move)
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
            Self::Remove => write!(f, "Remove"),
            Self::List => write!(f, "List"),
            Self::CreateFile => write!(f, "Create file"),
            Self::CreateDirectory => write!(f, "Create directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(OperationType::Copy.command(), "cp");
        assert_eq!(OperationType::Remove.command(), "rm");
        assert_eq!(OperationType::CreateDirectory.to_string(), "Create directory");
        assert!(OperationType::Move.moves_directories());
        assert!(!OperationType::Copy.moves_directories());
    }
}
