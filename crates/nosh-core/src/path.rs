//! Path classification and lexical resolution.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Characters that turn a pattern component into a glob.
pub const GLOB_METACHARS: [char; 3] = ['*', '?', '['];

/// What currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// An existing directory (symlinks are followed).
    Directory,
    /// An existing non-directory entry.
    File,
    /// Nothing there, or a dangling link.
    Missing,
}

impl PathKind {
    /// Classify `path` with a single metadata lookup.
    pub fn of(path: impl AsRef<Path>) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Self::Directory,
            Ok(_) => Self::File,
            Err(_) => Self::Missing,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Check if this is a plain file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Check if anything exists at the path.
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Check whether two existing paths name the same file.
///
/// Links are followed, so a hard link or symlink to `a` counts as `a`.
/// Returns `false` when either path cannot be inspected.
pub fn same_file(a: &Path, b: &Path) -> bool {
    let (Ok(left), Ok(right)) = (fs::metadata(a), fs::metadata(b)) else {
        return false;
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        left.dev() == right.dev() && left.ino() == right.ino()
    }

    #[cfg(not(unix))]
    {
        let _ = (left, right);
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Check whether a pattern contains glob metacharacters.
pub fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(GLOB_METACHARS)
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Anything else (including `~user`) is returned unchanged.
pub fn expand_home(pattern: &str) -> PathBuf {
    let rest = if pattern == "~" {
        Some("")
    } else {
        pattern.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(pattern),
    }
}

/// Join `path` onto `base` when relative, then normalize lexically.
pub fn absolutize(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, matching `abspath`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_glob_meta() {
        assert!(has_glob_meta("*.txt"));
        assert!(has_glob_meta("file?.rs"));
        assert!(has_glob_meta("[1-2].txt"));
        assert!(!has_glob_meta("plain/path.txt"));
        assert!(!has_glob_meta("{a,b}"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize() {
        let base = Path::new("/work/dir");
        assert_eq!(absolutize(base, "file.txt"), PathBuf::from("/work/dir/file.txt"));
        assert_eq!(absolutize(base, "../up.txt"), PathBuf::from("/work/up.txt"));
        assert_eq!(absolutize(base, "/etc/hosts"), PathBuf::from("/etc/hosts"));
        assert_eq!(absolutize(base, "."), PathBuf::from("/work/dir"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("plain"), PathBuf::from("plain"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/notes.txt"), home.join("notes.txt"));
        }
    }

    #[test]
    fn test_path_kind() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        assert_eq!(PathKind::of(temp.path()), PathKind::Directory);
        assert_eq!(PathKind::of(&file), PathKind::File);
        assert_eq!(PathKind::of(temp.path().join("nope")), PathKind::Missing);
        assert!(!PathKind::Missing.exists());
        assert_eq!(PathKind::Directory.to_string(), "directory");
    }

    #[test]
    fn test_same_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        let linked = temp.path().join("linked.txt");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"a").unwrap();
        fs::hard_link(&a, &linked).unwrap();

        assert!(same_file(&a, &a));
        assert!(same_file(&a, &linked));
        assert!(!same_file(&a, &b));
        assert!(!same_file(&a, &temp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_file_through_symlink() {
        let temp = tempfile::TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let link = temp.path().join("link.txt");
        fs::write(&a, b"a").unwrap();
        std::os::unix::fs::symlink(&a, &link).unwrap();

        assert!(same_file(&a, &link));
    }
}
