//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `relative_path` - lexical relative path between two absolute paths
//! - `to_slash` - display a path with forward slashes

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Compute the path of `to` relative to `from`, lexically.
///
/// Shared leading components are dropped, each remaining component of
/// `from` becomes `..`. Returns an empty path when both are equal.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use dusk::utils::path::relative_path;
/// let rel = relative_path(Path::new("/site"), Path::new("/site/img/logo.png"));
/// assert_eq!(rel, PathBuf::from("img/logo.png"));
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    if let Ok(rel) = to.strip_prefix(from) {
        return rel.to_path_buf();
    }

    let from: Vec<Component> = from.components().filter(|c| *c != Component::CurDir).collect();
    let to: Vec<Component> = to.components().filter(|c| *c != Component::CurDir).collect();

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    rel
}

/// Render a path with forward slashes on every platform.
#[inline]
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
