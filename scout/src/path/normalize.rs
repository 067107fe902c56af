//! Path normalization functions.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (`~`) to the home directory.
///
/// Handles `~` and `~/path`; the `~user` form is not supported. Paths
/// without a leading tilde are returned unchanged.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8, the home directory
/// cannot be determined, or the `~user` form is used.
///
/// # Examples
///
/// ```
/// use scout::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/vars")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("vars"));
///
/// assert_eq!(expand_tilde(Path::new("/etc")).unwrap(), Path::new("/etc"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if `..` components would escape the filesystem root.
///
/// # Examples
///
/// ```
/// use scout::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::RootDir => resolved.push(component),
            Component::Prefix(prefix) => resolved.push(prefix.as_os_str()),
            Component::Normal(name) => resolved.push(name),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() || resolved.as_os_str().is_empty() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components escape the root".to_string(),
                    });
                }
                // Popping down to the bare root is fine; popping the root
                // itself is not.
                if resolved.components().next().is_none() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components escape the root".to_string(),
                    });
                }
            }
        }
    }

    Ok(resolved)
}

/// Normalize a path to absolute form.
///
/// Expands a leading tilde, makes relative paths absolute against the
/// current directory, and resolves `.`/`..` components. Symlinks are not
/// followed and the path need not exist.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory
/// cannot be determined, or component resolution escapes the root.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()?.join(expanded)
    };
    resolve_components(&absolute)
}
