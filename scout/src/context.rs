//! Context-relative path lookup.
//!
//! Relative candidates are resolved against the caller's location: the
//! directory of the current task first, then up the containing
//! role/play/include chain. The resolver talks to this collaborator
//! through the [`RelativeLookup`] trait; [`DirChain`] is the bundled
//! implementation over an ordered list of search directories.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::path::normalize;

/// Maps a relative candidate name to a best-effort absolute path.
pub trait RelativeLookup {
    /// Resolve `name` against the calling location.
    ///
    /// Walks the location chain until a match is found; when the chain is
    /// exhausted a best-effort path is still returned. Existence is the
    /// caller's concern, not this method's.
    fn resolve_relative(&self, name: &str) -> PathBuf;
}

/// An ordered chain of search directories, most specific first.
///
/// Directories are normalized to absolute form when added. Lookup walks
/// the chain in order and returns the first join that exists on disk,
/// falling back to the join against the most specific directory (or a
/// normalization against the current directory when the chain is empty).
///
/// # Examples
///
/// ```no_run
/// use scout::{DirChain, RelativeLookup};
/// use std::path::Path;
///
/// let chain = DirChain::new()
///     .with_dir(Path::new("roles/web/vars"))
///     .unwrap()
///     .with_dir(Path::new("vars"))
///     .unwrap();
///
/// let resolved = chain.resolve_relative("debian.yml");
/// assert!(resolved.is_absolute());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirChain {
    dirs: Vec<PathBuf>,
}

impl DirChain {
    /// Create an empty chain.
    ///
    /// With no directories, lookups fall back to the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a search directory, consuming and returning the chain.
    ///
    /// Directories are searched in insertion order, so add the most
    /// specific location first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory path cannot be normalized.
    pub fn with_dir(mut self, dir: &Path) -> Result<Self> {
        self.push_dir(dir)?;
        Ok(self)
    }

    /// Append a search directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory path cannot be normalized.
    pub fn push_dir(&mut self, dir: &Path) -> Result<()> {
        self.dirs.push(normalize(dir)?);
        Ok(())
    }

    /// The normalized search directories, in lookup order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Check whether the chain holds no directories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl RelativeLookup for DirChain {
    fn resolve_relative(&self, name: &str) -> PathBuf {
        let requested = Path::new(name);
        if requested.is_absolute() {
            return requested.to_path_buf();
        }

        for dir in &self.dirs {
            let candidate = dir.join(requested);
            if candidate.exists() {
                return candidate;
            }
        }

        // Best effort: the most specific location, or the current
        // directory when the chain is empty.
        match self.dirs.first() {
            Some(dir) => dir.join(requested),
            None => normalize(requested).unwrap_or_else(|_| requested.to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_absolute_name_returned_unchanged() {
        let chain = DirChain::new();
        assert_eq!(
            chain.resolve_relative("/etc/hosts"),
            PathBuf::from("/etc/hosts")
        );
    }

    #[test]
    fn test_first_matching_directory_wins() {
        let specific = TempDir::new().unwrap();
        let general = TempDir::new().unwrap();
        touch(specific.path(), "config.yml");
        touch(general.path(), "config.yml");

        let chain = DirChain::new()
            .with_dir(specific.path())
            .unwrap()
            .with_dir(general.path())
            .unwrap();

        let resolved = chain.resolve_relative("config.yml");
        assert_eq!(resolved, specific.path().join("config.yml"));
    }

    #[test]
    fn test_walks_up_the_chain() {
        let specific = TempDir::new().unwrap();
        let general = TempDir::new().unwrap();
        let expected = touch(general.path(), "only-here.yml");

        let chain = DirChain::new()
            .with_dir(specific.path())
            .unwrap()
            .with_dir(general.path())
            .unwrap();

        assert_eq!(chain.resolve_relative("only-here.yml"), expected);
    }

    #[test]
    fn test_no_match_falls_back_to_most_specific() {
        let specific = TempDir::new().unwrap();
        let general = TempDir::new().unwrap();

        let chain = DirChain::new()
            .with_dir(specific.path())
            .unwrap()
            .with_dir(general.path())
            .unwrap();

        let resolved = chain.resolve_relative("missing.yml");
        assert_eq!(resolved, specific.path().join("missing.yml"));
    }

    #[test]
    fn test_empty_chain_falls_back_to_current_dir() {
        let chain = DirChain::new();
        assert!(chain.is_empty());

        let resolved = chain.resolve_relative("missing.yml");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("missing.yml"));
    }

    #[test]
    fn test_dirs_are_normalized_on_insertion() {
        let dir = TempDir::new().unwrap();
        let dotted = dir.path().join("sub").join("..");
        fs::create_dir(dir.path().join("sub")).unwrap();

        let chain = DirChain::new().with_dir(&dotted).unwrap();
        assert_eq!(chain.dirs(), [dir.path().to_path_buf()]);
    }
}
