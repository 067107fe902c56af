//! Candidate expansion.
//!
//! Turns an ordered term list into the flat, ordered candidate list that
//! the resolver filters against the filesystem. Expansion never touches
//! the filesystem and never deduplicates.

use std::path::Path;

use crate::term::Term;

/// How a term list is expanded into candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandMode {
    /// No spec term present: all terms are flattened uniformly.
    Flatten,
    /// At least one spec term present: specs are cross-joined and plain
    /// terms pass through as complete candidates.
    SpecAware,
}

impl ExpandMode {
    /// Classify a term list.
    ///
    /// A single spec term anywhere switches the whole list into
    /// [`ExpandMode::SpecAware`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scout::{ExpandMode, SpecEntry, Term};
    ///
    /// let plain = vec![Term::from("a"), Term::from("b")];
    /// assert_eq!(ExpandMode::classify(&plain), ExpandMode::Flatten);
    ///
    /// let mixed = vec![Term::from("a"), Term::from(SpecEntry::default())];
    /// assert_eq!(ExpandMode::classify(&mixed), ExpandMode::SpecAware);
    /// ```
    #[must_use]
    pub fn classify(terms: &[Term]) -> Self {
        if terms.iter().any(Term::is_spec) {
            Self::SpecAware
        } else {
            Self::Flatten
        }
    }
}

/// Expand a term list into an ordered candidate list.
///
/// In flatten mode, nested sequences are flattened depth-first with order
/// preserved. In spec-aware mode, each spec produces its `paths` × `files`
/// cross product in path-major, file-minor order (or the bare file names
/// when `paths` is empty), and plain terms become single unjoined
/// candidates.
///
/// # Examples
///
/// ```
/// use scout::{expand, SpecEntry, Term};
///
/// let spec = SpecEntry::new(
///     vec!["a.yml".to_string(), "b.yml".to_string()],
///     vec!["dir1".to_string(), "dir2".to_string()],
/// );
/// let candidates = expand(&[Term::from(spec)]);
/// assert_eq!(candidates, ["dir1/a.yml", "dir1/b.yml", "dir2/a.yml", "dir2/b.yml"]);
/// ```
#[must_use]
pub fn expand(terms: &[Term]) -> Vec<String> {
    let mut candidates = Vec::new();
    match ExpandMode::classify(terms) {
        ExpandMode::Flatten => {
            for term in terms {
                flatten_into(term, &mut candidates);
            }
        }
        ExpandMode::SpecAware => {
            for term in terms {
                expand_spec_aware(term, &mut candidates);
            }
        }
    }
    candidates
}

fn flatten_into(term: &Term, out: &mut Vec<String>) {
    match term {
        Term::Name(name) => out.push(name.clone()),
        Term::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        // Classification only inspects top-level terms, so a spec buried
        // inside a nested sequence can land here. It has no meaning in
        // flatten mode and contributes nothing.
        Term::Spec(_) => {}
    }
}

fn expand_spec_aware(term: &Term, out: &mut Vec<String>) {
    match term {
        Term::Spec(spec) => {
            let files = spec.file_names();
            let paths = spec.path_names();
            if paths.is_empty() {
                out.extend(files);
            } else {
                for path in &paths {
                    for file in &files {
                        out.push(join_candidate(path, file));
                    }
                }
            }
        }
        // Plain terms are already-complete candidates in spec-aware mode;
        // they are never joined with any paths list.
        Term::Name(name) => out.push(name.clone()),
        Term::List(items) => {
            for item in items {
                expand_spec_aware(item, out);
            }
        }
    }
}

fn join_candidate(path: &str, file: &str) -> String {
    Path::new(path).join(file).to_string_lossy().into_owned()
}
