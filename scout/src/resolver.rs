//! The existing-files resolver.
//!
//! Ties together candidate expansion, template evaluation and
//! context-relative lookup: terms go in, the absolute paths of the
//! combinations that actually exist come out, in candidate order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::context::RelativeLookup;
use crate::error::{Error, Result};
use crate::expand::expand;
use crate::template::TemplateEvaluator;
use crate::term::Term;

/// Outcome of templating a single candidate.
///
/// An undefined variable is not an error at this level; it marks the
/// candidate for a silent skip.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rendering {
    Rendered(String),
    Skipped { name: String },
}

/// Resolves term lists to the existing files they name.
///
/// The resolver is generic over its two collaborators: a
/// [`TemplateEvaluator`] for rendering embedded variable expressions and
/// a [`RelativeLookup`] for mapping relative names to the caller's
/// location. Resolution is synchronous, read-only and idempotent for a
/// given filesystem state.
///
/// # Examples
///
/// ```no_run
/// use scout::{DirChain, Resolver, Term, VarTable};
/// use std::path::Path;
///
/// let vars = VarTable::new().with_var("distro", "debian");
/// let chain = DirChain::new().with_dir(Path::new("vars")).unwrap();
/// let resolver = Resolver::new(vars, chain);
///
/// let terms = vec![Term::from("{{ distro }}.yml"), Term::from("default.yml")];
/// for path in resolver.resolve(&terms).unwrap() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug)]
pub struct Resolver<E, L> {
    evaluator: E,
    lookup: L,
}

impl<E: TemplateEvaluator, L: RelativeLookup> Resolver<E, L> {
    /// Create a resolver from its two collaborators.
    pub fn new(evaluator: E, lookup: L) -> Self {
        Self { evaluator, lookup }
    }

    /// Resolve a term list to the existing files it names.
    ///
    /// Candidates are processed in expansion order. A candidate whose
    /// templated form references an undefined variable is skipped
    /// silently. A candidate that evaluates to an absolute existing path
    /// is recorded as-is; otherwise it is resolved relative to context
    /// and recorded if the result exists. Candidates matching neither are
    /// dropped without error.
    ///
    /// The returned sequence preserves candidate order and may contain
    /// duplicates; it is never deduplicated or reordered.
    ///
    /// # Errors
    ///
    /// Returns an error on any template failure other than an undefined
    /// variable, and on any filesystem error other than plain
    /// not-found.
    pub fn resolve(&self, terms: &[Term]) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for candidate in expand(terms) {
            let rendered = match self.render(&candidate)? {
                Rendering::Rendered(rendered) => rendered,
                Rendering::Skipped { name } => {
                    log::debug!("skipping candidate '{candidate}': variable '{name}' is undefined");
                    continue;
                }
            };

            let path = Path::new(&rendered);
            if path.is_absolute() && path_exists(path)? {
                found.push(path.to_path_buf());
                continue;
            }

            let resolved = self.lookup.resolve_relative(&rendered);
            if path_exists(&resolved)? {
                found.push(resolved);
            }
        }

        Ok(found)
    }

    fn render(&self, raw: &str) -> Result<Rendering> {
        match self.evaluator.evaluate(raw) {
            Ok(rendered) => Ok(Rendering::Rendered(rendered)),
            Err(Error::UndefinedVariable { name }) => Ok(Rendering::Skipped { name }),
            Err(other) => Err(other),
        }
    }
}

/// Check whether a path exists, distinguishing "not found" from real
/// filesystem failures.
fn path_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DirChain;
    use crate::template::VarTable;
    use mockall::mock;
    use std::fs::File;
    use tempfile::TempDir;

    mock! {
        Evaluator {}
        impl TemplateEvaluator for Evaluator {
            fn evaluate(&self, raw: &str) -> Result<String>;
        }
    }

    mock! {
        Lookup {}
        impl RelativeLookup for Lookup {
            fn resolve_relative(&self, name: &str) -> PathBuf;
        }
    }

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_absolute_existing_path_recorded_without_lookup() {
        let dir = TempDir::new().unwrap();
        let existing = touch(&dir, "present.yml");

        let mut lookup = MockLookup::new();
        lookup.expect_resolve_relative().never();

        let resolver = Resolver::new(VarTable::new(), lookup);
        let terms = vec![Term::from(existing.to_str().unwrap())];
        assert_eq!(resolver.resolve(&terms).unwrap(), vec![existing]);
    }

    #[test]
    fn test_relative_candidate_goes_through_lookup() {
        let dir = TempDir::new().unwrap();
        let existing = touch(&dir, "found.yml");

        let mut lookup = MockLookup::new();
        let resolved = existing.clone();
        lookup
            .expect_resolve_relative()
            .withf(|name| name == "found.yml")
            .return_once(move |_| resolved);

        let resolver = Resolver::new(VarTable::new(), lookup);
        let terms = vec![Term::from("found.yml")];
        assert_eq!(resolver.resolve(&terms).unwrap(), vec![existing]);
    }

    #[test]
    fn test_missing_candidate_dropped_silently() {
        let dir = TempDir::new().unwrap();

        let resolver = Resolver::new(
            VarTable::new(),
            DirChain::new().with_dir(dir.path()).unwrap(),
        );
        let terms = vec![Term::from("absent.yml")];
        assert!(resolver.resolve(&terms).unwrap().is_empty());
    }

    #[test]
    fn test_undefined_variable_skips_and_continues() {
        let dir = TempDir::new().unwrap();
        let existing = touch(&dir, "after.yml");

        let resolver = Resolver::new(
            VarTable::new(),
            DirChain::new().with_dir(dir.path()).unwrap(),
        );
        let terms = vec![Term::from("{{ missing }}.yml"), Term::from("after.yml")];
        assert_eq!(resolver.resolve(&terms).unwrap(), vec![existing]);
    }

    #[test]
    fn test_other_template_errors_propagate() {
        let mut evaluator = MockEvaluator::new();
        evaluator.expect_evaluate().return_once(|_| {
            Err(Error::Template {
                message: "boom".to_string(),
            })
        });

        let mut lookup = MockLookup::new();
        lookup.expect_resolve_relative().never();

        let resolver = Resolver::new(evaluator, lookup);
        let result = resolver.resolve(&[Term::from("anything")]);
        assert!(matches!(result, Err(Error::Template { .. })));
    }

    #[test]
    fn test_candidates_evaluated_in_order() {
        let dir = TempDir::new().unwrap();
        let first = touch(&dir, "a.yml");
        let second = touch(&dir, "b.yml");

        let resolver = Resolver::new(
            VarTable::new(),
            DirChain::new().with_dir(dir.path()).unwrap(),
        );
        let terms = vec![Term::from("b.yml"), Term::from("a.yml")];
        assert_eq!(resolver.resolve(&terms).unwrap(), vec![second, first]);
    }

    #[test]
    fn test_duplicate_candidates_yield_duplicate_results() {
        let dir = TempDir::new().unwrap();
        let existing = touch(&dir, "dup.yml");

        let resolver = Resolver::new(
            VarTable::new(),
            DirChain::new().with_dir(dir.path()).unwrap(),
        );
        let terms = vec![Term::from("dup.yml"), Term::from("dup.yml")];
        assert_eq!(
            resolver.resolve(&terms).unwrap(),
            vec![existing.clone(), existing]
        );
    }

    #[test]
    fn test_templated_candidate_resolves() {
        let dir = TempDir::new().unwrap();
        let existing = touch(&dir, "debian.yml");

        let resolver = Resolver::new(
            VarTable::new().with_var("distro", "debian"),
            DirChain::new().with_dir(dir.path()).unwrap(),
        );
        let terms = vec![Term::from("{{ distro }}.yml")];
        assert_eq!(resolver.resolve(&terms).unwrap(), vec![existing]);
    }

    #[test]
    fn test_filesystem_errors_other_than_not_found_propagate() {
        let dir = TempDir::new().unwrap();
        let plain = touch(&dir, "plain.yml");
        // Using an existing file as a directory component fails with
        // something other than not-found (ENOTDIR on Unix).
        let bogus = plain.join("child.yml");

        let mut lookup = MockLookup::new();
        lookup.expect_resolve_relative().never();

        let resolver = Resolver::new(VarTable::new(), lookup);
        let terms = vec![Term::from(bogus.to_str().unwrap())];
        assert!(matches!(resolver.resolve(&terms), Err(Error::Io(_))));
    }

    #[test]
    fn test_absolute_nonexistent_path_dropped() {
        let dir = TempDir::new().unwrap();
        let absent = dir.path().join("never.yml");

        let resolver = Resolver::new(VarTable::new(), DirChain::new());
        let terms = vec![Term::from(absent.to_str().unwrap())];
        assert!(resolver.resolve(&terms).unwrap().is_empty());
    }
}
