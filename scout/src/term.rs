//! Input terms for the existing-files resolver.
//!
//! A term is one element of the resolver's input list. Three shapes are
//! accepted, mirroring what callers feed the lookup:
//!
//! - a plain candidate name,
//! - a nested sequence of names (arbitrary depth),
//! - a files/paths specification mapping.
//!
//! All term types deserialize from YAML, so a term list can be written as
//! an ordinary YAML document and loaded with [`load_terms`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Delimiters recognized inside a delimited `files` string.
pub const FILE_DELIMITERS: &[char] = &[',', ';'];

/// Delimiters recognized inside a delimited `paths` string.
pub const PATH_DELIMITERS: &[char] = &[',', ';', ':'];

/// One input element to the resolver.
///
/// # Examples
///
/// ```
/// use scout::Term;
///
/// let terms: Vec<Term> = serde_yaml::from_str(
///     "- default.yml\n- files: [a.yml, b.yml]\n  paths: [vars]\n",
/// ).unwrap();
/// assert!(!terms[0].is_spec());
/// assert!(terms[1].is_spec());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// A plain candidate name.
    Name(String),
    /// A nested sequence of terms.
    List(Vec<Term>),
    /// A files/paths specification.
    ///
    /// Tried last: the derived struct deserializer also accepts short
    /// sequences, which must keep matching [`Term::List`] instead.
    Spec(SpecEntry),
}

impl Term {
    /// Check whether this term is a files/paths specification.
    ///
    /// A single spec term anywhere in a call switches the whole expansion
    /// into spec-aware mode.
    #[must_use]
    pub fn is_spec(&self) -> bool {
        matches!(self, Self::Spec(_))
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<SpecEntry> for Term {
    fn from(spec: SpecEntry) -> Self {
        Self::Spec(spec)
    }
}

/// A files/paths specification term.
///
/// Both keys are optional and default to the empty list. A spec with both
/// keys empty contributes no candidates; this is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpecEntry {
    /// Candidate file names to look for.
    #[serde(default)]
    pub files: NameList,
    /// Directories in which to look for the files.
    #[serde(default)]
    pub paths: NameList,
}

impl SpecEntry {
    /// Create a spec from explicit file and path name lists.
    #[must_use]
    pub fn new(files: Vec<String>, paths: Vec<String>) -> Self {
        Self {
            files: NameList::Names(files),
            paths: NameList::Names(paths),
        }
    }

    /// The file names of this spec, with delimited strings tokenized.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.files.names(FILE_DELIMITERS)
    }

    /// The path names of this spec, with delimited strings tokenized.
    #[must_use]
    pub fn path_names(&self) -> Vec<String> {
        self.paths.names(PATH_DELIMITERS)
    }
}

/// A list of names given either inline or as a single delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    /// A single string holding delimiter-separated names.
    Delimited(String),
    /// An explicit sequence of names.
    Names(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

impl NameList {
    /// Expand this list into individual names.
    ///
    /// Delimited strings are split with [`tokenize`] using the given
    /// delimiter set; explicit sequences are returned as written.
    #[must_use]
    pub fn names(&self, delimiters: &[char]) -> Vec<String> {
        match self {
            Self::Delimited(s) => tokenize(s, delimiters),
            Self::Names(v) => v.clone(),
        }
    }
}

/// Split a string on whitespace and a set of delimiter characters.
///
/// Empty tokens are dropped, so runs of delimiters and surrounding
/// whitespace collapse cleanly.
///
/// # Examples
///
/// ```
/// use scout::term::tokenize;
///
/// assert_eq!(tokenize("a,b", &[',']), vec!["a", "b"]);
/// assert_eq!(tokenize("a, b ;c", &[',', ';']), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("", &[',']), Vec::<String>::new());
/// ```
#[must_use]
pub fn tokenize(input: &str, delimiters: &[char]) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || delimiters.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a term list from a YAML file.
///
/// The file must contain a YAML sequence of terms.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or exists but does not
/// parse as a sequence of terms.
pub fn load_terms(path: &Path) -> Result<Vec<Term>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|source| Error::TermsFile {
        path: path.to_path_buf(),
        source,
    })
}
