//! Error types for the scout library.
//!
//! All fallible operations in the library return [`Result`], built on a
//! single `thiserror`-derived error enum.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a scout error.
///
/// # Examples
///
/// ```
/// use scout::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the scout library.
#[derive(Debug, Error)]
pub enum Error {
    /// A template expression referenced a variable that is not bound in the
    /// active scope. This is the one recoverable condition during
    /// resolution: the resolver skips the affected candidate and continues.
    #[error("undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the unbound variable.
        name: String,
    },

    /// A template expression could not be evaluated for a reason other than
    /// an unbound variable. Always fatal.
    #[error("template error: {message}")]
    Template {
        /// A description of the evaluation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A terms file existed but could not be parsed.
    #[error("invalid terms file {}: {source}", path.display())]
    TermsFile {
        /// The path to the terms file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is the recoverable undefined-variable condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use scout::Error;
    ///
    /// let err = Error::UndefinedVariable { name: "distro".to_string() };
    /// assert!(err.is_undefined_variable());
    /// ```
    #[must_use]
    pub fn is_undefined_variable(&self) -> bool {
        matches!(self, Self::UndefinedVariable { .. })
    }
}
