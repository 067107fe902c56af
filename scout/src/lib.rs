#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # scout
//!
//! A library for resolving candidate file names and search paths to the
//! files that actually exist.
//!
//! Given an ordered list of terms (plain names, nested name sequences, or
//! files/paths specifications), scout expands them into candidates,
//! renders embedded variable expressions, and returns the absolute paths
//! of every combination present on the filesystem, in first-found order
//! with duplicates preserved.
//!
//! ## Core Types
//!
//! - [`Term`], [`SpecEntry`] and [`NameList`]: resolver input
//! - [`Resolver`]: the existing-files resolution procedure
//! - [`TemplateEvaluator`] and [`VarTable`]: variable expression rendering
//! - [`RelativeLookup`] and [`DirChain`]: context-relative path lookup
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use scout::{DirChain, Resolver, Term, VarTable};
//! use std::path::Path;
//!
//! let vars = VarTable::new().with_var("distro", "debian");
//! let chain = DirChain::new().with_dir(Path::new("vars")).unwrap();
//! let resolver = Resolver::new(vars, chain);
//!
//! let terms = vec![Term::from("{{ distro }}.yml"), Term::from("default.yml")];
//! for path in resolver.resolve(&terms).unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod context;
pub mod error;
pub mod expand;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod template;
pub mod term;

// Re-export key types at crate root for convenience
pub use context::{DirChain, RelativeLookup};
pub use error::{Error, Result};
pub use expand::{expand, ExpandMode};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolver::Resolver;
pub use template::{TemplateEvaluator, VarTable};
pub use term::{load_terms, NameList, SpecEntry, Term};
