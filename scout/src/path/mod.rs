//! Path normalization helpers.
//!
//! Search directories and best-effort fallback paths are normalized to
//! absolute form: tilde expanded, made absolute against the current
//! directory, with `.` and `..` components resolved. Symlinks are never
//! followed; existence is checked separately by the resolver.

pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::normalize;
