//! Template evaluation for candidate strings.
//!
//! Candidates may carry embedded variable expressions that must be
//! rendered before the filesystem is consulted. The resolver talks to the
//! evaluator through the [`TemplateEvaluator`] trait so a host runtime can
//! plug in its own templating; [`VarTable`] is the bundled implementation
//! resolving `{{ name }}` expressions against a string map.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Evaluates embedded variable expressions in a raw candidate string.
pub trait TemplateEvaluator {
    /// Render `raw` with all variable expressions substituted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedVariable`] when the string references a
    /// variable absent from the active scope; this is the one condition
    /// the resolver treats as recoverable. Any other failure is fatal and
    /// surfaces unchanged.
    fn evaluate(&self, raw: &str) -> Result<String>;
}

/// A template evaluator backed by a flat table of string variables.
///
/// Expressions take the form `{{ name }}`; whitespace inside the braces
/// is ignored. Strings without expressions pass through unchanged.
///
/// # Examples
///
/// ```
/// use scout::{TemplateEvaluator, VarTable};
///
/// let vars = VarTable::new().with_var("distro", "debian");
/// assert_eq!(vars.evaluate("{{ distro }}.yml").unwrap(), "debian.yml");
/// assert!(vars.evaluate("{{ missing }}.yml").unwrap_err().is_undefined_variable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VarTable {
    vars: BTreeMap<String, String>,
}

impl VarTable {
    /// Create an empty variable table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable binding, consuming and returning the table.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a variable binding.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a variable binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The number of bindings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check whether the table holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl TemplateEvaluator for VarTable {
    fn evaluate(&self, raw: &str) -> Result<String> {
        if !raw.contains("{{") {
            return Ok(raw.to_string());
        }

        let mut rendered = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(Error::Template {
                    message: format!("unterminated expression in '{raw}'"),
                });
            };
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(Error::Template {
                    message: format!("empty expression in '{raw}'"),
                });
            }
            match self.vars.get(name) {
                Some(value) => rendered.push_str(value),
                None => {
                    return Err(Error::UndefinedVariable {
                        name: name.to_string(),
                    })
                }
            }
            rest = &after[end + 2..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}
