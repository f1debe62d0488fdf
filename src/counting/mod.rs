//! Reference counting over the corpus blob.
//!
//! Counting is whole-word and purely textual: a declaration name reused for
//! an unrelated identifier anywhere in the corpus still counts as a
//! reference. That keeps the check cheap and is a documented source of false
//! negatives. Every count rescans the full blob, so total work is
//! O(declarations × corpus size); fine for small and medium trees.

use miette::{IntoDiagnostic, Result};
use regex::Regex;

/// Counts whole-word occurrences of declaration names in the corpus blob.
pub struct ReferenceCounter<'a> {
    blob: &'a str,
}

impl<'a> ReferenceCounter<'a> {
    pub fn new(blob: &'a str) -> Self {
        Self { blob }
    }

    /// Whole-word occurrences of `name` in the blob, minus one for the
    /// declaration site itself, clamped at zero.
    ///
    /// The name is escaped literally, so identifiers containing regex
    /// metacharacters cannot inject pattern syntax.
    pub fn count(&self, name: &str) -> Result<usize> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(name))).into_diagnostic()?;
        Ok(pattern.find_iter(self.blob).count().saturating_sub(1))
    }
}
