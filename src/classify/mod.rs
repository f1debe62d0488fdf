//! Dead-code classification.
//!
//! Walks the declaration map in insertion order and keeps every declaration
//! whose reference count is exactly zero. Iteration order only affects
//! report order. A counter failure for any name aborts the run; there is no
//! per-item retry.

use crate::counting::ReferenceCounter;
use crate::extract::{Declaration, DeclarationMap};
use miette::Result;
use tracing::debug;

/// A declaration with no references anywhere else in the corpus.
#[derive(Debug, Clone)]
pub struct DeadCodeEntry {
    pub declaration: Declaration,
}

/// Classifies declarations as dead or referenced.
pub struct Classifier<'a> {
    counter: ReferenceCounter<'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(counter: ReferenceCounter<'a>) -> Self {
        Self { counter }
    }

    /// Classify every declaration, in insertion order.
    pub fn classify(&self, declarations: &DeclarationMap) -> Result<Vec<DeadCodeEntry>> {
        self.classify_with(declarations, |_, _| {})
    }

    /// Same as [`classify`](Self::classify), invoking `progress` once per
    /// declaration with `(processed, total)`. The hook is presentational
    /// only and must not affect the result.
    pub fn classify_with<F>(
        &self,
        declarations: &DeclarationMap,
        mut progress: F,
    ) -> Result<Vec<DeadCodeEntry>>
    where
        F: FnMut(usize, usize),
    {
        let total = declarations.len();
        let mut dead = Vec::new();

        for (processed, declaration) in declarations.iter().enumerate() {
            progress(processed, total);
            let references = self.counter.count(&declaration.name)?;
            if references == 0 {
                dead.push(DeadCodeEntry {
                    declaration: declaration.clone(),
                });
            }
        }

        debug!("Classified {} of {} declarations as dead", dead.len(), total);
        Ok(dead)
    }
}
