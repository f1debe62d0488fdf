//! deadscan - heuristic dead code detection for Android modules (Kotlin/Java)
//!
//! This library finds declarations that are never referenced anywhere else
//! in a module's source corpus, using lexical pattern matching rather than
//! semantic analysis.
//!
//! # Architecture
//!
//! The pipeline runs strictly forward, one phase at a time:
//! 1. **Corpus Loading** - Walk the module's source roots, read every .kt
//!    and .java file, build the concatenated corpus blob
//! 2. **Declaration Extraction** - Pattern-match type and function
//!    declarations, filtered through the exclusion heuristics
//! 3. **Reference Counting** - Count whole-word occurrences of each name
//!    across the blob, discounting the declaration site
//! 4. **Classification** - Keep the declarations with zero references
//! 5. **Reporting** - Console output, plus an optional JSON report
//!
//! The analysis is intentionally shallow: no AST, no scope resolution, no
//! import tracking. It trades soundness for speed and simplicity, and the
//! exclusion heuristics exist to keep the worst false positives quiet.

pub mod classify;
pub mod config;
pub mod counting;
pub mod discovery;
pub mod extract;
pub mod report;

pub use classify::{Classifier, DeadCodeEntry};
pub use config::ExclusionContext;
pub use counting::ReferenceCounter;
pub use discovery::{Corpus, CorpusLoader, DiscoveryError, FileType, SourceFile};
pub use extract::{Declaration, DeclarationKind, DeclarationMap, Extractor};
pub use report::{ConsoleReporter, JsonReporter};
