//! Pattern matching seam of the extractor.
//!
//! The default matcher is purely lexical: regular expressions over raw file
//! text, no syntax tree. The trait exists so a real parser could be swapped
//! in later without touching the counting or classification contracts.

use crate::extract::DeclarationKind;
use regex::Regex;

/// A single pattern hit inside one file, before exclusion filtering.
#[derive(Debug, Clone)]
pub struct RawMatch {
    /// Captured declaration name.
    pub name: String,

    /// Which pattern family produced the hit.
    pub kind: DeclarationKind,

    /// Byte range of the full match in the file text.
    pub start: usize,
    pub end: usize,
}

/// Finds candidate declarations in raw source text.
pub trait DeclarationMatcher {
    /// All pattern hits in a file. Hits from different pattern families may
    /// overlap; each is evaluated independently downstream.
    fn find_declarations(&self, contents: &str) -> Vec<RawMatch>;

    /// Whether the file declares an interface or abstract type anywhere.
    /// Function members of such files are assumed implemented elsewhere.
    fn is_member_container(&self, contents: &str) -> bool;
}

/// Regex-based matcher for Kotlin/Java declaration syntax.
pub struct LexicalMatcher {
    type_pattern: Regex,
    function_pattern: Regex,
    container_pattern: Regex,
}

impl LexicalMatcher {
    pub fn new() -> Self {
        Self {
            type_pattern: Regex::new(r"\b(?:class|interface|object)\s+(\w+)").unwrap(),
            function_pattern: Regex::new(
                r"(?i)\b(?:fun|private fun|public fun|internal fun|protected fun)\s+([\w<>]+)\s*\(.*?\)\s*[:\{]",
            )
            .unwrap(),
            container_pattern: Regex::new(r"\b(?:interface|abstract class)\b").unwrap(),
        }
    }
}

impl DeclarationMatcher for LexicalMatcher {
    fn find_declarations(&self, contents: &str) -> Vec<RawMatch> {
        let mut matches = Vec::new();

        for cap in self.type_pattern.captures_iter(contents) {
            let whole = cap.get(0).unwrap();
            let name = cap.get(1).unwrap();
            matches.push(RawMatch {
                name: name.as_str().to_string(),
                kind: DeclarationKind::Type,
                start: whole.start(),
                end: whole.end(),
            });
        }

        for cap in self.function_pattern.captures_iter(contents) {
            let whole = cap.get(0).unwrap();
            let name = cap.get(1).unwrap();
            matches.push(RawMatch {
                name: name.as_str().to_string(),
                kind: DeclarationKind::Function,
                start: whole.start(),
                end: whole.end(),
            });
        }

        matches
    }

    fn is_member_container(&self, contents: &str) -> bool {
        self.container_pattern.is_match(contents)
    }
}

impl Default for LexicalMatcher {
    fn default() -> Self {
        Self::new()
    }
}
