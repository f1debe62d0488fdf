//! Declaration extraction.
//!
//! Applies the pattern families from [`matcher`] to each source file and
//! funnels every hit through the exclusion pipeline, in order:
//!
//! 1. Infrastructure-file suppression (whole file skipped)
//! 2. Reserved-name suppression (lifecycle names, preview helpers)
//! 3. Container-kind suppression (function members of interface/abstract files)
//! 4. Annotation-proximity suppression (fixed-radius textual window)
//!
//! Surviving matches accumulate into a [`DeclarationMap`] keyed by name,
//! with last-write-wins collision semantics across files.

// Extraction types - some accessors reserved for library consumers
#![allow(dead_code)]

pub mod matcher;

pub use matcher::{DeclarationMatcher, LexicalMatcher, RawMatch};

use crate::config::ExclusionContext;
use crate::discovery::SourceFile;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Kind of declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Class, interface, or object declaration.
    Type,
    /// Function declaration.
    Function,
}

impl DeclarationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeclarationKind::Type => "type",
            DeclarationKind::Function => "function",
        }
    }
}

/// A named declaration site that survived exclusion filtering.
///
/// Identity is by `name` alone; see [`DeclarationMap`] for the collision
/// policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple name of the declaration (e.g. "MainViewModel").
    pub name: String,

    /// File that declares it.
    pub file: PathBuf,

    /// Kind of declaration.
    pub kind: DeclarationKind,
}

/// Declaration accumulator keyed by name.
///
/// Keeps stable insertion order for reporting while letting a later file's
/// declaration of the same name overwrite an earlier one (last write wins).
/// An overwrite keeps the name's original position in the iteration order.
#[derive(Debug, Default)]
pub struct DeclarationMap {
    order: Vec<String>,
    by_name: HashMap<String, Declaration>,
}

impl DeclarationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, overwriting any earlier one with the same name.
    pub fn insert(&mut self, declaration: Declaration) {
        if !self.by_name.contains_key(&declaration.name) {
            self.order.push(declaration.name.clone());
        }
        self.by_name.insert(declaration.name.clone(), declaration);
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.order.iter().map(|name| &self.by_name[name])
    }
}

/// Extracts declarations from source files using a pluggable matcher.
pub struct Extractor<'a> {
    matcher: Box<dyn DeclarationMatcher>,
    exclusions: &'a ExclusionContext,
}

impl<'a> Extractor<'a> {
    /// Extractor with the default lexical matcher.
    pub fn new(exclusions: &'a ExclusionContext) -> Self {
        Self::with_matcher(Box::new(LexicalMatcher::new()), exclusions)
    }

    pub fn with_matcher(
        matcher: Box<dyn DeclarationMatcher>,
        exclusions: &'a ExclusionContext,
    ) -> Self {
        Self { matcher, exclusions }
    }

    /// Extract declarations from every file, in corpus order.
    pub fn extract(&self, files: &[SourceFile]) -> DeclarationMap {
        let mut declarations = DeclarationMap::new();
        for file in files {
            self.scan_file(file, &mut declarations);
        }
        debug!("Extracted {} declarations", declarations.len());
        declarations
    }

    fn scan_file(&self, file: &SourceFile, declarations: &mut DeclarationMap) {
        let file_name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if self.exclusions.is_infrastructure_file(&file_name) {
            trace!("Skipping infrastructure file: {}", file.path.display());
            return;
        }

        let is_container = self.matcher.is_member_container(&file.contents);

        for hit in self.matcher.find_declarations(&file.contents) {
            if self.exclusions.is_lifecycle(&hit.name) || self.exclusions.is_preview(&hit.name) {
                continue;
            }

            if is_container && hit.kind == DeclarationKind::Function {
                continue;
            }

            if self.annotation_nearby(&file.contents, &hit) {
                continue;
            }

            declarations.insert(Declaration {
                name: hit.name,
                file: file.path.clone(),
                kind: hit.kind,
            });
        }
    }

    /// Textual proximity check: does any annotation marker appear within the
    /// fixed-radius window around the match? This is not a structural check
    /// of annotation attachment and can both over- and under-suppress.
    fn annotation_nearby(&self, contents: &str, hit: &RawMatch) -> bool {
        let radius = self.exclusions.context_window;
        let start = floor_char_boundary(contents, hit.start.saturating_sub(radius));
        let end = ceil_char_boundary(contents, (hit.end + radius).min(contents.len()));
        self.exclusions.has_annotation_marker(&contents[start..end])
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
