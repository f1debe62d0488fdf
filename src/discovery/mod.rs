//! Corpus loading.
//!
//! Walks the conventional source subdirectories of an Android module
//! (`src/main/kotlin` and `src/main/java`), selects Kotlin and Java files,
//! and reads them fully. The loader also produces the concatenated corpus
//! blob that reference counting runs against. Files are visited in a
//! deterministic order: fixed subroot order, file-name-sorted descent.

// Language tags travel with the files for library consumers; the binary
// itself never reads them.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Conventional source subdirectories expected under the module root.
pub const SOURCE_ROOTS: [&str; 2] = ["src/main/kotlin", "src/main/java"];

/// Errors raised while locating and reading the corpus. All of them abort
/// the run; there is no partial-corpus mode.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("directory '{0}' not found or is not a directory")]
    InvalidRoot(PathBuf),
    #[error("could not find 'src/main/kotlin' or 'src/main/java' inside '{0}'")]
    NoSourceFound(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type of source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Kotlin,
    Java,
}

impl FileType {
    /// Determine file type from path extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "kt" => Some(FileType::Kotlin),
            "java" => Some(FileType::Java),
            _ => None,
        }
    }
}

/// A discovered source file with its full contents.
///
/// Immutable once loaded; nothing downstream mutates file text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file, rooted at the module directory argument.
    pub path: PathBuf,

    /// Detected language of the file.
    pub file_type: FileType,

    /// Full text of the file.
    pub contents: String,
}

/// The loaded corpus: all selected source files plus the newline-joined
/// blob of their contents. The blob exists only for occurrence counting and
/// is rebuilt on every run.
#[derive(Debug)]
pub struct Corpus {
    pub files: Vec<SourceFile>,
    pub blob: String,
}

/// Loads the source corpus for a module root.
pub struct CorpusLoader;

impl CorpusLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load every Kotlin/Java file under the module's source roots.
    ///
    /// Fails with [`DiscoveryError::InvalidRoot`] when the root is missing or
    /// not a directory, [`DiscoveryError::NoSourceFound`] when neither
    /// conventional source subdirectory exists (or they contain no source
    /// files), and [`DiscoveryError::Io`] when any file read fails.
    pub fn load(&self, module_root: &Path) -> Result<Corpus, DiscoveryError> {
        if !module_root.is_dir() {
            return Err(DiscoveryError::InvalidRoot(module_root.to_path_buf()));
        }

        let source_dirs: Vec<PathBuf> = SOURCE_ROOTS
            .iter()
            .map(|sub| module_root.join(sub))
            .filter(|dir| dir.is_dir())
            .collect();

        if source_dirs.is_empty() {
            return Err(DiscoveryError::NoSourceFound(module_root.to_path_buf()));
        }

        let mut files = Vec::new();
        for dir in &source_dirs {
            self.scan_directory(dir, &mut files)?;
        }

        if files.is_empty() {
            return Err(DiscoveryError::NoSourceFound(module_root.to_path_buf()));
        }

        debug!("Loaded {} source files", files.len());

        let blob = files
            .iter()
            .map(|f| f.contents.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Corpus { files, blob })
    }

    /// Read every selected file under one source directory, in sorted walk
    /// order.
    fn scan_directory(
        &self,
        dir: &Path,
        files: &mut Vec<SourceFile>,
    ) -> Result<(), DiscoveryError> {
        let walker = WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                match e.into_io_error() {
                    Some(source) => DiscoveryError::Io { path, source },
                    None => DiscoveryError::InvalidRoot(dir.to_path_buf()),
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(file_type) = FileType::from_path(path) else {
                continue;
            };

            let contents = std::fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            files.push(SourceFile {
                path: path.to_path_buf(),
                file_type,
                contents,
            });
        }

        Ok(())
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}
