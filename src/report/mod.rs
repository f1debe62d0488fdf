//! Report emission.
//!
//! The console reporter is always active; the JSON reporter runs only when
//! an output path was requested. A JSON write failure is a warning, never a
//! run failure.

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use std::path::{Path, PathBuf};

/// Path of a declaring file, relative to the module root's parent.
///
/// Falls back to the full path when stripping fails (e.g. the file was
/// handed in from outside the module tree).
pub fn display_path(file: &Path, module_root: &Path) -> PathBuf {
    let base = module_root.parent().unwrap_or(module_root);
    file.strip_prefix(base).unwrap_or(file).to_path_buf()
}
