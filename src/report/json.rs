use crate::classify::DeadCodeEntry;
use crate::extract::DeclarationKind;
use crate::report::display_path;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output.
///
/// Records are emitted in classifier order; the report embeds no timestamps
/// so identical runs produce identical bytes.
pub struct JsonReporter {
    output_path: PathBuf,
    module_root: PathBuf,
}

impl JsonReporter {
    pub fn new(output_path: PathBuf, module_root: PathBuf) -> Self {
        Self {
            output_path,
            module_root,
        }
    }

    pub fn report(&self, dead_code: &[DeadCodeEntry]) -> Result<()> {
        let report = JsonReport::from_entries(dead_code, &self.module_root);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        std::fs::write(&self.output_path, json).into_diagnostic()?;
        println!("Report written to: {}", self.output_path.display());

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total: usize,
    declarations: Vec<JsonEntry>,
}

#[derive(Serialize)]
struct JsonEntry {
    name: String,
    kind: DeclarationKind,
    file: String,
}

impl JsonReport {
    fn from_entries(dead_code: &[DeadCodeEntry], module_root: &std::path::Path) -> Self {
        let declarations = dead_code
            .iter()
            .map(|entry| JsonEntry {
                name: entry.declaration.name.clone(),
                kind: entry.declaration.kind,
                file: display_path(&entry.declaration.file, module_root)
                    .to_string_lossy()
                    .to_string(),
            })
            .collect();

        Self {
            version: "1.0",
            total: dead_code.len(),
            declarations,
        }
    }
}
