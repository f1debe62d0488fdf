use crate::classify::DeadCodeEntry;
use crate::report::display_path;
use colored::Colorize;
use std::path::PathBuf;

/// Console reporter with colored output.
pub struct ConsoleReporter {
    module_root: PathBuf,
}

impl ConsoleReporter {
    pub fn new(module_root: PathBuf) -> Self {
        Self { module_root }
    }

    pub fn report(&self, dead_code: &[DeadCodeEntry]) {
        let module_name = self
            .module_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.module_root.display().to_string());

        println!();
        println!(
            "{}",
            format!("--- DEAD CODE REPORT for {} ---", module_name).bold()
        );

        if dead_code.is_empty() {
            println!(
                "{}",
                "Congratulations! No likely dead code found in this module."
                    .green()
                    .bold()
            );
        } else {
            for entry in dead_code {
                println!(
                    "{} '{}' declared in {}",
                    "DEAD:".red().bold(),
                    entry.declaration.name.white(),
                    display_path(&entry.declaration.file, &self.module_root)
                        .display()
                        .to_string()
                        .cyan()
                );
            }
            println!("{}", "-".repeat(46).dimmed());
            println!(
                "{}",
                format!(
                    "Found {} potentially unused declarations.",
                    dead_code.len()
                )
                .yellow()
                .bold()
            );
        }

        println!();
        println!(
            "{}",
            "NOTE: this is a static analysis based on identifier matching. Review manually before deleting."
                .dimmed()
        );
    }
}
