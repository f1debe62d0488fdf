use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

mod classify;
mod config;
mod counting;
mod discovery;
mod extract;
mod report;

use classify::Classifier;
use config::ExclusionContext;
use counting::ReferenceCounter;
use discovery::CorpusLoader;
use extract::Extractor;
use report::{ConsoleReporter, JsonReporter};

/// deadscan - heuristic dead code detection for Android modules (Kotlin/Java)
#[derive(Parser, Debug)]
#[command(name = "deadscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the module directory to scan (e.g. app/); prompted for when omitted
    path: Option<PathBuf>,

    /// Path to a configuration file overriding the exclusion sets
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CI mode: no progress display; exit non-zero when dead code is found
    #[arg(long)]
    ci_mode: bool,

    /// Write a structured JSON report to this path in addition to the console report
    #[arg(long, value_name = "PATH")]
    json_output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("deadscan v{}", env!("CARGO_PKG_VERSION"));

    let module_root = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    let exclusions = load_exclusions(&cli, &module_root)?;

    let loader = CorpusLoader::new();
    let corpus = loader.load(&module_root).into_diagnostic()?;

    if !cli.quiet {
        println!("Scanning {} source files...", corpus.files.len());
    }

    let extractor = Extractor::new(&exclusions);
    let declarations = extractor.extract(&corpus.files);

    if !cli.quiet {
        println!(
            "Found {} potential declarations to check.",
            declarations.len()
        );
    }

    let counter = ReferenceCounter::new(&corpus.blob);
    let classifier = Classifier::new(counter);

    let dead_code = if cli.ci_mode || cli.quiet {
        classifier.classify(&declarations)?
    } else {
        let pb = ProgressBar::new(declarations.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Processing declarations [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("#>-"),
        );

        let dead_code = classifier.classify_with(&declarations, |processed, _total| {
            pb.set_position(processed as u64);
            // Fixed tick so the bar stays legible on small corpora.
            std::thread::sleep(Duration::from_millis(10));
        })?;
        pb.finish_and_clear();
        println!("Processing complete!");
        dead_code
    };

    let console = ConsoleReporter::new(module_root.clone());
    console.report(&dead_code);

    if let Some(json_path) = &cli.json_output {
        let json = JsonReporter::new(json_path.clone(), module_root.clone());
        if let Err(e) = json.report(&dead_code) {
            warn!("failed to write JSON report: {e}");
            eprintln!(
                "{}: failed to write JSON report to {}: {}",
                "Warning".yellow(),
                json_path.display(),
                e
            );
        }
    }

    if cli.ci_mode && !dead_code.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_for_path() -> Result<PathBuf> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the relative path to the module directory (e.g. app/ or ../app/)")
        .interact_text()
        .into_diagnostic()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        miette::bail!("Module path cannot be empty.");
    }

    Ok(PathBuf::from(trimmed))
}

fn load_exclusions(cli: &Cli, module_root: &Path) -> Result<ExclusionContext> {
    if let Some(config_path) = &cli.config {
        ExclusionContext::from_file(config_path)
    } else {
        ExclusionContext::from_default_locations(module_root)
    }
}
