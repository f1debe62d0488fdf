//! Exclusion configuration for the scanner.
//!
//! The exclusion context is a fixed bundle of reserved names, annotation
//! markers, and filename fragments used to suppress known false positives
//! (framework lifecycle hooks, DI-managed symbols, preview helpers,
//! reflection-heavy infrastructure). It is initialized once per run and never
//! mutated afterwards.

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exclusion rules applied during declaration extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionContext {
    /// Method names invoked by the framework rather than by project code.
    /// Declarations with these names are never extracted.
    pub lifecycle_names: Vec<String>,

    /// Annotation markers whose textual proximity to a match suppresses it.
    pub annotation_markers: Vec<String>,

    /// Filename fragments identifying reflection-heavy infrastructure files.
    /// A file whose name contains any fragment yields no declarations at all.
    pub infrastructure_fragments: Vec<String>,

    /// Prefix literal identifying UI-preview helper names.
    pub preview_prefix: String,

    /// Suffix literal identifying UI-preview helper names.
    pub preview_suffix: String,

    /// Radius, in characters, of the annotation-proximity window around a
    /// match. The window is clamped to the file bounds.
    pub context_window: usize,
}

impl Default for ExclusionContext {
    fn default() -> Self {
        Self {
            lifecycle_names: vec![
                "onCreate".to_string(),
                "onStart".to_string(),
                "onResume".to_string(),
                "onPause".to_string(),
                "onStop".to_string(),
                "onDestroy".to_string(),
                "onBind".to_string(),
                "onAttach".to_string(),
                "onDetach".to_string(),
                "onCleared".to_string(),
                "onViewCreated".to_string(),
                "onActivityCreated".to_string(),
                "main".to_string(),
                "onGlobalLayout".to_string(),
                "doWork".to_string(),
                "getTheme".to_string(),
                "provideGlance".to_string(),
            ],
            annotation_markers: vec![
                "@Inject".to_string(),
                "@Module".to_string(),
                "@Provides".to_string(),
                "@Binds".to_string(),
                "@JvmStatic".to_string(),
                "@JvmField".to_string(),
                "@SerializedName".to_string(),
                "@Keep".to_string(),
                "@BindingAdapter".to_string(),
                "@Before".to_string(),
                "@Test".to_string(),
                "@Composable".to_string(),
            ],
            infrastructure_fragments: vec![
                "DatabaseConverters.kt".to_string(),
                "Worker.kt".to_string(),
                "Delegate.kt".to_string(),
                "Host.kt".to_string(),
                "Widget.kt".to_string(),
            ],
            preview_prefix: "Preview".to_string(),
            preview_suffix: "Preview".to_string(),
            context_window: 50,
        }
    }
}

impl ExclusionContext {
    /// Load an exclusion context from a file (YAML or TOML).
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load an exclusion context from default locations under the
    /// module root, falling back to the built-in defaults.
    pub fn from_default_locations(module_root: &Path) -> Result<Self> {
        let default_names = [".deadscan.yml", ".deadscan.yaml", ".deadscan.toml"];

        for name in &default_names {
            let path = module_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Whether `name` is a reserved framework lifecycle name.
    pub fn is_lifecycle(&self, name: &str) -> bool {
        self.lifecycle_names.iter().any(|n| n == name)
    }

    /// Whether `name` matches the preview naming pattern (prefix or suffix).
    pub fn is_preview(&self, name: &str) -> bool {
        name.starts_with(&self.preview_prefix) || name.ends_with(&self.preview_suffix)
    }

    /// Whether a file with this name is infrastructure and should be skipped
    /// wholesale.
    pub fn is_infrastructure_file(&self, file_name: &str) -> bool {
        self.infrastructure_fragments
            .iter()
            .any(|fragment| file_name.contains(fragment.as_str()))
    }

    /// Whether any annotation marker appears inside the given context window.
    pub fn has_annotation_marker(&self, window: &str) -> bool {
        self.annotation_markers
            .iter()
            .any(|marker| window.contains(marker.as_str()))
    }
}
