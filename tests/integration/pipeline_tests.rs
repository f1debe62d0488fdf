//! End-to-end engine tests.
//!
//! These tests drive the full Loader -> Extractor -> Counter -> Classifier
//! pipeline over throwaway module trees and assert on the resulting dead
//! code set.

use deadscan::{
    Classifier, CorpusLoader, DiscoveryError, ExclusionContext, Extractor, ReferenceCounter,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write one file under the module root, creating parent directories.
fn write_file(module_root: &Path, rel: &str, contents: &str) {
    let path = module_root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Run the whole pipeline and return (name, declaring file) pairs in report
/// order.
fn scan(module_root: &Path) -> Vec<(String, PathBuf)> {
    let exclusions = ExclusionContext::default();
    let corpus = CorpusLoader::new().load(module_root).unwrap();
    let declarations = Extractor::new(&exclusions).extract(&corpus.files);
    let classifier = Classifier::new(ReferenceCounter::new(&corpus.blob));
    classifier
        .classify(&declarations)
        .unwrap()
        .into_iter()
        .map(|entry| (entry.declaration.name, entry.declaration.file))
        .collect()
}

fn dead_names(module_root: &Path) -> Vec<String> {
    scan(module_root).into_iter().map(|(name, _)| name).collect()
}

// ============================================================================
// Core classification
// ============================================================================

#[test]
fn test_referenced_helper_and_lifecycle_main_are_not_dead() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "src/main/kotlin/A.kt", "fun helper() { }\n");
    write_file(
        temp.path(),
        "src/main/kotlin/B.kt",
        "fun main() { helper() }\n",
    );

    assert!(dead_names(temp.path()).is_empty());
}

#[test]
fn test_unreferenced_function_is_dead() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Util.kt",
        "fun used() { }\nfun orphan() { }\nfun caller() { used() }\n",
    );
    write_file(
        temp.path(),
        "src/main/kotlin/Main.kt",
        "fun main() { caller() }\n",
    );

    assert_eq!(dead_names(temp.path()), vec!["orphan"]);
}

#[test]
fn test_unreferenced_class_is_dead() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Models.kt",
        "class UsedModel\nclass OrphanModel\n",
    );
    write_file(
        temp.path(),
        "src/main/kotlin/Main.kt",
        "fun main() { val m = UsedModel() }\n",
    );

    assert_eq!(dead_names(temp.path()), vec!["OrphanModel"]);
}

#[test]
fn test_java_files_participate_in_the_corpus() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Helper.kt",
        "fun bridge() { }\n",
    );
    write_file(
        temp.path(),
        "src/main/java/Caller.java",
        "class Caller { void run() { bridge(); } }\n",
    );

    // `bridge` is referenced from the Java side; `Caller` is not referenced
    // anywhere.
    assert_eq!(dead_names(temp.path()), vec!["Caller"]);
}

// ============================================================================
// Exclusion heuristics
// ============================================================================

#[test]
fn test_lifecycle_names_never_reported_even_when_unreferenced() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Screen.kt",
        "fun onCreate() { }\nfun onDestroy() { }\nfun doWork() { }\n",
    );

    assert!(dead_names(temp.path()).is_empty());
}

#[test]
fn test_annotated_declaration_never_reported() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Di.kt",
        "@Inject\nclass OrphanRepository {\n}\n",
    );

    assert!(dead_names(temp.path()).is_empty());
}

#[test]
fn test_infrastructure_file_is_fully_suppressed() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Widget.kt",
        "fun unusedThing() { }\n",
    );

    assert!(dead_names(temp.path()).is_empty());
}

#[test]
fn test_interface_members_not_reported_but_concrete_file_functions_are() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Contract.kt",
        "interface Contract {\n    fun execute(): Int {\n}\n}\n",
    );
    write_file(
        temp.path(),
        "src/main/kotlin/Impl.kt",
        "class Impl : Contract {\n    fun stray() {\n    }\n}\n",
    );
    write_file(
        temp.path(),
        "src/main/kotlin/Main.kt",
        "fun main() { val c: Contract = Impl() }\n",
    );

    // `execute` lives in an interface file and is skipped; `stray` is a
    // concrete unreferenced function.
    assert_eq!(dead_names(temp.path()), vec!["stray"]);
}

// ============================================================================
// Collision policy
// ============================================================================

#[test]
fn test_duplicate_name_reports_last_file_in_walk_order() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Aaa.kt",
        "fun duplicated() { }\n",
    );
    write_file(
        temp.path(),
        "src/main/kotlin/Zzz.kt",
        "fun duplicated() { }\n",
    );

    let results = scan(temp.path());
    assert_eq!(results.len(), 1);
    let (name, file) = &results[0];
    assert_eq!(name, "duplicated");
    // Walk order is file-name-sorted, so Zzz.kt is processed last and wins.
    assert!(
        file.ends_with("src/main/kotlin/Zzz.kt"),
        "expected Zzz.kt, got {}",
        file.display()
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_two_runs_yield_identical_results() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Mix.kt",
        "class Orphan\nfun lonely() { }\nfun used() { }\nfun main() { used() }\n",
    );

    let first = scan(temp.path());
    let second = scan(temp.path());
    assert_eq!(first, second);
}

// ============================================================================
// Loader failures
// ============================================================================

#[test]
fn test_missing_root_is_invalid() {
    let err = CorpusLoader::new()
        .load(Path::new("/definitely/not/here"))
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidRoot(_)));
}

#[test]
fn test_root_without_source_dirs_aborts() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "docs/readme.txt", "not source");

    let err = CorpusLoader::new().load(temp.path()).unwrap_err();
    assert!(matches!(err, DiscoveryError::NoSourceFound(_)));
}

// ============================================================================
// Custom exclusion context
// ============================================================================

#[test]
fn test_config_file_overrides_lifecycle_set() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "src/main/kotlin/Hooks.kt",
        "fun onCustomEvent() { }\nfun onCreate() { }\n",
    );
    write_file(
        temp.path(),
        ".deadscan.toml",
        "lifecycle_names = [\"onCustomEvent\"]\n",
    );

    let exclusions = ExclusionContext::from_default_locations(temp.path()).unwrap();
    let corpus = CorpusLoader::new().load(temp.path()).unwrap();
    let declarations = Extractor::new(&exclusions).extract(&corpus.files);
    let classifier = Classifier::new(ReferenceCounter::new(&corpus.blob));
    let dead: Vec<_> = classifier
        .classify(&declarations)
        .unwrap()
        .into_iter()
        .map(|entry| entry.declaration.name)
        .collect();

    // The custom set replaces the built-in one entirely: onCreate is now a
    // plain unreferenced declaration.
    assert_eq!(dead, vec!["onCreate"]);
}
