//! Static export output on disk

use std::fs;
use std::path::Path;

use fafsa_core::FafsaConfig;
use fafsa_web::export_site;

fn read(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative)).unwrap()
}

#[test]
fn test_github_pages_export_layout() {
    let dir = tempfile::tempdir().unwrap();
    let report = export_site(&FafsaConfig::for_static_export(), dir.path()).unwrap();

    for file in [
        "index.html",
        "features/index.html",
        "apply/index.html",
        "documents/index.html",
        "404.html",
        "favicon.svg",
        ".nojekyll",
    ] {
        assert!(dir.path().join(file).is_file(), "missing {file}");
    }
    assert_eq!(report.files.len(), 7);
    assert_eq!(report.page_count(), 5);
    assert!(read(dir.path(), ".nojekyll").is_empty());
}

#[test]
fn test_exported_links_stay_under_base_path() {
    let dir = tempfile::tempdir().unwrap();
    export_site(&FafsaConfig::for_static_export(), dir.path()).unwrap();

    let apply = read(dir.path(), "apply/index.html");
    assert!(apply.contains(r#"href="/fafsa-guide/documents/""#));
    assert!(apply.contains(r#"action="/fafsa-guide/apply/""#));
    assert!(apply.contains("This is a static preview"));
    assert!(apply.contains(r#"<meta name="build-mode" content="export">"#));
    assert!(!apply.contains(r#"href="/documents""#));

    let missing = read(dir.path(), "404.html");
    assert!(missing.contains("Page not found"));
    assert!(missing.contains(r#"href="/fafsa-guide/""#));
}

#[test]
fn test_standalone_export_uses_flat_files() {
    let dir = tempfile::tempdir().unwrap();
    export_site(&FafsaConfig::for_testing(), dir.path()).unwrap();

    assert!(dir.path().join("features.html").is_file());
    assert!(dir.path().join("apply.html").is_file());
    assert!(!dir.path().join("apply").exists());

    let home = read(dir.path(), "index.html");
    assert!(home.contains(r#"href="/apply""#));
    assert!(home.contains(r#"href="/favicon.svg""#));
    assert!(!home.contains("This is a static preview"));
}
