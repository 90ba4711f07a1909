//! Source discovery shared by the style checks

use std::fs;
use std::path::{Path, PathBuf};

/// A production source file with its test module cut off.
pub struct SourceFile {
    pub path: PathBuf,
    pub production: String,
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".."))
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Every `src/**/*.rs` of the shipped crates (`fafsa-*` except the tests).
pub fn production_sources() -> Vec<SourceFile> {
    let root = workspace_root();
    let mut crate_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .expect("workspace root is readable")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .is_some_and(|name| name.starts_with("fafsa-") && name != "fafsa-tests")
        })
        .collect();
    crate_dirs.sort();

    let mut files = Vec::new();
    for dir in crate_dirs {
        collect_rust_files(&dir.join("src"), &mut files);
    }
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path).expect("source file is readable");
            let production = match content.find("#[cfg(test)]") {
                Some(index) => content[..index].to_string(),
                None => content,
            };
            SourceFile { path, production }
        })
        .collect()
}
