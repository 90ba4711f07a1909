//! Static export for hosts without a server (GitHub Pages)
//!
//! Writes one HTML file per page. Files are laid out relative to the output
//! directory without the base path; the host serves the directory under it.

use std::fs;
use std::path::{Path, PathBuf};

use fafsa_core::FafsaConfig;
use tracing::{debug, info};

use crate::WebError;
use crate::pages::{FAVICON_FILE, FAVICON_SVG, Page, PageContext, not_found_page};

/// Marker that stops GitHub Pages from running Jekyll over the output.
pub const NOJEKYLL: &str = ".nojekyll";
pub const NOT_FOUND_FILE: &str = "404.html";

/// Files written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    /// Paths relative to `out_dir`, in write order
    pub files: Vec<PathBuf>,
}

impl ExportReport {
    /// Number of HTML documents written.
    pub fn page_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.extension().is_some_and(|ext| ext == "html"))
            .count()
    }
}

/// Output file of a route.
///
/// `/` is always `index.html`; other routes become `<route>/index.html`
/// with trailing slashes and `<route>.html` without.
pub fn page_file(route: &str, trailing_slash: bool) -> PathBuf {
    let route = route.trim_matches('/');
    if route.is_empty() {
        PathBuf::from("index.html")
    } else if trailing_slash {
        Path::new(route).join("index.html")
    } else {
        PathBuf::from(format!("{route}.html"))
    }
}

fn write_file(out_dir: &Path, relative: &Path, contents: &str) -> Result<(), WebError> {
    let path = out_dir.join(relative);
    let export_error = |e: std::io::Error| WebError::Export {
        path: path.clone(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(export_error)?;
    }
    fs::write(&path, contents).map_err(export_error)?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote export file");
    Ok(())
}

/// Renders every page of the site into `out_dir`.
///
/// # Errors
///
/// - `WebError::Export` - a directory or file cannot be written
pub fn export_site(config: &FafsaConfig, out_dir: &Path) -> Result<ExportReport, WebError> {
    let ctx = PageContext::new(config);
    let trailing_slash = config.build.trailing_slash;
    let mut files = Vec::with_capacity(Page::ALL.len() + 3);

    for page in Page::ALL {
        let relative = page_file(page.route(), trailing_slash);
        write_file(out_dir, &relative, &page.render(&ctx))?;
        files.push(relative);
    }

    let not_found = PathBuf::from(NOT_FOUND_FILE);
    write_file(out_dir, &not_found, &not_found_page(&ctx))?;
    files.push(not_found);

    let favicon = PathBuf::from(FAVICON_FILE);
    write_file(out_dir, &favicon, FAVICON_SVG)?;
    files.push(favicon);

    let marker = PathBuf::from(NOJEKYLL);
    write_file(out_dir, &marker, "")?;
    files.push(marker);

    let report = ExportReport {
        out_dir: out_dir.to_path_buf(),
        files,
    };
    info!(
        out_dir = %out_dir.display(),
        pages = report.page_count(),
        base_path = %config.build.base_path,
        "Static export complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_layout() {
        assert_eq!(page_file("/", true), PathBuf::from("index.html"));
        assert_eq!(page_file("/", false), PathBuf::from("index.html"));
        assert_eq!(page_file("/apply", true), Path::new("apply").join("index.html"));
        assert_eq!(page_file("/apply", false), PathBuf::from("apply.html"));
        assert_eq!(page_file("/documents/", false), PathBuf::from("documents.html"));
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = FafsaConfig::for_static_export();

        let report = export_site(&config, dir.path()).unwrap();

        assert_eq!(report.page_count(), Page::ALL.len() + 1);
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("features/index.html").is_file());
        assert!(dir.path().join(NOT_FOUND_FILE).is_file());
        assert!(dir.path().join(NOJEKYLL).is_file());
        assert!(dir.path().join(FAVICON_FILE).is_file());

        let home = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(home.contains(r#"href="/fafsa-guide/apply/""#));
        assert!(home.contains(r#"rel="icon" type="image/svg+xml" href="/fafsa-guide/favicon.svg""#));
    }

    #[test]
    fn test_export_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();

        let error = export_site(&FafsaConfig::for_testing(), &blocker).unwrap_err();

        assert!(matches!(error, WebError::Export { .. }));
        assert!(error.to_string().contains("out"));
    }
}
