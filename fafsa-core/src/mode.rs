//! Build mode configuration for the FAFSA guide.

use serde::Serialize;

/// How the site is delivered.
///
/// Static export writes every page to disk for a static host such as GitHub
/// Pages; standalone runs the axum server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// Server process renders pages on request
    #[default]
    Standalone,
    /// Pages are pre-rendered to files under a repository base path
    StaticExport,
}

impl BuildMode {
    /// Check if pages are exported to static files.
    pub fn is_static_export(self) -> bool {
        matches!(self, Self::StaticExport)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::StaticExport => write!(f, "export"),
        }
    }
}
