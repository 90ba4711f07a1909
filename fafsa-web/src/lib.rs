//! FAFSA Guide Web - page shells, server and static export
//!
//! Pages are composed from `fafsa-ui` components. The same render
//! functions back the axum server and the static export, so both outputs
//! carry identical markup.

pub mod api;
pub mod export;
pub mod pages;
pub mod server;

use std::path::PathBuf;

use fafsa_core::FafsaError;

// Re-export main types
pub use export::{ExportReport, export_site};
pub use pages::{Page, PageContext};
pub use server::{AppState, build_router, run_server};

/// Errors raised while serving or exporting the site.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Export to {path} failed: {reason}")]
    Export { path: PathBuf, reason: String },
}

impl From<WebError> for FafsaError {
    fn from(error: WebError) -> Self {
        match error {
            WebError::Io(e) => FafsaError::Io(e),
            other => FafsaError::from_web_error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_errors_map_into_core_errors() {
        let bind = WebError::Bind {
            address: "127.0.0.1:3000".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        let error = FafsaError::from(bind);
        assert!(matches!(error, FafsaError::Web { .. }));
        assert!(error.user_message().contains("127.0.0.1:3000"));

        let io = WebError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(FafsaError::from(io), FafsaError::Io(_)));
    }
}
