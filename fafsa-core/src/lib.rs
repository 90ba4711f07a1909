//! FAFSA Guide Core - configuration, errors and tracing
//!
//! Holds everything the UI and web crates share that is not markup:
//! environment-driven configuration, the build mode, the top-level error
//! type and the tracing subscriber setup used by the CLI.

pub mod config;
pub mod mode;
pub mod tracing_setup;

pub use config::{ApiConfig, BuildConfig, ConfigError, DatabaseConfig, FafsaConfig, ServerConfig};
pub use mode::BuildMode;

/// Errors that can bubble up from any FAFSA guide subsystem.
#[derive(Debug, thiserror::Error)]
pub enum FafsaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web error: {reason}")]
    Web { reason: String },
}

impl FafsaError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            FafsaError::Config(e) => match e {
                ConfigError::InvalidPort { variable, .. } => {
                    format!("{variable} must be a port number")
                }
                ConfigError::InvalidDatabaseUrl { .. } => {
                    "DATABASE_URL must be a postgres connection string".to_string()
                }
                ConfigError::InvalidApiUrl { .. } => {
                    "NEXT_PUBLIC_API_URL must be an absolute http(s) URL".to_string()
                }
            },
            FafsaError::Io(_) => "File system error occurred".to_string(),
            FafsaError::Web { reason } => format!("Web server error: {reason}"),
        }
    }

    /// Wraps any displayable web-layer error.
    pub fn from_web_error(error: impl std::fmt::Display) -> Self {
        FafsaError::Web {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_user_message() {
        let error = FafsaError::from(ConfigError::InvalidPort {
            variable: "DB_PORT",
            value: "abc".to_string(),
        });

        assert_eq!(error.user_message(), "DB_PORT must be a port number");
    }

    #[test]
    fn test_web_error_wraps_reason() {
        let error = FafsaError::from_web_error("address in use");

        assert_eq!(error.user_message(), "Web server error: address in use");
    }
}
