//! Centralized configuration for the FAFSA guide.
//!
//! Every setting comes from the environment with a sensible default, the same
//! variables the deployment tooling already exports: database credentials,
//! the GitHub Pages switch and the public API base URL.

use serde::{Serialize, Serializer};
use url::Url;

use crate::mode::BuildMode;

/// Repository name used as base path when exporting for GitHub Pages.
pub const DEFAULT_REPO_NAME: &str = "fafsa-guide";

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{variable} is not a valid port: '{value}'")]
    InvalidPort {
        variable: &'static str,
        value: String,
    },

    #[error("Invalid DATABASE_URL: {reason}")]
    InvalidDatabaseUrl { reason: String },

    #[error("Invalid NEXT_PUBLIC_API_URL '{value}': {reason}")]
    InvalidApiUrl { value: String, reason: String },
}

/// Central configuration for all FAFSA guide components.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FafsaConfig {
    pub database: DatabaseConfig,
    pub build: BuildConfig,
    pub api: ApiConfig,
    pub server: ServerConfig,
}

/// Where the database connection string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseUrlSource {
    /// `DATABASE_URL` was set
    DatabaseUrl,
    /// Assembled from the discrete `DB_*` variables
    Components,
}

/// Postgres connection settings.
///
/// Only the connection string is resolved here; nothing in the workspace
/// opens a connection.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    #[serde(serialize_with = "serialize_redacted")]
    url: String,
    pub source: DatabaseUrlSource,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://postgres@localhost:5432/fafsa".to_string(),
            source: DatabaseUrlSource::Components,
        }
    }
}

impl DatabaseConfig {
    /// Resolves the connection string.
    ///
    /// A non-empty `DATABASE_URL` wins; otherwise `DB_USER`, `DB_PASSWORD`,
    /// `DB_HOST`, `DB_PORT` and `DB_NAME` are assembled with credentials
    /// percent-encoded.
    ///
    /// # Errors
    /// - `ConfigError::InvalidDatabaseUrl` - `DATABASE_URL` is not a postgres URL
    /// - `ConfigError::InvalidPort` - `DB_PORT` is not a port number
    pub fn resolve(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = non_empty(lookup("DATABASE_URL")) {
            let parsed = Url::parse(&url).map_err(|e| ConfigError::InvalidDatabaseUrl {
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "postgres" | "postgresql") {
                return Err(ConfigError::InvalidDatabaseUrl {
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            return Ok(Self {
                url,
                source: DatabaseUrlSource::DatabaseUrl,
            });
        }

        let user = non_empty(lookup("DB_USER")).unwrap_or_else(|| "postgres".to_string());
        let password = non_empty(lookup("DB_PASSWORD"));
        let host = non_empty(lookup("DB_HOST")).unwrap_or_else(|| "localhost".to_string());
        let port = parse_port("DB_PORT", lookup("DB_PORT"), 5432)?;
        let name = non_empty(lookup("DB_NAME")).unwrap_or_else(|| "fafsa".to_string());

        let credentials = match password {
            Some(password) => format!(
                "{}:{}",
                urlencoding::encode(&user),
                urlencoding::encode(&password)
            ),
            None => urlencoding::encode(&user).into_owned(),
        };

        Ok(Self {
            url: format!("postgresql://{credentials}@{host}:{port}/{name}"),
            source: DatabaseUrlSource::Components,
        })
    }

    /// Full connection string, password included.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string with the password masked, safe for logs.
    pub fn redacted(&self) -> String {
        let Ok(mut parsed) = Url::parse(&self.url) else {
            return self.url.clone();
        };
        if parsed.password().is_none() || parsed.set_password(Some("****")).is_err() {
            return self.url.clone();
        }
        parsed.to_string()
    }
}

fn serialize_redacted<S: Serializer>(url: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let config = DatabaseConfig {
        url: url.to_string(),
        source: DatabaseUrlSource::Components,
    };
    serializer.serialize_str(&config.redacted())
}

/// Page generation and link rewriting settings.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub mode: BuildMode,
    /// Prefix of every internal route, empty or `/<repo>`
    pub base_path: String,
    /// Prefix of every static asset URL
    pub asset_prefix: String,
    /// Whether internal page links end in `/`
    pub trailing_slash: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::standalone()
    }
}

impl BuildConfig {
    /// Settings for the standalone server.
    pub fn standalone() -> Self {
        Self {
            mode: BuildMode::Standalone,
            base_path: String::new(),
            asset_prefix: String::new(),
            trailing_slash: false,
        }
    }

    /// Settings for a GitHub Pages export under `/<repo_name>`.
    ///
    /// A name made only of slashes exports to the site root.
    pub fn static_export(repo_name: &str) -> Self {
        let repo_name = repo_name.trim_matches('/');
        let base_path = if repo_name.is_empty() {
            String::new()
        } else {
            format!("/{repo_name}")
        };
        Self {
            mode: BuildMode::StaticExport,
            asset_prefix: base_path.clone(),
            base_path,
            trailing_slash: true,
        }
    }

    /// Picks the mode from `GITHUB_PAGES`.
    pub fn resolve(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let github_pages = lookup("GITHUB_PAGES")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        if github_pages {
            let repo = non_empty(lookup("FAFSA_REPO_NAME"))
                .unwrap_or_else(|| DEFAULT_REPO_NAME.to_string());
            Self::static_export(&repo)
        } else {
            Self::standalone()
        }
    }

    /// Rewrites an internal route under the base path, honoring the
    /// trailing slash policy. Query strings and fragments are preserved.
    pub fn href(&self, route: &str) -> String {
        let split_at = route.find(['?', '#']).unwrap_or(route.len());
        let (path, suffix) = route.split_at(split_at);
        let path = path.trim_end_matches('/');

        let mut href = format!("{}{}", self.base_path, path);
        if href.is_empty() || self.trailing_slash {
            href.push('/');
        }
        href.push_str(suffix);
        href
    }

    /// Prefixes a static asset path.
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.asset_prefix, path.trim_start_matches('/'))
    }
}

/// Front-end API settings.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    /// Base URL browser scripts use for API calls
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads `NEXT_PUBLIC_API_URL`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidApiUrl` - value is not an absolute http(s) URL
    pub fn resolve(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(value) = non_empty(lookup("NEXT_PUBLIC_API_URL")) else {
            return Ok(Self::default());
        };

        let parsed = Url::parse(&value).map_err(|e| ConfigError::InvalidApiUrl {
            value: value.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
                value,
            });
        }

        Ok(Self {
            base_url: value.trim_end_matches('/').to_string(),
        })
    }
}

/// Standalone server bind address.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Reads `FAFSA_HOST` and `FAFSA_PORT`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidPort` - `FAFSA_PORT` is not a port number
    pub fn resolve(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: non_empty(lookup("FAFSA_HOST")).unwrap_or(defaults.host),
            port: parse_port("FAFSA_PORT", lookup("FAFSA_PORT"), defaults.port)?,
        })
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FafsaConfig {
    /// Creates configuration from the process environment.
    ///
    /// # Errors
    /// - `ConfigError` - any variable holds a malformed value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// - `ConfigError` - any variable holds a malformed value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            database: DatabaseConfig::resolve(&lookup)?,
            build: BuildConfig::resolve(&lookup),
            api: ApiConfig::resolve(&lookup)?,
            server: ServerConfig::resolve(&lookup)?,
        };

        tracing::debug!(
            database = %config.database.redacted(),
            mode = %config.build.mode,
            base_path = %config.build.base_path,
            api = %config.api.base_url,
            "Configuration resolved"
        );

        Ok(config)
    }

    /// Creates a configuration for tests: standalone, defaults everywhere.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Creates a configuration for a GitHub Pages export of the default repo.
    pub fn for_static_export() -> Self {
        Self {
            build: BuildConfig::static_export(DEFAULT_REPO_NAME),
            ..Default::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(
    variable: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match non_empty(value) {
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { variable, value }),
        None => Ok(default),
    }
}
