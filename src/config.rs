//! Configuration management for the Bookcode server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::barcode::ExtractorOptions;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

pub const OPENBD_BASE_URL: &str = "https://api.openbd.jp/v1";
pub const GOOGLE_BOOKS_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const NDL_BASE_URL: &str = "https://ndlsearch.ndl.go.jp";
pub const OPEN_LIBRARY_BASE_URL: &str = "https://openlibrary.org";

/// Settings for a single bibliographic provider.
///
/// Every field may be omitted; a missing `base_url` means the provider's
/// public endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Per-request timeout applied to every provider call
    pub timeout_secs: u64,
    pub user_agent: String,
    pub openbd: ProviderConfig,
    pub google_books: ProviderConfig,
    pub ndl: ProviderConfig,
    pub open_library: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub extractor: ExtractorOptions,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. BOOKCODE_SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("BOOKCODE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Google Books key from GOOGLE_BOOKS_API_KEY if present
            .set_override_option(
                "providers.google_books.api_key",
                env::var("GOOGLE_BOOKS_API_KEY").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            extractor: ExtractorOptions::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            api_key: None,
        }
    }
}

impl ProviderConfig {
    /// Configured endpoint, or `default` when none is set
    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().unwrap_or(default)
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: format!("bookcode-server/{}", env!("CARGO_PKG_VERSION")),
            openbd: ProviderConfig::default(),
            google_books: ProviderConfig::default(),
            ndl: ProviderConfig::default(),
            open_library: ProviderConfig::default(),
        }
    }
}
