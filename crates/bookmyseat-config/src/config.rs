use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

const CLOUD_API_URL: &str = "https://bookmyseat.dockeroncloud.com/api/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is empty")]
    EmptyUrl { name: &'static str },
    #[error("{name} '{url}' is relative but no origin is configured")]
    MissingOrigin { name: &'static str, url: String },
    #[error("{name} '{url}' must use http or https")]
    UnsupportedScheme { name: &'static str, url: String },
}

/// Built-in environment profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(format!("Invalid profile: {}. Use 'development' or 'production'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub services: ServicesConfig,
    #[serde(default)]
    pub tracing: TracingOptions,
    #[serde(default)]
    pub reviews: ReviewOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub movie_service_url: String,
    pub review_service_url: String,
    /// Scheme and host that relative service URLs (e.g. `/api/movies`) are resolved against
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOptions {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Wait before re-reading reviews after a submission, for backend read-after-write lag
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
    #[serde(default = "default_success_message_ms")]
    pub success_message_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: Option<bool>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_refresh_delay_ms() -> u64 {
    500
}

fn default_success_message_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self { enabled: default_true() }
    }
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            refresh_delay_ms: default_refresh_delay_ms(),
            success_message_ms: default_success_message_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl ReviewOptions {
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn success_message_duration(&self) -> Duration {
        Duration::from_millis(self.success_message_ms)
    }
}

impl ServicesConfig {
    pub fn movie_base_url(&self) -> Result<String, ConfigError> {
        resolve_url("movie_service_url", &self.movie_service_url, self.origin.as_deref())
    }

    pub fn review_base_url(&self) -> Result<String, ConfigError> {
        resolve_url("review_service_url", &self.review_service_url, self.origin.as_deref())
    }
}

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn resolve_url(name: &'static str, url: &str, origin: Option<&str>) -> Result<String, ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyUrl { name });
    }

    let resolved = if url.starts_with('/') {
        let origin = origin
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .ok_or_else(|| ConfigError::MissingOrigin { name, url: url.to_string() })?;
        format!("{}{}", origin.trim_end_matches('/'), url)
    } else {
        url.to_string()
    };

    if !is_http(&resolved) {
        return Err(ConfigError::UnsupportedScheme { name, url: resolved });
    }

    Ok(resolved.trim_end_matches('/').to_string())
}

impl Config {
    pub fn for_profile(profile: Profile) -> Self {
        let services = match profile {
            Profile::Development => ServicesConfig {
                movie_service_url: CLOUD_API_URL.to_string(),
                review_service_url: CLOUD_API_URL.to_string(),
                origin: None,
            },
            // Served behind a reverse proxy that forwards /api/*
            Profile::Production => ServicesConfig {
                movie_service_url: "/api/movies".to_string(),
                review_service_url: "/api/reviews".to_string(),
                origin: None,
            },
        };

        Self {
            services,
            tracing: TracingOptions::default(),
            reviews: ReviewOptions::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to the development profile
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::for_profile(Profile::Development))
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `BOOKMYSEAT_*` environment overrides on top of the file values
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("BOOKMYSEAT_MOVIE_SERVICE_URL") {
            self.services.movie_service_url = url;
        }
        if let Some(url) = non_empty("BOOKMYSEAT_REVIEW_SERVICE_URL") {
            self.services.review_service_url = url;
        }
        if let Some(origin) = non_empty("BOOKMYSEAT_ORIGIN") {
            self.services.origin = Some(origin);
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.services.movie_base_url()?;
        self.services.review_base_url()?;

        if self.reviews.page_size == 0 {
            return Err(anyhow::anyhow!("reviews.page_size must be at least 1"));
        }

        if let Some(origin) = &self.services.origin {
            if !origin.trim().is_empty() && !is_http(origin.trim()) {
                return Err(anyhow::anyhow!("services.origin must use http or https"));
            }
        }

        Ok(())
    }
}
