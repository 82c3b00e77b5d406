// src/config.rs
//! Backend URL resolution and server configuration

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost/career-backend";
const DEFAULT_MAX_BODY_MB: u64 = 20;
const BACKEND_URL_VARS: [&str; 3] = ["BACKEND_URL", "API_BASE_URL", "NEXT_PUBLIC_API_URL"];

/// Resolved configuration shared by every proxy handler
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub environment: String,
    pub backend_url: String,
    pub timeout: Option<Duration>,
    pub max_body_mb: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentSection {
    pub backend_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_body_mb: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl ApiConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            environment: "local".to_string(),
            backend_url: normalize_base(&backend_url.into()),
            timeout: None,
            max_body_mb: DEFAULT_MAX_BODY_MB,
        }
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = normalize_base(backend_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_body_mb(mut self, max_body_mb: u64) -> Self {
        self.max_body_mb = max_body_mb;
        self
    }

    /// Load configuration from `config.yaml` (optional) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.yaml"))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let section = if config_path.exists() {
            Self::read_section(config_path, &environment)?
        } else {
            warn!(
                "{} not found, using environment variables only",
                config_path.display()
            );
            EnvironmentSection::default()
        };

        let backend_url = backend_url_from_env()
            .or(section.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let timeout_seconds = match std::env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?,
            ),
            Err(_) => section.timeout_seconds,
        };

        let max_body_mb = match std::env::var("MAX_BODY_MB") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("MAX_BODY_MB must be a number of megabytes")?,
            Err(_) => section.max_body_mb.unwrap_or(DEFAULT_MAX_BODY_MB),
        };

        let config = Self {
            environment,
            backend_url: normalize_base(&backend_url),
            timeout: timeout_seconds.map(Duration::from_secs),
            max_body_mb,
        };
        info!("Backend URL: {}", config.backend_url);
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("CAREER_PORTAL_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn read_section(config_path: &Path, environment: &str) -> Result<EnvironmentSection> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        parse_section(&content, environment)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Absolute upstream URL for a backend path
    pub fn get_api_url(&self, path: &str) -> String {
        join_url(&self.backend_url, path)
    }
}

fn backend_url_from_env() -> Option<String> {
    BACKEND_URL_VARS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

pub(crate) fn parse_section(content: &str, environment: &str) -> Result<EnvironmentSection> {
    let file: ConfigFile = serde_yaml::from_str(content)?;
    Ok(match environment {
        "production" => file.production,
        _ => file.local,
    })
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
