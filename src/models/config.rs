use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote image fetching
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Limits applied to the analysis pipeline
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen address (overridden by the `BIND_ADDR` environment variable)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest image body accepted from a remote URL
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_user_agent() -> String {
    concat!("tonecast/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_bytes: default_max_bytes(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Images wider or taller than this are rejected at decode time
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_dimension() -> u32 {
    8192
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing path, unreadable file, or parse error logs a warning and
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        bind_addr = %config.server.bind_addr,
                        fetch_timeout_secs = config.fetch.timeout_secs,
                        max_dimension = config.analysis.max_dimension,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load from `CONFIG_FILE` and apply the `BIND_ADDR` override.
    pub fn from_env() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok();
        let mut config = Self::load(config_file.as_deref().map(Path::new));
        if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
            config.server.bind_addr = bind_addr;
        }
        config
    }
}
