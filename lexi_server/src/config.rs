use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use lexi_core::TtlCacheConfig;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl_seconds: u64,
    pub long_lived_ttl_seconds: u64,
    pub capacity: usize,
    pub sweep_interval_seconds: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FetchConfig {
    pub dictionary_base_url: String,
    pub inflection_base_url: String,
    pub timeout_seconds: u64,
    pub retry_count: u32,
    pub initial_retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
    pub user_agent: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DataConfig {
    pub vocabulary_path: PathBuf,
    pub grammar_path: PathBuf,
    pub progress_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_seconds: 30 * 60,
            long_lived_ttl_seconds: 60 * 60,
            capacity: 1000,
            sweep_interval_seconds: 60 * 60,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            dictionary_base_url: "https://dictionary.cambridge.org".to_string(),
            inflection_base_url: "https://en.wiktionary.org/api/rest_v1/page/definition"
                .to_string(),
            timeout_seconds: 10,
            retry_count: 3,
            initial_retry_delay_ms: 500,
            max_retry_delay_ms: 8000,
            user_agent: concat!("lexi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("data/vocabulary.json"),
            grammar_path: PathBuf::from("data/grammar.json"),
            progress_path: PathBuf::from("data/progress.json"),
        }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.port = port;
        }
    }
}

impl CacheConfig {
    pub fn to_cache_config(&self) -> TtlCacheConfig {
        TtlCacheConfig {
            default_ttl: Duration::from_secs(self.default_ttl_seconds),
            long_lived_ttl: Duration::from_secs(self.long_lived_ttl_seconds),
            capacity: self.capacity,
            sweep_interval: Duration::from_secs(self.sweep_interval_seconds),
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        // Check for XDG_CONFIG_HOME override first (Linux/macOS)
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lexi/config.toml");
        }

        #[cfg(target_os = "linux")]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config/lexi/config.toml")
        }

        #[cfg(target_os = "macos")]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Library/Application Support/lexi/config.toml")
        }

        #[cfg(target_os = "windows")]
        {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lexi\\config.toml")
        }
    }

    /// Load configuration with layered priority: CLI > ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("LEXI_").split("__"));

        figment.extract().context("Failed to load configuration")
    }
}
