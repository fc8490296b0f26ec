//! Layered configuration
//!
//! Resolution order, later wins:
//! 1. Embedded defaults (`config/financeiro.toml`)
//! 2. Override file: explicit path, `FINANCEIRO_CONFIG`, or
//!    `~/.local/share/financeiro/config/financeiro.toml`
//! 3. Environment: `FINANCEIRO_HOST`, `FINANCEIRO_PORT`, `FINANCEIRO_DATA_DIR`
//!
//! Command-line flags are applied on top by the binaries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../config/financeiro.toml");

pub const ENV_CONFIG: &str = "FINANCEIRO_CONFIG";
pub const ENV_HOST: &str = "FINANCEIRO_HOST";
pub const ENV_PORT: &str = "FINANCEIRO_PORT";
pub const ENV_DATA_DIR: &str = "FINANCEIRO_DATA_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means any
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageSettings {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

impl Config {
    /// Load embedded defaults, the override file and the environment
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::parse(DEFAULT_CONFIG)?;

        let explicit = override_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(ENV_CONFIG).map(PathBuf::from));

        match explicit {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read config {}: {}", path.display(), e))
                })?;
                config.merge(&content)?;
                debug!("Loaded config from {}", path.display());
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    let content = fs::read_to_string(&path).map_err(|e| {
                        Error::Config(format!("Failed to read config {}: {}", path.display(), e))
                    })?;
                    config.merge(&content)?;
                    debug!("Loaded config override from {}", path.display());
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a complete config document on top of the built-in defaults
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(content)?;
        Ok(config)
    }

    /// Overlay the keys present in `content`
    fn merge(&mut self, content: &str) -> Result<()> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        if let Some(server) = raw.server {
            if let Some(host) = server.host {
                self.server.host = host;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(origins) = server.allowed_origins {
                self.server.allowed_origins = origins;
            }
        }

        if let Some(storage) = raw.storage {
            if let Some(dir) = storage.data_dir {
                self.storage.data_dir = Some(dir);
            }
        }

        Ok(())
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid {}: {}", ENV_PORT, port),
            }
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Data directory: configured, else the platform default
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(default_data_dir)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("financeiro").join("config").join("financeiro.toml"))
}

/// Platform data directory, or `./financeiro-data` when there is none
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("financeiro"))
        .unwrap_or_else(|| PathBuf::from("financeiro-data"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    server: Option<RawServer>,
    storage: Option<RawStorage>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    data_dir: Option<PathBuf>,
}
