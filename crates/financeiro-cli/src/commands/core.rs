//! Shared utilities for commands
//!
//! - `load_config` - Resolve layered configuration
//! - `open_store` - Open the data directory

use std::path::Path;

use anyhow::{Context, Result};
use financeiro_core::{Config, LocalStore};
use tracing::debug;

/// Load configuration from the embedded defaults, files and environment
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

/// Open the store; `--data-dir` wins over the configured directory
pub fn open_store(config: &Config, data_dir: Option<&Path>) -> Result<LocalStore> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => config.data_dir(),
    };
    debug!("Using data directory {}", dir.display());
    LocalStore::open(&dir)
        .with_context(|| format!("Failed to open data directory {}", dir.display()))
}
