//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use financeiro_core::{Config, LocalStore};
use financeiro_server::ServerConfig;

pub async fn cmd_serve(
    config: &Config,
    store: &LocalStore,
    host: Option<&str>,
    port: Option<u16>,
    static_dir: Option<&Path>,
) -> Result<()> {
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);
    let taxonomy = store.load_taxonomy()?;

    println!("🚀 Starting Financeiro web server...");
    println!("   Data: {}", store.dir().display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if config.server.allowed_origins.is_empty() {
        println!("   CORS: any origin");
    } else {
        println!("   CORS: {}", config.server.allowed_origins.join(", "));
    }

    let server_config = ServerConfig {
        allowed_origins: config.server.allowed_origins.clone(),
    };

    let static_dir = match static_dir {
        Some(dir) => Some(
            dir.to_str()
                .context("Static directory path is not valid UTF-8")?,
        ),
        None => None,
    };

    financeiro_server::serve_with_taxonomy(taxonomy, host, port, static_dir, server_config).await
}
