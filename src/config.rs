// src/config.rs
use serde::Deserialize;
use std::{env, fs, path::Path};

fn default_port() -> u16 {
    5000
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_history_capacity() -> usize {
    2000
}

/// Server settings, loaded from an optional `server.toml` with environment
/// overrides (`PORT`, `STATIC_DIR`). `.env` is loaded by the binary before
/// this runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served at `/` for the form UI.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Bound on the in-memory assessment log.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl ServerConfig {
    /// Load `server.toml` if present, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("server.toml")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut cfg = if path.as_ref().exists() {
            let data = fs::read_to_string(&path)?;
            toml::from_str::<ServerConfig>(&data)?
        } else {
            ServerConfig::default()
        };

        if let Ok(port) = env::var("PORT") {
            cfg.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number, got '{port}'"))?;
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            if !dir.trim().is_empty() {
                cfg.static_dir = dir;
            }
        }

        // Sanitize: a zero capacity would make the debug endpoints useless.
        if cfg.history_capacity == 0 {
            cfg.history_capacity = default_history_capacity();
        }

        Ok(cfg)
    }
}
