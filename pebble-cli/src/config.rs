//! CLI configuration
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `pebble.toml` in the project root
//! 3. Environment variables (`PEBBLE_` prefix, `__` for nesting)
//!
//! Command-line flags are applied on top by the command that reads them.
//!
//! ```toml
//! # pebble.toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! reload = true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::project::{CONFIG_FILE, DEFAULT_HOST, DEFAULT_PORT};

/// Development server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Restart the server when watched directories change
    pub reload: bool,

    /// External server program the launcher hands off to
    pub runner: String,

    /// Directories watched when `reload` is enabled
    pub watch: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            reload: false,
            runner: "plackup".to_string(),
            watch: vec!["lib".to_string(), "templates".to_string()],
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PebbleConfig {
    /// `[server]` table
    pub server: ServerConfig,
}

impl PebbleConfig {
    /// Load configuration for the project rooted at `project_root`
    ///
    /// A missing `pebble.toml` is not an error; defaults and environment
    /// variables still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if `pebble.toml` is not valid TOML or a value has
    /// the wrong type.
    pub fn load_from(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("PEBBLE_").split("__").lowercase(true))
            .extract()
            .with_context(|| format!("Failed to load configuration: {}", config_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_config_file() {
        Jail::expect_with(|jail| {
            let config = PebbleConfig::load_from(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.server, ServerConfig::default());
            assert_eq!(config.server.port, 5678);
            assert_eq!(config.server.host, "0.0.0.0");
            assert!(!config.server.reload);
            Ok(())
        });
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pebble.toml",
                r#"
                [server]
                port = 8080
                reload = true
                "#,
            )?;

            let config = PebbleConfig::load_from(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 8080);
            assert!(config.server.reload);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.runner, "plackup");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("pebble.toml", "[server]\nport = 8080\n")?;
            jail.set_env("PEBBLE_SERVER__PORT", 9000);
            jail.set_env("PEBBLE_SERVER__HOST", "127.0.0.1");

            let config = PebbleConfig::load_from(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("pebble.toml", "[server]\nport = \"not-a-port\"\n")?;

            assert!(PebbleConfig::load_from(jail.directory()).is_err());
            Ok(())
        });
    }
}
