//! Layered server configuration.
//!
//! Sources, from lowest to highest priority: built-in defaults, an optional
//! user config file, and `CUBEPUZZLE_*` environment variables. Command-line
//! overrides are applied on top by the binary.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FORMAT: FileFormat = FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");

/// Prefix for environment variables, such as `CUBEPUZZLE_PORT`.
pub const ENV_PREFIX: &str = "CUBEPUZZLE";

/// Server settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Number of layers on each new cube.
    pub cube_size: u16,
    /// Directory of static files served for any other path.
    pub static_dir: PathBuf,
    /// Moves applied to each new cube before it is handed out.
    pub initial_moves: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 12345,
            cube_size: 3,
            static_dir: PathBuf::from("static"),
            initial_moves: String::new(),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the built-in defaults, the file at `path`
    /// (if any), and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut config = Config::builder().add_source(File::from_str(
            DEFAULT_CONFIG_STR,
            DEFAULT_CONFIG_FORMAT,
        ));
        if let Some(path) = path {
            log::debug!("loading config from {}", path.display());
            config = config.add_source(File::from(path));
        }
        config
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<config::Map<String, String>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_layered_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cubepuzzle.yaml");
        std::fs::write(&path, "port: 8080\ncube_size: 5\n").unwrap();

        let config = ServerConfig::load_with_env(
            Some(&path),
            env(&[("CUBEPUZZLE_CUBE_SIZE", "4"), ("CUBEPUZZLE_HOST", "0.0.0.0")]),
        )
        .unwrap();
        assert_eq!(
            config,
            ServerConfig {
                host: "0.0.0.0".to_owned(),
                port: 8080,
                cube_size: 4,
                ..ServerConfig::default()
            },
        );
    }

    #[test]
    fn test_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cubepuzzle.yaml");
        std::fs::write(&path, "port: not a port\n").unwrap();
        assert!(ServerConfig::load_with_env(Some(&path), env(&[])).is_err());

        let missing = dir.path().join("missing.yaml");
        assert!(ServerConfig::load_with_env(Some(&missing), env(&[])).is_err());
    }
}
