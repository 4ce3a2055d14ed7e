//! Command-line arguments.

use std::path::PathBuf;

use eyre::{Result, WrapErr};

use crate::ServerConfig;

/// Serve N-layer cubes over HTTP
///
/// Settings are read from built-in defaults, then the config file, then
/// `CUBEPUZZLE_*` environment variables, then these arguments.
#[derive(Debug, Default, clap::Parser)]
#[command(version)]
pub struct Args {
    /// Config file (YAML, TOML, or JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on.
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Number of layers on each new cube.
    #[arg(short, long)]
    pub size: Option<u16>,
    /// Directory of static files.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Args {
    /// Loads the configuration and applies overrides from the arguments.
    pub fn load_config(&self) -> Result<ServerConfig> {
        let config = ServerConfig::load(self.config.as_deref()).wrap_err("error loading config")?;
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(size) = self.size {
            config.cube_size = size;
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir.clone_from(static_dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from(["cubepuzzle_server", "--port", "8000", "-s", "4"]).unwrap();
        let config = args.apply_overrides(ServerConfig::default());
        assert_eq!(
            config,
            ServerConfig {
                port: 8000,
                cube_size: 4,
                ..ServerConfig::default()
            },
        );

        let args = Args::default();
        assert_eq!(args.apply_overrides(ServerConfig::default()), ServerConfig::default());
    }

    #[test]
    fn test_bad_args() {
        assert!(Args::try_parse_from(["cubepuzzle_server", "--port", "99999"]).is_err());
        assert!(Args::try_parse_from(["cubepuzzle_server", "--size", "big"]).is_err());
    }
}
