//! Configuration types.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Directory containing the HTML document templates.
    pub template_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().expect("valid default address"),
            template_dir: PathBuf::from("./templates"),
        }
    }
}

impl ServerConfig {
    /// Build the server configuration from environment variables,
    /// falling back to defaults for anything unset.
    ///
    /// - `SHIPDOCS_BIND_ADDR` — listen address (default `0.0.0.0:8080`)
    /// - `SHIPDOCS_TEMPLATE_DIR` — template directory (default `./templates`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match std::env::var("SHIPDOCS_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SHIPDOCS_BIND_ADDR".into(),
                message: format!("not a socket address: {}", raw),
            })?,
            Err(_) => defaults.bind_addr,
        };

        let template_dir = std::env::var("SHIPDOCS_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.template_dir);

        Ok(Self {
            bind_addr,
            template_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.template_dir, PathBuf::from("./templates"));
    }
}
