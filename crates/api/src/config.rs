//! Server configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration: defaults, overridden by an optional
/// `heart-risk.toml` file, overridden by `HEART_RISK_*` env vars
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Directory holding the three artifact files
    pub artifact_dir: PathBuf,
}

impl ServerConfig {
    /// Load the configuration from all sources
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("artifact_dir", "artifacts")?
            .add_source(config::File::with_name("heart-risk").required(false))
            .add_source(config::Environment::with_prefix("HEART_RISK"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.artifact_dir, PathBuf::from("artifacts"));
    }
}
