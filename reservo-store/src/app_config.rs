use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    pub port: u16,
}

fn default_host() -> IpAddr { IpAddr::V4(Ipv4Addr::LOCALHOST) }

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 { 5 }

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layered load: `default`, then the `RUN_MODE` file, then `local`, then
    /// `RESERVO__*` environment variables (e.g. `RESERVO__SERVER__PORT=9000`).
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&dir.join("default").to_string_lossy()))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&dir.join(&run_mode).to_string_lossy()).required(false))
            // Not checked in
            .add_source(config::File::with_name(&dir.join("local").to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("RESERVO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_layered_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 8080\n[database]\nurl = \"sqlite::memory:\"\n[catalog]\npath = \"items.csv\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9090\n").unwrap();

        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.catalog.path, PathBuf::from("items.csv"));
    }

    #[test]
    fn test_missing_default_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(dir.path()).is_err());
    }
}
