use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub seed: Option<bool>,
    pub log_level: Option<String>,
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from("config")
}

/// Layers `<name>.toml` (optional), then `COURSES_*` environment variables
/// (`COURSES_SERVER__PORT=9000`), over the built-in defaults.
pub fn load_config_from(name: &str) -> Result<AppConfig> {
    load_config_with_env(name, "COURSES")
}

fn load_config_with_env(name: &str, env_prefix: &str) -> Result<AppConfig> {
    let mut config: AppConfig = Config::builder()
        .set_default("server.address", DEFAULT_ADDRESS)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.seed.is_none() {
        config.seed = Some(true);
    }
    if config.log_level.is_none() {
        config.log_level = Some("info".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_from("definitely-missing-config").unwrap();

        assert_eq!(config.server.address, DEFAULT_ADDRESS);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.seed, Some(true));
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("course-api-{}.toml", std::process::id()));
        fs::write(
            &path,
            "seed = false\n\n[server]\naddress = \"127.0.0.1\"\nport = 9000\n",
        )
        .unwrap();

        let name = path.with_extension("");
        let config = load_config_from(name.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.seed, Some(false));
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let prefix = format!("COURSESTEST{}", std::process::id());
        let port_var = format!("{prefix}_SERVER__PORT");
        let seed_var = format!("{prefix}_SEED");
        std::env::set_var(&port_var, "9123");
        std::env::set_var(&seed_var, "false");

        let result = load_config_with_env("definitely-missing-config", &prefix);
        std::env::remove_var(&port_var);
        std::env::remove_var(&seed_var);

        let config = result.unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.server.address, DEFAULT_ADDRESS);
        assert_eq!(config.seed, Some(false));
    }
}
