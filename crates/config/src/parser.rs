use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    debug!("Config file content length: {} bytes", content.len());

    parse_config(&content)
}

/// Parse YAML text after `${VAR}` substitution
pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let substituted = substitution::substitute_env_vars(content)?;

    let config: ServiceConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    info!("Configuration loaded successfully");
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        info!("No configuration at {:?}, using defaults", path);
        Ok(generate_default_config())
    }
}

pub fn generate_default_config() -> ServiceConfig {
    ServiceConfig {
        service: ServiceInfo::default(),
        server: HttpConfig::default(),
        storage: StorageConfig::default(),
        logging: LoggingConfig::default(),
        metrics: MetricsConfig::default(),
    }
}

#[instrument(skip(config))]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &ServiceConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artistd.yaml");

        let mut config = generate_default_config();
        config.server.http_port = 7100;
        config.storage = StorageConfig {
            storage_type: "postgres".to_string(),
            postgres: Some(PostgresConfig {
                url: "postgres://localhost/artists".to_string(),
                max_connections: 5,
                connection_timeout_seconds: 10,
                run_migrations: false,
            }),
        };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, generate_default_config());

        assert!(load_config(dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(parse_config("server: [not, a, map").is_err());
    }
}
