use crate::*;
use thiserror::Error;

const STORAGE_TYPES: [&str; 2] = ["memory", "postgres"];
const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("{field} must be a non-zero port")]
    InvalidPort { field: String },

    #[error("Metrics port {0} collides with the HTTP port")]
    PortCollision(u16),

    #[error("Invalid storage type: {0}. Must be one of: memory, postgres")]
    InvalidStorageType(String),

    #[error("Storage: {message}")]
    InvalidStorage { message: String },

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Environment variable '{var}' is missing: {field} still holds a placeholder")]
    UnresolvedEnvVar { var: String, field: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

pub fn validate_config(config: &ServiceConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.service.name.trim().is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    check_placeholders("service.name", &config.service.name, &mut report);
    check_placeholders("server.host", &config.server.host, &mut report);

    validate_server(config, &mut report);
    validate_storage(&config.storage, &mut report);

    if !LOG_FORMATS.contains(&config.logging.format.to_lowercase().as_str()) {
        report.add_error(ValidationError::InvalidLogFormat(config.logging.format.clone()));
    }

    report
}

fn validate_server(config: &ServiceConfig, report: &mut ValidationReport) {
    if config.server.host.trim().is_empty() {
        report.add_warning("server.host", "Empty host, binding will fail");
    }

    if config.server.http_port == 0 {
        report.add_error(ValidationError::InvalidPort {
            field: "server.http_port".to_string(),
        });
    } else if config.server.http_port < 1024 {
        report.add_warning("server.http_port", "Privileged port, requires elevated permissions");
    }

    if config.metrics.enabled {
        if config.metrics.port == 0 {
            report.add_error(ValidationError::InvalidPort {
                field: "metrics.port".to_string(),
            });
        } else if config.metrics.port == config.server.http_port {
            report.add_error(ValidationError::PortCollision(config.metrics.port));
        }
    }
}

fn validate_storage(storage: &StorageConfig, report: &mut ValidationReport) {
    let storage_type = storage.storage_type.to_lowercase();
    if !STORAGE_TYPES.contains(&storage_type.as_str()) {
        report.add_error(ValidationError::InvalidStorageType(storage.storage_type.clone()));
        return;
    }

    match (storage_type.as_str(), &storage.postgres) {
        ("postgres", None) => report.add_error(ValidationError::InvalidStorage {
            message: "postgres storage selected but no postgres section given".to_string(),
        }),
        ("postgres", Some(pg)) => validate_postgres(pg, report),
        ("memory", Some(_)) => report.add_warning(
            "storage.postgres",
            "Ignored because storage type is memory",
        ),
        _ => {}
    }
}

fn validate_postgres(pg: &PostgresConfig, report: &mut ValidationReport) {
    if pg.url.trim().is_empty() {
        report.add_error(ValidationError::InvalidStorage {
            message: "postgres.url is required".to_string(),
        });
    }

    check_placeholders("storage.postgres.url", &pg.url, report);

    if pg.max_connections == 0 {
        report.add_error(ValidationError::InvalidStorage {
            message: "postgres.max_connections must be a positive integer".to_string(),
        });
    }
}

fn check_placeholders(field: &str, value: &str, report: &mut ValidationReport) {
    for var in unresolved_env_vars(value) {
        report.add_error(ValidationError::UnresolvedEnvVar {
            var,
            field: field.to_string(),
        });
    }
}
