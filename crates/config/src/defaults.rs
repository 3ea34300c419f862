pub fn default_service_name() -> String {
    "artistd".to_string()
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_http_port() -> u16 {
    7000
}

pub fn default_storage_type() -> String {
    "memory".to_string()
}

pub fn default_max_connections() -> u32 {
    20
}

pub fn default_connection_timeout() -> u64 {
    30
}

pub fn default_run_migrations() -> bool {
    true
}

pub fn default_log_format() -> String {
    "pretty".to_string()
}

pub fn default_metrics_port() -> u16 {
    9090
}
