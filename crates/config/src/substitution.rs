use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

const ENV_VAR_PATTERN: &str = r"\$\{(\w+)\}";

/// Substitute environment variables written as `${VAR_NAME}`.
///
/// Unset variables keep their placeholder; the validator reports them.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(ENV_VAR_PATTERN)?;
    let mut missing_vars = Vec::new();

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                value
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
                missing_vars.push(var_name.to_string());
                caps[0].to_string()
            }
        }
    });

    if !missing_vars.is_empty() {
        debug!(?missing_vars, "Environment variables left unresolved");
    }

    Ok(result.into_owned())
}

/// Names of `${VAR}` placeholders still present in `content`
pub fn unresolved_env_vars(content: &str) -> Vec<String> {
    match Regex::new(ENV_VAR_PATTERN) {
        Ok(re) => re.captures_iter(content).map(|c| c[1].to_string()).collect(),
        Err(_) => Vec::new(),
    }
}
