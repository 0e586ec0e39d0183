use crate::config::types::GenerateOptions;
use crate::ConfigError;
use url::Url;

/// Validates resolved generation options
pub fn validate(options: &GenerateOptions) -> Result<(), ConfigError> {
    validate_base_url(&options.base_url)?;

    if options.out_dir.is_empty() {
        return Err(ConfigError::Validation("out_dir cannot be empty".to_string()));
    }

    if options.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            options.timeout_secs
        )));
    }

    if options.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that the base URL is an absolute http(s) URL with a host
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", base_url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url has no host: {}",
            base_url
        )));
    }

    Ok(())
}
