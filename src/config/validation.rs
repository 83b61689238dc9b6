use crate::config::types::{Config, ExtractOptions, UserAgentConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_extract_options(&config.extract)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates extraction options
fn validate_extract_options(options: &ExtractOptions) -> ConfigResult<()> {
    if let Some(base_url) = &options.base_url {
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;
    }

    if let Some(timeout) = options.timeout {
        if timeout.is_zero() {
            return Err(ConfigError::Validation(
                "timeout must be greater than 0ms".to_string(),
            ));
        }
    }

    if let Some(meta_tags) = &options.meta_tags {
        if meta_tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "meta-tags entries cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Validate name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if !config.contact_url.is_empty() {
        Url::parse(&config.contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}
