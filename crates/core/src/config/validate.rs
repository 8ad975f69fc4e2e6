use super::{types::AppConfig, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Timeout is not 0
/// - User agent is not empty
/// - Base URLs are http(s)
/// - Backoff is a finite, non-negative number
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.timeout == 0 {
        return Err(ConfigError::ValidationError(
            "timeout cannot be 0".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "user_agent cannot be empty".to_string(),
        ));
    }

    for (key, url) in [
        ("tpb_base_url", &config.tpb_base_url),
        ("eztv_base_url", &config.eztv_base_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be an http(s) URL, got {:?}",
                key, url
            )));
        }
    }

    if !config.backoff.is_finite() || config.backoff < 0.0 {
        return Err(ConfigError::ValidationError(
            "backoff must be a non-negative number of seconds".to_string(),
        ));
    }

    Ok(())
}
