use crate::config::CrawlConfig;
use crate::ConfigError;
use url::Url;

/// Validates a crawl configuration before any network activity
///
/// Invalid configuration is a structural failure: it aborts the run rather
/// than being skipped over like a per-URL problem.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    if config.limit == 0 {
        return Err(ConfigError::Validation(
            "limit must be at least 1".to_string(),
        ));
    }

    if !config.delay.is_finite() || config.delay < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            config.delay
        )));
    }

    if config.timeout == 0 {
        return Err(ConfigError::Validation(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    if let Some(proxy) = &config.proxy {
        let url = Url::parse(proxy)
            .map_err(|e| ConfigError::Validation(format!("invalid proxy URL '{proxy}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https" | "socks5" | "socks5h") {
            return Err(ConfigError::Validation(format!(
                "proxy scheme must be http, https, or socks5, got '{}'",
                url.scheme()
            )));
        }
    }

    Ok(())
}
