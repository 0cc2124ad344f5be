//! Crawl configuration: types, TOML loading, and validation

mod types;
mod validation;

pub use types::CrawlConfig;
pub use validation::validate;

use crate::ConfigError;
use std::path::Path;

/// Loads and validates a crawl configuration from a TOML file
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: CrawlConfig = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_minimal_config_applies_defaults() {
        let file = write_config(
            r#"
seeds = ["https://example.com/"]
out-dir = "./data"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.limit, 50);
        assert_eq!(config.delay, 0.2);
        assert_eq!(config.max_per_host, 0);
        assert_eq!(config.timeout, 10);
        assert!(!config.restrict_to_seeds);
        assert!(config.proxy.is_none());
        assert!(config.user_agent.starts_with("seine/"));
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
seeds = ["https://a.com/", "https://b.com/"]
limit = 10
out-dir = "/tmp/crawl"
restrict-to-seeds = true
user-agent = "custom-bot/1.0"
delay = 0.5
max-per-host = 3
timeout = 20
proxy = "socks5://127.0.0.1:9050"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.seeds.len(), 2);
        assert_eq!(config.limit, 10);
        assert!(config.restrict_to_seeds);
        assert_eq!(config.user_agent, "custom-bot/1.0");
        assert_eq!(config.max_per_host, 3);
        assert_eq!(config.proxy.as_deref(), Some("socks5://127.0.0.1:9050"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let file = write_config(
            r#"
seeds = ["https://example.com/"]
out-dir = "./data"
max-depth = 3
"#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let file = write_config(
            r#"
seeds = []
out-dir = "./data"
"#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config(Path::new("/nonexistent/seine.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
