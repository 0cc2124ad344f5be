use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for one crawl run
///
/// Deserializable from a kebab-case TOML file; the CLI builds the same
/// structure from flags and lets flags override file values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CrawlConfig {
    /// Seed URLs the crawl starts from
    pub seeds: Vec<String>,

    /// Hard ceiling on the number of documents collected
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Directory receiving docs.json and index.json
    pub out_dir: PathBuf,

    /// Only visit URLs whose host matches one of the seeds' hosts
    #[serde(default)]
    pub restrict_to_seeds: bool,

    /// User agent sent with every request and matched against robots.txt
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pause in seconds after each collected page
    #[serde(default = "default_delay")]
    pub delay: f64,

    /// Maximum documents collected per host; 0 means unlimited
    #[serde(default)]
    pub max_per_host: u32,

    /// Page-fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Optional upstream proxy (http://, https://, or socks5://) used for
    /// page and robots.txt fetches alike
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for CrawlConfig {
    /// An empty, not-yet-valid configuration carrying only the defaults;
    /// seeds and the output directory still have to be supplied.
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            limit: default_limit(),
            out_dir: PathBuf::new(),
            restrict_to_seeds: false,
            user_agent: default_user_agent(),
            delay: default_delay(),
            max_per_host: 0,
            timeout: default_timeout(),
            proxy: None,
        }
    }
}

pub(crate) fn default_limit() -> usize {
    50
}

pub(crate) fn default_user_agent() -> String {
    concat!("seine/", env!("CARGO_PKG_VERSION")).to_string()
}

pub(crate) fn default_delay() -> f64 {
    0.2
}

pub(crate) fn default_timeout() -> u64 {
    10
}
