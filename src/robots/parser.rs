//! Robots.txt rule matching, built on the robotstxt crate

use robotstxt::DefaultMatcher;

/// Parsed robots.txt rules for one origin
///
/// An empty body is the permissive marker: it allows every URL, which is
/// what a missing or unfetchable robots.txt must mean.
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    body: String,
}

impl RobotsRules {
    /// Wraps raw robots.txt content
    pub fn from_content(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }

    /// Creates the permissive rules used when robots.txt is unavailable
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Checks whether `url` is allowed for `user_agent`
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.body.is_empty() {
            return true;
        }
        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.body, user_agent, url)
    }

    /// Extracts the `Crawl-delay` directive applying to `user_agent`, in seconds
    ///
    /// The directive belongs to the most recent `User-agent` group. A delay
    /// declared for our agent specifically wins over one declared for `*`.
    /// Returns `None` when no applicable directive exists or its value does
    /// not parse.
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        let wanted = user_agent.to_lowercase();
        let mut group_agents: Vec<String> = Vec::new();
        let mut in_group_body = false;
        let mut wildcard_delay = None;
        let mut agent_delay = None;

        for line in self.body.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_lowercase().as_str() {
                "user-agent" => {
                    // Consecutive User-agent lines share one group; a
                    // User-agent line after other directives starts a new one.
                    if in_group_body {
                        group_agents.clear();
                        in_group_body = false;
                    }
                    group_agents.push(value.to_lowercase());
                }
                "crawl-delay" => {
                    in_group_body = true;
                    let Ok(delay) = value.parse::<f64>() else {
                        continue;
                    };
                    if group_agents.iter().any(|a| a != "*" && wanted.contains(a.as_str())) {
                        agent_delay = Some(delay);
                    } else if group_agents.iter().any(|a| a == "*") {
                        wildcard_delay = Some(delay);
                    }
                }
                _ => {
                    in_group_body = true;
                }
            }
        }

        agent_delay.or(wildcard_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_allows_everything() {
        let rules = RobotsRules::permissive();
        assert!(rules.is_allowed("https://example.com/", "seine/0.2"));
        assert!(rules.is_allowed("https://example.com/admin", "seine/0.2"));
    }

    #[test]
    fn test_disallow_all() {
        let rules = RobotsRules::from_content("User-agent: *\nDisallow: /");
        assert!(!rules.is_allowed("https://example.com/", "seine/0.2"));
        assert!(!rules.is_allowed("https://example.com/page", "seine/0.2"));
    }

    #[test]
    fn test_disallow_prefix() {
        let rules = RobotsRules::from_content("User-agent: *\nDisallow: /admin");
        assert!(rules.is_allowed("https://example.com/page", "seine/0.2"));
        assert!(!rules.is_allowed("https://example.com/admin", "seine/0.2"));
        assert!(!rules.is_allowed("https://example.com/admin/users", "seine/0.2"));
    }

    #[test]
    fn test_specific_agent_group() {
        let rules =
            RobotsRules::from_content("User-agent: badbot\nDisallow: /\n\nUser-agent: *\nAllow: /");
        assert!(rules.is_allowed("https://example.com/page", "goodbot"));
        assert!(!rules.is_allowed("https://example.com/page", "badbot"));
    }

    #[test]
    fn test_crawl_delay_wildcard() {
        let rules = RobotsRules::from_content("User-agent: *\nCrawl-delay: 10");
        assert_eq!(rules.crawl_delay("seine/0.2"), Some(10.0));
    }

    #[test]
    fn test_crawl_delay_prefers_specific_agent() {
        let rules = RobotsRules::from_content(
            "User-agent: seine\nCrawl-delay: 5\n\nUser-agent: *\nCrawl-delay: 10",
        );
        assert_eq!(rules.crawl_delay("seine/0.2"), Some(5.0));
        assert_eq!(rules.crawl_delay("otherbot"), Some(10.0));
    }

    #[test]
    fn test_crawl_delay_decimal() {
        let rules = RobotsRules::from_content("User-agent: *\nCrawl-delay: 2.5");
        assert_eq!(rules.crawl_delay("seine/0.2"), Some(2.5));
    }

    #[test]
    fn test_crawl_delay_shared_group() {
        let rules =
            RobotsRules::from_content("User-agent: bota\nUser-agent: botb\nCrawl-delay: 3");
        assert_eq!(rules.crawl_delay("bota"), Some(3.0));
        assert_eq!(rules.crawl_delay("botb"), Some(3.0));
        assert_eq!(rules.crawl_delay("botc"), None);
    }

    #[test]
    fn test_crawl_delay_absent() {
        let rules = RobotsRules::from_content("User-agent: *\nDisallow: /admin");
        assert_eq!(rules.crawl_delay("seine/0.2"), None);
    }

    #[test]
    fn test_crawl_delay_unparsable_value_ignored() {
        let rules = RobotsRules::from_content("User-agent: *\nCrawl-delay: soon");
        assert_eq!(rules.crawl_delay("seine/0.2"), None);
    }

    #[test]
    fn test_garbage_content_is_permissive() {
        let rules = RobotsRules::from_content("not a robots file {{{");
        assert!(rules.is_allowed("https://example.com/anything", "seine/0.2"));
    }
}
