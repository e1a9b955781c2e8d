//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Start with the sample posts instead of an empty blog.
    pub seed_sample_posts: bool,
    /// Number of posts shown on the home page.
    pub recent_posts_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed_sample_posts: true,
            recent_posts_limit: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed_sample_posts: env::var("SEED_SAMPLE_POSTS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_sample_posts),
            recent_posts_limit: env::var("RECENT_POSTS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.recent_posts_limit),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" FALSE "));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert!(config.seed_sample_posts);
        assert_eq!(config.recent_posts_limit, 10);
    }
}
