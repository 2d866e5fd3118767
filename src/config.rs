use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the catalog, vectorizer, feature matrix and title index
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Number of recommendations returned when the request sets no limit
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// Redis connection URL; caching is disabled when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Lifetime of cached recommend responses in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_recommend_limit() -> usize {
    crate::services::DEFAULT_LIMIT
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from key/value pairs named like environment variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.recommend_limit == 0 {
            anyhow::bail!("Failed to load config: RECOMMEND_LIMIT must be positive");
        }

        Ok(config)
    }

    /// Address the server listens on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.recommend_limit, 20);
        assert_eq!(config.redis_url, None);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("DATA_DIR", "/srv/movies"),
            ("RECOMMEND_LIMIT", "5"),
            ("REDIS_URL", "redis://cache:6379"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/movies"));
        assert_eq!(config.recommend_limit, 5);
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_rejects_zero_limit() {
        assert!(Config::from_vars(vars(&[("RECOMMEND_LIMIT", "0")])).is_err());
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
