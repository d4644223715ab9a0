use chrono::FixedOffset;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3456;
pub const DEFAULT_REVIEW_API_URL: &str = "https://api.nytimes.com/svc/books/v3/reviews.json";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: String,
    pub connection_limit: u32,
    pub timezone: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub static_dir: String,
    pub store: StoreConfig,
    pub review: ReviewConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::load(&args, |name| std::env::var(name).ok())
    }

    /// Builds the configuration from CLI arguments and a variable lookup.
    pub fn load<F>(args: &[String], var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An unusable port argument or PORT falls through to the next source.
        let port = args
            .first()
            .and_then(|arg| arg.parse::<u16>().ok())
            .or_else(|| var("PORT").and_then(|p| p.parse::<u16>().ok()))
            .unwrap_or(DEFAULT_PORT);

        let timezone = var("DB_TIMEZONE").unwrap_or_else(|| "+08:00".to_string());
        if timezone.parse::<FixedOffset>().is_err() {
            return Err(ConfigError::Invalid {
                name: "DB_TIMEZONE",
                expected: "a UTC offset such as +08:00",
                value: timezone,
            });
        }

        let store = StoreConfig {
            host: var("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&var, "DB_PORT", 3306u16)?,
            user: var("DB_USER"),
            password: var("DB_PASSWORD"),
            database: var("DB_DATABASE").unwrap_or_else(|| "goodreads".to_string()),
            connection_limit: parse_or(&var, "DB_CONNECTION_LIMIT", 4u32)?,
            timezone,
            timeout: Duration::from_secs(parse_or(&var, "STORE_TIMEOUT_SECS", 5u64)?),
        };

        let review = ReviewConfig {
            url: var("REVIEW_API_URL").unwrap_or_else(|| DEFAULT_REVIEW_API_URL.to_string()),
            api_key: var("API_KEY").filter(|key| !key.is_empty()),
            timeout: Duration::from_secs(parse_or(&var, "REVIEW_TIMEOUT_SECS", 10u64)?),
        };

        Ok(Config {
            port,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            store,
            review,
        })
    }
}

fn parse_or<F, T>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(name) {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            name,
            expected: "a positive integer",
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(args: &[&str], vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load(&args, |name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[], &[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.store.host, "localhost");
        assert_eq!(config.store.port, 3306);
        assert_eq!(config.store.database, "goodreads");
        assert_eq!(config.store.connection_limit, 4);
        assert_eq!(config.store.timezone, "+08:00");
        assert_eq!(config.review.url, DEFAULT_REVIEW_API_URL);
        assert_eq!(config.review.api_key, None);
    }

    #[test]
    fn argument_port_wins_over_environment() {
        let config = load(&["8080"], &[("PORT", "9090")]).unwrap();
        assert_eq!(config.port, 8080);

        let config = load(&["not-a-port"], &[("PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);

        let config = load(&[], &[("PORT", "junk")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn reads_store_and_review_settings() {
        let config = load(
            &[],
            &[
                ("DB_HOST", "db"),
                ("DB_USER", "reader"),
                ("DB_PASSWORD", "secret"),
                ("DB_CONNECTION_LIMIT", "16"),
                ("API_KEY", "k3y"),
                ("STORE_TIMEOUT_SECS", "2"),
            ],
        )
        .unwrap();
        assert_eq!(config.store.host, "db");
        assert_eq!(config.store.user.as_deref(), Some("reader"));
        assert_eq!(config.store.password.as_deref(), Some("secret"));
        assert_eq!(config.store.connection_limit, 16);
        assert_eq!(config.store.timeout, Duration::from_secs(2));
        assert_eq!(config.review.api_key.as_deref(), Some("k3y"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[], &[("DB_CONNECTION_LIMIT", "many")]),
            Err(ConfigError::Invalid {
                name: "DB_CONNECTION_LIMIT",
                ..
            })
        ));
        assert!(matches!(
            load(&[], &[("DB_TIMEZONE", "Asia/Singapore")]),
            Err(ConfigError::Invalid {
                name: "DB_TIMEZONE",
                ..
            })
        ));
    }
}
