//! Process configuration, read from the environment (and `.env` if present)

use anyhow::{Context, anyhow};
use std::env;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    /// When set, leads and users are kept in SQLite instead of process memory.
    pub database_url: Option<String>,
    /// Chat webhook that receives a summary of every accepted lead.
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            database_url: None,
            webhook_url: None,
            webhook_timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            cors_allowed_origins: split_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Settings> {
        dotenvy::dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Settings> {
        let var = |key: &str| {
            get(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let webhook_timeout = match var("WEBHOOK_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("WEBHOOK_TIMEOUT_SECS `{secs}` is not a number"))?;
                if secs == 0 {
                    return Err(anyhow!("WEBHOOK_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        };

        Ok(Settings {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned()),
            database_url: var("DATABASE_URL"),
            webhook_url: var("LEAD_WEBHOOK_URL"),
            webhook_timeout,
            cors_allowed_origins: split_origins(
                &var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_owned()),
            ),
        })
    }
}

fn split_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();

        assert_eq!(settings.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.database_url, None);
        assert_eq!(settings.webhook_url, None);
        assert_eq!(settings.webhook_timeout, Duration::from_secs(5));
        assert_eq!(
            settings.cors_allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let settings = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "  "),
            ("WEBHOOK_TIMEOUT_SECS", ""),
        ]))
        .unwrap();

        assert_eq!(settings.database_url, None);
        assert_eq!(settings.webhook_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_reads_configured_values() {
        let settings = Settings::from_lookup(lookup(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite://leads.db"),
            ("LEAD_WEBHOOK_URL", " https://chat.example/hook "),
            ("WEBHOOK_TIMEOUT_SECS", "12"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_address, "127.0.0.1:8080");
        assert_eq!(settings.database_url.as_deref(), Some("sqlite://leads.db"));
        assert_eq!(
            settings.webhook_url.as_deref(),
            Some("https://chat.example/hook")
        );
        assert_eq!(settings.webhook_timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        let err = Settings::from_lookup(lookup(&[("WEBHOOK_TIMEOUT_SECS", "abc")])).unwrap_err();
        assert!(err.to_string().contains("is not a number"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = Settings::from_lookup(lookup(&[("WEBHOOK_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_origins_skip_blank_entries() {
        let settings = Settings::from_lookup(lookup(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://a.example , ,https://b.example,",
        )]))
        .unwrap();

        assert_eq!(
            settings.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
