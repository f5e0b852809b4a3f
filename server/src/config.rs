use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_DAYS: &str = "30";
const DEFAULT_GOOGLE_REDIRECT_URL: &str = "http://localhost:8080/api/v1/auth/google/callback";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value \"{value}\": {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// OAuth client registered with Google.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub session_ttl_days: i64,
    /// `None` when the client id or secret is missing; Google login is then
    /// switched off.
    pub google: Option<GoogleConfig>,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env`
    /// if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let google = match (var("GOOGLE_CLIENT_ID"), var("GOOGLE_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(GoogleConfig {
                client_id,
                client_secret,
                redirect_url: var("GOOGLE_REDIRECT_URL")
                    .unwrap_or_else(|| DEFAULT_GOOGLE_REDIRECT_URL.to_string()),
            }),
            _ => {
                tracing::warn!("GOOGLE_CLIENT_ID or GOOGLE_CLIENT_SECRET not set, Google login disabled");
                None
            }
        };

        Ok(Self {
            database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            session_ttl_days: parse_or("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?,
            google,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        tracing::debug!("{key} not set, using default: {default}");
        default.to_string()
    });
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        let ttl: i64 = parse_or("KONDATE_TEST_UNSET_TTL", "30").unwrap();
        assert_eq!(ttl, 30);
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        let err = parse_or::<i64>("KONDATE_TEST_UNSET_GARBAGE", "soon").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "KONDATE_TEST_UNSET_GARBAGE", .. }));
    }
}
