use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the order/auth API, e.g. "https://api.example.com".
    pub backend_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub request_timeout: Duration,
    /// How long a fetched `(page, limit)` result is reused.
    pub cache_ttl: Duration,
    /// `limit` used by screens that want every order (order list, revenue).
    pub report_fetch_limit: u32,
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            request_timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(60),
            report_fetch_limit: 10_000,
            session_ttl: Duration::from_secs(60 * 60 * 24 * 7), // 7 days
        }
    }
}

impl AppConfig {
    /// Defaults overridden by whatever is set in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup("BACKEND_URL") {
            Url::parse(&url).map_err(|e| invalid("BACKEND_URL", &url, e))?;
            cfg.backend_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            cfg.bind_addr = addr.parse().map_err(|e| invalid("BIND_ADDR", &addr, e))?;
        }
        if let Some(n) = positive(&lookup, "MAX_WORKERS")? {
            cfg.max_workers = n as usize;
        }
        if let Some(secs) = positive(&lookup, "REQUEST_TIMEOUT_SECS")? {
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = number(&lookup, "CACHE_TTL_SECS")? {
            cfg.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(limit) = positive(&lookup, "REPORT_FETCH_LIMIT")? {
            cfg.report_fetch_limit = u32::try_from(limit)
                .map_err(|e| invalid("REPORT_FETCH_LIMIT", &limit.to_string(), e))?;
        }
        if let Some(secs) = positive(&lookup, "SESSION_TTL_SECS")? {
            cfg.session_ttl = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn number<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<u64>().map_err(|e| invalid(key, &raw, e)))
        .transpose()
}

fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match number(lookup, key)? {
        Some(0) => Err(invalid(key, "0", "must be at least 1")),
        other => Ok(other),
    }
}
