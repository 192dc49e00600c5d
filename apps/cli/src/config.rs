use std::time::Duration;

use anyhow::Context;
use investment_planner_connect::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("IP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("Invalid IP_API_URL '{}': expected an http(s) URL", api_url);
        }
        let default_timeout_ms = DEFAULT_TIMEOUT_SECS * 1000;
        let timeout_ms: u64 = lookup("IP_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_timeout_ms);
        let log_format = lookup("IP_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .context("Invalid IP_LOG_FORMAT")?
            .unwrap_or(LogFormat::Text);
        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s.eq_ignore_ascii_case("text") {
            Ok(LogFormat::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            anyhow::bail!("unknown log format '{}'", s)
        }
    }
}
