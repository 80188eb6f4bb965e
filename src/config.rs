use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use dotenvy::dotenv;
use reqwest::Url;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the HRMS backend; every request path is appended to it.
    pub api_url: Url,
    /// Page sessions idle for this long are ended.
    pub page_idle: Duration,
    pub log_dir: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parse_api_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("HRMS_API_URL is not a URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("HRMS_API_URL must be http or https, got {}", url.scheme());
    }
    Ok(url)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        let page_idle_secs: u64 = var_or("PAGE_IDLE_SECS", "900") // default 15 min
            .parse()
            .context("PAGE_IDLE_SECS must be a number of seconds")?;

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:3000"),
            api_url: parse_api_url(&var_or("HRMS_API_URL", "http://localhost:8000"))?,
            page_idle: Duration::from_secs(page_idle_secs),
            log_dir: var_or("LOG_DIR", "logs"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_accepts_http_and_https() {
        assert!(parse_api_url("http://localhost:8000").is_ok());
        assert_eq!(
            parse_api_url(" https://hrms.example.com/api/ ").unwrap().path(),
            "/api/"
        );
    }

    #[test]
    fn api_url_rejects_other_schemes() {
        assert!(parse_api_url("ftp://example.com").is_err());
        assert!(parse_api_url("not a url").is_err());
    }
}
