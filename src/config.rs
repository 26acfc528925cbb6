use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://hdi-api.onrender.com/predict";

/// Runtime configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    /// Unset means the client waits for the service indefinitely.
    pub timeout_secs: Option<u64>,
    pub chart_height: usize,
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            chart_height: 12,
            chart_width: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("HDI_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: std::env::var("HDI_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()),
            chart_height: std::env::var("CHART_HEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.chart_height),
            chart_width: std::env::var("CHART_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.chart_width),
        }
    }

    /// Parsed endpoint. Only http(s) endpoints are accepted.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url)
            .with_context(|| format!("invalid HDI_API_URL: {}", self.api_url))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => bail!("unsupported scheme {} in HDI_API_URL", other),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint()?;
        if self.chart_height < 2 || self.chart_width < 2 {
            bail!(
                "chart must be at least 2x2, got {}x{}",
                self.chart_width,
                self.chart_height
            );
        }
        Ok(())
    }
}
