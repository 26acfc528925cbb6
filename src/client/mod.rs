//! Remote prediction calls.
//!
//! [`Transport`] moves bytes; [`PredictionClient`] owns the request shape and
//! folds every outcome into `Result<HdiSeries, PredictError>`.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;

use crate::config::Config;
use crate::labels;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::series::HdiSeries;

pub mod http;

pub use http::HttpTransport;

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON. `Err` means no response could be obtained.
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse>;
}

/// The two failure channels. They are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// The service answered and reported a failure.
    Service(String),
    /// No usable answer; carries the low-level failure description.
    Connectivity(String),
}

impl PredictError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Service(msg) => f.write_str(msg),
            PredictError::Connectivity(detail) => write!(f, "{}{}", labels::CONNECTIVITY_PREFIX, detail),
        }
    }
}

impl std::error::Error for PredictError {}

pub struct PredictionClient {
    transport: Box<dyn Transport>,
    url: String,
}

impl PredictionClient {
    pub fn new(transport: Box<dyn Transport>, url: impl Into<String>) -> Self {
        Self { transport, url: url.into() }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let url = cfg.endpoint()?;
        let transport = HttpTransport::new(cfg.timeout())?;
        Ok(Self::new(Box::new(transport), url.as_str()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request the series for `country`, sent exactly as given.
    pub async fn predict(&self, country: &str) -> Result<HdiSeries, PredictError> {
        let body = json!({ "country": country });
        log(Level::Info, Domain::Request, "predict_start", obj(&[("country", v_str(country)), ("url", v_str(&self.url))]));

        let outcome = match self.transport.post_json(&self.url, &body).await {
            Ok(resp) => interpret(resp),
            Err(err) => Err(PredictError::Connectivity(format!("{:#}", err))),
        };

        match &outcome {
            Ok(series) => log(
                Level::Info,
                Domain::Request,
                "predict_ok",
                obj(&[
                    ("country", v_str(country)),
                    ("points", v_num(series.len() as f64)),
                    ("fingerprint", v_str(&series.fingerprint())),
                ]),
            ),
            Err(err) => log(
                Level::Warn,
                Domain::Request,
                "predict_failed",
                obj(&[
                    ("country", v_str(country)),
                    ("channel", v_str(match err {
                        PredictError::Service(_) => "service",
                        PredictError::Connectivity(_) => "connectivity",
                    })),
                    ("msg", v_str(&err.message())),
                ]),
            ),
        }
        outcome
    }
}

/// Normalize a completed exchange.
///
/// A body that is not JSON is reported on the connectivity channel, like any
/// other failure to obtain a usable answer.
pub fn interpret(resp: RawResponse) -> Result<HdiSeries, PredictError> {
    let parsed: Value = serde_json::from_str(&resp.body)
        .map_err(|err| PredictError::Connectivity(err.to_string()))?;

    if !resp.is_success() {
        let msg = parsed
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(labels::GENERIC_FAILURE);
        return Err(PredictError::Service(msg.to_string()));
    }

    Ok(HdiSeries::from_data(parsed.get("data").cloned()))
}
