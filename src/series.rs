//! HDI time series as returned by the prediction service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::logging::{log, obj, v_str, Domain, Level};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HdiPoint {
    pub year: i32,
    pub hdi: f64,
    /// Extrapolated by the service rather than recorded.
    #[serde(default)]
    pub predicted: bool,
}

/// Points in the order the service sent them (ascending by year).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HdiSeries {
    points: Vec<HdiPoint>,
}

impl HdiSeries {
    pub fn new(points: Vec<HdiPoint>) -> Self {
        Self { points }
    }

    /// Lenient decode of a response `data` field. Anything other than an
    /// array of well-formed points becomes an empty series.
    pub fn from_data(data: Option<Value>) -> Self {
        let Some(value) = data else {
            log(Level::Warn, Domain::Request, "series_absent", obj(&[("msg", v_str("response has no data field"))]));
            return Self::default();
        };
        match serde_json::from_value::<Vec<HdiPoint>>(value) {
            Ok(points) => {
                let series = Self { points };
                if !series.is_ordered() {
                    log(Level::Warn, Domain::Request, "series_unordered", obj(&[("msg", v_str("years not strictly ascending"))]));
                }
                series
            }
            Err(err) => {
                log(
                    Level::Warn,
                    Domain::Request,
                    "series_malformed",
                    obj(&[("msg", v_str("data is not a point sequence")), ("error", v_str(&err.to_string()))]),
                );
                Self::default()
            }
        }
    }

    pub fn points(&self) -> &[HdiPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Strictly ascending years, hence no duplicates.
    pub fn is_ordered(&self) -> bool {
        self.points.windows(2).all(|w| w[0].year < w[1].year)
    }

    /// The last `n` points, or all of them when the series is shorter.
    pub fn tail(&self, n: usize) -> &[HdiPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Hex SHA-256 of the canonical JSON encoding.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_vec(&self.points).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}
