//! Turns a series into what the summary cards and the trend chart draw.

use serde::Serialize;

use crate::classify::{classify, Band, StyleKey};
use crate::series::HdiSeries;

/// Number of trailing points shown as summary cards.
pub const SUMMARY_WINDOW: usize = 3;

/// Vertical chart domain, fixed regardless of the data.
pub const Y_DOMAIN: (f64, f64) = (0.4, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryCard {
    pub year: i32,
    pub hdi: f64,
    pub band: Band,
    pub style: StyleKey,
    pub predicted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub hdi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub summary: Vec<SummaryCard>,
    pub trend: Vec<TrendPoint>,
    pub y_domain: (f64, f64),
}

impl Projection {
    pub fn empty() -> Self {
        Self { summary: Vec::new(), trend: Vec::new(), y_domain: Y_DOMAIN }
    }

    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}

pub fn project(series: &HdiSeries) -> Projection {
    if series.is_empty() {
        return Projection::empty();
    }

    let summary = series
        .tail(SUMMARY_WINDOW)
        .iter()
        .map(|p| {
            let c = classify(p.hdi);
            SummaryCard { year: p.year, hdi: p.hdi, band: c.band, style: c.style, predicted: p.predicted }
        })
        .collect();

    let trend = series.points().iter().map(|p| TrendPoint { year: p.year, hdi: p.hdi }).collect();

    Projection { summary, trend, y_domain: Y_DOMAIN }
}

/// Projection of whatever the session currently holds; empty unless the
/// last request succeeded.
pub fn project_session(session: &crate::lifecycle::Session) -> Projection {
    session.series().map(project).unwrap_or_else(Projection::empty)
}
