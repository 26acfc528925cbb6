//! Client-side engine for Human Development Index forecasts.
//!
//! A user picks a country, the remote service returns a historical plus
//! predicted HDI series, and the result is shown as classified summary cards
//! and a trend chart.
//!
//! - [`suggest`]: incremental country-name suggestions
//! - [`client`]: the remote prediction call and its two failure channels
//! - [`lifecycle`]: `Idle -> Loading -> Success | Failed` as a pure reducer
//! - [`classify`]: HDI value to qualitative band
//! - [`projector`]: series to summary cards and chart points
//! - [`render`]: terminal drawing of a session

pub mod catalog;
pub mod classify;
pub mod client;
pub mod config;
pub mod labels;
pub mod lifecycle;
pub mod logging;
pub mod projector;
pub mod render;
pub mod series;
pub mod suggest;

pub use classify::{classify, Band, Classification, StyleKey};
pub use client::{PredictError, PredictionClient, RawResponse, Transport};
pub use config::Config;
pub use lifecycle::{Controller, Event, RequestState, Session};
pub use projector::{project, Projection};
pub use series::{HdiPoint, HdiSeries};
