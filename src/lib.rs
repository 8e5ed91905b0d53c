//! ops-dashboard: core of a small operations dashboard.
//!
//! Two pieces carry the logic: `api::ChartBinding`, which keeps an opaque
//! rendering-engine handle in sync with declarative chart inputs, and
//! `metrics`, which turns raw order fields into profit and margin records.
//! The remaining modules model the host view around them.

pub mod api;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod render;
pub mod report;
pub mod sample;
pub mod telemetry;

pub use api::{ChartBinding, ChartProps};
pub use error::{DashboardError, DashboardResult};
