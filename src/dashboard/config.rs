use serde::{Deserialize, Serialize};

use crate::core::{Theme, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::report::DEFAULT_THIN_PROFIT_THRESHOLD;
use crate::sample::DEFAULT_SAMPLE_ORDER_COUNT;

/// Host-level dashboard setup.
///
/// Serializable so hosts can keep their setup as JSON; every field except
/// the viewport falls back to a default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_line_chart_title")]
    pub line_chart_title: String,
    #[serde(default = "default_bar_chart_title")]
    pub bar_chart_title: String,
    #[serde(default = "default_thin_profit_threshold")]
    pub thin_profit_threshold: f64,
    #[serde(default = "default_sample_order_count")]
    pub sample_order_count: usize,
    #[serde(default)]
    pub sample_seed: Option<u64>,
}

impl DashboardConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: Theme::default(),
            line_chart_title: default_line_chart_title(),
            bar_chart_title: default_bar_chart_title(),
            thin_profit_threshold: default_thin_profit_threshold(),
            sample_order_count: default_sample_order_count(),
            sample_seed: None,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_titles(
        mut self,
        line_chart_title: impl Into<String>,
        bar_chart_title: impl Into<String>,
    ) -> Self {
        self.line_chart_title = line_chart_title.into();
        self.bar_chart_title = bar_chart_title.into();
        self
    }

    #[must_use]
    pub fn with_thin_profit_threshold(mut self, threshold: f64) -> Self {
        self.thin_profit_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_sample_orders(mut self, count: usize, seed: Option<u64>) -> Self {
        self.sample_order_count = count;
        self.sample_seed = seed;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if !self.thin_profit_threshold.is_finite() {
            return Err(DashboardError::InvalidConfig(
                "thin profit threshold must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to serialize dashboard config: {e}"))
        })
    }
}

fn default_line_chart_title() -> String {
    "Line Chart".to_owned()
}

fn default_bar_chart_title() -> String {
    "Bar Chart".to_owned()
}

fn default_thin_profit_threshold() -> f64 {
    DEFAULT_THIN_PROFIT_THRESHOLD
}

fn default_sample_order_count() -> usize {
    DEFAULT_SAMPLE_ORDER_COUNT
}
