//! Host view: holds the shared chart state, drives both chart bindings and
//! owns the metrics report.

mod config;
mod navigation;

pub use config::DashboardConfig;
pub use navigation::{NavItem, NavigationMenu};

use tracing::{debug, info, warn};

use crate::api::{ChartBinding, ChartProps};
use crate::core::{CategoryAxis, ChartKind, SeriesDescriptor, Theme, Viewport};
use crate::error::DashboardResult;
use crate::metrics::{MetricsRecord, OrderRecord, map_records};
use crate::render::RenderEngine;
use crate::report::ReportTable;
use crate::sample::generate_orders;

pub struct Dashboard<E: RenderEngine> {
    config: DashboardConfig,
    navigation: NavigationMenu,
    line_chart: ChartBinding<E>,
    bar_chart: ChartBinding<E>,
    series: Vec<SeriesDescriptor>,
    categories: CategoryAxis,
    metrics: Vec<MetricsRecord>,
    report: ReportTable,
}

impl<E: RenderEngine + Clone> Dashboard<E> {
    /// Builds a dashboard over generated sample orders.
    pub fn new(engine: E, config: DashboardConfig) -> DashboardResult<Self> {
        let orders = generate_orders(config.sample_order_count, config.sample_seed);
        Self::with_orders(engine, config, &orders)
    }

    pub fn with_orders(
        engine: E,
        config: DashboardConfig,
        orders: &[OrderRecord],
    ) -> DashboardResult<Self> {
        config.validate()?;

        let metrics = map_records(orders);
        let report = ReportTable::build(&metrics, config.thin_profit_threshold);
        debug!(
            orders = orders.len(),
            thin_margin_rows = report.thin_margin_count(),
            "built metrics report"
        );

        let line_chart = ChartBinding::new(
            engine.clone(),
            ChartProps::new(ChartKind::Line, config.line_chart_title.clone())
                .with_theme(config.theme),
        );
        let bar_chart = ChartBinding::new(
            engine,
            ChartProps::new(ChartKind::Bar, config.bar_chart_title.clone())
                .with_theme(config.theme),
        );

        Ok(Self {
            config,
            navigation: NavigationMenu::default(),
            line_chart,
            bar_chart,
            series: Vec::new(),
            categories: CategoryAxis::default(),
            metrics,
            report,
        })
    }
}

impl<E: RenderEngine> Dashboard<E> {
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationMenu {
        &self.navigation
    }

    #[must_use]
    pub fn line_chart(&self) -> &ChartBinding<E> {
        &self.line_chart
    }

    #[must_use]
    pub fn bar_chart(&self) -> &ChartBinding<E> {
        &self.bar_chart
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.series
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryAxis {
        &self.categories
    }

    #[must_use]
    pub fn metrics(&self) -> &[MetricsRecord] {
        &self.metrics
    }

    #[must_use]
    pub fn report(&self) -> &ReportTable {
        &self.report
    }

    pub fn select_nav(&mut self, key: &str) -> bool {
        let selected = self.navigation.select(key);
        if !selected {
            debug!(key, "ignoring unknown navigation key");
        }
        selected
    }

    /// Mounts both charts into the configured viewport.
    ///
    /// Both mounts are attempted; the first failure is returned.
    pub fn mount(&mut self) -> DashboardResult<()> {
        let viewport = self.config.viewport;
        let line = self.line_chart.mount(viewport);
        let bar = self.bar_chart.mount(viewport);
        for (chart, result) in [("line", &line), ("bar", &bar)] {
            if let Err(err) = result {
                warn!(chart, error = %err, "chart mount failed");
            }
        }
        line.and(bar)
    }

    /// Delivers series and labels once the (simulated) load completes.
    pub fn on_data_loaded(&mut self, series: Vec<SeriesDescriptor>, categories: CategoryAxis) {
        info!(
            series = series.len(),
            categories = categories.len(),
            "chart data loaded"
        );
        self.series = series;
        self.categories = categories;
        self.line_chart
            .set_data(self.series.clone(), self.categories.clone());
        self.bar_chart
            .set_data(self.series.clone(), self.categories.clone());
    }

    /// Replaces the order set and rebuilds metrics and report.
    pub fn set_orders(&mut self, orders: &[OrderRecord]) {
        self.metrics = map_records(orders);
        self.report = ReportTable::build(&self.metrics, self.config.thin_profit_threshold);
    }

    pub fn set_theme(&mut self, theme: Theme) -> DashboardResult<()> {
        self.config.theme = theme;
        let line = self.line_chart.set_theme(theme);
        let bar = self.bar_chart.set_theme(theme);
        line.and(bar)
    }

    /// Forwards a container resize to both charts.
    ///
    /// Empty sizes are not stored in the config so a later `mount` still
    /// has a usable viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_valid() {
            self.config.viewport = viewport;
        }
        self.line_chart.resize(viewport);
        self.bar_chart.resize(viewport);
    }

    pub fn unmount(&mut self) {
        self.line_chart.unmount();
        self.bar_chart.unmount();
    }
}
