use tracing::{debug, trace, warn};

use crate::core::{CategoryAxis, ChartKind, SeriesDescriptor, Theme, Viewport};
use crate::error::DashboardResult;
use crate::render::{ChartOption, RenderEngine, RenderHandle};

use super::build_chart_option;

/// Declarative inputs of one chart, owned by the binding and replaced by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProps {
    pub kind: ChartKind,
    pub title: String,
    pub theme: Theme,
    pub series: Vec<SeriesDescriptor>,
    pub categories: CategoryAxis,
}

impl ChartProps {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            theme: Theme::default(),
            series: Vec::new(),
            categories: CategoryAxis::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_data(mut self, series: Vec<SeriesDescriptor>, categories: CategoryAxis) -> Self {
        self.series = series;
        self.categories = categories;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatus {
    Unmounted,
    Active,
}

struct ActiveChart<H> {
    handle: H,
    /// Counts handles created by this binding; used to correlate log lines.
    generation: u64,
    /// Last container size the handle accepted.
    container: Viewport,
    option: Option<ChartOption>,
}

enum BindingState<H> {
    Unmounted,
    Active(ActiveChart<H>),
}

/// Keeps one render handle in sync with a chart's declarative inputs.
///
/// The binding owns at most one live handle. It is created on `mount`,
/// recreated on theme change and disposed on `unmount` or drop. Resize and
/// update calls only reach the handle while the binding is Active. Malformed
/// input never fails: the chart is cleared instead.
pub struct ChartBinding<E: RenderEngine> {
    engine: E,
    props: ChartProps,
    state: BindingState<E::Handle>,
    generation: u64,
}

impl<E: RenderEngine> ChartBinding<E> {
    #[must_use]
    pub fn new(engine: E, props: ChartProps) -> Self {
        Self {
            engine,
            props,
            state: BindingState::Unmounted,
            generation: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> BindingStatus {
        match self.state {
            BindingState::Unmounted => BindingStatus::Unmounted,
            BindingState::Active(_) => BindingStatus::Active,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status() == BindingStatus::Active
    }

    /// Whether container resize notifications currently reach a handle.
    #[must_use]
    pub fn is_listening_for_resize(&self) -> bool {
        self.is_active()
    }

    #[must_use]
    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn container(&self) -> Option<Viewport> {
        match &self.state {
            BindingState::Unmounted => None,
            BindingState::Active(active) => Some(active.container),
        }
    }

    /// Option last applied to the live handle; `None` while cleared or unmounted.
    #[must_use]
    pub fn current_option(&self) -> Option<&ChartOption> {
        match &self.state {
            BindingState::Unmounted => None,
            BindingState::Active(active) => active.option.as_ref(),
        }
    }

    /// Creates the render handle and applies the current inputs.
    ///
    /// Mounting an already active binding is a no-op. An invalid container
    /// leaves the binding unmounted.
    pub fn mount(&mut self, container: Viewport) -> DashboardResult<()> {
        if self.is_active() {
            trace!("mount ignored: render handle already live");
            return Ok(());
        }
        self.activate(container)
    }

    pub fn unmount(&mut self) {
        if self.deactivate().is_none() {
            trace!("unmount ignored: no live render handle");
        }
    }

    /// Switches theme by disposing the live handle and creating a new one.
    pub fn set_theme(&mut self, theme: Theme) -> DashboardResult<()> {
        if self.props.theme == theme {
            return Ok(());
        }
        debug!(
            from = self.props.theme.as_str(),
            to = theme.as_str(),
            "chart theme changed"
        );
        self.props.theme = theme;
        match self.deactivate() {
            Some(container) => self.activate(container),
            None => Ok(()),
        }
    }

    pub fn set_data(&mut self, series: Vec<SeriesDescriptor>, categories: CategoryAxis) {
        self.props.series = series;
        self.props.categories = categories;
        self.update_chart();
    }

    pub fn set_series(&mut self, series: Vec<SeriesDescriptor>) {
        self.props.series = series;
        self.update_chart();
    }

    pub fn set_categories(&mut self, categories: CategoryAxis) {
        self.props.categories = categories;
        self.update_chart();
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        if self.props.kind == kind {
            return;
        }
        self.props.kind = kind;
        self.update_chart();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.props.title == title {
            return;
        }
        self.props.title = title;
        self.update_chart();
    }

    /// Replaces every input at once, recreating the handle only when the theme differs.
    pub fn set_props(&mut self, props: ChartProps) -> DashboardResult<()> {
        if props == self.props {
            return Ok(());
        }
        let theme = props.theme;
        self.props = ChartProps {
            theme: self.props.theme,
            ..props
        };
        if theme != self.props.theme {
            return self.set_theme(theme);
        }
        self.update_chart();
        Ok(())
    }

    /// Forwards a container resize to the live handle; ignored when unmounted.
    ///
    /// Empty sizes (a hidden or collapsed container) are skipped so the last
    /// usable size is kept for handle recreation.
    pub fn resize(&mut self, container: Viewport) {
        let BindingState::Active(active) = &mut self.state else {
            trace!("resize ignored: no live render handle");
            return;
        };
        if !container.is_valid() {
            debug!(
                generation = active.generation,
                width = container.width,
                height = container.height,
                "resize ignored: empty container"
            );
            return;
        }
        trace!(
            generation = active.generation,
            width = container.width,
            height = container.height,
            "resize render handle"
        );
        match active.handle.resize(container) {
            Ok(()) => active.container = container,
            Err(err) => warn!(error = %err, "render handle rejected resize"),
        }
    }

    /// Re-derives the option from the current inputs and applies it as a full replacement.
    pub fn update_chart(&mut self) {
        let BindingState::Active(active) = &mut self.state else {
            return;
        };
        let props = &self.props;

        let Some(option) =
            build_chart_option(&props.series, &props.categories, props.kind, &props.title)
        else {
            debug!(
                series = props.series.len(),
                categories = props.categories.len(),
                "series and category lengths differ; clearing chart"
            );
            clear_active(active);
            return;
        };

        trace!(
            generation = active.generation,
            series = option.series.len(),
            categories = option.x_axis.data.len(),
            kind = props.kind.as_str(),
            "apply chart option"
        );
        match active.handle.set_option(&option, true) {
            Ok(()) => active.option = Some(option),
            Err(err) => {
                warn!(error = %err, "render handle rejected option; clearing chart");
                clear_active(active);
            }
        }
    }

    fn activate(&mut self, container: Viewport) -> DashboardResult<()> {
        let handle = self.engine.init(container, self.props.theme)?;
        self.generation += 1;
        debug!(
            generation = self.generation,
            theme = self.props.theme.as_str(),
            width = container.width,
            height = container.height,
            "render handle created"
        );
        self.state = BindingState::Active(ActiveChart {
            handle,
            generation: self.generation,
            container,
            option: None,
        });
        self.update_chart();
        Ok(())
    }

    /// Leaves the Active state, then disposes the handle it owned.
    ///
    /// Once the state is `Unmounted`, resize and update calls no longer reach
    /// the handle.
    fn deactivate(&mut self) -> Option<Viewport> {
        let BindingState::Active(active) = std::mem::replace(&mut self.state, BindingState::Unmounted)
        else {
            return None;
        };
        let ActiveChart {
            handle,
            generation,
            container,
            ..
        } = active;
        handle.dispose();
        debug!(generation, "render handle disposed");
        Some(container)
    }
}

impl<E: RenderEngine> Drop for ChartBinding<E> {
    fn drop(&mut self) {
        let _ = self.deactivate();
    }
}

fn clear_active<H: RenderHandle>(active: &mut ActiveChart<H>) {
    active.option = None;
    if let Err(err) = active.handle.clear() {
        warn!(error = %err, "render handle rejected clear");
    }
}
