mod null_engine;
mod option;
mod recording;

pub use null_engine::{NullEngine, NullHandle};
pub use option::{
    AxisLabelOption, AxisType, CategoryAxisOption, ChartOption, LegendOption, SeriesOption,
    TitleOption, TooltipOption, TooltipTrigger, ValueAxisOption,
};
pub use recording::{EngineCall, RecordingEngine, RecordingHandle, RecordingLog};

use crate::core::{Theme, Viewport};
use crate::error::DashboardResult;

/// Entry point of an external rendering engine.
///
/// Engines create one handle per mounted container. The theme is fixed for
/// the lifetime of a handle.
pub trait RenderEngine {
    type Handle: RenderHandle;

    fn init(&mut self, container: Viewport, theme: Theme) -> DashboardResult<Self::Handle>;
}

/// One live chart instance owned by exactly one binding.
///
/// `dispose` consumes the handle, so nothing can reach a disposed instance.
pub trait RenderHandle {
    /// Applies `option`; with `replace` set, the previous option is dropped
    /// entirely instead of merged.
    fn set_option(&mut self, option: &ChartOption, replace: bool) -> DashboardResult<()>;

    fn resize(&mut self, container: Viewport) -> DashboardResult<()>;

    /// Removes every visual element while keeping the instance alive.
    fn clear(&mut self) -> DashboardResult<()>;

    fn dispose(self);
}
