use crate::core::{Theme, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartOption, RenderEngine, RenderHandle};

/// Headless engine used for tests and server-side usage.
///
/// Handles still validate incoming options so malformed configurations are
/// caught before a real backend is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

#[derive(Debug)]
pub struct NullHandle {
    pub theme: Theme,
    pub container: Viewport,
    pub option: Option<ChartOption>,
}

impl RenderEngine for NullEngine {
    type Handle = NullHandle;

    fn init(&mut self, container: Viewport, theme: Theme) -> DashboardResult<NullHandle> {
        if !container.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: container.width,
                height: container.height,
            });
        }
        Ok(NullHandle {
            theme,
            container,
            option: None,
        })
    }
}

impl RenderHandle for NullHandle {
    fn set_option(&mut self, option: &ChartOption, _replace: bool) -> DashboardResult<()> {
        option.validate()?;
        self.option = Some(option.clone());
        Ok(())
    }

    fn resize(&mut self, container: Viewport) -> DashboardResult<()> {
        if !container.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: container.width,
                height: container.height,
            });
        }
        self.container = container;
        Ok(())
    }

    fn clear(&mut self) -> DashboardResult<()> {
        self.option = None;
        Ok(())
    }

    fn dispose(self) {}
}
