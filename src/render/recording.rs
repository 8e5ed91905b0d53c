use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{Theme, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ChartOption, RenderEngine, RenderHandle};

/// One interaction with the engine, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Init {
        handle: u64,
        theme: Theme,
        container: Viewport,
    },
    SetOption {
        handle: u64,
        option: ChartOption,
        replace: bool,
    },
    Resize {
        handle: u64,
        container: Viewport,
    },
    Clear {
        handle: u64,
    },
    Dispose {
        handle: u64,
    },
}

impl EngineCall {
    #[must_use]
    pub fn handle(&self) -> u64 {
        match self {
            Self::Init { handle, .. }
            | Self::SetOption { handle, .. }
            | Self::Resize { handle, .. }
            | Self::Clear { handle }
            | Self::Dispose { handle } => *handle,
        }
    }
}

#[derive(Debug, Default)]
struct LogState {
    calls: Vec<EngineCall>,
    next_handle: u64,
    live: Vec<u64>,
}

/// Call log shared by a `RecordingEngine`, its clones and their handles.
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    state: Rc<RefCell<LogState>>,
}

impl RecordingLog {
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.borrow().calls.clone()
    }

    /// Handles created and not yet disposed.
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.state.borrow().live.len()
    }

    #[must_use]
    pub fn init_count(&self) -> usize {
        self.count_matching(|call| matches!(call, EngineCall::Init { .. }))
    }

    #[must_use]
    pub fn dispose_count(&self) -> usize {
        self.count_matching(|call| matches!(call, EngineCall::Dispose { .. }))
    }

    #[must_use]
    pub fn count_matching(&self, predicate: impl Fn(&EngineCall) -> bool) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| predicate(*call))
            .count()
    }

    /// Option most recently applied to any handle.
    #[must_use]
    pub fn last_option(&self) -> Option<ChartOption> {
        self.state
            .borrow()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                EngineCall::SetOption { option, .. } => Some(option.clone()),
                _ => None,
            })
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: EngineCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn open_handle(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        let id = state.next_handle;
        state.live.push(id);
        id
    }

    fn close_handle(&self, id: u64) {
        self.state.borrow_mut().live.retain(|live| *live != id);
    }
}

/// Headless engine that records every call into a shared `RecordingLog`.
///
/// Clones share the same log, so one log can observe several bindings.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    log: RecordingLog,
    reject_options: bool,
}

impl RecordingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles created by this engine fail every `set_option` call.
    #[must_use]
    pub fn with_rejected_options(mut self) -> Self {
        self.reject_options = true;
        self
    }

    #[must_use]
    pub fn log(&self) -> RecordingLog {
        self.log.clone()
    }
}

#[derive(Debug)]
pub struct RecordingHandle {
    id: u64,
    log: RecordingLog,
    reject_options: bool,
}

impl RecordingHandle {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl RenderEngine for RecordingEngine {
    type Handle = RecordingHandle;

    fn init(&mut self, container: Viewport, theme: Theme) -> DashboardResult<RecordingHandle> {
        if !container.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: container.width,
                height: container.height,
            });
        }
        let id = self.log.open_handle();
        self.log.record(EngineCall::Init {
            handle: id,
            theme,
            container,
        });
        Ok(RecordingHandle {
            id,
            log: self.log.clone(),
            reject_options: self.reject_options,
        })
    }
}

impl RenderHandle for RecordingHandle {
    fn set_option(&mut self, option: &ChartOption, replace: bool) -> DashboardResult<()> {
        self.log.record(EngineCall::SetOption {
            handle: self.id,
            option: option.clone(),
            replace,
        });
        if self.reject_options {
            return Err(DashboardError::Backend(format!(
                "handle {} rejected option",
                self.id
            )));
        }
        Ok(())
    }

    fn resize(&mut self, container: Viewport) -> DashboardResult<()> {
        self.log.record(EngineCall::Resize {
            handle: self.id,
            container,
        });
        Ok(())
    }

    fn clear(&mut self) -> DashboardResult<()> {
        self.log.record(EngineCall::Clear { handle: self.id });
        Ok(())
    }

    fn dispose(self) {
        self.log.record(EngineCall::Dispose { handle: self.id });
        self.log.close_handle(self.id);
    }
}
