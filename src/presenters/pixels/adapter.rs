use std::sync::{Mutex, MutexGuard, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::run::data::frame_data::FrameData;
use crate::controllers::run::events::run_event::RunEvent;
use crate::controllers::run::ports::presenter::RunControllerPresenterPort;
use crate::input::gui::app::ports::presenter::FinishedRun;
use crate::input::gui::events::GuiEvent;

/// What the UI thread has not picked up yet. Only the newest frame is kept.
#[derive(Debug, Default)]
pub struct PendingRunEvents {
    pub frame: Option<FrameData>,
    pub finished: Option<FinishedRun>,
    pub cleared: bool,
}

impl PendingRunEvents {
    fn record(&mut self, event: RunEvent) {
        match event {
            RunEvent::Frame(frame) => {
                self.frame = Some(frame);
                self.cleared = false;
            }
            RunEvent::Finished {
                generation,
                outcome,
                frames,
            } => {
                self.finished = Some(FinishedRun {
                    generation,
                    outcome,
                    frames,
                });
            }
            RunEvent::Cleared => {
                self.frame = None;
                self.finished = None;
                self.cleared = true;
            }
        }
    }
}

/// Thread-safe mailbox between the sort worker and the UI thread.
pub struct PixelsAdapter {
    pending: Mutex<PendingRunEvents>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl RunControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RunEvent) {
        self.lock().record(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            pending: Mutex::new(PendingRunEvents::default()),
            event_loop_proxy,
        }
    }

    pub fn take_pending(&self) -> PendingRunEvents {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, PendingRunEvents> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
