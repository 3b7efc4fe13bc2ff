use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::run::events::run_event::RunOutcome;
use crate::controllers::run::ports::presenter::RunControllerPresenterPort;
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::input::gui::events::GuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedRun {
    pub generation: u64,
    pub outcome: RunOutcome,
    pub frames: u64,
}

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        plot_style: PlotStyleKinds,
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn RunControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Most recent run that reported its end, if any since the last reset.
    fn last_finished(&self) -> Option<FinishedRun>;
}
