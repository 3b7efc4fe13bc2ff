use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, event_loop_proxy)
    }
}
