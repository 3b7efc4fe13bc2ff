use std::error::Error;
use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::run::controller::RunController;
use crate::controllers::run::settings::RunSettings;
use crate::input::gui::app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: RunSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            settings: RunSettings::default(),
            _phantom: PhantomData,
        }
    }

    pub fn with_settings(mut self, settings: RunSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Sorting Visualizer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = RunController::new(self.settings, presenter.share_adapter());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut redraw_pending = true;

        info!("gui started");

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (_, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!("render error: {}", err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
