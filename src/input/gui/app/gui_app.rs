use egui::Context;
use egui_winit::State as EguiWinitState;
use log::warn;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::run::controller::RunController;
use crate::controllers::run::settings::{MAX_DELAY, MAX_SEQUENCE_SIZE, MIN_SEQUENCE_SIZE};
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAction, GuiAppState, status_line};
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: RunController,
    ui_state: GuiAppState,
    /// Finished runs below this generation predate the current sequence.
    status_generation: u64,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: RunController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let ui_state = GuiAppState::from_settings(controller.settings());

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state,
            status_generation: 0,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter
            .render(egui_output, &self.egui_ctx, self.ui_state.plot_style)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            warn!("could not resize framebuffer to {}x{}: {}", width, height, err);
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.status();
        let running = self.controller.is_running();
        let mut actions = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.heading("Sorting Visualizer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(
                            &mut self.ui_state.size,
                            MIN_SEQUENCE_SIZE..=MAX_SEQUENCE_SIZE,
                        ));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Delay (ms):");
                        ui.add(
                            egui::Slider::new(
                                &mut self.ui_state.delay_ms,
                                0..=MAX_DELAY.as_millis() as u64,
                            )
                            .logarithmic(true),
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Plot:");
                        egui::ComboBox::from_id_source("plot_style")
                            .selected_text(self.ui_state.plot_style.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PlotStyleKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.ui_state.plot_style,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Algorithm:");
                        egui::ComboBox::from_id_source("sort_algorithm")
                            .selected_text(self.ui_state.algorithm.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in SortAlgorithmKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.ui_state.algorithm,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Create").clicked() {
                            actions.push(GuiAction::Create);
                        }
                        if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                            actions.push(GuiAction::Start);
                        }
                        if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                            actions.push(GuiAction::Stop);
                        }
                        if ui.button("Reset").clicked() {
                            actions.push(GuiAction::Reset);
                        }
                    });

                    ui.separator();
                    ui.label(status);
                    if let Some(message) = &self.last_error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for action in actions {
            self.apply(action);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    fn status(&mut self) -> String {
        let last_finished = self
            .presenter
            .last_finished()
            .filter(|run| run.generation >= self.status_generation);

        status_line(
            self.controller.is_running(),
            self.controller.sequence().is_some(),
            self.controller.settings().algorithm(),
            last_finished,
        )
    }

    fn apply(&mut self, action: GuiAction) {
        match self.ui_state.apply_to(*self.controller.settings()) {
            Ok(settings) => self.controller.set_settings(settings),
            Err(err) => {
                self.last_error_message = Some(err.to_string());
                return;
            }
        }

        let result = match action {
            GuiAction::Create => {
                self.status_generation = self.controller.generation() + 1;
                self.controller.create().map(|_| ())
            }
            GuiAction::Start => self.controller.start().map(|_| ()),
            GuiAction::Stop => {
                self.controller.stop();
                Ok(())
            }
            GuiAction::Reset => {
                self.controller.reset();
                Ok(())
            }
        };

        self.last_error_message = result.err().map(|err| err.to_string());
    }
}
