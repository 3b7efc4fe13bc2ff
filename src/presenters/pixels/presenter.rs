use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::{copy_rgb_to_rgba, fill_rgba};
use crate::controllers::run::data::frame_data::FrameData;
use crate::controllers::run::ports::presenter::RunControllerPresenterPort;
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::render_frame::render_frame::{FramePalette, render_frame};
use crate::input::gui::app::ports::presenter::{FinishedRun, GuiPresenterPort};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    palette: FramePalette,
    width: u32,
    height: u32,
    current: Option<FrameData>,
    last_finished: Option<FinishedRun>,
    drawn_style: Option<PlotStyleKinds>,
    dirty: bool,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            palette: FramePalette::default(),
            width: size.width,
            height: size.height,
            current: None,
            last_finished: None,
            drawn_style: None,
            dirty: true,
        })
    }

    fn share_adapter(&self) -> Arc<dyn RunControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn RunControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        plot_style: PlotStyleKinds,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.take_pending();

        if self.dirty || self.drawn_style != Some(plot_style) {
            self.draw(plot_style);
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the plot underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.dirty = true;
        Ok(())
    }

    fn last_finished(&self) -> Option<FinishedRun> {
        self.last_finished
    }
}

impl PixelsPresenter {
    fn take_pending(&mut self) {
        let pending = self.adapter.take_pending();

        if pending.cleared {
            self.current = None;
            self.last_finished = None;
            self.dirty = true;
        }

        if let Some(frame) = pending.frame {
            let stale = self
                .current
                .as_ref()
                .is_some_and(|current| frame.generation < current.generation);

            if !stale {
                self.current = Some(frame);
                self.dirty = true;
            }
        }

        if pending.finished.is_some() {
            self.last_finished = pending.finished;
        }
    }

    fn draw(&mut self, plot_style: PlotStyleKinds) {
        let dest = self.pixels.frame_mut();

        match &self.current {
            Some(data) => {
                let converted = render_frame(
                    &data.frame,
                    plot_style,
                    self.width,
                    self.height,
                    &self.palette,
                )
                .map_err(|err| err.to_string())
                .and_then(|buffer| {
                    copy_rgb_to_rgba(buffer.buffer(), dest).map_err(|err| err.to_string())
                });

                if let Err(message) = converted {
                    warn!("could not draw frame: {}", message);
                    return;
                }
            }
            None => fill_rgba(dest, self.palette.background),
        }

        self.drawn_style = Some(plot_style);
        self.dirty = false;
    }
}
