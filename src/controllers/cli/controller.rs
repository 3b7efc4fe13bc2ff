use std::sync::Arc;

use log::info;

use crate::controllers::cli::errors::CliError;
use crate::controllers::cli::ports::frame_renderer::FrameRendererPort;
use crate::controllers::run::controller::{RunController, StartOutcome};
use crate::controllers::run::events::run_event::{RunEvent, RunOutcome};
use crate::controllers::run::settings::RunSettings;
use crate::core::data::highlight::Highlight;
use crate::presenters::channel::ChannelPresenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliSummary {
    pub outcome: RunOutcome,
    /// Frames the sort emitted, as reported by the run.
    pub frames: u64,
    /// Frames handed to the renderer, including the idle frames before and
    /// after a stopped run.
    pub rendered: u64,
    pub sequence: Vec<u32>,
}

/// Drives one run to completion, feeding frames to `R` on the calling thread.
pub struct CliController<R: FrameRendererPort> {
    renderer: R,
    stop_after: Option<u64>,
}

impl<R: FrameRendererPort> CliController<R> {
    pub fn new(renderer: R, stop_after: Option<u64>) -> Self {
        Self {
            renderer,
            stop_after,
        }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn run(&mut self, settings: RunSettings) -> Result<CliSummary, CliError> {
        let (presenter, receiver) = ChannelPresenter::channel();
        let mut controller = RunController::new(settings, Arc::new(presenter));

        controller.create()?;
        let generation = match controller.start()? {
            StartOutcome::Started { generation } | StartOutcome::AlreadyRunning { generation } => {
                generation
            }
        };

        let mut rendered = 0;
        let mut run_frames = 0;
        let mut stopping = false;

        let (outcome, frames) = loop {
            let event = receiver.recv().map_err(|_| CliError::Disconnected)?;

            match event {
                RunEvent::Frame(data) if data.generation != generation => {
                    self.renderer.render(&data.frame)?;
                    rendered += 1;
                }
                RunEvent::Frame(data) if !stopping => {
                    self.renderer.render(&data.frame)?;
                    rendered += 1;
                    run_frames += 1;

                    if self.stop_after == Some(run_frames) {
                        info!("stopping after {} frames", run_frames);
                        stopping = true;
                        controller.stop();
                    }
                }
                RunEvent::Finished {
                    generation: finished,
                    outcome,
                    frames,
                } if finished == generation => break (outcome, frames),
                _ => {}
            }
        };

        controller.wait();

        // A stopped run ends with the idle redraw queued behind `Finished`.
        if stopping {
            let idle_frames = receiver.try_iter().filter_map(|event| match event {
                RunEvent::Frame(data) if data.frame.highlight() == Highlight::None => {
                    Some(data.frame)
                }
                _ => None,
            });

            for frame in idle_frames {
                self.renderer.render(&frame)?;
                rendered += 1;
            }
        }

        self.renderer.finish()?;

        let sequence = controller.sequence().unwrap_or_default().to_vec();

        Ok(CliSummary {
            outcome,
            frames,
            rendered,
            sequence,
        })
    }
}
