//! Step-by-step visualization of classic comparison sorts.
//!
//! A [`RunController`] sorts a random sequence on a worker thread, emitting a
//! [`Frame`](crate::core::data::frame::Frame) after every visible step. Presenters
//! turn those frames into terminal text, PPM images or a live window.

pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::{
    CliArgs, CliController, CliError, CliSummary, FrameRendererPort, ImageWriterPort,
};
pub use crate::controllers::run::{
    ConfigError, ControllerError, FrameData, RunController, RunControllerPresenterPort, RunEvent,
    RunOutcome, RunSettings, StartOutcome,
};
pub use crate::core::actions::render_frame::kinds::PlotStyleKinds;
pub use crate::core::actions::sort::kinds::SortAlgorithmKinds;
pub use crate::presenters::channel::ChannelPresenter;
pub use crate::presenters::file::{PpmFilePresenter, PpmFrameSequencePresenter};
pub use crate::presenters::text::TextPresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
