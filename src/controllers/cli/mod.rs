//! Command-line front end: one paced sort, frames handed to a renderer.

pub mod args;
mod controller;
pub mod errors;
pub mod ports;

pub use args::CliArgs;
pub use controller::{CliController, CliSummary};
pub use errors::CliError;
pub use ports::frame_renderer::FrameRendererPort;
pub use ports::image_writer::ImageWriterPort;
