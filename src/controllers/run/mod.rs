//! Run controller for paced sorting runs.
//!
//! Owns the current sequence and at most one worker thread executing a sort
//! over it. Everything the worker produces flows out through
//! [`RunControllerPresenterPort`] as [`RunEvent`]s.

pub mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod settings;

pub use controller::{RunController, StartOutcome};
pub use data::frame_data::FrameData;
pub use errors::ControllerError;
pub use events::run_event::{RunEvent, RunOutcome};
pub use ports::presenter::RunControllerPresenterPort;
pub use settings::{ConfigError, RunSettings};
