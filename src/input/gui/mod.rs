//! Windowed front end.
//!
//! winit owns the window and event loop, pixels the framebuffer the frames are
//! rasterized into, and egui the control panel drawn on top.

pub mod app;
pub mod commands;
pub mod events;
