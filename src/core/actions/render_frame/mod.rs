pub mod kinds;
#[allow(clippy::module_inception)]
pub mod render_frame;
