pub mod frame_renderer;
pub mod image_writer;
