use crate::core::data::frame::Frame;

/// Outbound port the CLI hands each frame to, in emission order.
pub trait FrameRendererPort {
    fn render(&mut self, frame: &Frame) -> std::io::Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
