use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes one rasterized frame into an image file.
pub trait ImageWriterPort {
    /// File extension, without the dot, for paths this writer produces.
    fn extension(&self) -> &'static str;

    fn write_image(&self, buffer: &PixelBuffer, path: &Path) -> std::io::Result<()>;
}
