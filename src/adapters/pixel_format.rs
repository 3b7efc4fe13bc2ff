//! Conversions from the packed RGB [`PixelBuffer`] layout to RGBA framebuffers.
//!
//! [`PixelBuffer`]: crate::core::data::pixel_buffer::PixelBuffer

use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialRgbPixel { rgb_len: usize },
    LengthMismatch { pixels: usize, rgba_len: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialRgbPixel { rgb_len } => {
                write!(f, "rgb length {} is not a whole number of pixels", rgb_len)
            }
            Self::LengthMismatch { pixels, rgba_len } => write!(
                f,
                "{} rgb pixels do not fit an rgba buffer of {} bytes",
                pixels, rgba_len
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Expands `rgb` into `rgba` with every pixel opaque.
pub fn copy_rgb_to_rgba(rgb: &[u8], rgba: &mut [u8]) -> Result<(), PixelFormatError> {
    if rgb.len() % 3 != 0 {
        return Err(PixelFormatError::PartialRgbPixel { rgb_len: rgb.len() });
    }

    let pixels = rgb.len() / 3;
    if rgba.len() != pixels * 4 {
        return Err(PixelFormatError::LengthMismatch {
            pixels,
            rgba_len: rgba.len(),
        });
    }

    for (src, dst) in rgb.chunks_exact(3).zip(rgba.chunks_exact_mut(4)) {
        dst[..3].copy_from_slice(src);
        dst[3] = u8::MAX;
    }

    Ok(())
}

/// Paints every pixel of `rgba` with `colour`, opaque. A trailing partial
/// pixel is left untouched.
pub fn fill_rgba(rgba: &mut [u8], colour: Colour) {
    let pixel = [colour.r, colour.g, colour.b, u8::MAX];
    for dst in rgba.chunks_exact_mut(4) {
        dst.copy_from_slice(&pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_pixels_become_opaque_rgba() {
        let rgb = [255, 0, 0, 0, 255, 0, 10, 20, 30];
        let mut rgba = [0; 12];

        copy_rgb_to_rgba(&rgb, &mut rgba).unwrap();

        assert_eq!(rgba, [255, 0, 0, 255, 0, 255, 0, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn empty_buffers_are_accepted() {
        assert_eq!(copy_rgb_to_rgba(&[], &mut []), Ok(()));
    }

    #[test]
    fn partial_rgb_pixel_is_rejected() {
        let mut rgba = [0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut rgba),
            Err(PixelFormatError::PartialRgbPixel { rgb_len: 4 })
        );
    }

    #[test]
    fn mismatched_lengths_leave_destination_untouched() {
        let mut rgba = [7; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut rgba),
            Err(PixelFormatError::LengthMismatch {
                pixels: 2,
                rgba_len: 4
            })
        );
        assert_eq!(rgba, [7; 4]);
    }

    #[test]
    fn fill_paints_whole_pixels_only() {
        let mut rgba = [0; 9];

        fill_rgba(&mut rgba, Colour::rgb(1, 2, 3));

        assert_eq!(rgba, [1, 2, 3, 255, 1, 2, 3, 255, 0]);
    }
}
