use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    InvalidSize {
        width: u32,
        height: u32,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected_size = dimensions_to_buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * 3;

        Some(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * 3;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10).unwrap();

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 10),
            Err(PixelBufferError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            PixelBuffer::new(10, 0),
            Err(PixelBufferError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(1, 1), Some(Colour::rgb(255, 255, 0)));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgb_triplet() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let result = buffer.set_pixel(1, 1, Colour::rgb(255, 0, 0));

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(buffer.pixel(1, 1), Some(Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let result = buffer.set_pixel(3, 1, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 1,
                width: 3,
                height: 3
            })
        );
        assert_eq!(buffer.pixel(3, 1), None);
    }
}
