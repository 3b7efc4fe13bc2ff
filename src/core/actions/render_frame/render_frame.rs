use rayon::prelude::*;

use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::data::colour::Colour;
use crate::core::data::frame::Frame;
use crate::core::data::highlight::HighlightKind;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Radius, in pixels, of scatter points and stem caps.
pub const MARKER_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePalette {
    pub background: Colour,
    pub default: Colour,
    pub active: Colour,
}

impl FramePalette {
    #[must_use]
    pub fn colour_for(&self, kind: HighlightKind) -> Colour {
        match kind {
            HighlightKind::Default => self.default,
            HighlightKind::Active => self.active,
        }
    }
}

impl Default for FramePalette {
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            default: Colour::BLUE,
            active: Colour::GREEN,
        }
    }
}

/// Precomputed column layout for one frame on one canvas.
///
/// Columns are `width / (len + 1)` wide; a value's top edge sits at
/// `height - normalized * height`.
struct PlotGeometry {
    column_width: f64,
    half_column: f64,
    height: f64,
    tops: Vec<f64>,
    kinds: Vec<HighlightKind>,
}

impl PlotGeometry {
    fn new(frame: &Frame, width: u32, height: u32) -> Self {
        let column_width = f64::from(width) / (frame.len() + 1) as f64;
        let height = f64::from(height);
        let tops = (0..frame.len())
            .map(|i| height - frame.normalized(i) * height)
            .collect();

        Self {
            column_width,
            half_column: (column_width / 2.0).floor(),
            height,
            tops,
            kinds: frame.classification(),
        }
    }

    fn len(&self) -> usize {
        self.tops.len()
    }

    fn centre_x(&self, index: usize) -> f64 {
        index as f64 * self.column_width + self.half_column
    }

    /// Columns whose marker disc could reach horizontal position `px`.
    fn marker_candidates(&self, px: f64) -> std::ops::Range<usize> {
        if self.len() == 0 || self.column_width <= 0.0 {
            return 0..0;
        }

        let lo = ((px - MARKER_RADIUS - self.half_column) / self.column_width).floor();
        let hi = ((px + MARKER_RADIUS - self.half_column) / self.column_width).ceil();
        let lo = lo.max(0.0) as usize;
        let hi = (hi.max(-1.0) + 1.0).min(self.len() as f64) as usize;

        lo..hi.max(lo)
    }

    fn in_marker(&self, index: usize, px: f64, py: f64) -> bool {
        let dx = px - self.centre_x(index);
        let dy = py - self.tops[index];
        dx * dx + dy * dy <= MARKER_RADIUS * MARKER_RADIUS
    }

    fn in_stem(&self, index: usize, px: f64, py: f64) -> bool {
        (px - self.centre_x(index)).abs() <= 0.5 && py >= self.tops[index] && py <= self.height
    }

    fn in_bar(&self, index: usize, py: f64) -> bool {
        py >= self.tops[index]
    }

    /// Index of the column drawn at pixel centre `(px, py)`, if any.
    ///
    /// Where shapes overlap the later column wins, matching draw order.
    fn column_at(&self, style: PlotStyleKinds, px: f64, py: f64) -> Option<usize> {
        match style {
            PlotStyleKinds::Bar => {
                if self.column_width <= 0.0 {
                    return None;
                }
                let index = (px / self.column_width).floor() as usize;
                (index < self.len() && self.in_bar(index, py)).then_some(index)
            }
            PlotStyleKinds::Scatter => self
                .marker_candidates(px)
                .rev()
                .find(|&i| self.in_marker(i, px, py)),
            PlotStyleKinds::Stem => self
                .marker_candidates(px)
                .rev()
                .find(|&i| self.in_stem(i, px, py) || self.in_marker(i, px, py)),
        }
    }
}

/// Rasterizes `frame` into a `width` x `height` RGB buffer.
///
/// Rows are filled in parallel.
pub fn render_frame(
    frame: &Frame,
    style: PlotStyleKinds,
    width: u32,
    height: u32,
    palette: &FramePalette,
) -> Result<PixelBuffer, PixelBufferError> {
    if width == 0 || height == 0 {
        return Err(PixelBufferError::InvalidSize { width, height });
    }

    let geometry = PlotGeometry::new(frame, width, height);
    let row_len = width as usize * 3;
    let mut data = vec![0u8; row_len * height as usize];

    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f64 + 0.5;
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let px = x as f64 + 0.5;
                let colour = geometry
                    .column_at(style, px, py)
                    .map_or(palette.background, |i| palette.colour_for(geometry.kinds[i]));

                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        });

    PixelBuffer::from_data(width, height, data)
}
