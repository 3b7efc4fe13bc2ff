use crate::controllers::cli::ports::frame_renderer::FrameRendererPort;
use crate::core::data::frame::Frame;
use crate::core::data::highlight::HighlightKind;
use std::io::Write;

pub const DEFAULT_TEXT_HEIGHT: usize = 12;

const DEFAULT_CELL: char = '#';
const ACTIVE_CELL: char = '@';

/// Draws `frame` as `height` lines of text, one character column per value.
///
/// Columns grow from the bottom line. Any non-zero value fills at least one
/// cell; trailing blanks are trimmed from each line.
pub fn render_text(frame: &Frame, height: usize) -> String {
    let kinds = frame.classification();
    let max = u64::from(frame.max_value());
    let filled: Vec<usize> = frame
        .values()
        .iter()
        .map(|&value| match max {
            0 => 0,
            _ => (u64::from(value) * height as u64).div_ceil(max) as usize,
        })
        .collect();

    let mut out = String::with_capacity((frame.len() + 1) * height);
    for row in (1..=height).rev() {
        let line: String = filled
            .iter()
            .zip(&kinds)
            .map(|(&cells, kind)| match (cells >= row, kind) {
                (false, _) => ' ',
                (true, HighlightKind::Default) => DEFAULT_CELL,
                (true, HighlightKind::Active) => ACTIVE_CELL,
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Writes each frame to a terminal-like sink followed by a blank line.
pub struct TextPresenter<W: Write> {
    writer: W,
    height: usize,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            height: DEFAULT_TEXT_HEIGHT,
        }
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameRendererPort for TextPresenter<W> {
    fn render(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.writer.write_all(render_text(frame, self.height).as_bytes())?;
        writeln!(self.writer)
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::highlight::Highlight;
    use std::time::Duration;

    #[test]
    fn idle_frame_uses_default_cells() {
        let frame = Frame::idle(&[1, 2, 4]);

        assert_eq!(render_text(&frame, 4), "  #\n  #\n ##\n###\n");
    }

    #[test]
    fn active_columns_use_active_cells() {
        let frame = Frame::new(vec![2, 2, 2], Highlight::Pair(0, 2), Duration::ZERO);

        assert_eq!(render_text(&frame, 2), "@#@\n@#@\n");
    }

    #[test]
    fn zero_values_leave_column_empty() {
        let frame = Frame::idle(&[0, 3]);

        assert_eq!(render_text(&frame, 3), " #\n #\n #\n");
    }

    #[test]
    fn all_zero_frame_is_blank() {
        let frame = Frame::idle(&[0, 0]);

        assert_eq!(render_text(&frame, 2), "\n\n");
    }

    #[test]
    fn presenter_separates_frames_with_blank_line() {
        let mut presenter = TextPresenter::new(Vec::new()).with_height(1);

        presenter.render(&Frame::idle(&[1])).unwrap();
        presenter.render(&Frame::idle(&[1, 1])).unwrap();
        presenter.finish().unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "#\n\n##\n\n");
    }
}
