use crate::controllers::cli::ports::frame_renderer::FrameRendererPort;
use crate::controllers::cli::ports::image_writer::ImageWriterPort;
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::render_frame::render_frame::{FramePalette, render_frame};
use crate::core::data::frame::Frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct PpmFilePresenter {}

impl ImageWriterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn write_image(&self, buffer: &PixelBuffer, path: &Path) -> std::io::Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

        // P6: binary RGB, then width, height and max channel value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Rasterizes every frame and writes it as `frame_NNNNN.<ext>` under one directory.
pub struct PpmFrameSequencePresenter<P: ImageWriterPort = PpmFilePresenter> {
    image_writer: P,
    output_dir: PathBuf,
    style: PlotStyleKinds,
    width: u32,
    height: u32,
    palette: FramePalette,
    written: usize,
}

impl PpmFrameSequencePresenter<PpmFilePresenter> {
    /// Creates `output_dir` if it does not exist yet.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        style: PlotStyleKinds,
        width: u32,
        height: u32,
    ) -> std::io::Result<Self> {
        Self::with_image_writer(PpmFilePresenter::new(), output_dir, style, width, height)
    }
}

impl<P: ImageWriterPort> PpmFrameSequencePresenter<P> {
    pub fn with_image_writer(
        image_writer: P,
        output_dir: impl Into<PathBuf>,
        style: PlotStyleKinds,
        width: u32,
        height: u32,
    ) -> std::io::Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            image_writer,
            output_dir,
            style,
            width,
            height,
            palette: FramePalette::default(),
            written: 0,
        })
    }

    pub fn with_palette(mut self, palette: FramePalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("frame_{:05}.{}", index, self.image_writer.extension()))
    }
}

impl<P: ImageWriterPort> FrameRendererPort for PpmFrameSequencePresenter<P> {
    fn render(&mut self, frame: &Frame) -> std::io::Result<()> {
        let buffer = render_frame(frame, self.style, self.width, self.height, &self.palette)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

        let path = self.frame_path(self.written);
        self.image_writer.write_image(&buffer, &path)?;
        debug!("wrote {}", path.display());

        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        info!(
            "wrote {} frames to {}",
            self.written,
            self.output_dir.display()
        );
        Ok(())
    }
}
