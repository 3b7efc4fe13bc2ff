use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::controllers::run::settings::{
    ConfigError, DEFAULT_DELAY, DEFAULT_SEQUENCE_SIZE, RunSettings,
};
use crate::core::actions::generate_sequence::generate_sequence::SamplingPolicy;
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::data::value_range::ValueRange;
use crate::presenters::text::DEFAULT_TEXT_HEIGHT;

/// Run one paced sort and print or save every frame
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sorting_visualizer", version, about)]
pub struct CliArgs {
    /// Sorting algorithm: selection, bubble, insertion, merge or quick
    #[arg(short, long, default_value_t = SortAlgorithmKinds::default())]
    pub algorithm: SortAlgorithmKinds,

    /// Number of values to sort
    #[arg(short, long, default_value_t = DEFAULT_SEQUENCE_SIZE)]
    pub size: usize,

    /// Pause after each frame, in milliseconds
    #[arg(short, long = "delay-ms", default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Plot style for image output: scatter, bar or stem
    #[arg(long, default_value_t = PlotStyleKinds::default())]
    pub style: PlotStyleKinds,

    /// Smallest value that may be drawn
    #[arg(long, default_value_t = ValueRange::default().min())]
    pub min: u32,

    /// Largest value that may be drawn
    #[arg(long, default_value_t = ValueRange::default().max())]
    pub max: u32,

    /// How values are drawn: prefer-distinct, distinct or replacement
    #[arg(long, default_value_t = SamplingPolicy::default())]
    pub sampling: SamplingPolicy,

    /// Seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write frames as PPM images into this directory instead of printing them
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 360)]
    pub height: u32,

    /// Lines per frame when printing text
    #[arg(long, default_value_t = DEFAULT_TEXT_HEIGHT)]
    pub text_height: usize,

    /// Stop the run after this many frames (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub stop_after: Option<u64>,
}

impl CliArgs {
    pub fn settings(&self) -> Result<RunSettings, ConfigError> {
        Ok(RunSettings::new(self.size, Duration::from_millis(self.delay_ms))?
            .with_value_range(ValueRange::new(self.min, self.max)?)?
            .with_sampling(self.sampling)?
            .with_plot_style(self.style)
            .with_algorithm(self.algorithm)
            .with_seed(self.seed))
    }
}
