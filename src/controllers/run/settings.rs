//! Validated configuration for a sort run.
//!
//! Every value the engine sees passes through [`RunSettings`], so the sort
//! engine itself never validates input.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::core::actions::generate_sequence::generate_sequence::SamplingPolicy;
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::data::value_range::{ValueRange, ValueRangeError};

pub const MIN_SEQUENCE_SIZE: usize = 1;
pub const MAX_SEQUENCE_SIZE: usize = 300;
pub const DEFAULT_SEQUENCE_SIZE: usize = 30;
pub const MAX_DELAY: Duration = Duration::from_secs(10);
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize { size: usize, min: usize, max: usize },
    InvalidDelay { delay: Duration, max: Duration },
    InvalidRange(ValueRangeError),
    RangeTooSmall { size: usize, range_len: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, min, max } => {
                write!(f, "size {} must be between {} and {}", size, min, max)
            }
            Self::InvalidDelay { delay, max } => {
                write!(
                    f,
                    "delay {} ms must not exceed {} ms",
                    delay.as_millis(),
                    max.as_millis()
                )
            }
            Self::InvalidRange(err) => write!(f, "invalid value range: {}", err),
            Self::RangeTooSmall { size, range_len } => {
                write!(
                    f,
                    "{} distinct values do not fit in a range of {}",
                    size, range_len
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValueRangeError> for ConfigError {
    fn from(err: ValueRangeError) -> Self {
        Self::InvalidRange(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    size: usize,
    delay: Duration,
    plot_style: PlotStyleKinds,
    algorithm: SortAlgorithmKinds,
    value_range: ValueRange,
    sampling: SamplingPolicy,
    seed: Option<u64>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SEQUENCE_SIZE,
            delay: DEFAULT_DELAY,
            plot_style: PlotStyleKinds::default(),
            algorithm: SortAlgorithmKinds::default(),
            value_range: ValueRange::default(),
            sampling: SamplingPolicy::default(),
            seed: None,
        }
    }
}

impl RunSettings {
    pub fn new(size: usize, delay: Duration) -> Result<Self, ConfigError> {
        Self::default().with_size(size)?.with_delay(delay)
    }

    pub fn with_size(self, size: usize) -> Result<Self, ConfigError> {
        Self { size, ..self }.validated()
    }

    pub fn with_delay(self, delay: Duration) -> Result<Self, ConfigError> {
        Self { delay, ..self }.validated()
    }

    pub fn with_value_range(self, value_range: ValueRange) -> Result<Self, ConfigError> {
        Self {
            value_range,
            ..self
        }
        .validated()
    }

    pub fn with_sampling(self, sampling: SamplingPolicy) -> Result<Self, ConfigError> {
        Self { sampling, ..self }.validated()
    }

    #[must_use]
    pub fn with_plot_style(self, plot_style: PlotStyleKinds) -> Self {
        Self { plot_style, ..self }
    }

    #[must_use]
    pub fn with_algorithm(self, algorithm: SortAlgorithmKinds) -> Self {
        Self { algorithm, ..self }
    }

    #[must_use]
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !(MIN_SEQUENCE_SIZE..=MAX_SEQUENCE_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                min: MIN_SEQUENCE_SIZE,
                max: MAX_SEQUENCE_SIZE,
            });
        }

        if self.delay > MAX_DELAY {
            return Err(ConfigError::InvalidDelay {
                delay: self.delay,
                max: MAX_DELAY,
            });
        }

        if self.sampling == SamplingPolicy::Distinct && self.size as u64 > self.value_range.len() {
            return Err(ConfigError::RangeTooSmall {
                size: self.size,
                range_len: self.value_range.len(),
            });
        }

        Ok(self)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn plot_style(&self) -> PlotStyleKinds {
        self.plot_style
    }

    #[must_use]
    pub fn algorithm(&self) -> SortAlgorithmKinds {
        self.algorithm
    }

    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    #[must_use]
    pub fn sampling(&self) -> SamplingPolicy {
        self.sampling
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
