use rand::Rng;
use rand::seq::index;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::value_range::ValueRange;
use crate::core::errors::ParseKindError;

/// How values are drawn from the range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SamplingPolicy {
    /// Without replacement; every value is distinct.
    Distinct,
    /// Independent uniform draws; duplicates allowed.
    WithReplacement,
    /// Distinct when the range is large enough, otherwise with replacement.
    #[default]
    PreferDistinct,
}

impl SamplingPolicy {
    pub const ALL: &'static [Self] = &[Self::PreferDistinct, Self::Distinct, Self::WithReplacement];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::WithReplacement => "replacement",
            Self::PreferDistinct => "prefer-distinct",
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SamplingPolicy {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError {
                kind: "sampling policy",
                value: s.to_owned(),
                expected: Self::ALL.iter().map(|p| p.name()).collect(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateSequenceError {
    InvalidSize { size: usize, max_size: usize },
    RangeTooSmall { size: usize, range_len: u64 },
}

impl fmt::Display for GenerateSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max_size } => {
                write!(
                    f,
                    "sequence size {} must be between 1 and {}",
                    size, max_size
                )
            }
            Self::RangeTooSmall { size, range_len } => {
                write!(
                    f,
                    "cannot draw {} distinct values from a range of {}",
                    size, range_len
                )
            }
        }
    }
}

impl Error for GenerateSequenceError {}

/// Produces `size` values drawn from `range` according to `policy`.
///
/// Fails with [`GenerateSequenceError::InvalidSize`] when `size` is zero or
/// above `max_size`.
pub fn generate_sequence<R: Rng + ?Sized>(
    size: usize,
    range: ValueRange,
    policy: SamplingPolicy,
    max_size: usize,
    rng: &mut R,
) -> Result<Vec<u32>, GenerateSequenceError> {
    if size < 1 || size > max_size {
        return Err(GenerateSequenceError::InvalidSize { size, max_size });
    }

    let fits_distinct = size as u64 <= range.len();

    match policy {
        SamplingPolicy::Distinct if !fits_distinct => Err(GenerateSequenceError::RangeTooSmall {
            size,
            range_len: range.len(),
        }),
        SamplingPolicy::Distinct => Ok(sample_distinct(size, range, rng)),
        SamplingPolicy::PreferDistinct if fits_distinct => Ok(sample_distinct(size, range, rng)),
        SamplingPolicy::PreferDistinct | SamplingPolicy::WithReplacement => {
            Ok(sample_with_replacement(size, range, rng))
        }
    }
}

fn sample_distinct<R: Rng + ?Sized>(size: usize, range: ValueRange, rng: &mut R) -> Vec<u32> {
    let range_len = usize::try_from(range.len()).unwrap_or(usize::MAX);

    index::sample(rng, range_len, size)
        .into_iter()
        .map(|offset| range.min() + offset as u32)
        .collect()
}

fn sample_with_replacement<R: Rng + ?Sized>(
    size: usize,
    range: ValueRange,
    rng: &mut R,
) -> Vec<u32> {
    (0..size)
        .map(|_| rng.gen_range(range.min()..=range.max()))
        .collect()
}
