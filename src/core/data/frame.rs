use std::time::Duration;

use crate::core::data::highlight::{Highlight, HighlightKind};

/// One renderable snapshot of a sequence mid-sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    values: Vec<u32>,
    highlight: Highlight,
    delay: Duration,
}

impl Frame {
    #[must_use]
    pub fn new(values: Vec<u32>, highlight: Highlight, delay: Duration) -> Self {
        Self {
            values,
            highlight,
            delay,
        }
    }

    /// Snapshot of a sequence with nothing highlighted and no pacing.
    #[must_use]
    pub fn idle(values: &[u32]) -> Self {
        Self::new(values.to_vec(), Highlight::None, Duration::ZERO)
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn classification(&self) -> Vec<HighlightKind> {
        self.highlight.classify(self.values.len())
    }

    /// Value at `index` scaled against the largest value, in `[0, 1]`.
    ///
    /// An all-zero sequence normalizes to zero everywhere.
    #[must_use]
    pub fn normalized(&self, index: usize) -> f64 {
        let max = self.max_value();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.values[index]) / f64::from(max)
    }
}
