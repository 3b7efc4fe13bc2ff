use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueRangeError {
    Inverted { min: u32, max: u32 },
}

impl fmt::Display for ValueRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { min, max } => {
                write!(f, "value range minimum {} exceeds maximum {}", min, max)
            }
        }
    }
}

impl Error for ValueRangeError {}

/// Closed range `[min, max]` that generated values are drawn from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValueRange {
    min: u32,
    max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ValueRangeError> {
        if min > max {
            return Err(ValueRangeError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of distinct values in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::from(self.max) - u64::from(self.min) + 1
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}
