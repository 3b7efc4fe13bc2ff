use std::str::FromStr;

use crate::core::errors::ParseKindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithmKinds {
    Selection,
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithmKinds {
    pub const ALL: &'static [Self] = &[
        Self::Selection,
        Self::Bubble,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Selection => "Selection",
            Self::Bubble => "Bubble",
            Self::Insertion => "Insertion",
            Self::Merge => "Merge",
            Self::Quick => "Quick",
        }
    }

    /// Whether equal values keep their relative order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Insertion | Self::Merge)
    }
}

impl Default for SortAlgorithmKinds {
    fn default() -> Self {
        Self::Selection
    }
}

impl std::fmt::Display for SortAlgorithmKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for SortAlgorithmKinds {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError {
                kind: "sort algorithm",
                value: s.to_owned(),
                expected: Self::ALL.iter().map(|k| k.display_name()).collect(),
            })
    }
}
