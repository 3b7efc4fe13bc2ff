/// Per-index classification used to colour a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Default,
    Active,
}

/// Indices distinguished in a single frame.
///
/// Every emission carries its own highlight; pairs may name the same index
/// twice (e.g. a selection step where the minimum is already in place).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Idle state: nothing is active.
    None,
    /// Two touched indices, such as a compared or swapped pair.
    Pair(usize, usize),
    /// Every index in `start..=end`, such as a freshly merged subrange.
    Range { start: usize, end: usize },
}

impl Highlight {
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Self::None => false,
            Self::Pair(a, b) => index == a || index == b,
            Self::Range { start, end } => (start..=end).contains(&index),
        }
    }

    #[must_use]
    pub fn kind_at(&self, index: usize) -> HighlightKind {
        if self.contains(index) {
            HighlightKind::Active
        } else {
            HighlightKind::Default
        }
    }

    /// Classifies every index of a sequence of length `len`.
    #[must_use]
    pub fn classify(&self, len: usize) -> Vec<HighlightKind> {
        (0..len).map(|index| self.kind_at(index)).collect()
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::None
    }
}
