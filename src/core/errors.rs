use std::{error::Error, fmt};

/// Raised when a user-supplied name matches no variant of a kind enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}', expected one of: {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl Error for ParseKindError {}
