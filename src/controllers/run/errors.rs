use std::{error::Error, fmt};

use crate::core::actions::generate_sequence::generate_sequence::GenerateSequenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    NoSequence,
    Generate(GenerateSequenceError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSequence => write!(f, "no sequence created, create one before starting"),
            Self::Generate(err) => write!(f, "sequence generation failed: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSequence => None,
            Self::Generate(err) => Some(err),
        }
    }
}

impl From<GenerateSequenceError> for ControllerError {
    fn from(err: GenerateSequenceError) -> Self {
        Self::Generate(err)
    }
}
