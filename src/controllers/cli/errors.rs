use std::{error::Error, fmt, io};

use crate::controllers::run::errors::ControllerError;

#[derive(Debug)]
pub enum CliError {
    Controller(ControllerError),
    Io(io::Error),
    Disconnected,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller(err) => write!(f, "run failed: {}", err),
            Self::Io(err) => write!(f, "could not write frame: {}", err),
            Self::Disconnected => write!(f, "run ended without reporting a result"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Controller(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Disconnected => None,
        }
    }
}

impl From<ControllerError> for CliError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
