use std::{fmt, io};

pub mod repl;
pub mod views;

#[derive(Debug)]
pub enum ReplError {
    Io(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Io(error) => write!(f, "Console error: {}", error),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Io(error)
    }
}
