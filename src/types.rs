use serde::Serialize;
use std::fmt;

/// Pixel size decoded from an IHDR-style header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a single header inspection found.
///
/// Failures are ordinary values here; nothing about a bad path is fatal to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    FileNotFound,
    InvalidFile,
    ReadError { reason: String },
    Dimensions(Dimensions),
}

impl From<Dimensions> for Outcome {
    fn from(dims: Dimensions) -> Self {
        Self::Dimensions(dims)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => f.write_str("File not found"),
            Self::InvalidFile => f.write_str("Invalid file"),
            Self::ReadError { reason } => write!(f, "Read error: {}", reason),
            Self::Dimensions(dims) => dims.fmt(f),
        }
    }
}
