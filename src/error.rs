use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading an image header
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Header too short: got {len} of {expected} bytes")]
    TooShort { len: usize, expected: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InspectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        // `img.png/x.png` fails with ENOTDIR: nothing exists there either
        if matches!(
            source.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        ) {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
