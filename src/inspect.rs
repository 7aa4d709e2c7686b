use crate::error::{InspectError, Result};
use crate::formats::png::{HEADER_LEN, HeaderBytes, decode_dimensions};
use crate::types::Outcome;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Reads the first [`HEADER_LEN`] bytes of the file at `path`.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path.
pub fn read_header(path: impl AsRef<Path>) -> Result<HeaderBytes> {
    let path = path.as_ref();

    fs::metadata(path).map_err(|e| InspectError::io(path, e))?;

    let file = File::open(path).map_err(|e| InspectError::io(path, e))?;
    let prefix = read_prefix(file).map_err(|e| InspectError::io(path, e))?;

    header_from_prefix(&prefix)
}

/// Inspects a single file and reports its dimensions, or why there are none.
pub fn inspect(path: impl AsRef<Path>) -> Outcome {
    let path = path.as_ref();
    let outcome = match read_header(path) {
        Ok(header) => Outcome::Dimensions(decode_dimensions(&header)),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "header inspection failed");
            Outcome::from(e)
        }
    };

    debug!(path = %path.display(), %outcome, "inspected");
    outcome
}

/// Same decoding as [`inspect`], for data that is not backed by a path.
pub fn inspect_reader<R: Read>(reader: R) -> Outcome {
    let prefix = match read_prefix(reader) {
        Ok(prefix) => prefix,
        Err(e) => {
            return Outcome::ReadError {
                reason: e.to_string(),
            };
        }
    };

    match header_from_prefix(&prefix) {
        Ok(header) => decode_dimensions(&header).into(),
        Err(e) => e.into(),
    }
}

// `take` + `read_to_end` keeps reading through short reads and `Interrupted`
// until the limit or EOF.
fn read_prefix<R: Read>(reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(HEADER_LEN);
    reader.take(HEADER_LEN as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

fn header_from_prefix(prefix: &[u8]) -> Result<HeaderBytes> {
    prefix.try_into().map_err(|_| InspectError::TooShort {
        len: prefix.len(),
        expected: HEADER_LEN,
    })
}

impl From<InspectError> for Outcome {
    fn from(err: InspectError) -> Self {
        match err {
            InspectError::NotFound(_) => Outcome::FileNotFound,
            InspectError::TooShort { .. } => Outcome::InvalidFile,
            InspectError::Io { source, .. } => Outcome::ReadError {
                reason: source.to_string(),
            },
        }
    }
}
