use crate::inspect::inspect;
use crate::types::Outcome;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<name>: <result>` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub path: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ReportLine {
    pub fn new(path: &Path, outcome: Outcome) -> Self {
        Self {
            name: display_name(path),
            path: path.display().to_string(),
            outcome,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{}: {}", self.name, self.outcome),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

/// Final path component, or the whole path when there is none (`/`, `..`).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub measured: usize,
    pub not_found: usize,
    pub invalid: usize,
    pub read_errors: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Dimensions(_) => self.measured += 1,
            Outcome::FileNotFound => self.not_found += 1,
            Outcome::InvalidFile => self.invalid += 1,
            Outcome::ReadError { .. } => self.read_errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.measured + self.not_found + self.invalid + self.read_errors
    }
}

/// Inspects every path in order and writes one line per path to `out`.
///
/// Per-file failures are part of the report; only a failing writer stops
/// the run.
pub fn run<I, P, W>(paths: I, format: OutputFormat, out: &mut W) -> io::Result<Summary>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    W: Write,
{
    let mut summary = Summary::default();

    for path in paths {
        let path = path.as_ref();
        let line = ReportLine::new(path, inspect(path));
        summary.record(&line.outcome);
        line.write_to(out, format)?;
    }

    out.flush()?;

    debug!(
        total = summary.total(),
        measured = summary.measured,
        not_found = summary.not_found,
        invalid = summary.invalid,
        read_errors = summary.read_errors,
        "report finished"
    );

    Ok(summary)
}
