use crate::report::OutputFormat;
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pngdims")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the pixel dimensions of PNG files", long_about = None)]
pub struct Cli {
    /// Files to inspect
    pub paths: Vec<PathBuf>,

    /// Read additional paths from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Paths from `--from` first, then the positional ones.
    pub fn collect_paths(&self) -> io::Result<Vec<PathBuf>> {
        let mut paths = match &self.from {
            Some(list) => read_path_list(list)?,
            None => Vec::new(),
        };
        paths.extend(self.paths.iter().cloned());
        Ok(paths)
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

pub fn read_path_list(list: &Path) -> io::Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(list)?;
    Ok(parse_path_list(&contents))
}

/// Blank lines and `#` comments are skipped.
pub fn parse_path_list(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}
