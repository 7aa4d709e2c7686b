pub mod cli;
pub mod error;
pub mod formats;
pub mod inspect;
pub mod report;
pub mod types;

pub use error::InspectError;
pub use inspect::{inspect, inspect_reader, read_header};
pub use report::{OutputFormat, ReportLine, Summary, run};
pub use types::{Dimensions, Outcome};
