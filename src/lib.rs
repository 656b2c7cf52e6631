use std::path::PathBuf;
pub mod axis;
pub mod chart;
pub mod cli;
pub mod parse;
pub mod screen;

pub use axis::{AxisFormatter, LabelProvider};
pub use chart::{ChartData, Series};
pub use parse::{parse_csv, read_csv, Parsed, Record};
pub use screen::ChartScreen;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// full pattern of the stored timestamps, e.g. 2023-01-01 10:00:00
pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// compact pattern for the x axis labels
pub const AXIS_FORMAT: &str = "%H:%M:%S";

pub const CSV_DELIMITER: char = ';';
pub const SERIES_LABEL: &str = "hr value";
pub const EMPTY_CAPTION: &str = "Please add CSV file";

pub type Result<T> = std::result::Result<T, Error>;

/// Hard errors, they abort the current load or render.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read csv file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv file {} is not valid utf-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("could not draw the chart: {message}")]
    Plot { message: String },
}

impl Error {
    pub(crate) fn plot<E: std::fmt::Display>(e: E) -> Error {
        Error::Plot {
            message: e.to_string(),
        }
    }
}

/// Non-fatal problems, the affected row is either skipped or kept with a substitute.
#[derive(Debug, Clone, PartialEq)]
pub enum SoftError {
    /// fewer than two columns, the row is skipped
    MalformedRow { line: usize, content: String },
    /// the value column is not a finite decimal, the value is set to 0
    InvalidValue { line: usize, raw: String },
    /// the timestamp does not match DT_FORMAT, the point is plotted at the fallback time
    InvalidTimestamp { record: usize, raw: String },
}

impl std::fmt::Display for SoftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftError::MalformedRow { line, content } => {
                write!(f, "line {}: malformed row {:?}, skipped", line, content)
            }
            SoftError::InvalidValue { line, raw } => {
                write!(f, "line {}: invalid value {:?}, using 0", line, raw)
            }
            SoftError::InvalidTimestamp { record, raw } => write!(
                f,
                "record {}: invalid timestamp {:?}, using the load time",
                record, raw
            ),
        }
    }
}

/// min and max of a slice, None if the slice is empty
pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}
