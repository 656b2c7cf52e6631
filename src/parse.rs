use super::{Error, Result, SoftError, CSV_DELIMITER};
use std::path::Path;

/// One csv row: the timestamp as stored and the parsed reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: String,
    pub value: f64,
}

/// Records in file order plus the rows that needed a fallback or were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub records: Vec<Record>,
    pub soft_errors: Vec<SoftError>,
}

/// Parses the semicolon separated text.
/// The first line is a header and is dropped without checks.
/// Rows with an empty timestamp are dropped silently,
/// rows with a single column are skipped and reported,
/// invalid values become 0 and are reported.
/// The value is trimmed before parsing, so " 72.5 " reads as 72.5.
pub fn parse_csv(data: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for (i, l) in data.split('\n').enumerate().skip(1) {
        let line = i + 1;
        let l = l.strip_suffix('\r').unwrap_or(l);
        let mut l_split = l.split(CSV_DELIMITER);
        let timestamp = l_split.next().unwrap_or_default();
        if timestamp.is_empty() {
            continue;
        }
        let raw_value = match l_split.next() {
            Some(v) => v,
            None => {
                parsed.soft_errors.push(SoftError::MalformedRow {
                    line,
                    content: l.to_string(),
                });
                continue;
            }
        };
        let value = match raw_value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                parsed.soft_errors.push(SoftError::InvalidValue {
                    line,
                    raw: raw_value.to_string(),
                });
                0.
            }
        };
        parsed.records.push(Record {
            timestamp: timestamp.to_string(),
            value,
        });
    }
    tracing::debug!(
        "parsed {} records, {} soft errors",
        parsed.records.len(),
        parsed.soft_errors.len()
    );
    parsed
}

/// Reads the whole file in one go and parses it.
pub fn read_csv<P: AsRef<Path>>(fin: P) -> Result<Parsed> {
    let path = fin.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = String::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_csv(&data))
}
