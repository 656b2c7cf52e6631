use super::axis::AxisFormatter;
use super::chart::ChartData;
use super::parse::{parse_csv, read_csv, Parsed, Record};
use super::{Result, SoftError};
use chrono::prelude::*;
use std::fmt::Display;
use std::path::Path;

/// Owns the records of the last successful load.
/// The chart is rebuilt from memory on every render, the file is read once per load.
#[derive(Debug, Clone)]
pub struct ChartScreen<Tz: TimeZone = Local> {
    fmt: AxisFormatter<Tz>,
    records: Vec<Record>,
    loaded_at: DateTime<Tz>,
}

impl<Tz: TimeZone> ChartScreen<Tz>
where
    Tz::Offset: Display,
{
    pub fn new(fmt: AxisFormatter<Tz>) -> Self {
        let loaded_at = fmt.now();
        ChartScreen {
            fmt,
            records: Vec::new(),
            loaded_at,
        }
    }

    pub fn formatter(&self) -> &AxisFormatter<Tz> {
        &self.fmt
    }

    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads and parses the file; on error the previous records stay in place.
    pub fn load_file<P: AsRef<Path>>(&mut self, fin: P) -> Result<Vec<SoftError>> {
        let parsed = read_csv(fin)?;
        Ok(self.replace(parsed))
    }

    pub fn load_str(&mut self, data: &str) -> Vec<SoftError> {
        self.replace(parse_csv(data))
    }

    fn replace(&mut self, parsed: Parsed) -> Vec<SoftError> {
        self.records = parsed.records;
        self.loaded_at = self.fmt.now();
        tracing::debug!(
            "loaded {} records at {}",
            self.records.len(),
            self.fmt.format_full(&self.loaded_at)
        );
        parsed.soft_errors
    }

    /// Assembles the chart from the records in memory.
    pub fn chart(&self) -> ChartData {
        ChartData::assemble(&self.records, &self.fmt, &self.loaded_at)
    }
}
