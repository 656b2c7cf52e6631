use super::{AXIS_FORMAT, DT_FORMAT};
use chrono::prelude::*;
use std::fmt::Display;

/// Turns an x axis coordinate into a tick label.
pub trait LabelProvider {
    fn format(&self, x: f64) -> String;
}

/// Maps the stored timestamps to axis coordinates (seconds since the unix epoch)
/// and back to compact HH:MM:SS labels, both in the same time zone.
#[derive(Debug, Clone)]
pub struct AxisFormatter<Tz: TimeZone = Local> {
    tz: Tz,
}

impl AxisFormatter<Local> {
    pub fn local() -> Self {
        AxisFormatter { tz: Local }
    }
}

impl AxisFormatter<Utc> {
    pub fn utc() -> Self {
        AxisFormatter { tz: Utc }
    }
}

impl<Tz: TimeZone> AxisFormatter<Tz>
where
    Tz::Offset: Display,
{
    pub fn with_timezone(tz: Tz) -> Self {
        AxisFormatter { tz }
    }

    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// None if the string does not follow DT_FORMAT
    /// or names a local time skipped by a DST change.
    /// Repeated local times resolve to the earliest instant.
    pub fn try_parse(&self, s: &str) -> Option<DateTime<Tz>> {
        let naive = NaiveDateTime::parse_from_str(s, DT_FORMAT).ok()?;
        self.tz.from_local_datetime(&naive).earliest()
    }

    pub fn parse_or(&self, s: &str, fallback: &DateTime<Tz>) -> DateTime<Tz> {
        match self.try_parse(s) {
            Some(t) => t,
            None => {
                tracing::warn!("could not parse datetime {:?}, using {}", s, fallback);
                fallback.clone()
            }
        }
    }

    /// Parses with DT_FORMAT, falling back to the current time.
    pub fn parse(&self, s: &str) -> DateTime<Tz> {
        self.parse_or(s, &self.now())
    }

    pub fn format_full(&self, t: &DateTime<Tz>) -> String {
        t.format(DT_FORMAT).to_string()
    }

    pub fn to_axis(&self, t: &DateTime<Tz>) -> f64 {
        t.timestamp() as f64
    }

    pub fn from_axis(&self, x: f64) -> Option<DateTime<Tz>> {
        if !x.is_finite() {
            return None;
        }
        let secs = x.floor();
        let nanos = (((x - secs) * 1e9) as u32).min(999_999_999);
        self.tz.timestamp_opt(secs as i64, nanos).single()
    }
}

impl<Tz: TimeZone> LabelProvider for AxisFormatter<Tz>
where
    Tz::Offset: Display,
{
    /// HH:MM:SS only, the date is dropped to keep the ticks short
    fn format(&self, x: f64) -> String {
        self.from_axis(x)
            .map(|t| t.format(AXIS_FORMAT).to_string())
            .unwrap_or_default()
    }
}
