use std::fmt;

use chrono::{NaiveDateTime, Weekday};
use serde::Serialize;

use super::DomainError;

/// Display format of violation timestamps, e.g. `09-24-2025 22:04:15`
pub const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// Whole percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > 100 {
            return Err(DomainError::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of cells out of `total` covered by this percentage, rounded down
    pub fn fill_width(self, total: u16) -> u16 {
        (u32::from(total) * u32::from(self.0) / 100) as u16
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Identity block shown at the top of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub organization: String,
}

/// Uploaded document entry on the downloads page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn display_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// A recorded infraction paired with its remediation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationRecord {
    pub recorded_at: NaiveDateTime,
    pub violation: String,
    pub recommendation: String,
}

impl ViolationRecord {
    /// Builds a record from a timestamp in [`TIMESTAMP_FORMAT`].
    pub fn new(
        recorded_at: &str,
        violation: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let recorded_at = NaiveDateTime::parse_from_str(recorded_at, TIMESTAMP_FORMAT).map_err(
            |source| DomainError::InvalidTimestamp {
                value: recorded_at.to_string(),
                source,
            },
        )?;
        Ok(Self {
            recorded_at,
            violation: violation.into(),
            recommendation: recommendation.into(),
        })
    }

    pub fn display_time(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Named percentage drawn as a bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: Percent,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: Percent) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Human readable size with Russian unit suffixes
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["КБ", "МБ", "ГБ"];

    if bytes < 1024 {
        return format!("{bytes} Б");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Two-letter weekday label used under the distribution columns
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rejects_values_above_hundred() {
        assert!(Percent::new(100).is_ok());
        assert!(matches!(
            Percent::new(101),
            Err(DomainError::PercentOutOfRange(101))
        ));
    }

    #[test]
    fn test_percent_fill_width_rounds_down() {
        let percent = Percent::new(93).unwrap();
        assert_eq!(percent.fill_width(100), 93);
        assert_eq!(percent.fill_width(10), 9);
        assert_eq!(percent.fill_width(0), 0);
        assert_eq!(Percent::new(100).unwrap().fill_width(37), 37);
        assert_eq!(percent.to_string(), "93%");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Б");
        assert_eq!(format_size(512), "512 Б");
        assert_eq!(format_size(1536), "1.5 КБ");
        assert_eq!(format_size(2_516_582), "2.4 МБ");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 ГБ");
    }

    #[test]
    fn test_violation_timestamp_round_trips_display_format() {
        let record = ViolationRecord::new("09-24-2025 22:04:15", "a", "b").unwrap();
        assert_eq!(record.display_time(), "09-24-2025 22:04:15");
    }

    #[test]
    fn test_violation_rejects_malformed_timestamp() {
        let err = ViolationRecord::new("2025-09-24T22:04:15", "a", "b").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp { .. }));
        assert!(err.to_string().contains("2025-09-24T22:04:15"));
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_label(Weekday::Mon), "пн");
        assert_eq!(weekday_label(Weekday::Sun), "вс");
    }
}
