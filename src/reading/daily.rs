//! One station's rainfall reading for one day.

use serde::Deserialize;

/// Rainfall for one day-slot at one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyValue {
    /// The calendar has no such date (e.g. 30 February).
    NotApplicable,
    /// The date exists but the station left the cell empty.
    Missing,
    /// Recorded precipitation in millimetres.
    Recorded(f64),
}

impl DailyValue {
    pub fn is_applicable(&self) -> bool {
        !matches!(self, DailyValue::NotApplicable)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            DailyValue::Recorded(mm) => Some(*mm),
            _ => None,
        }
    }
}

/// A raw row of a daily station CSV. The date is only used to locate bad rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    #[serde(rename = "Date/Time", default)]
    pub date: Option<String>,
    #[serde(rename = "Total Precip (mm)", default)]
    pub total_precip: Option<String>,
}

impl RawDay {
    #[cfg(test)]
    pub fn new(total_precip: &str) -> Self {
        RawDay {
            date: None,
            total_precip: Some(total_precip.to_string()),
        }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        RawDay::default()
    }
}

/// Parses a precipitation field: empty is `Missing`, a finite non-negative
/// number is `Recorded`, anything else is rejected.
pub fn parse_rainfall(field: Option<&str>) -> Option<DailyValue> {
    let word = field.unwrap_or("").trim();
    if word.is_empty() {
        return Some(DailyValue::Missing);
    }

    match word.parse::<f64>() {
        Ok(mm) if mm.is_finite() && mm >= 0.0 => Some(DailyValue::Recorded(mm)),
        _ => None,
    }
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_parse_empty_field_as_missing() {
        assert_eq!(parse_rainfall(None), Some(DailyValue::Missing));
        assert_eq!(parse_rainfall(Some("")), Some(DailyValue::Missing));
        assert_eq!(parse_rainfall(Some("  ")), Some(DailyValue::Missing));
    }

    #[test]
    fn should_parse_number_as_recorded() {
        assert_eq!(parse_rainfall(Some("0.0")), Some(DailyValue::Recorded(0.0)));
        assert_eq!(parse_rainfall(Some("12.4")), Some(DailyValue::Recorded(12.4)));
    }

    #[test]
    fn should_reject_garbage() {
        assert_eq!(parse_rainfall(Some("T")), None);
        assert_eq!(parse_rainfall(Some("-1")), None);
        assert_eq!(parse_rainfall(Some("NaN")), None);
        assert_eq!(parse_rainfall(Some("inf")), None);
    }

    #[test]
    fn should_report_amount_only_when_recorded() {
        assert_eq!(DailyValue::Recorded(2.5).amount(), Some(2.5));
        assert_eq!(DailyValue::Missing.amount(), None);
        assert!(!DailyValue::NotApplicable.is_applicable());
        assert!(DailyValue::Missing.is_applicable());
    }
}
