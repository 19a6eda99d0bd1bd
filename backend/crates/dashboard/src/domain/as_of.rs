//! Report date
//!
//! `asOf` is echoed back exactly as the caller sent it. A date is read from it
//! only to choose which day the KPI source reports on; anything unreadable
//! falls back to today.

use chrono::{DateTime, NaiveDate};

/// Canonical `asOf` format
pub const AS_OF_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsOf {
    label: String,
    date: NaiveDate,
}

impl AsOf {
    /// Resolve the `asOf` query value against `today`
    ///
    /// Absent means today, labelled in canonical form.
    pub fn resolve(raw: Option<&str>, today: NaiveDate) -> Self {
        match raw {
            Some(raw) => Self {
                label: raw.to_string(),
                date: parse_lenient(raw).unwrap_or(today),
            },
            None => Self {
                label: today.format(AS_OF_FORMAT).to_string(),
                date: today,
            },
        }
    }

    /// Value echoed in the response
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Day handed to the KPI source
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, AS_OF_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
