//! Day-first timestamp parsing and the calendar windows of one build.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::clock::Clock;

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Parse a day-first timestamp cell ("18/10/2026 14:32:05") into wall-clock time.
///
/// Date-only cells resolve to midnight. Two-digit years are read as 20xx.
/// Returns `None` for anything that does not match a known layout.
#[must_use]
pub fn parse_day_first(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;
    if parsed.year() < 100 {
        return parsed.with_year(parsed.year() + 2000);
    }
    Some(parsed)
}

/// Date filters evaluated against one build's reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Same calendar day as the reference instant.
    Today,
    /// From the first day of the reference month onward.
    MonthToDate,
}

/// The single "now" of a build, already converted into the dashboard's zone.
///
/// Every window of a build is derived from the same value, so a build that straddles
/// midnight still sees one consistent "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInstant {
    local: DateTime<Tz>,
}

impl ReferenceInstant {
    /// Sample the clock once and convert into `tz`.
    #[must_use]
    pub fn sample(clock: &dyn Clock, tz: Tz) -> Self {
        Self::from_utc(clock.now(), tz)
    }

    /// Reference instant for a known UTC time.
    #[must_use]
    pub fn from_utc(now: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            local: now.with_timezone(&tz),
        }
    }

    /// Local time in the dashboard's zone.
    #[must_use]
    pub const fn local(&self) -> &DateTime<Tz> {
        &self.local
    }

    /// The instant in UTC.
    #[must_use]
    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    /// Local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.local.date_naive()
    }

    /// First day of the local month.
    #[must_use]
    pub fn month_start(&self) -> NaiveDate {
        let today = self.today();
        today.with_day(1).unwrap_or(today)
    }

    /// Whether `date` falls inside `window`. Unknown dates are in no window.
    #[must_use]
    pub fn contains(&self, window: Window, date: Option<NaiveDate>) -> bool {
        let Some(date) = date else {
            return false;
        };
        match window {
            Window::Today => date == self.today(),
            Window::MonthToDate => date >= self.month_start(),
        }
    }

    /// `HH:MM:SS` label of the local time.
    #[must_use]
    pub fn clock_label(&self) -> String {
        self.local.format("%H:%M:%S").to_string()
    }
}
