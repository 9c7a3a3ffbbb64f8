//! Short-form date display for report cards.
//!
//! Parsing is shared by both builds. In the browser the date is formatted
//! with the user's locale through `Date.toLocaleDateString`, and timestamps
//! that carry an offset are shifted into the browser's zone first. Natively
//! the `M/D/YYYY` form is used and offset timestamps are read in UTC.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// A backend timestamp, as far as the date display cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// No offset given: the calendar date is shown as written.
    Calendar(NaiveDate),
    /// An exact instant; the shown date depends on the viewer's zone.
    Instant(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Accepts RFC 3339 with an offset, naive ISO-8601 date-times (with or
    /// without fractional seconds) and bare `YYYY-MM-DD` dates.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(dt));
        }
        if let Ok(dt) = raw.parse::<NaiveDateTime>() {
            return Some(Self::Calendar(dt.date()));
        }
        raw.parse::<NaiveDate>().ok().map(Self::Calendar)
    }

    /// Calendar date in UTC for instants, as written otherwise.
    pub fn utc_date(self) -> NaiveDate {
        match self {
            Self::Calendar(date) => date,
            Self::Instant(dt) => dt.with_timezone(&Utc).date_naive(),
        }
    }
}

/// Format `raw` as a localized short date, or return it unchanged when it
/// cannot be parsed.
pub fn format_short_date(raw: &str) -> String {
    match Timestamp::parse(raw) {
        Some(ts) => locale_short_date(ts),
        None => raw.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn locale_short_date(ts: Timestamp) -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_owned());
    let js_date = match ts {
        Timestamp::Instant(dt) => {
            js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(dt.timestamp_millis() as f64))
        }
        Timestamp::Calendar(date) => {
            let Ok(year) = u32::try_from(date.year()) else {
                return default_short_date(date);
            };
            // JS months are zero-based.
            js_sys::Date::new_with_year_month_day(year, date.month0() as i32, date.day() as i32)
        }
    };
    js_date
        .to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(feature = "hydrate"))]
fn locale_short_date(ts: Timestamp) -> String {
    default_short_date(ts.utc_date())
}

fn default_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
