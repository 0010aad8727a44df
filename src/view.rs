//! Derived-view functions: labels computed from raw show fields, never stored.
//!
//! Every function here is total over arbitrary input strings.

use chrono::{Days, Local, Months, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::{
    show::ShowRecord,
    types::{DayPeriod, EventStatus, ShowIndex},
};

/// Prefix of the map-search link built for a venue address.
pub const MAPS_SEARCH_PREFIX: &str = "https://www.google.com/maps/search/?api=1&query=";

/// URI-component escape set: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Classifies a `HH:MM` string as day, night, or unknown.
///
/// The input is trimmed, then the leading integer before the first `:` is taken as the
/// hour. Hours are not range-checked: anything outside `[6, 18)` is night.
pub fn time_of_day(time: &str) -> DayPeriod {
    let Some((hour, _)) = time.trim().split_once(':') else {
        return DayPeriod::Unknown;
    };

    match leading_int(hour) {
        Some(h) if (6..18).contains(&h) => DayPeriod::Day,
        Some(_) => DayPeriod::Night,
        None => DayPeriod::Unknown,
    }
}

/// Status of a `DD/MM/YYYY` date relative to the local calendar date.
pub fn event_status(date: &str) -> EventStatus {
    event_status_on(date, Local::now().date_naive())
}

/// Status of a `DD/MM/YYYY` date relative to `today`.
///
/// Active when the date is on or after `today`. Empty or unparseable dates are finished.
pub fn event_status_on(date: &str, today: NaiveDate) -> EventStatus {
    match parse_event_date(date) {
        Some(d) if d >= today => EventStatus::Active,
        _ => EventStatus::Finished,
    }
}

/// Parses `DD/MM/YYYY` with calendar rollover.
///
/// Day and month are not range-checked; they roll into adjacent months and years
/// (`32/01/2030` is 1 February 2030, `00/03/2030` is the last day of February).
/// Parts are read like numeric literals and truncated toward zero (`1.5` is 1, `0x10`
/// is 16). Returns `None` for empty input, fewer than three parts, non-numeric parts,
/// or dates chrono cannot represent.
pub fn parse_event_date(date: &str) -> Option<NaiveDate> {
    if date.is_empty() {
        return None;
    }

    let mut parts = date.split('/');
    let day = numeric_part(parts.next()?)?;
    let month = numeric_part(parts.next()?)?;
    let year = numeric_part(parts.next()?)?;
    rolled_date(year, month, day)
}

/// Map-search URL for a venue address.
pub fn maps_search_url(venue_address: &str) -> String {
    format!(
        "{MAPS_SEARCH_PREFIX}{}",
        utf8_percent_encode(venue_address, URI_COMPONENT)
    )
}

/// Render model for one list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCard {
    /// Position in the collection at render time.
    pub index: ShowIndex,
    /// Event title.
    pub title: String,
    /// Raw date text.
    pub date: String,
    /// Raw time text.
    pub time: String,
    /// Derived time-of-day bucket.
    pub day_period: DayPeriod,
    /// Derived active/finished status.
    pub status: EventStatus,
    /// City name.
    pub city: String,
    /// Venue street address.
    pub venue_address: String,
    /// Map-search link for the venue.
    pub maps_url: String,
    /// Banner image reference.
    pub banner_image_ref: String,
}

impl ShowCard {
    /// Derives the card for `rec` at `index`, judging status against `today`.
    pub fn build(index: ShowIndex, rec: &ShowRecord, today: NaiveDate) -> Self {
        Self {
            index,
            title: rec.title().to_string(),
            date: rec.date().to_string(),
            time: rec.time().to_string(),
            day_period: time_of_day(rec.time()),
            status: event_status_on(rec.date(), today),
            city: rec.city().to_string(),
            venue_address: rec.venue_address().to_string(),
            maps_url: maps_search_url(rec.venue_address()),
            banner_image_ref: rec.banner_image_ref().to_string(),
        }
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Reads one date part as a number truncated toward zero.
///
/// Blank parts count as zero. Accepts decimal literals with fraction and exponent
/// (`1.5`, `1e1`) and unsigned `0x`/`0o`/`0b` integer literals. Non-finite values and
/// anything else are rejected.
fn numeric_part(part: &str) -> Option<i64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0);
    }

    let value = match radix_literal(part) {
        Some(parsed) => parsed?,
        None => part.parse::<f64>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

// `None` when `part` has no radix prefix; `Some(None)` when the digits are bad.
fn radix_literal(part: &str) -> Option<Option<f64>> {
    let prefix = part.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &part[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

fn rolled_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;

    let months = month.checked_sub(1)?;
    let shifted_months = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let with_month = if months >= 0 {
        base.checked_add_months(shifted_months)?
    } else {
        base.checked_sub_months(shifted_months)?
    };

    let days = day.checked_sub(1)?;
    let shifted_days = Days::new(days.unsigned_abs());
    if days >= 0 {
        with_month.checked_add_days(shifted_days)
    } else {
        with_month.checked_sub_days(shifted_days)
    }
}
