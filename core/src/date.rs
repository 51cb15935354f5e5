//! Date handling for APOD requests.
//!
//! # Design
//! The upstream accepts `date` as a `YYYY-MM-DD` string and the original
//! interface took "anything date-like". `DateInput` makes that an explicit
//! tagged union tried in a fixed order — timestamp, calendar day, raw
//! string, fallback-to-today — with every branch total and side-effect
//! free. Raw strings pass through unchanged; the API is the validator.

use chrono::{DateTime, Duration, Local, NaiveDate};
use rand::Rng;

/// Date of the first APOD post; `random` never draws before this.
pub const APOD_EPOCH: (i32, u32, u32) = (1995, 6, 16);

/// A date-like value accepted when configuring a client or a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Unix seconds, formatted as the UTC calendar date.
    Timestamp(i64),
    /// A calendar date.
    Day(NaiveDate),
    /// Passed through unchanged, no validation.
    Raw(String),
}

/// Resolve an optional date input to the `YYYY-MM-DD` string sent on the
/// wire. Absent input and out-of-range timestamps resolve to today.
pub fn normalize(input: Option<DateInput>) -> String {
    match input {
        Some(DateInput::Timestamp(secs)) => DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(today),
        Some(DateInput::Day(day)) => day.format("%Y-%m-%d").to_string(),
        Some(DateInput::Raw(s)) => s,
        None => today(),
    }
}

/// Today's local calendar date as a `YYYY-MM-DD` string.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// First day APOD was published.
pub fn epoch() -> NaiveDate {
    let (y, m, d) = APOD_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).expect("APOD epoch is a valid date")
}

/// Draw a uniformly random date in `[epoch, today]`, both ends inclusive.
pub fn random(rng: &mut impl Rng) -> NaiveDate {
    let start = epoch();
    let span = Local::now()
        .date_naive()
        .signed_duration_since(start)
        .num_days();
    start + Duration::days(rng.gen_range(0..=span))
}
