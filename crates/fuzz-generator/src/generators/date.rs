//! Date generators.
//!
//! Bounds are millisecond Unix timestamps. [`parse_millis`] converts the
//! usual textual forms into one.

use chrono::{DateTime, Utc};
use fuzz_core::{FuzzError, Result, Source, Thunk, Wrapped};
use rand::Rng;

fn sample_millis(src: &mut Source, lower: i64, upper: i64) -> Result<DateTime<Utc>> {
    let millis = if lower >= upper {
        lower
    } else {
        src.gen_range(lower..upper)
    };

    DateTime::from_timestamp_millis(millis).ok_or(FuzzError::InvalidTimestamp(millis))
}

/// Generate a random date with a timestamp in `[from, to)`.
pub fn uniform(from: impl Into<Wrapped<i64>>, to: impl Into<Wrapped<i64>>) -> Thunk<DateTime<Utc>> {
    let from = from.into();
    let to = to.into();

    Thunk::new(move |src| {
        let lower = from.unwrap(src)?;
        let upper = to.unwrap(src)?;
        sample_millis(src, lower, upper)
    })
}

/// Generate a random date between `from` and the moment of the call.
///
/// "Now" is read on every call, not when the generator is built.
pub fn past_uniform(from: impl Into<Wrapped<i64>>) -> Thunk<DateTime<Utc>> {
    let from = from.into();

    Thunk::new(move |src| {
        let lower = from.unwrap(src)?;
        let upper = Utc::now().timestamp_millis();
        sample_millis(src, lower, upper)
    })
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date into milliseconds.
pub fn parse_millis(s: &str) -> Option<i64> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }

    // Try common date-only format
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    None
}
