// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local clock time → Julian Day.
//!
//! This is the input boundary of the engine: date and time strings are
//! parsed here, the UTC offset is removed with calendar-correct rollover
//! (a birth at 00:30 IST belongs to the previous UT day, possibly the
//! previous month or year), and the resulting UT calendar fields are
//! handed to [`JulianDate::from_gregorian`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::JulianDate;

/// Widest UTC offset in civil use (UTC−12 … UTC+14), padded symmetrically.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        debug!(input, "rejected date");
        ChartError::InvalidDate {
            input: input.to_string(),
        }
    })
}

/// Parse an `HH:MM` clock time; `HH:MM:SS` is accepted as well.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| {
            debug!(input, "rejected time");
            ChartError::InvalidTime {
                input: input.to_string(),
            }
        })
}

/// Check that a UTC offset is a finite number of hours within
/// `±`[`MAX_UTC_OFFSET_HOURS`].
pub fn validate_utc_offset(hours: f64) -> Result<f64> {
    if hours.is_finite() && hours.abs() <= MAX_UTC_OFFSET_HOURS {
        Ok(hours)
    } else {
        debug!(hours, "rejected UTC offset");
        Err(ChartError::InvalidUtcOffset { hours })
    }
}

/// Julian Day of an already-parsed local date and time.
///
/// The offset is rounded to the millisecond before it is subtracted.
pub fn naive_local_to_jd(
    date: NaiveDate,
    time: NaiveTime,
    utc_offset_hours: f64,
) -> Result<JulianDate> {
    let hours = validate_utc_offset(utc_offset_hours)?;
    let offset = TimeDelta::try_milliseconds((hours * 3_600_000.0).round() as i64)
        .ok_or(ChartError::DateOutOfRange)?;
    let ut = NaiveDateTime::new(date, time)
        .checked_sub_signed(offset)
        .ok_or(ChartError::DateOutOfRange)?;
    Ok(JulianDate::from_utc(Utc.from_utc_datetime(&ut)))
}

/// Julian Day for a local `YYYY-MM-DD` date and `HH:MM` time observed at
/// `utc_offset_hours` east of Greenwich.
pub fn local_to_jd(date: &str, time: &str, utc_offset_hours: f64) -> Result<JulianDate> {
    naive_local_to_jd(parse_date(date)?, parse_time(time)?, utc_offset_hours)
}
