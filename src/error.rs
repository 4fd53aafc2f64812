// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for chart input validation.
//!
//! The astronomy itself cannot fail: every series is a total function of
//! the Julian Day. The only failure mode is a birth record that is
//! malformed or outside the domain of the formulas, and that is rejected
//! here, at the input boundary, before any body is computed.

/// Errors returned when birth data cannot be turned into a chart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The date string is not `YYYY-MM-DD` or names a day that does not exist.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// The time string is not `HH:MM` (or `HH:MM:SS`).
    #[error("invalid time: {input:?} (expected HH:MM)")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// Latitude is not finite or not strictly between the poles.
    #[error("invalid latitude: {latitude} (must be within (-90, 90) degrees)")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        latitude: f64,
    },

    /// Longitude is not finite or outside [-180, 180].
    #[error("invalid longitude: {longitude} (must be within [-180, 180] degrees East)")]
    InvalidLongitude {
        /// The rejected longitude in degrees.
        longitude: f64,
    },

    /// UTC offset is not finite or outside [-14, 14] hours.
    #[error("invalid UTC offset: {hours} (must be within [-14, 14] hours)")]
    InvalidUtcOffset {
        /// The rejected offset in hours.
        hours: f64,
    },

    /// Shifting local time to UT left the representable calendar range.
    #[error("date out of range after applying UTC offset")]
    DateOutOfRange,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;
