// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich mean and local sidereal time, in degrees.
//!
//! GMST at 0h UT from the IAU 1982 polynomial (Meeus eq. 12.3), advanced
//! to the requested instant at the sidereal rate.  UT is taken to be the
//! Julian Day's own time axis.

use crate::angle::normalize_deg;
use crate::JulianDate;

/// Sidereal degrees per mean solar day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
pub fn gmst_deg(jd: JulianDate) -> f64 {
    let midnight = jd.at_midnight();
    let t0 = midnight.julian_centuries().value();
    let at_midnight = 100.460_618_37 + 36_000.770_053_608 * t0 + 0.000_387_933 * t0 * t0
        - t0 * t0 * t0 / 38_710_000.0;
    let elapsed = (jd - midnight).value();
    normalize_deg(at_midnight + SIDEREAL_RATE_DEG_PER_DAY * elapsed)
}

/// Local sidereal time in degrees for an East-positive longitude.
#[inline]
pub fn local_sidereal_time_deg(jd: JulianDate, longitude_deg: f64) -> f64 {
    normalize_deg(gmst_deg(jd) + longitude_deg)
}
