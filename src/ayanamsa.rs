// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lahiri ayanamsa and the tropical → sidereal shift.
//!
//! A linear model: the J2000 Lahiri value advanced by a constant annual
//! precession.  Good to a few arcminutes over the historical range used
//! for birth charts.

use crate::angle::normalize_deg;
use crate::JulianDate;

/// Lahiri ayanamsa at J2000.0 in degrees.
pub const LAHIRI_J2000: f64 = 23.856;

/// General precession in longitude, arcseconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.2888;

/// Lahiri ayanamsa in degrees at `jd`.
pub fn lahiri_deg(jd: JulianDate) -> f64 {
    LAHIRI_J2000 + jd.julian_years().value() * PRECESSION_ARCSEC_PER_YEAR / 3_600.0
}

/// Convert a tropical longitude to sidereal at `jd`, `[0, 360)`.
#[inline]
pub fn tropical_to_sidereal(tropical_deg: f64, jd: JulianDate) -> f64 {
    normalize_deg(tropical_deg - lahiri_deg(jd))
}
