// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ascendant: the ecliptic point rising on the eastern horizon.

use qtty::Centuries;

use crate::angle::normalize_deg;

/// Mean obliquity of the ecliptic in degrees (IAU 1980, Meeus eq. 22.2).
pub fn mean_obliquity_deg(t: Centuries) -> f64 {
    let t = t.value();
    let arcsec = 46.815_0 * t + 0.000_59 * t * t - 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + 21.448 / 3_600.0 - arcsec / 3_600.0
}

/// Tropical longitude of the ascendant in degrees, `[0, 360)`.
///
/// `lst_deg` is the local sidereal time as an angle, `latitude_deg` is
/// geographic latitude (positive North, strictly inside ±90°).
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_r, cos_r) = lst_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    let tan_phi = latitude_deg.to_radians().tan();
    normalize_deg(cos_r.atan2(-(sin_e * tan_phi + cos_e * sin_r)).to_degrees())
}
