// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent solar longitude.
//!
//! Low-precision theory from Meeus, *Astronomical Algorithms* ch. 25:
//! mean longitude plus the equation of centre, then aberration and a
//! one-term nutation correction.  Accurate to about 0.01° over several
//! centuries around J2000.

use qtty::Centuries;

use crate::angle::normalize_deg;
use crate::position::TropicalPosition;

/// Apparent tropical longitude and daily motion of the Sun at `t`
/// Julian centuries from J2000.0.
pub fn solar_position(t: Centuries) -> TropicalPosition {
    let t = t.value();
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = normalize_deg(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    // Longitude of the Moon's ascending node, for the nutation term.
    let omega = (125.04 - 1_934.136 * t).to_radians();
    let longitude = l0 + c - 0.005_69 - 0.004_78 * omega.sin();

    // Daily motion follows the equation of centre: fastest at perihelion.
    let speed = 0.985_6 + 0.032_9 * m.cos() + 0.000_7 * (2.0 * m).cos();

    TropicalPosition::new(longitude, speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JulianDate;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: apparent λ = 199.90895°
        let t = JulianDate::new(2_448_908.5).julian_centuries();
        let sun = solar_position(t);
        assert_abs_diff_eq!(sun.longitude, 199.908_95, epsilon = 1e-3);
    }

    #[test]
    fn reference_birth_tropical_longitude() {
        let t = JulianDate::new(2_444_085.083_333_333_5).julian_centuries();
        let sun = solar_position(t);
        // Sidereal 103.2458 plus an ayanamsa of 23.5707.
        assert_abs_diff_eq!(sun.longitude, 126.8165, epsilon = 1e-3);
        assert_abs_diff_eq!(sun.speed, 0.9562, epsilon = 1e-3);
    }

    #[test]
    fn speed_stays_within_orbital_limits() {
        for day in (0..366).step_by(5) {
            let t = JulianDate::new(2_451_545.0 + f64::from(day)).julian_centuries();
            let speed = solar_position(t).speed;
            assert!((0.95..=1.02).contains(&speed), "day {day}: {speed}");
        }
    }

    #[test]
    fn near_vernal_equinox() {
        // 2000-03-20 07:35 UT
        let t = JulianDate::from_gregorian(2000, 3, 20, 7.0 + 35.0 / 60.0).julian_centuries();
        let lon = solar_position(t).longitude;
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "{lon}");
    }
}
