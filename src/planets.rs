// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geocentric longitudes of the five classical planets.
//!
//! Each planet and the Earth–Moon barycentre are placed on their
//! Keplerian orbits (see [`crate::kepler`]); the planet's geocentric
//! longitude is the direction of the difference vector projected on the
//! ecliptic.  Jupiter and Saturn additionally receive the leading periodic
//! terms of their mutual perturbation (the "great inequality" and its
//! neighbours): seven terms for Jupiter and five for Saturn, each set
//! including one cosine term, with amplitudes of 0.014° to 0.812°.  Light
//! time and aberration are ignored.
//!
//! Daily motion is a one-day forward difference of the geocentric
//! longitude, so retrograde planets come out with a negative speed.

use qtty::Centuries;

use crate::angle::{normalize_deg, wrap_delta_deg};
use crate::kepler::{Element, HeliocentricPosition, OrbitalElements};
use crate::position::TropicalPosition;

/// One day expressed in Julian centuries.
pub const ONE_DAY: Centuries = Centuries::new(1.0 / 36_525.0);

/// The planets whose positions come from Keplerian orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    /// Standish J2000 elements and their rates per century.
    pub fn elements(self) -> &'static OrbitalElements {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── element tables ──────────────────────────────────────────────────────

const fn elements(rows: [(f64, f64); 6]) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: Element::new(rows[0].0, rows[0].1),
        eccentricity: Element::new(rows[1].0, rows[1].1),
        inclination: Element::new(rows[2].0, rows[2].1),
        mean_longitude: Element::new(rows[3].0, rows[3].1),
        longitude_of_perihelion: Element::new(rows[4].0, rows[4].1),
        ascending_node: Element::new(rows[5].0, rows[5].1),
    }
}

//                a                          e                           I
//                L                          ϖ                           Ω
#[rustfmt::skip]
static MERCURY: OrbitalElements = elements([
    (0.387_099_27, 0.000_000_37),     (0.205_635_93, 0.000_019_06),  (7.004_979_02, -0.005_947_49),
    (252.250_323_50, 149_472.674_111_75), (77.457_796_28, 0.160_476_89), (48.330_765_93, -0.125_340_81),
]);

#[rustfmt::skip]
static VENUS: OrbitalElements = elements([
    (0.723_335_66, 0.000_003_90),     (0.006_776_72, -0.000_041_07), (3.394_676_05, -0.000_788_90),
    (181.979_099_50, 58_517.815_387_29), (131.602_467_18, 0.002_683_29), (76.679_842_55, -0.277_694_18),
]);

/// Earth–Moon barycentre.
#[rustfmt::skip]
pub static EARTH: OrbitalElements = elements([
    (1.000_002_61, 0.000_005_62),     (0.016_711_23, -0.000_043_92), (-0.000_015_31, -0.012_946_68),
    (100.464_571_66, 35_999.372_449_81), (102.937_681_93, 0.323_273_64), (0.0, 0.0),
]);

#[rustfmt::skip]
static MARS: OrbitalElements = elements([
    (1.523_710_34, 0.000_018_47),     (0.093_394_10, 0.000_078_82),  (1.849_691_42, -0.008_131_31),
    (-4.553_432_05, 19_140.302_684_99), (-23.943_629_59, 0.444_410_88), (49.559_538_91, -0.292_573_43),
]);

#[rustfmt::skip]
static JUPITER: OrbitalElements = elements([
    (5.202_887_00, -0.000_116_07),    (0.048_386_24, -0.000_132_53), (1.304_396_95, -0.001_837_14),
    (34.396_440_51, 3_034.746_127_75), (14.728_479_83, 0.212_526_68), (100.473_909_09, 0.204_691_06),
]);

#[rustfmt::skip]
static SATURN: OrbitalElements = elements([
    (9.536_675_94, -0.001_250_60),    (0.053_861_79, -0.000_509_91), (2.485_991_87, 0.001_936_09),
    (49.954_244_23, 1_222.493_622_01), (92.598_878_31, -0.418_972_16), (113.662_424_48, -0.288_677_94),
]);

// ── perturbations ───────────────────────────────────────────────────────

/// Jupiter–Saturn longitude correction in degrees; zero for the inner
/// planets and Mars.
///
/// Arguments are combinations of the two mean anomalies `Mj` and `Ms`.
/// Jupiter takes 7 terms (one in `cos(Mj − Ms)`), Saturn 5 (one in
/// `cos(2Mj − 4Ms − 2°)`).
pub fn longitude_perturbation_deg(planet: Planet, t: Centuries) -> f64 {
    if !matches!(planet, Planet::Jupiter | Planet::Saturn) {
        return 0.0;
    }
    let mj = JUPITER.mean_anomaly_deg(t);
    let ms = SATURN.mean_anomaly_deg(t);
    let sin = |deg: f64| deg.to_radians().sin();
    let cos = |deg: f64| deg.to_radians().cos();

    match planet {
        Planet::Jupiter => {
            -0.332 * sin(2.0 * mj - 5.0 * ms - 67.6)
                - 0.056 * sin(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sin(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sin(mj - 2.0 * ms)
                + 0.022 * cos(mj - ms)
                + 0.023 * sin(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sin(mj - 5.0 * ms - 69.0)
        }
        _ => {
            0.812 * sin(2.0 * mj - 5.0 * ms - 67.6)
                - 0.229 * cos(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sin(mj - 2.0 * ms - 3.0)
                + 0.046 * sin(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sin(mj - 3.0 * ms + 32.0)
        }
    }
}

// ── positions ───────────────────────────────────────────────────────────

/// Heliocentric position of `planet`, perturbations included.
pub fn heliocentric(planet: Planet, t: Centuries) -> HeliocentricPosition {
    let position = planet.elements().heliocentric(t);
    match planet {
        Planet::Jupiter | Planet::Saturn => {
            position.rotated(longitude_perturbation_deg(planet, t))
        }
        _ => position,
    }
}

/// Geocentric tropical ecliptic longitude of `planet` in degrees.
pub fn geocentric_longitude(planet: Planet, t: Centuries) -> f64 {
    let body = heliocentric(planet, t);
    let earth = EARTH.heliocentric(t);
    normalize_deg((body.y - earth.y).atan2(body.x - earth.x).to_degrees())
}

/// Geocentric tropical longitude and daily motion of `planet`.
pub fn planet_position(planet: Planet, t: Centuries) -> TropicalPosition {
    let longitude = geocentric_longitude(planet, t);
    let tomorrow = geocentric_longitude(planet, t + ONE_DAY);
    TropicalPosition::new(longitude, wrap_delta_deg(tomorrow - longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JulianDate;
    use approx::assert_abs_diff_eq;

    fn reference_t() -> Centuries {
        JulianDate::new(2_444_085.083_333_333_5).julian_centuries()
    }

    #[test]
    fn reference_birth_tropical_longitudes() {
        let t = reference_t();
        let expected = [
            (Planet::Mercury, 129.0415, -0.7424),
            (Planet::Venus, 119.9823, 1.2307),
            (Planet::Mars, 84.2677, 0.6752),
            (Planet::Jupiter, 137.3828, 0.2177),
            (Planet::Saturn, 162.1294, 0.1108),
        ];
        for (planet, lon, speed) in expected {
            let p = planet_position(planet, t);
            assert_abs_diff_eq!(p.longitude, lon, epsilon = 1e-3);
            assert_abs_diff_eq!(p.speed, speed, epsilon = 1e-3);
        }
    }

    #[test]
    fn mercury_retrograde_in_reference_chart() {
        assert!(planet_position(Planet::Mercury, reference_t()).speed < 0.0);
    }

    #[test]
    fn venus_near_meeus_example_33a() {
        // 1992 December 20.0 TD: apparent λ = 313.08102°.  Light time and
        // aberration are not modelled, so only rough agreement is expected.
        let t = JulianDate::new(2_448_976.5).julian_centuries();
        assert_abs_diff_eq!(geocentric_longitude(Planet::Venus, t), 313.081, epsilon = 0.2);
    }

    #[test]
    fn perturbations_only_touch_gas_giants() {
        let t = Centuries::new(0.0);
        assert_eq!(longitude_perturbation_deg(Planet::Mercury, t), 0.0);
        assert_eq!(longitude_perturbation_deg(Planet::Mars, t), 0.0);
        assert_abs_diff_eq!(longitude_perturbation_deg(Planet::Jupiter, t), -0.0851, epsilon = 1e-3);
        assert_abs_diff_eq!(longitude_perturbation_deg(Planet::Saturn, t), 0.2155, epsilon = 1e-3);
    }

    #[test]
    fn perturbations_stay_within_summed_amplitudes() {
        let jupiter_bound = 0.332 + 0.056 + 0.042 + 0.036 + 0.022 + 0.023 + 0.016;
        let saturn_bound = 0.812 + 0.229 + 0.119 + 0.046 + 0.014;
        let mut jupiter_peak = 0.0f64;
        let mut saturn_peak = 0.0f64;
        for step in 0..=2_000 {
            let t = Centuries::new(f64::from(step) * 0.005 - 5.0);
            jupiter_peak = jupiter_peak.max(longitude_perturbation_deg(Planet::Jupiter, t).abs());
            saturn_peak = saturn_peak.max(longitude_perturbation_deg(Planet::Saturn, t).abs());
        }
        assert!(jupiter_peak <= jupiter_bound, "{jupiter_peak}");
        assert!(saturn_peak <= saturn_bound, "{saturn_peak}");
        // The great inequality dominates: both peaks come close to its amplitude.
        assert!(jupiter_peak > 0.3, "{jupiter_peak}");
        assert!(saturn_peak > 0.8, "{saturn_peak}");
    }

    #[test]
    fn speeds_are_bounded() {
        for step in 0..40 {
            let t = Centuries::new(f64::from(step) * 0.05 - 1.0);
            for planet in Planet::ALL {
                let p = planet_position(planet, t);
                assert!(p.speed.abs() < 2.5, "{planet} at {}: {}", t.value(), p.speed);
                assert!((0.0..360.0).contains(&p.longitude));
            }
        }
    }
}
