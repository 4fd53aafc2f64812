// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Keplerian orbits: secular elements, Kepler's equation and the
//! heliocentric ecliptic position vector.
//!
//! Elements follow Standish (1992), "Keplerian Elements for Approximate
//! Positions of the Major Planets": each is a value at J2000.0 plus a
//! linear rate per Julian century, referred to the mean ecliptic and
//! equinox of J2000.

use qtty::Centuries;
use tracing::trace;

use crate::angle::normalize_deg;

/// Newton iterations stop once a correction falls below this (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Hard cap on Newton iterations; the last iterate is returned regardless.
pub const KEPLER_MAX_ITERATIONS: usize = 15;

/// Solve `M = E − e·sin E` for the eccentric anomaly `E`.
///
/// Newton–Raphson seeded with `E₀ = M + e·sin M`.  Both angles are in
/// radians.  For planetary eccentricities (`e < 0.25`) this converges in a
/// handful of steps.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let solution = newton_kepler(mean_anomaly, eccentricity);
    trace!(
        iterations = solution.iterations,
        last_correction = solution.last_correction,
        "kepler solved"
    );
    solution.anomaly
}

/// Outcome of the Newton loop behind [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KeplerSolution {
    pub anomaly: f64,
    /// Newton steps taken, at most [`KEPLER_MAX_ITERATIONS`].
    pub iterations: usize,
    /// Magnitude of the final correction in radians.
    pub last_correction: f64,
}

pub(crate) fn newton_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = mean_anomaly;
    let e = eccentricity;
    let mut ecc_anomaly = m + e * m.sin();
    let mut last_correction = f64::INFINITY;

    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        last_correction = delta.abs();
        if last_correction < KEPLER_TOLERANCE {
            return KeplerSolution {
                anomaly: ecc_anomaly,
                iterations: iteration,
                last_correction,
            };
        }
    }

    trace!(
        mean_anomaly = m,
        eccentricity = e,
        "kepler solve hit iteration cap"
    );
    KeplerSolution {
        anomaly: ecc_anomaly,
        iterations: KEPLER_MAX_ITERATIONS,
        last_correction,
    }
}

/// A slowly varying orbital element: value at J2000.0 and rate per
/// Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Value at J2000.0 (AU or degrees).
    pub at_j2000: f64,
    /// Linear rate per Julian century, same unit as `at_j2000`.
    pub per_century: f64,
}

impl Element {
    /// Element with value `at_j2000` at the epoch and rate `per_century`.
    pub const fn new(at_j2000: f64, per_century: f64) -> Self {
        Self {
            at_j2000,
            per_century,
        }
    }

    /// Value at `t` Julian centuries from J2000.0.
    #[inline]
    pub fn at(&self, t: Centuries) -> f64 {
        self.at_j2000 + self.per_century * t.value()
    }
}

/// The six classical elements of a heliocentric orbit.
///
/// Angles are in degrees, the semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// `a`
    pub semi_major_axis: Element,
    /// `e`
    pub eccentricity: Element,
    /// `I`
    pub inclination: Element,
    /// `L`
    pub mean_longitude: Element,
    /// `ϖ = Ω + ω`
    pub longitude_of_perihelion: Element,
    /// `Ω`
    pub ascending_node: Element,
}

impl OrbitalElements {
    /// Mean anomaly `M = L − ϖ` in degrees, `[0, 360)`.
    pub fn mean_anomaly_deg(&self, t: Centuries) -> f64 {
        normalize_deg(self.mean_longitude.at(t) - self.longitude_of_perihelion.at(t))
    }

    /// Heliocentric ecliptic position at `t`.
    pub fn heliocentric(&self, t: Centuries) -> HeliocentricPosition {
        let a = self.semi_major_axis.at(t);
        let e = self.eccentricity.at(t);
        let incl = self.inclination.at(t).to_radians();
        let node = self.ascending_node.at(t);
        let perihelion = self.longitude_of_perihelion.at(t);

        let ecc_anomaly = solve_kepler(self.mean_anomaly_deg(t).to_radians(), e);

        // Position in the orbital plane, x towards perihelion.
        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sin_w, cos_w) = (perihelion - node).to_radians().sin_cos();
        let (sin_n, cos_n) = node.to_radians().sin_cos();
        let (sin_i, cos_i) = incl.sin_cos();

        HeliocentricPosition {
            x: (cos_w * cos_n - sin_w * sin_n * cos_i) * xp
                + (-sin_w * cos_n - cos_w * sin_n * cos_i) * yp,
            y: (cos_w * sin_n + sin_w * cos_n * cos_i) * xp
                + (-sin_w * sin_n + cos_w * cos_n * cos_i) * yp,
            z: sin_w * sin_i * xp + cos_w * sin_i * yp,
        }
    }
}

/// Heliocentric ecliptic rectangular coordinates in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HeliocentricPosition {
    /// Ecliptic longitude in degrees, `[0, 360)`.
    #[inline]
    pub fn longitude_deg(&self) -> f64 {
        normalize_deg(self.y.atan2(self.x).to_degrees())
    }

    /// Distance from the Sun in AU.
    #[inline]
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Add `delta_deg` to the longitude, keeping the in-plane radius and `z`.
    pub fn rotated(&self, delta_deg: f64) -> Self {
        let r = self.x.hypot(self.y);
        let lon = self.y.atan2(self.x) + delta_deg.to_radians();
        let (sin_l, cos_l) = lon.sin_cos();
        Self {
            x: r * cos_l,
            y: r * sin_l,
            z: self.z,
        }
    }
}
