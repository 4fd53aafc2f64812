// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-body longitude and daily motion.
//!
//! - [`TropicalPosition`]: what each series returns, measured from the
//!   moving equinox.
//! - [`BodyPosition`]: the sidereal result handed to callers.  Sign index
//!   and degree-in-sign are derived from the stored longitude on every
//!   call; they are never stored, so they cannot drift from it.

use crate::angle::normalize_deg;
use crate::zodiac::{pada_from_longitude, sign_index, Nakshatra, Sign, SIGN_SPAN};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Tropical ecliptic longitude and daily motion of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TropicalPosition {
    /// Tropical ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Daily motion in degrees per day; negative means retrograde.
    pub speed: f64,
}

impl TropicalPosition {
    /// Build a position, normalising the longitude.
    #[inline]
    pub fn new(longitude: f64, speed: f64) -> Self {
        Self {
            longitude: normalize_deg(longitude),
            speed,
        }
    }
}

/// Sidereal position of one chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    longitude: f64,
    speed: f64,
}

impl BodyPosition {
    /// Build a position from a sidereal longitude (any range) and a
    /// daily motion in degrees per day.
    #[inline]
    pub fn new(longitude: f64, speed: f64) -> Self {
        Self {
            longitude: normalize_deg(longitude),
            speed,
        }
    }

    /// Sidereal ecliptic longitude in degrees, `[0, 360)`.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Daily motion in degrees per day.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// `floor(longitude / 30)`, Aries = 0 … Pisces = 11.
    #[inline]
    pub fn sign_index(&self) -> u8 {
        sign_index(self.longitude)
    }

    /// Degrees past the start of the sign, `[0, 30)`.
    #[inline]
    pub fn degree_in_sign(&self) -> f64 {
        (self.longitude - f64::from(self.sign_index()) * SIGN_SPAN).max(0.0)
    }

    /// The sign containing this position.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::from_index(self.sign_index())
    }

    /// The nakshatra containing this position.
    #[inline]
    pub fn nakshatra(&self) -> Nakshatra {
        Nakshatra::from_longitude(self.longitude)
    }

    /// Pada (1–4) within the nakshatra.
    #[inline]
    pub fn pada(&self) -> u8 {
        pada_from_longitude(self.longitude)
    }

    /// Whether the daily motion is negative.
    ///
    /// Only meaningful for the five planets; the nodes are always
    /// retrograde by convention and the ascendant has no motion.
    #[inline]
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

// Derived fields are written out for consumers but ignored on input.
#[cfg(feature = "serde")]
impl Serialize for BodyPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("BodyPosition", 4)?;
        s.serialize_field("longitude", &self.longitude)?;
        s.serialize_field("speed", &self.speed)?;
        s.serialize_field("sign_index", &self.sign_index())?;
        s.serialize_field("degree_in_sign", &self.degree_in_sign())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BodyPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            longitude: f64,
            speed: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(BodyPosition::new(raw.longitude, raw.speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derived_fields_follow_longitude() {
        let p = BodyPosition::new(295.6576, 0.0);
        assert_eq!(p.sign_index(), 9);
        assert_eq!(p.sign(), Sign::Capricorn);
        assert_abs_diff_eq!(p.degree_in_sign(), 25.6576, epsilon = 1e-9);
        assert_eq!(p.nakshatra(), Nakshatra::Dhanishtha);
    }

    #[test]
    fn longitude_is_normalised() {
        let p = BodyPosition::new(-10.0, 1.0);
        assert_abs_diff_eq!(p.longitude(), 350.0, epsilon = 1e-12);
        assert_eq!(p.sign(), Sign::Pisces);
        let q = BodyPosition::new(725.0, 1.0);
        assert_abs_diff_eq!(q.longitude(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn retrograde_flag_is_sign_of_speed() {
        assert!(BodyPosition::new(105.0, -0.74).is_retrograde());
        assert!(!BodyPosition::new(105.0, 0.0).is_retrograde());
        assert!(!BodyPosition::new(105.0, 1.2).is_retrograde());
    }

    #[test]
    fn degree_in_sign_at_boundary() {
        let p = BodyPosition::new(30.0, 0.0);
        assert_eq!(p.sign(), Sign::Taurus);
        assert_eq!(p.degree_in_sign(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_writes_derived_fields_and_recomputes_on_read() {
        let p = BodyPosition::new(136.5, -0.05295);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"sign_index\":4"));
        assert!(json.contains("degree_in_sign"));

        let tampered = r#"{"longitude":136.5,"speed":-0.05295,"sign_index":0,"degree_in_sign":0.0}"#;
        let back: BodyPosition = serde_json::from_str(tampered).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.sign_index(), 4);
    }
}
