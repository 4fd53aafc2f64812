// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chart assembly: one call from birth data to every sidereal position.
//!
//! ```
//! use vedic_ephemeris::{compute_chart, Body, Sign};
//!
//! let chart = compute_chart("1979-07-30", "19:30", 12.97, 77.59, 5.5)?;
//! assert_eq!(chart.sun.sign(), Sign::Cancer);
//! assert!(chart.mercury.is_retrograde());
//! assert_eq!(chart.house_of(Body::Moon), 9);
//! # Ok::<(), vedic_ephemeris::ChartError>(())
//! ```

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ascendant::{ascendant_deg, mean_obliquity_deg};
use crate::ayanamsa::lahiri_deg;
use crate::birth::BirthData;
use crate::error::Result;
use crate::moon::lunar_position;
use crate::nodes::{ketu_from_rahu, rahu_position};
use crate::planets::{planet_position, Planet};
use crate::position::{BodyPosition, TropicalPosition};
use crate::sidereal_time::local_sidereal_time_deg;
use crate::sun::solar_position;
use crate::JulianDate;

/// The ten points of a chart, in [`AstroResult`] field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
        Body::Ascendant,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Mercury => "Mercury",
            Body::Jupiter => "Jupiter",
            Body::Venus => "Venus",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
            Body::Ascendant => "Ascendant",
        }
    }

    /// Whether a negative speed on this body means retrograde motion.
    ///
    /// True for the five planets only: the luminaries never retrograde,
    /// the nodes always do, and the ascendant does not move.
    pub const fn can_retrograde(self) -> bool {
        matches!(
            self,
            Body::Mars | Body::Mercury | Body::Jupiter | Body::Venus | Body::Saturn
        )
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sidereal positions of every chart point for one birth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AstroResult {
    pub sun: BodyPosition,
    pub moon: BodyPosition,
    pub mars: BodyPosition,
    pub mercury: BodyPosition,
    pub jupiter: BodyPosition,
    pub venus: BodyPosition,
    pub saturn: BodyPosition,
    pub rahu: BodyPosition,
    pub ketu: BodyPosition,
    /// Rising degree; speed is always zero.
    pub ascendant: BodyPosition,
    /// Lahiri ayanamsa in degrees used for every conversion above.
    pub ayanamsa: f64,
    pub julian_day: JulianDate,
}

impl AstroResult {
    /// Position of `body`.
    pub fn get(&self, body: Body) -> &BodyPosition {
        match body {
            Body::Sun => &self.sun,
            Body::Moon => &self.moon,
            Body::Mars => &self.mars,
            Body::Mercury => &self.mercury,
            Body::Jupiter => &self.jupiter,
            Body::Venus => &self.venus,
            Body::Saturn => &self.saturn,
            Body::Rahu => &self.rahu,
            Body::Ketu => &self.ketu,
            Body::Ascendant => &self.ascendant,
        }
    }

    /// All ten points in [`Body::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, &BodyPosition)> + '_ {
        Body::ALL.into_iter().map(move |body| (body, self.get(body)))
    }

    /// Whole-sign house (1–12) of `body`, counted from the ascendant's sign.
    pub fn house_of(&self, body: Body) -> u8 {
        let sign = self.get(body).sign_index();
        (sign + 12 - self.ascendant.sign_index()) % 12 + 1
    }
}

/// Compute a chart from a local date (`YYYY-MM-DD`), local time (`HH:MM`),
/// latitude (+North), longitude (+East) and UTC offset in hours.
///
/// # Errors
///
/// Any [`ChartError`](crate::ChartError) raised while validating the input.
/// Once the input is accepted the computation cannot fail.
#[tracing::instrument(level = "debug")]
pub fn compute_chart(
    date: &str,
    time: &str,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> Result<AstroResult> {
    let birth = BirthData::parse(date, time, latitude_deg, longitude_deg, utc_offset_hours)?;
    Ok(compute_chart_for(&birth))
}

/// Compute a chart from already-validated birth data.
pub fn compute_chart_for(birth: &BirthData) -> AstroResult {
    let jd = birth.julian_day();
    let t = jd.julian_centuries();
    let ayanamsa = lahiri_deg(jd);
    debug!(julian_day = jd.value(), ayanamsa, "chart epoch");

    let sidereal = |body: Body, tropical: TropicalPosition| {
        let position = BodyPosition::new(tropical.longitude - ayanamsa, tropical.speed);
        trace!(
            body = body.name(),
            longitude = position.longitude(),
            speed = position.speed(),
            sign = position.sign_index(),
            "position"
        );
        position
    };

    let sun = sidereal(Body::Sun, solar_position(t));
    let moon = sidereal(Body::Moon, lunar_position(t));
    let mars = sidereal(Body::Mars, planet_position(Planet::Mars, t));
    let mercury = sidereal(Body::Mercury, planet_position(Planet::Mercury, t));
    let jupiter = sidereal(Body::Jupiter, planet_position(Planet::Jupiter, t));
    let venus = sidereal(Body::Venus, planet_position(Planet::Venus, t));
    let saturn = sidereal(Body::Saturn, planet_position(Planet::Saturn, t));

    let rahu = sidereal(Body::Rahu, rahu_position(t));
    // Derived from the sidereal Rahu so the opposition is exact.
    let ketu = BodyPosition::new(ketu_from_rahu(rahu.longitude()), rahu.speed());

    let lst = local_sidereal_time_deg(jd, birth.longitude());
    let rising = ascendant_deg(lst, mean_obliquity_deg(t), birth.latitude());
    let ascendant = sidereal(Body::Ascendant, TropicalPosition::new(rising, 0.0));

    AstroResult {
        sun,
        moon,
        mars,
        mercury,
        jupiter,
        venus,
        saturn,
        rahu,
        ketu,
        ascendant,
        ayanamsa,
        julian_day: jd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use approx::assert_abs_diff_eq;

    fn reference() -> AstroResult {
        compute_chart("1979-07-30", "19:30", 12.97, 77.59, 5.5).unwrap()
    }

    #[test]
    fn reference_chart_longitudes() {
        let chart = reference();
        let expected = [
            (Body::Sun, 103.2458),
            (Body::Moon, 174.3183),
            (Body::Mars, 60.6970),
            (Body::Mercury, 105.4708),
            (Body::Jupiter, 113.8121),
            (Body::Venus, 96.4116),
            (Body::Saturn, 138.5587),
            (Body::Rahu, 136.5046),
            (Body::Ketu, 316.5046),
            (Body::Ascendant, 295.6576),
        ];
        for (body, lon) in expected {
            assert_abs_diff_eq!(chart.get(body).longitude(), lon, epsilon = 2e-3);
        }
        assert_abs_diff_eq!(chart.ayanamsa, 23.5707, epsilon = 1e-4);
        assert_abs_diff_eq!(chart.julian_day.value(), 2_444_085.083_333_333, epsilon = 1e-8);
    }

    #[test]
    fn fixed_speeds() {
        let chart = reference();
        assert_eq!(chart.ascendant.speed(), 0.0);
        assert_eq!(chart.rahu.speed(), crate::nodes::NODE_DAILY_MOTION);
        assert_eq!(chart.ketu.speed(), crate::nodes::NODE_DAILY_MOTION);
    }

    #[test]
    fn whole_sign_houses() {
        let chart = reference();
        assert_eq!(chart.house_of(Body::Ascendant), 1);
        // Ascendant Capricorn (9), Sun Cancer (3): seventh house.
        assert_eq!(chart.house_of(Body::Sun), 7);
        assert_eq!(chart.house_of(Body::Ketu), 2);
        assert_eq!(chart.house_of(Body::Mars), 6);
    }

    #[test]
    fn iter_visits_every_body_in_order() {
        let chart = reference();
        let bodies: Vec<Body> = chart.iter().map(|(b, _)| b).collect();
        assert_eq!(bodies, Body::ALL);
    }

    #[test]
    fn only_planets_can_retrograde() {
        let planets: Vec<Body> = Body::ALL.into_iter().filter(|b| b.can_retrograde()).collect();
        assert_eq!(
            planets,
            [Body::Mars, Body::Mercury, Body::Jupiter, Body::Venus, Body::Saturn]
        );
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(matches!(
            compute_chart("1979-13-30", "19:30", 12.97, 77.59, 5.5),
            Err(ChartError::InvalidDate { .. })
        ));
        assert!(matches!(
            compute_chart("1979-07-30", "19:30", 90.0, 77.59, 5.5),
            Err(ChartError::InvalidLatitude { .. })
        ));
    }
}
