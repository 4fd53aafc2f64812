// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal (Vedic) ephemeris engine.
//!
//! Given a birth date, local clock time, geographic location and UTC
//! offset, this crate computes the geocentric ecliptic positions and daily
//! motion of the Sun, Moon, Mars, Mercury, Jupiter, Venus and Saturn, the
//! mean lunar nodes Rahu and Ketu, and the ascendant, all in the sidereal
//! zodiac (Lahiri ayanamsa).
//!
//! ```
//! use vedic_ephemeris::{compute_chart, Sign};
//!
//! let chart = compute_chart("1979-07-30", "19:30", 12.97, 77.59, 5.5)?;
//! assert_eq!(chart.ascendant.sign(), Sign::Capricorn);
//! println!("Moon in {} ({})", chart.moon.sign(), chart.moon.nakshatra());
//! # Ok::<(), vedic_ephemeris::ChartError>(())
//! ```
//!
//! # Models
//!
//! | Point | Model | Daily motion |
//! |-------|-------|--------------|
//! | Sun | Meeus ch. 25 low-precision theory | analytic |
//! | Moon | ELP-2000/82, 60 longitude terms | analytic |
//! | Mercury … Saturn | Standish (1992) Keplerian elements, Jupiter–Saturn perturbations | one-day difference |
//! | Rahu / Ketu | mean node polynomial; Ketu = Rahu + 180° | fixed −0.05295°/day |
//! | Ascendant | GMST + mean obliquity | zero |
//!
//! The targets are sign- and nakshatra-level accuracy (well under a degree
//! for the luminaries and ascendant).  Every result is a pure function of
//! its input: no clock reads, caching or shared state.
//!
//! # Time
//!
//! [`Time<S>`] is an instant on a [`TimeScale`]; [`JulianDate`] is the
//! axis every series runs on and [`ModifiedJulianDate`] is provided for
//! interchange.  No ΔT is applied.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for inputs, results and instants.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for the chart epoch and
//! rejected input, `trace` per body) and never installs a subscriber.

pub mod angle;
pub mod ascendant;
pub mod ayanamsa;
mod birth;
mod chart;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub mod kepler;
mod local_time;
pub mod moon;
pub mod nodes;
pub mod planets;
mod position;
pub(crate) mod scales;
pub mod sidereal_time;
pub mod sun;
mod zodiac;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use birth::BirthData;
pub use chart::{compute_chart, compute_chart_for, AstroResult, Body};
pub use error::{ChartError, Result};
pub use instant::{Time, TimeScale};
pub use local_time::{local_to_jd, parse_date, parse_time, MAX_UTC_OFFSET_HOURS};
pub use planets::Planet;
pub use position::{BodyPosition, TropicalPosition};
pub use scales::{JD, MJD};
pub use zodiac::{
    pada_from_longitude, Nakshatra, Sign, ALL_NAKSHATRAS, ALL_SIGNS, NAKSHATRA_SPAN, PADA_SPAN,
    SIGN_SPAN,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day on the UT axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
