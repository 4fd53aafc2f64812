// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian Day of a proleptic Gregorian calendar date plus a UT time of
    /// day in hours (Meeus, *Astronomical Algorithms*, ch. 7).
    ///
    /// January and February are counted as months 13 and 14 of the
    /// previous year so the leap day falls at the end of the cycle.  The
    /// caller is responsible for supplying a real calendar date; `ut_hours`
    /// may lie outside `[0, 24)`, in which case the result simply spills
    /// into the neighbouring day.
    pub fn from_gregorian(year: i32, month: u32, day: u32, ut_hours: f64) -> Self {
        let (y, m) = if month <= 2 {
            (f64::from(year) - 1.0, f64::from(month) + 12.0)
        } else {
            (f64::from(year), f64::from(month))
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
            + f64::from(day)
            + b
            - 1524.5
            + ut_hours / 24.0;
        Self::new(jd)
    }

    /// Julian centuries since J2000.0, the time argument of every series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian years since J2000.0.
    #[inline]
    pub fn julian_years(&self) -> JulianYears {
        JulianYears::new(
            ((*self - Self::J2000) / Self::JULIAN_YEAR)
                .simplify()
                .value(),
        )
    }

    /// The instant of 0h UT on the civil day containing `self`.
    ///
    /// Julian Days start at noon, so midnight sits on the `.5` boundary.
    #[inline]
    pub fn at_midnight(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 0.5)
    }
}

impl From<Centuries> for Time<JD> {
    fn from(centuries: Centuries) -> Self {
        // `Centuries` are interpreted as Julian centuries relative to J2000.
        Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
    }
}

impl From<Time<JD>> for Centuries {
    fn from(jd: Time<JD>) -> Self {
        jd.julian_centuries()
    }
}
