// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated birth record, the engine's only input.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::local_time::{naive_local_to_jd, parse_date, parse_time, validate_utc_offset};
use crate::JulianDate;

/// Calendar date, local clock time and geographic location of a birth.
///
/// Every constructor validates its input, so a `BirthData` value always
/// yields a chart.  Latitude is positive North and must lie strictly
/// between the poles (the ascendant uses `tan φ`); longitude is positive
/// East within `[-180, 180]`; the UTC offset is in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BirthRecord", into = "BirthRecord")
)]
pub struct BirthData {
    date: NaiveDate,
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    julian_day: JulianDate,
}

impl BirthData {
    /// Build from parsed calendar values.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        let latitude = validate_latitude(latitude_deg)?;
        let longitude = validate_longitude(longitude_deg)?;
        let utc_offset_hours = validate_utc_offset(utc_offset_hours)?;
        Ok(Self {
            date,
            time,
            latitude,
            longitude,
            utc_offset_hours,
            julian_day: naive_local_to_jd(date, time, utc_offset_hours)?,
        })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` strings.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        Self::new(
            parse_date(date)?,
            parse_time(time)?,
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        )
    }

    /// Build from a zoned timestamp; the offset is taken from the timestamp.
    pub fn from_datetime(
        datetime: DateTime<FixedOffset>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self> {
        let local = datetime.naive_local();
        let offset_hours = f64::from(datetime.offset().local_minus_utc()) / 3_600.0;
        Self::new(
            local.date(),
            local.time(),
            latitude_deg,
            longitude_deg,
            offset_hours,
        )
    }

    /// Local calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Local clock time.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Geographic latitude in degrees, positive North.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Geographic longitude in degrees, positive East.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Offset of the local clock from UTC in hours.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Julian Day (UT) of the birth instant.
    pub fn julian_day(&self) -> JulianDate {
        self.julian_day
    }
}

/// Wire form of [`BirthData`]; deserialising goes back through
/// [`BirthData::new`] so stored records are validated like fresh input.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct BirthRecord {
    date: NaiveDate,
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<BirthRecord> for BirthData {
    type Error = ChartError;

    fn try_from(r: BirthRecord) -> Result<Self> {
        Self::new(r.date, r.time, r.latitude, r.longitude, r.utc_offset_hours)
    }
}

#[cfg(feature = "serde")]
impl From<BirthData> for BirthRecord {
    fn from(b: BirthData) -> Self {
        Self {
            date: b.date,
            time: b.time,
            latitude: b.latitude,
            longitude: b.longitude,
            utc_offset_hours: b.utc_offset_hours,
        }
    }
}

fn validate_latitude(latitude: f64) -> Result<f64> {
    if latitude.is_finite() && latitude.abs() < 90.0 {
        Ok(latitude)
    } else {
        debug!(latitude, "rejected latitude");
        Err(ChartError::InvalidLatitude { latitude })
    }
}

fn validate_longitude(longitude: f64) -> Result<f64> {
    if longitude.is_finite() && longitude.abs() <= 180.0 {
        Ok(longitude)
    } else {
        debug!(longitude, "rejected longitude");
        Err(ChartError::InvalidLongitude { longitude })
    }
}
