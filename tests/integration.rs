use approx::assert_abs_diff_eq;
use chrono::{DateTime, NaiveDate, NaiveTime};
use qtty::Days;
use vedic_ephemeris::angle::wrap_delta_deg;
use vedic_ephemeris::ayanamsa::{lahiri_deg, tropical_to_sidereal};
use vedic_ephemeris::{
    compute_chart, compute_chart_for, local_to_jd, BirthData, Body, ChartError, JulianDate,
    ModifiedJulianDate, Nakshatra, Sign,
};

fn reference_birth() -> BirthData {
    BirthData::parse("1979-07-30", "19:30", 12.97, 77.59, 5.5).unwrap()
}

#[test]
fn reference_chart_signs() {
    let chart = compute_chart("1979-07-30", "19:30", 12.97, 77.59, 5.5).unwrap();
    let expected = [
        (Body::Sun, Sign::Cancer),
        (Body::Moon, Sign::Virgo),
        (Body::Mars, Sign::Gemini),
        (Body::Mercury, Sign::Cancer),
        (Body::Jupiter, Sign::Cancer),
        (Body::Venus, Sign::Cancer),
        (Body::Saturn, Sign::Leo),
        (Body::Rahu, Sign::Leo),
        (Body::Ketu, Sign::Aquarius),
        (Body::Ascendant, Sign::Capricorn),
    ];
    for (body, sign) in expected {
        assert_eq!(chart.get(body).sign(), sign, "{body}");
        assert_eq!(chart.get(body).sign_index(), sign.index(), "{body}");
    }
    assert!(chart.mercury.speed() < 0.0, "Mercury should be retrograde");
    assert!((23.57..=23.86).contains(&chart.ayanamsa));
}

#[test]
fn reference_chart_nakshatras() {
    let chart = compute_chart_for(&reference_birth());
    assert_eq!(chart.moon.nakshatra(), Nakshatra::Chitra);
    assert_eq!(chart.sun.nakshatra(), Nakshatra::Pushya);
    assert_eq!(chart.ascendant.nakshatra(), Nakshatra::Dhanishtha);
}

/// Tropical longitudes for 1979-07-30 14:00 UT at 12.97N 77.59E from an
/// independent theory: Schlyter's equinox-of-date orbital elements with
/// his lunar perturbation series and mean node, and an ascendant found by
/// root-finding the eastern horizon under IAU 2006 sidereal time and
/// obliquity.
const TABULATED_TROPICAL: [(Body, f64); 10] = [
    (Body::Sun, 126.8234),
    (Body::Moon, 197.8668),
    (Body::Mars, 83.9841),
    (Body::Mercury, 128.7591),
    (Body::Jupiter, 137.0281),
    (Body::Venus, 119.6982),
    (Body::Saturn, 162.1837),
    (Body::Rahu, 160.0744),
    (Body::Ketu, 340.0744),
    (Body::Ascendant, 319.2283),
];

#[test]
fn reference_chart_within_tolerance_of_tabulated_ephemeris() {
    let chart = compute_chart_for(&reference_birth());
    for (body, tropical) in TABULATED_TROPICAL {
        let expected = tropical_to_sidereal(tropical, chart.julian_day);
        let delta = wrap_delta_deg(chart.get(body).longitude() - expected).abs();
        let limit = match body {
            Body::Sun | Body::Moon | Body::Ascendant => 2.0,
            _ => 6.0,
        };
        assert!(delta < limit, "{body}: off by {delta:.4}° (limit {limit}°)");
    }
}

#[test]
fn reference_chart_through_every_constructor() {
    let parsed = compute_chart_for(&reference_birth());
    let naive = BirthData::new(
        NaiveDate::from_ymd_opt(1979, 7, 30).unwrap(),
        NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        12.97,
        77.59,
        5.5,
    )
    .unwrap();
    let zoned = BirthData::from_datetime(
        DateTime::parse_from_rfc3339("1979-07-30T19:30:00+05:30").unwrap(),
        12.97,
        77.59,
    )
    .unwrap();
    assert_eq!(compute_chart_for(&naive), parsed);
    assert_eq!(compute_chart_for(&zoned), parsed);
}

#[test]
fn charts_are_deterministic() {
    let a = compute_chart("2024-02-29", "23:59", -33.87, 151.21, 11.0).unwrap();
    let b = compute_chart("2024-02-29", "23:59", -33.87, 151.21, 11.0).unwrap();
    for ((_, pa), (_, pb)) in a.iter().zip(b.iter()) {
        assert_eq!(pa.longitude().to_bits(), pb.longitude().to_bits());
        assert_eq!(pa.speed().to_bits(), pb.speed().to_bits());
    }
    assert_eq!(a.ayanamsa.to_bits(), b.ayanamsa.to_bits());
    assert_eq!(a.julian_day, b.julian_day);
}

#[test]
fn ketu_opposes_rahu() {
    for (date, time) in [("1900-01-01", "00:00"), ("1979-07-30", "19:30"), ("2050-06-15", "06:45")] {
        let chart = compute_chart(date, time, 40.0, -74.0, -5.0).unwrap();
        let gap = (chart.ketu.longitude() - chart.rahu.longitude()).rem_euclid(360.0);
        assert_abs_diff_eq!(gap, 180.0, epsilon = 1e-9);
    }
}

#[test]
fn positions_respect_ranges() {
    let chart = compute_chart("1947-08-15", "00:00", 28.61, 77.21, 5.5).unwrap();
    for (body, p) in chart.iter() {
        assert!((0.0..360.0).contains(&p.longitude()), "{body}");
        assert!((0.0..30.0).contains(&p.degree_in_sign()), "{body}");
        assert!(p.sign_index() < 12, "{body}");
        assert_eq!(p.sign_index(), (p.longitude() / 30.0).floor() as u8, "{body}");
    }
}

#[test]
fn local_offset_moves_the_julian_day_not_the_sky() {
    // The same instant written in two zones gives the same chart body positions.
    let ist = compute_chart("1979-07-31", "01:00", 12.97, 77.59, 5.5).unwrap();
    let utc = compute_chart("1979-07-30", "19:30", 12.97, 77.59, 0.0).unwrap();
    assert_abs_diff_eq!(ist.julian_day.value(), utc.julian_day.value(), epsilon = 1e-9);
    assert_abs_diff_eq!(ist.moon.longitude(), utc.moon.longitude(), epsilon = 1e-9);
}

#[test]
fn sidereal_conversion_roundtrips() {
    let jd = local_to_jd("1979-07-30", "19:30", 5.5).unwrap();
    let tropical = 126.8165;
    let back = (tropical_to_sidereal(tropical, jd) + lahiri_deg(jd)).rem_euclid(360.0);
    assert_abs_diff_eq!(back, tropical, epsilon = 1e-9);
}

#[test]
fn modified_julian_day_interchange() {
    let jd = reference_birth().julian_day();
    let mjd: ModifiedJulianDate = jd.into();
    assert_abs_diff_eq!(mjd.value(), 44_084.583_333_333, epsilon = 1e-8);
    let back: JulianDate = mjd.into();
    assert!((back - jd).abs() < Days::new(1e-9));
}

#[test]
fn invalid_input_never_yields_a_chart() {
    let cases = [
        ("1979-07-32", "19:30", 12.97, 77.59, 5.5),
        ("1979-07-30", "24:30", 12.97, 77.59, 5.5),
        ("1979-07-30", "19:30", -90.0, 77.59, 5.5),
        ("1979-07-30", "19:30", 12.97, 200.0, 5.5),
        ("1979-07-30", "19:30", 12.97, 77.59, 15.0),
    ];
    for (date, time, lat, lon, offset) in cases {
        let err = compute_chart(date, time, lat, lon, offset).unwrap_err();
        assert_ne!(err, ChartError::DateOutOfRange);
        assert!(!err.to_string().is_empty());
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_chart_exposes_derived_fields() {
    let chart = compute_chart_for(&reference_birth());
    let json = serde_json::to_value(chart).unwrap();
    assert_eq!(json["ascendant"]["sign_index"], 9);
    assert_eq!(json["ascendant"]["speed"], 0.0);
    assert!(json["julian_day"].is_f64());

    let back: vedic_ephemeris::AstroResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, chart);
}
