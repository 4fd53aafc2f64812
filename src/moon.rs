// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar longitude from the truncated ELP-2000/82 series.
//!
//! Uses the 60 longitude terms of Meeus, *Astronomical Algorithms*
//! table 47.A together with the Venus, Jupiter and flattening additive
//! terms.  Terms involving the Sun's mean anomaly are scaled by the
//! eccentricity factor `E` (and `E²` for `2M`).  No nutation is applied,
//! so the result is the geometric longitude referred to the mean equinox
//! of date.

use qtty::Centuries;

use crate::angle::normalize_deg;
use crate::position::TropicalPosition;

/// One row of the periodic table: multiples of `D`, `M`, `M'`, `F` and the
/// sine coefficient in units of 10⁻⁶ degree.
#[derive(Debug, Clone, Copy)]
struct LongitudeTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> LongitudeTerm {
    LongitudeTerm { d, m, mp, f, coeff }
}

#[rustfmt::skip]
static LONGITUDE_TERMS: [LongitudeTerm; 60] = [
    term(0, 0, 1, 0, 6_288_774.0), term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),   term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),  term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),   term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),  term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),   term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),   term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),   term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),     term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),     term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),   term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),    term(0, 2, 0, 0, -2_069.0),
    term(2, -2, -1, 0, 2_048.0),   term(2, 0, 1, -2, -1_773.0),
    term(2, 0, 0, 2, -1_595.0),    term(4, -1, -1, 0, 1_215.0),
    term(0, 0, 2, 2, -1_110.0),    term(3, 0, -1, 0, -892.0),
    term(2, 1, 1, 0, -810.0),      term(4, -1, -2, 0, 759.0),
    term(0, 2, -1, 0, -713.0),     term(2, 2, -1, 0, -700.0),
    term(2, 1, -2, 0, 691.0),      term(2, -1, 0, -2, 596.0),
    term(4, 0, 1, 0, 549.0),       term(0, 0, 4, 0, 537.0),
    term(4, -1, 0, 0, 520.0),      term(1, 0, -2, 0, -487.0),
    term(2, 1, 0, -2, -399.0),     term(0, 0, 2, -2, -381.0),
    term(1, 1, 1, 0, 351.0),       term(3, 0, -2, 0, -340.0),
    term(4, 0, -3, 0, 330.0),      term(2, -1, 2, 0, 327.0),
    term(0, 2, 1, 0, -323.0),      term(1, 1, -1, 0, 299.0),
    term(2, 0, 3, 0, 294.0),       term(2, 0, -1, -2, 0.0),
];

/// Fundamental arguments of the lunar theory, in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy)]
struct FundamentalArguments {
    /// Mean longitude of the Moon.
    l_prime: f64,
    /// Mean elongation from the Sun.
    d: f64,
    /// Sun's mean anomaly.
    m: f64,
    /// Moon's mean anomaly.
    m_prime: f64,
    /// Argument of latitude.
    f: f64,
}

impl FundamentalArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            l_prime: normalize_deg(
                218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            d: normalize_deg(
                297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            m: normalize_deg(
                357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            ),
            m_prime: normalize_deg(
                134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            f: normalize_deg(
                93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
        }
    }
}

/// Tropical longitude and daily motion of the Moon at `t` Julian
/// centuries from J2000.0.
pub fn lunar_position(t: Centuries) -> TropicalPosition {
    let t = t.value();
    let args = FundamentalArguments::at(t);

    // Decreasing eccentricity of the Earth's orbit.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sigma: f64 = LONGITUDE_TERMS
        .iter()
        .map(|row| {
            let arg = f64::from(row.d) * args.d
                + f64::from(row.m) * args.m
                + f64::from(row.mp) * args.m_prime
                + f64::from(row.f) * args.f;
            let scale = match row.m.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            row.coeff * scale * arg.to_radians().sin()
        })
        .sum();

    let a1 = normalize_deg(119.75 + 131.849 * t);
    let a2 = normalize_deg(53.09 + 479_264.290 * t);
    sigma += 3_958.0 * a1.to_radians().sin()
        + 1_962.0 * (args.l_prime - args.f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let longitude = args.l_prime + sigma / 1_000_000.0;

    let mp = args.m_prime.to_radians();
    let d2 = (2.0 * args.d).to_radians();
    let speed = 13.176_396
        + 1.434 * mp.cos()
        + 0.251_6 * (d2 - mp).cos()
        + 0.280_1 * d2.cos()
        + 0.097_4 * (2.0 * mp).cos();

    TropicalPosition::new(longitude, speed)
}
