// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle normalisation helpers shared by every series.

/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// Normalise an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`;
/// that case is folded back to `0.0` so the half-open range always holds.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(FULL_CIRCLE);
    if r >= FULL_CIRCLE {
        0.0
    } else {
        r
    }
}

/// Fold an angular difference into `(-180, 180]`.
///
/// Used for finite-difference speeds where a body crosses 0°/360°
/// between the two samples.
#[inline]
pub fn wrap_delta_deg(delta: f64) -> f64 {
    let mut d = delta;
    if d > 180.0 {
        d -= FULL_CIRCLE;
    } else if d <= -180.0 {
        d += FULL_CIRCLE;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive_and_negative() {
        assert_eq!(normalize_deg(370.0), 10.0);
        assert_eq!(normalize_deg(-10.0), 350.0);
        assert_eq!(normalize_deg(720.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_circle() {
        let r = normalize_deg(-1e-17);
        assert!((0.0..FULL_CIRCLE).contains(&r), "got {r}");
    }

    #[test]
    fn wrap_delta_across_zero() {
        assert!((wrap_delta_deg(359.5 - 0.5) + 1.0).abs() < 1e-12);
        assert!((wrap_delta_deg(0.5 - 359.5) - 1.0).abs() < 1e-12);
        assert_eq!(wrap_delta_deg(-0.7), -0.7);
        assert_eq!(wrap_delta_deg(180.0), 180.0);
    }
}
