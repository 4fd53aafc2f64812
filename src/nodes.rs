// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rahu and Ketu, the Moon's mean ascending and descending nodes.
//!
//! Rahu follows the mean-node polynomial of Meeus ch. 47; Ketu is always
//! exactly opposite.  Both regress at a fixed mean rate.

use qtty::Centuries;

use crate::angle::normalize_deg;
use crate::position::TropicalPosition;

/// Mean daily motion of the nodes in degrees per day (always retrograde).
pub const NODE_DAILY_MOTION: f64 = -0.052_95;

/// Tropical longitude of the mean ascending node in degrees, `[0, 360)`.
pub fn mean_rahu_deg(t: Centuries) -> f64 {
    let t = t.value();
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_deg(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Ketu from Rahu: the opposite point.
#[inline]
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_deg(rahu_deg + 180.0)
}

/// Mean Rahu with its conventional daily motion.
pub fn rahu_position(t: Centuries) -> TropicalPosition {
    TropicalPosition::new(mean_rahu_deg(t), NODE_DAILY_MOTION)
}
