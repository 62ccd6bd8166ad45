//! # stackstage-tier
//!
//! **Tier 0 (Pure Mapping)**
//!
//! Score-to-tier thresholds, bar fill arithmetic and the fixed report palette.
//! Every renderer goes through this crate so a score maps to the same color
//! in the badge, the metric cards and the bars.

#![forbid(unsafe_code)]

pub mod palette;

use serde::{Deserialize, Serialize};

pub use palette::Rgb;

/// Scores at or above this are `Good`.
pub const GOOD_THRESHOLD: f64 = 80.0;
/// Scores at or above this (and below `GOOD_THRESHOLD`) are `Watch`.
pub const WATCH_THRESHOLD: f64 = 60.0;

/// Display tier of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Watch,
    Risk,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Watch => "watch",
            Tier::Risk => "risk",
        }
    }

    /// The single color used for this tier by every renderer.
    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            Tier::Good => palette::TIER_GOOD,
            Tier::Watch => palette::TIER_WATCH,
            Tier::Risk => palette::TIER_RISK,
        }
    }
}

/// Map a score to its tier: `>= 80` good, `60..80` watch, `< 60` risk.
///
/// NaN maps to `Risk`.
#[must_use]
pub fn tier_of(score: f64) -> Tier {
    if score >= GOOD_THRESHOLD {
        Tier::Good
    } else if score >= WATCH_THRESHOLD {
        Tier::Watch
    } else {
        Tier::Risk
    }
}

/// Fill length of a progress bar for a 0-100 value.
///
/// `bar_width * clamp(value / 100, 0, 1)`.
#[must_use]
pub fn fill_width(bar_width: f32, value: f64) -> f32 {
    scaled_width(bar_width, value, 100.0)
}

/// Fill length of a bar scaled against `reference` as its maximum.
///
/// Non-positive references and NaN values produce an empty bar.
#[must_use]
pub fn scaled_width(bar_width: f32, value: f64, reference: f64) -> f32 {
    if reference <= 0.0 || value.is_nan() || bar_width <= 0.0 {
        return 0.0;
    }
    let ratio = (value / reference).clamp(0.0, 1.0);
    (f64::from(bar_width) * ratio) as f32
}
