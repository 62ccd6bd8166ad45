//! Fixed report palette.

use serde::{Deserialize, Serialize};
use stackstage_types::{CostCategory, Severity};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channels as 0.0-1.0 fractions, the form PDF color operators take.
    pub fn fractions(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| f32::from(c) / 255.0)
    }
}

pub const TIER_GOOD: Rgb = Rgb(16, 185, 129);
pub const TIER_WATCH: Rgb = Rgb(245, 158, 11);
pub const TIER_RISK: Rgb = Rgb(239, 68, 68);

pub const SEVERITY_CRITICAL: Rgb = Rgb(220, 38, 38);
pub const SEVERITY_HIGH: Rgb = Rgb(234, 88, 12);
pub const SEVERITY_MEDIUM: Rgb = Rgb(217, 119, 6);
pub const SEVERITY_LOW: Rgb = Rgb(37, 99, 235);

pub const BANNER: Rgb = Rgb(37, 99, 235);
pub const FOOTER: Rgb = Rgb(31, 41, 55);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const INK: Rgb = Rgb(26, 26, 26);
pub const MUTED: Rgb = Rgb(107, 114, 128);
pub const BORDER: Rgb = Rgb(229, 231, 235);
pub const TRACK: Rgb = Rgb(243, 244, 246);
pub const SUBTLE_FILL: Rgb = Rgb(248, 250, 252);

/// Markers for positional lists (recommendations), cycled by index.
pub const POSITION_MARKERS: [Rgb; 4] = [
    Rgb(37, 99, 235),
    Rgb(124, 58, 237),
    Rgb(8, 145, 178),
    Rgb(5, 150, 105),
];

#[must_use]
pub fn severity_color(severity: Severity) -> Rgb {
    match severity {
        Severity::Critical => SEVERITY_CRITICAL,
        Severity::High => SEVERITY_HIGH,
        Severity::Medium => SEVERITY_MEDIUM,
        Severity::Low => SEVERITY_LOW,
    }
}

#[must_use]
pub fn position_color(index: usize) -> Rgb {
    POSITION_MARKERS[index % POSITION_MARKERS.len()]
}

#[must_use]
pub fn category_color(category: CostCategory) -> Rgb {
    match category {
        CostCategory::Compute => Rgb(59, 130, 246),
        CostCategory::Storage => Rgb(139, 92, 246),
        CostCategory::Network => Rgb(6, 182, 212),
        CostCategory::Security => Rgb(239, 68, 68),
    }
}
