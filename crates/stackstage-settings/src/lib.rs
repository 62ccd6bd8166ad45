//! # stackstage-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Settings for report rendering and export, loadable from TOML. Every field
//! has a default, so an empty file (or no file) gives a working setup.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Defaults, TOML loading and validation
//!
//! ## What does NOT belong here
//! * Rendering options consumed by lower tiers (stackstage-core maps these
//!   settings onto `RenderOptions`)
//! * Business logic
//!
//! ```toml
//! [layout]
//! width = 595.0
//! height = 1500.0
//! margin = 40.0
//!
//! [limits]
//! max_issues = 4
//! max_recommendations = 4
//! max_render_ms = 2000
//! max_output_bytes = 4194304
//!
//! [output]
//! filename_style = "dated"
//! compress = false
//! ```

#![forbid(unsafe_code)]

mod error;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::SettingsError;

/// Largest list cap the default canvas can hold.
pub const MAX_LIST_CAP: usize = 8;

/// Narrowest content area (width minus both margins) the fixed-width report
/// elements fit in: the score badge beside the title, and the cost label,
/// bar and value columns.
pub const MIN_CONTENT_WIDTH: f32 = 240.0;

/// Header, metrics grid, cost breakdown and footer, which do not depend on
/// the list caps.
pub const FIXED_SECTIONS_HEIGHT: f32 = 130.0 + 200.0 + 176.0 + 56.0;
/// Title line plus trailing gap of a list section.
pub const LIST_FRAME_HEIGHT: f32 = 24.0 + 8.0;
/// Vertical pitch of one list row.
pub const LIST_ROW_PITCH: f32 = 52.0;

/// Canvas height needed to render full issue and recommendation lists.
pub fn min_canvas_height(max_issues: usize, max_recommendations: usize) -> f32 {
    let list = |rows: usize| LIST_FRAME_HEIGHT + rows.max(1) as f32 * LIST_ROW_PITCH;
    FIXED_SECTIONS_HEIGHT + list(max_issues) + list(max_recommendations)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub layout: LayoutSettings,
    pub limits: LimitSettings,
    pub output: OutputSettings,
}

/// Canvas size and horizontal margin, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 1500.0,
            margin: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSettings {
    /// Issues rendered; the rest are dropped.
    pub max_issues: usize,
    /// Recommendations rendered; the rest are dropped.
    pub max_recommendations: usize,
    pub max_render_ms: u64,
    pub max_output_bytes: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_issues: 4,
            max_recommendations: 4,
            max_render_ms: 2_000,
            max_output_bytes: 4 * 1024 * 1024,
        }
    }
}

impl LimitSettings {
    pub fn render_deadline(&self) -> Duration {
        Duration::from_millis(self.max_render_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub filename_style: FilenameStyle,
    /// Flate-compress PDF content streams.
    pub compress: bool,
}

/// Download filename pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilenameStyle {
    /// `StackStage-Analysis-Report-<YYYY-MM-DD>.pdf`
    #[default]
    Dated,
    /// `StackStage_Analysis_Report_<analysisId>.pdf`
    ById,
}

impl ReportSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let layout = &self.layout;
        for (field, value) in [
            ("layout.width", layout.width),
            ("layout.height", layout.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(field, "must be a positive number"));
            }
        }
        if !(layout.margin.is_finite() && layout.margin >= 0.0) {
            return Err(SettingsError::invalid("layout.margin", "must not be negative"));
        }
        let content_width = layout.width - 2.0 * layout.margin;
        if content_width <= 0.0 {
            return Err(SettingsError::invalid(
                "layout.margin",
                "leaves no content width",
            ));
        }
        if content_width < MIN_CONTENT_WIDTH {
            return Err(SettingsError::invalid(
                "layout.width",
                format!("content width {content_width}pt is below {MIN_CONTENT_WIDTH}pt"),
            ));
        }

        let limits = &self.limits;
        for (field, cap) in [
            ("limits.max_issues", limits.max_issues),
            ("limits.max_recommendations", limits.max_recommendations),
        ] {
            if !(1..=MAX_LIST_CAP).contains(&cap) {
                return Err(SettingsError::invalid(
                    field,
                    format!("must be between 1 and {MAX_LIST_CAP}"),
                ));
            }
        }
        let needed = min_canvas_height(limits.max_issues, limits.max_recommendations);
        if layout.height < needed {
            return Err(SettingsError::invalid(
                "layout.height",
                format!("must be at least {needed}pt for the configured list caps"),
            ));
        }
        if limits.max_render_ms == 0 {
            return Err(SettingsError::invalid("limits.max_render_ms", "must be nonzero"));
        }
        if limits.max_output_bytes == 0 {
            return Err(SettingsError::invalid(
                "limits.max_output_bytes",
                "must be nonzero",
            ));
        }
        Ok(())
    }
}
