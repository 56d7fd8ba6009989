//! Editor configuration
//!
//! Provides the settings the point editor reads at construction time:
//! - Arc edit mode (which arc attribute stays fixed while a handle moves)
//! - Numeric bounds for the arc solvers
//! - Bezier approximation tolerance
//!
//! Lengths are stored in millimetres so the files stay readable, and are
//! handed to the editor in internal units. Supports JSON and TOML files.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use edakit_core::units::mm_to_iu;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Policy for which arc attribute is held fixed when another handle is dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArcEditMode {
    /// Center stays, endpoint drags change radius and angle
    #[default]
    KeepCenterAdjustAngleRadius,
    /// Center and radius stay, endpoint drags only change the angle
    KeepCenterEndsAdjustAngle,
    /// Endpoints stay when center or mid move; endpoint drags keep the
    /// tangent at the other end
    KeepEndpointsOrStartDirection,
}

impl ArcEditMode {
    /// The next mode in the fixed cycle used by the "switch arc edit mode" action
    pub fn next(self) -> Self {
        match self {
            Self::KeepCenterAdjustAngleRadius => Self::KeepCenterEndsAdjustAngle,
            Self::KeepCenterEndsAdjustAngle => Self::KeepEndpointsOrStartDirection,
            Self::KeepEndpointsOrStartDirection => Self::KeepCenterAdjustAngleRadius,
        }
    }

    /// True for the two modes that hold the arc center fixed
    pub fn keeps_center(self) -> bool {
        !matches!(self, Self::KeepEndpointsOrStartDirection)
    }
}

impl std::fmt::Display for ArcEditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeepCenterAdjustAngleRadius => write!(f, "Keep center, adjust angle and radius"),
            Self::KeepCenterEndsAdjustAngle => write!(f, "Keep center and radius, adjust angle"),
            Self::KeepEndpointsOrStartDirection => write!(f, "Keep endpoints or start direction"),
        }
    }
}

impl FromStr for ArcEditMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "keep_center_adjust_angle_radius" | "radius" => Ok(Self::KeepCenterAdjustAngleRadius),
            "keep_center_ends_adjust_angle" | "ends" => Ok(Self::KeepCenterEndsAdjustAngle),
            "keep_endpoints_or_start_direction" | "endpoints" => {
                Ok(Self::KeepEndpointsOrStartDirection)
            }
            _ => Err(ConfigError::UnknownArcEditMode(s.to_string())),
        }
    }
}

/// Cycle to the next arc edit mode
pub fn increment_arc_edit_mode(mode: ArcEditMode) -> ArcEditMode {
    mode.next()
}

/// Point editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Active arc edit mode
    pub arc_edit_mode: ArcEditMode,
    /// Upper bound for the curvature ratio accepted by tangent-keeping
    /// endpoint drags; larger ratios mean absurd radii and are rejected
    pub draw_arc_center_max_angle: f64,
    /// Maximum deviation of the bezier polyline approximation, in mm
    pub bezier_max_error_mm: f64,
    /// Smallest radius keep-center arc edits may produce, in mm
    pub min_arc_radius_mm: f64,
    /// Smallest width/height a rectangle may be dragged to, in mm
    pub min_rect_size_mm: f64,
    /// Distance in screen pixels within which an arc center snaps to the
    /// horizontal or vertical through the cursor
    pub center_snap_tolerance_px: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            arc_edit_mode: ArcEditMode::default(),
            draw_arc_center_max_angle: 50.0,
            bezier_max_error_mm: 0.005,
            min_arc_radius_mm: 0.001,
            min_rect_size_mm: 0.001,
            center_snap_tolerance_px: 5.0,
        }
    }
}

impl EditorSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style arc edit mode override
    pub fn with_arc_edit_mode(mut self, mode: ArcEditMode) -> Self {
        self.arc_edit_mode = mode;
        self
    }

    /// Bezier approximation tolerance in internal units
    pub fn bezier_max_error_iu(&self) -> f64 {
        mm_to_iu(self.bezier_max_error_mm)
    }

    /// Minimum arc radius in internal units
    pub fn min_arc_radius_iu(&self) -> f64 {
        mm_to_iu(self.min_arc_radius_mm)
    }

    /// Minimum rectangle size in internal units
    pub fn min_rect_size_iu(&self) -> f64 {
        mm_to_iu(self.min_rect_size_mm)
    }

    /// Platform settings file location (`<config dir>/edakit/editor.toml`)
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join("edakit").join("editor.toml"))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!(path = %path.display(), mode = ?settings.arc_edit_mode, "Loaded editor settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default editor settings");
                Self::default()
            }
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Saved editor settings");
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> ConfigResult<()> {
        let checks = [
            ("draw_arc_center_max_angle", self.draw_arc_center_max_angle),
            ("bezier_max_error_mm", self.bezier_max_error_mm),
            ("min_arc_radius_mm", self.min_arc_radius_mm),
            ("min_rect_size_mm", self.min_rect_size_mm),
        ];

        for (key, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        // Zero disables axis snapping of arc centers.
        if !(self.center_snap_tolerance_px.is_finite() && self.center_snap_tolerance_px >= 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "center_snap_tolerance_px".to_string(),
                value: self.center_snap_tolerance_px.to_string(),
            });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
