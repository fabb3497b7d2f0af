//! Serializable badge style profile.
//!
//! A [`BadgeProfile`] captures every layer setting in a JSON-friendly form
//! so a badge style can be stored next to the assets it produces and
//! reloaded later.
//!
//! # Example
//!
//! ```
//! use badge_renderer::{BadgeProfile, DiscSettings};
//!
//! let mut profile = BadgeProfile::standard();
//! profile.highlight = Some(DiscSettings {
//!     color: "#ffffff".into(),
//!     alpha: 128,
//!     radius_ratio: 0.5,
//!     enabled: true,
//! });
//!
//! let json = profile.to_json().unwrap();
//! let restored = BadgeProfile::from_json(&json).unwrap();
//! assert_eq!(restored.highlight.unwrap().alpha, 128);
//! ```

use std::path::Path;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::DEFAULT_OUTER_RATIO;
use crate::layer::{DiscConfig, GradientConfig};

// ============================================================================
// Colours
// ============================================================================

/// Parses a `#rrggbb` (or `rrggbb`) hex colour.
pub fn parse_color(value: &str) -> Result<Srgb<u8>> {
    Srgb::<u8>::from_str(value.trim()).map_err(|_| Error::InvalidColor {
        value: value.to_owned(),
    })
}

/// Formats a colour as lowercase `#rrggbb`.
pub fn format_color(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

// ============================================================================
// Layer Settings (Serializable)
// ============================================================================

/// Serializable settings for the gradient layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct GradientSettings {
    /// Hex fill colour.
    pub color: String,

    /// Opacity scale applied to every disc (0.0-1.0).
    pub peak_opacity: f64,

    /// Whether this layer is enabled.
    pub enabled: bool,
}

impl Default for GradientSettings {
    fn default() -> Self {
        (&GradientConfig::default()).into()
    }
}

impl From<&GradientConfig> for GradientSettings {
    fn from(config: &GradientConfig) -> Self {
        Self {
            color: format_color(config.color),
            peak_opacity: config.peak_opacity,
            enabled: true,
        }
    }
}

impl GradientSettings {
    /// Converts to a layer config, validating the colour.
    pub fn to_config(&self) -> Result<GradientConfig> {
        Ok(GradientConfig::new(
            parse_color(&self.color)?,
            self.peak_opacity,
        ))
    }
}

/// Serializable settings for a solid disc layer (highlight or core).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DiscSettings {
    /// Hex fill colour.
    pub color: String,

    /// Fill alpha (0-255).
    pub alpha: u8,

    /// Radius as a fraction of the outer radius (0.0-1.0).
    pub radius_ratio: f32,

    /// Whether this layer is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl From<&DiscConfig> for DiscSettings {
    fn from(config: &DiscConfig) -> Self {
        Self {
            color: format_color(config.color),
            alpha: config.alpha,
            radius_ratio: config.radius_ratio,
            enabled: true,
        }
    }
}

impl DiscSettings {
    /// Converts to a layer config, validating the colour.
    pub fn to_config(&self) -> Result<DiscConfig> {
        Ok(DiscConfig::new(
            parse_color(&self.color)?,
            self.alpha,
            self.radius_ratio,
        ))
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// BadgeProfile
// ============================================================================

/// A serializable profile containing every badge setting.
///
/// Missing fields fall back to the standard badge, so `{}` is a valid
/// profile. An explicit `null` removes a layer.
///
/// # JSON Format
///
/// ```json
/// {
///   "outerRatio": 0.4,
///   "gradient": { "color": "#2196f3", "peakOpacity": 0.9, "enabled": true },
///   "highlight": { "color": "#64b5f6", "alpha": 200, "radiusRatio": 0.6, "enabled": true },
///   "core": { "color": "#2196f3", "alpha": 255, "radiusRatio": 0.3, "enabled": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeProfile {
    /// Outer radius as a fraction of the icon size.
    pub outer_ratio: f32,

    /// Gradient layer settings. `None` means no gradient.
    pub gradient: Option<GradientSettings>,

    /// Highlight layer settings. `None` means no highlight.
    pub highlight: Option<DiscSettings>,

    /// Core layer settings. `None` means no core.
    pub core: Option<DiscSettings>,
}

impl Default for BadgeProfile {
    fn default() -> Self {
        Self {
            outer_ratio: DEFAULT_OUTER_RATIO,
            gradient: Some(GradientSettings::default()),
            highlight: Some((&DiscConfig::highlight()).into()),
            core: Some((&DiscConfig::core()).into()),
        }
    }
}

impl BadgeProfile {
    /// The standard blue badge.
    pub fn standard() -> Self {
        Self::default()
    }

    /// A profile with no layers; renders a transparent image.
    pub fn blank() -> Self {
        Self {
            outer_ratio: DEFAULT_OUTER_RATIO,
            gradient: None,
            highlight: None,
            core: None,
        }
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::gradient::DEFAULT_PEAK_OPACITY;

    #[test]
    fn parse_and_format_colour() {
        let color = parse_color("#2196f3").unwrap();
        assert_eq!((color.red, color.green, color.blue), (33, 150, 243));
        assert_eq!(format_color(color), "#2196f3");
        assert_eq!(parse_color("64b5f6").unwrap(), Srgb::<u8>::new(100, 181, 246));
    }

    #[test]
    fn bad_colour_is_rejected() {
        assert!(matches!(
            parse_color("blue-ish"),
            Err(Error::InvalidColor { .. })
        ));
    }

    #[test]
    fn empty_profile_is_standard() {
        let profile = BadgeProfile::from_json("{}").unwrap();
        assert_eq!(profile, BadgeProfile::standard());
    }

    #[test]
    fn null_removes_a_layer() {
        let profile = BadgeProfile::from_json(r#"{"highlight": null}"#).unwrap();
        assert!(profile.highlight.is_none());
        assert!(profile.gradient.is_some());
        assert!(profile.core.is_some());
    }

    #[test]
    fn profile_json_format() {
        let json = BadgeProfile::standard().to_json_pretty().unwrap();

        assert!(json.contains("\"outerRatio\""));
        assert!(json.contains("\"peakOpacity\""));
        assert!(json.contains("\"radiusRatio\""));
        assert!(json.contains("\"#64b5f6\""));
    }

    #[test]
    fn blank_profile_survives_serialization() {
        let json = BadgeProfile::blank().to_json().unwrap();
        assert_eq!(BadgeProfile::from_json(&json).unwrap(), BadgeProfile::blank());
    }

    #[test]
    fn disc_enabled_defaults_to_true() {
        let json = r##"{"core": {"color": "#000000", "alpha": 255, "radiusRatio": 0.5}}"##;
        let profile = BadgeProfile::from_json(json).unwrap();
        let core = profile.core.unwrap();
        assert!(core.enabled);
        assert_eq!(core.to_config().unwrap().color, Srgb::<u8>::new(0, 0, 0));
    }

    #[test]
    fn standard_settings_match_layer_defaults() {
        let profile = BadgeProfile::standard();
        assert_eq!(
            profile.gradient.unwrap().to_config().unwrap(),
            GradientConfig::default()
        );
        assert_eq!(
            profile.core.unwrap().to_config().unwrap(),
            DiscConfig::core()
        );
        assert_eq!(profile.outer_ratio, DEFAULT_OUTER_RATIO);
        assert_eq!(DEFAULT_PEAK_OPACITY, 0.9);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = BadgeProfile::load("/nonexistent/badge-profile.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
