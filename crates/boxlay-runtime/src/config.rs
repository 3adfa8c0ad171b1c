#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! [`OverlayConfig`] gathers every tunable of an overlay session. Defaults
//! reproduce the stock look: a 12px hit margin, 3px handle radius, 2px
//! border, 8px outline rounding, and unselected boxes faded to about 10%
//! while something is selected.
//!
//! With the `policy-config` feature the config can be loaded from TOML or
//! JSON; missing fields take their defaults.
//!
//! ```toml
//! hit_margin = 16.0
//! dim_unselected = false
//! invert_policy = "normalize"
//! ```

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use boxlay_core::layout::DEFAULT_HANDLE_RADIUS;
use boxlay_core::zone::DEFAULT_HIT_MARGIN;
use boxlay_style::color::Rgba;
use boxlay_style::palette::{DEFAULT_PALETTE, LabelPalette};
use boxlay_style::visual::DEFAULT_DIM_ALPHA;

/// Default outline border width in pixels.
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;
/// Default outline corner rounding in pixels.
pub const DEFAULT_OUTLINE_RADIUS: f64 = 8.0;

/// What a committed drag does with a box whose height or width went negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "snake_case"))]
pub enum InvertPolicy {
    /// Store the bounds as computed.
    #[default]
    Permit,
    /// Flip to the equivalent rect with non-negative size.
    Normalize,
}

// ---------------------------------------------------------------------------
// OverlayConfig
// ---------------------------------------------------------------------------

/// Tunables for one overlay session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct OverlayConfig {
    /// Hit diameter of handles and edges, in pixels.
    pub hit_margin: f64,
    /// Radius of the corner handles; also the container padding.
    pub handle_radius: f64,
    pub border_width: f64,
    pub outline_radius: f64,
    /// Outline alpha of dimmed boxes.
    pub dim_alpha: u8,
    /// Fade unselected boxes while one is selected.
    pub dim_unselected: bool,
    pub invert_policy: InvertPolicy,
    /// Label colors, cycled by first-seen label index.
    pub palette: Vec<Rgba>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hit_margin: DEFAULT_HIT_MARGIN,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            outline_radius: DEFAULT_OUTLINE_RADIUS,
            dim_alpha: DEFAULT_DIM_ALPHA,
            dim_unselected: true,
            invert_policy: InvertPolicy::Permit,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn hit_margin(mut self, margin: f64) -> Self {
        self.hit_margin = margin;
        self
    }

    #[must_use]
    pub fn handle_radius(mut self, radius: f64) -> Self {
        self.handle_radius = radius;
        self
    }

    #[must_use]
    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn outline_radius(mut self, radius: f64) -> Self {
        self.outline_radius = radius;
        self
    }

    #[must_use]
    pub fn dim_alpha(mut self, alpha: u8) -> Self {
        self.dim_alpha = alpha;
        self
    }

    #[must_use]
    pub fn dim_unselected(mut self, dim: bool) -> Self {
        self.dim_unselected = dim;
        self
    }

    #[must_use]
    pub fn invert_policy(mut self, policy: InvertPolicy) -> Self {
        self.invert_policy = policy;
        self
    }

    #[must_use]
    pub fn palette(mut self, colors: Vec<Rgba>) -> Self {
        self.palette = colors;
        self
    }

    /// The configured colors as a [`LabelPalette`].
    #[must_use]
    pub fn label_palette(&self) -> LabelPalette {
        LabelPalette::new(self.palette.clone())
    }

    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every parameter is usable.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.hit_margin.is_finite() && self.hit_margin > 0.0) {
            errors.push(format!(
                "hit_margin must be finite and > 0, got {}",
                self.hit_margin
            ));
        }
        for (name, value) in [
            ("handle_radius", self.handle_radius),
            ("border_width", self.border_width),
            ("outline_radius", self.outline_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        if self.palette.is_empty() {
            errors.push("palette must contain at least one color".to_owned());
        }

        errors
    }

    /// Return the config if it validates cleanly.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error loading or validating an [`OverlayConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "invalid overlay config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
