#![forbid(unsafe_code)]

//! RGBA colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const ORANGE: Self = Self::rgb(255, 128, 0);
    pub const AZURE: Self = Self::rgb(30, 144, 255);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Alpha byte for a fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn alpha_from_fraction(fraction: f64) -> u8 {
        (fraction.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// CSS `rgba()` notation, alpha rounded to three decimals.
    #[must_use]
    pub fn to_css(self) -> String {
        let alpha = (self.alpha_f64() * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Rgba::RED.with_alpha(26);
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 26));
    }

    #[test]
    fn css_notation() {
        assert_eq!(Rgba::RED.to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Rgba::RED.with_alpha(0).to_css(), "rgba(255, 0, 0, 0)");
        assert_eq!(Rgba::RED.with_alpha(26).to_css(), "rgba(255, 0, 0, 0.102)");
    }

    #[test]
    fn alpha_fraction_conversion_clamps() {
        assert_eq!(Rgba::alpha_from_fraction(0.1), 26);
        assert_eq!(Rgba::alpha_from_fraction(1.5), 255);
        assert_eq!(Rgba::alpha_from_fraction(-1.0), 0);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgba::rgba(0x12, 0x34, 0x56, 0x78).to_string(), "#12345678");
    }
}
