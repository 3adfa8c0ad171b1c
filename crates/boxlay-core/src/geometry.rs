#![forbid(unsafe_code)]

//! Geometric primitives and the coordinate model.
//!
//! Box coordinates are stored as fractions of the surface size
//! ([`BoxBounds`]) so they survive any rendering resolution. Hit-testing and
//! dragging happen in pixel space ([`PixelBounds`], [`PixelPoint`]).
//! [`Surface`] converts between the two.
//!
//! Neither space is clamped. A drag may push a box past the surface edge or
//! invert it (negative height/width); [`PixelBounds::normalized`] recovers the
//! covered rectangle when a caller needs it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in surface pixel coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A rectangle in pixel space.
///
/// `height` and `width` may be negative for an inverted box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelBounds {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Height in pixels.
    pub height: f64,
    /// Width in pixels.
    pub width: f64,
}

impl PixelBounds {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, height: f64, width: f64) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// Right edge (`left + width`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Geometric center.
    #[inline]
    #[must_use]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// True when either dimension is negative.
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.height < 0.0 || self.width < 0.0
    }

    /// The same covered area with non-negative height and width.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (top, height) = flip_span(self.top, self.height);
        let (left, width) = flip_span(self.left, self.width);
        Self::new(top, left, height, width)
    }

    /// Grow the rectangle by `amount` on every side.
    #[inline]
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.top - amount,
            self.left - amount,
            self.height + 2.0 * amount,
            self.width + 2.0 * amount,
        )
    }

    /// Check if a point is inside the rectangle, bounds inclusive.
    ///
    /// An inverted rectangle contains nothing.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Translate by an offset.
    #[inline]
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.top + dy, self.left + dx, self.height, self.width)
    }
}

/// A box rectangle as fractions of the surface size.
///
/// Values normally lie in `[0, 1]` but are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxBounds {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

impl BoxBounds {
    /// Create new normalized bounds.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, height: f64, width: f64) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// True when either dimension is negative.
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.height < 0.0 || self.width < 0.0
    }

    /// Flip an inverted box into the equivalent box with non-negative size.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (top, height) = flip_span(self.top, self.height);
        let (left, width) = flip_span(self.left, self.width);
        Self::new(top, left, height, width)
    }
}

/// A pointer displacement expressed as fractions of the surface size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Pixel dimensions of the rendering area, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Width in pixels.
    pub width_px: f64,
    /// Height in pixels.
    pub height_px: f64,
}

impl Surface {
    /// Create a surface, rejecting zero, negative, or non-finite sizes.
    ///
    /// Every normalized conversion divides by these dimensions.
    #[must_use]
    pub fn new(width_px: f64, height_px: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width_px) && valid(height_px) {
            Some(Self {
                width_px,
                height_px,
            })
        } else {
            None
        }
    }

    /// Map normalized box bounds to a pixel rectangle.
    #[must_use]
    pub fn to_pixel_bounds(&self, bounds: &BoxBounds) -> PixelBounds {
        PixelBounds {
            top: self.height_px * bounds.top,
            left: self.width_px * bounds.left,
            height: self.height_px * bounds.height,
            width: self.width_px * bounds.width,
        }
    }

    /// Map a pixel rectangle back to normalized bounds.
    #[must_use]
    pub fn to_box_bounds(&self, bounds: &PixelBounds) -> BoxBounds {
        BoxBounds {
            top: bounds.top / self.height_px,
            left: bounds.left / self.width_px,
            height: bounds.height / self.height_px,
            width: bounds.width / self.width_px,
        }
    }

    /// Convert a pixel displacement into a normalized displacement.
    #[inline]
    #[must_use]
    pub fn to_normalized_delta(&self, dx_px: f64, dy_px: f64) -> NormalizedDelta {
        NormalizedDelta {
            dx: dx_px / self.width_px,
            dy: dy_px / self.height_px,
        }
    }
}

/// Flip a span with negative size; a non-negative span is returned as is.
#[inline]
fn flip_span(start: f64, size: f64) -> (f64, f64) {
    if size < 0.0 { (start + size, -size) } else { (start, size) }
}
