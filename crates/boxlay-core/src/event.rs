#![forbid(unsafe_code)]

//! Canonical pointer events.
//!
//! The input collaborator delivers one of three event kinds, each carrying a
//! surface-relative pixel position. Coordinates are assumed to be already
//! clamped to the surface's input-capture region.

use crate::geometry::PixelPoint;

/// A pointer event on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved (button up or down).
    Move(PixelPoint),
    /// Primary button pressed.
    Down(PixelPoint),
    /// Primary button released.
    Up(PixelPoint),
}

impl PointerEvent {
    /// Shorthand for a move event.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::Move(PixelPoint::new(x, y))
    }

    /// Shorthand for a press event.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::Down(PixelPoint::new(x, y))
    }

    /// Shorthand for a release event.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::Up(PixelPoint::new(x, y))
    }

    /// Position carried by the event.
    #[must_use]
    pub const fn position(&self) -> PixelPoint {
        match *self {
            Self::Move(p) | Self::Down(p) | Self::Up(p) => p,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Down(_) => "down",
            Self::Up(_) => "up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_position() {
        assert_eq!(PointerEvent::moved(1.0, 2.0).position(), PixelPoint::new(1.0, 2.0));
        assert_eq!(PointerEvent::down(3.0, 4.0), PointerEvent::Down(PixelPoint::new(3.0, 4.0)));
        assert_eq!(PointerEvent::up(5.0, 6.0).kind(), "up");
    }
}
