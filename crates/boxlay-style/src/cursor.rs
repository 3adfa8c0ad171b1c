#![forbid(unsafe_code)]

//! Pointer cursor tokens.
//!
//! Each zone maps to one cursor through its band pair: diagonals for the
//! corners, a vertical or horizontal arrow for the edges, and the move
//! cursor for the interior. Outside every box the neutral crosshair shows.

use std::fmt;

use boxlay_core::zone::{Band, Zone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cursor shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CursorStyle {
    Move,
    NsResize,
    EwResize,
    NwseResize,
    NeswResize,
    #[default]
    Crosshair,
}

impl CursorStyle {
    /// Cursor for the zone under the pointer, or the neutral one.
    #[must_use]
    pub const fn for_zone(zone: Option<Zone>) -> Self {
        let Some(zone) = zone else {
            return Self::Crosshair;
        };
        let (h, v) = zone.bands();
        match (h, v) {
            (Band::Middle, Band::Middle) => Self::Move,
            (Band::Middle, _) => Self::NsResize,
            (_, Band::Middle) => Self::EwResize,
            (Band::Start, Band::Start) | (Band::End, Band::End) => Self::NwseResize,
            _ => Self::NeswResize,
        }
    }

    /// CSS cursor keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
            Self::Crosshair => "crosshair",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
