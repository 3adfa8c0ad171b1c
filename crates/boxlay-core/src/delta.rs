#![forbid(unsafe_code)]

//! Delta propagation: how a pointer displacement reshapes a box.
//!
//! Every [`Zone`] maps to a row of signed multipliers, one [`DimDelta`] per
//! [`SubElement`]. `top` and `height` scale the vertical displacement, `left`
//! and `width` the horizontal one. The same row drives the live preview (in
//! pixels) and the final commit (in normalized units), so the two can never
//! disagree.
//!
//! Container rows are written out per zone in [`container_multipliers`]; the
//! rows of the other sub-elements follow from them because the outline and
//! handles are positioned relative to the container:
//!
//! - the outline grows with the container,
//! - right-side handles follow the container width,
//! - bottom-side handles follow the container height,
//! - the top-left handle never moves.

use crate::geometry::{BoxBounds, NormalizedDelta, PixelBounds};
use crate::layout::SubElement;
use crate::zone::Zone;

/// Signed per-dimension multipliers for one sub-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DimDelta {
    pub top: i8,
    pub left: i8,
    pub height: i8,
    pub width: i8,
}

impl DimDelta {
    /// No change.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new multiplier set.
    #[inline]
    #[must_use]
    pub const fn new(top: i8, left: i8, height: i8, width: i8) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// True if this entry changes nothing.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.top == 0 && self.left == 0 && self.height == 0 && self.width == 0
    }

    /// True if only `top`/`left` change.
    #[inline]
    #[must_use]
    pub const fn is_translation(self) -> bool {
        self.height == 0 && self.width == 0
    }

    /// Scale by a displacement of `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn scale(self, dx: f64, dy: f64) -> GeometryDelta {
        GeometryDelta {
            top: f64::from(self.top) * dy,
            left: f64::from(self.left) * dx,
            height: f64::from(self.height) * dy,
            width: f64::from(self.width) * dx,
        }
    }

    /// Scale by a normalized displacement.
    #[inline]
    #[must_use]
    pub fn scale_normalized(self, delta: NormalizedDelta) -> GeometryDelta {
        self.scale(delta.dx, delta.dy)
    }
}

/// Concrete amounts to add to `top`/`left`/`height`/`width`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryDelta {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

impl GeometryDelta {
    /// Add this delta to a pixel rectangle.
    #[inline]
    #[must_use]
    pub fn apply_to_pixels(&self, bounds: PixelBounds) -> PixelBounds {
        PixelBounds::new(
            bounds.top + self.top,
            bounds.left + self.left,
            bounds.height + self.height,
            bounds.width + self.width,
        )
    }

    /// Add this delta to normalized box bounds.
    #[inline]
    #[must_use]
    pub fn apply_to_box(&self, bounds: BoxBounds) -> BoxBounds {
        BoxBounds::new(
            bounds.top + self.top,
            bounds.left + self.left,
            bounds.height + self.height,
            bounds.width + self.width,
        )
    }
}

/// Container multipliers for each zone.
#[must_use]
pub const fn container_multipliers(zone: Zone) -> DimDelta {
    //                                         top left height width
    match zone {
        Zone::Move => DimDelta::new(1, 1, 0, 0),
        Zone::TopLeftResize => DimDelta::new(1, 1, -1, -1),
        Zone::TopResize => DimDelta::new(1, 0, -1, 0),
        Zone::TopRightResize => DimDelta::new(1, 0, -1, 1),
        Zone::RightResize => DimDelta::new(0, 0, 0, 1),
        Zone::BottomRightResize => DimDelta::new(0, 0, 1, 1),
        Zone::BottomResize => DimDelta::new(0, 0, 1, 0),
        Zone::BottomLeftResize => DimDelta::new(0, 1, 1, -1),
        Zone::LeftResize => DimDelta::new(0, 1, 0, -1),
    }
}

/// Multipliers for every sub-element under one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneRow {
    entries: [DimDelta; SubElement::COUNT],
}

impl ZoneRow {
    /// Derive a full row from the container's multipliers.
    #[must_use]
    pub const fn from_container(c: DimDelta) -> Self {
        let mut entries = [DimDelta::ZERO; SubElement::COUNT];
        entries[SubElement::Container.index()] = c;
        entries[SubElement::Outline.index()] = DimDelta::new(0, 0, c.height, c.width);
        entries[SubElement::TopRightHandle.index()] = DimDelta::new(0, c.width, 0, 0);
        entries[SubElement::BottomLeftHandle.index()] = DimDelta::new(c.height, 0, 0, 0);
        entries[SubElement::BottomRightHandle.index()] = DimDelta::new(c.height, c.width, 0, 0);
        Self { entries }
    }

    /// Multipliers for one sub-element.
    #[inline]
    #[must_use]
    pub const fn get(&self, element: SubElement) -> DimDelta {
        self.entries[element.index()]
    }

    /// Multipliers for the container, which mirror the box's own bounds.
    #[inline]
    #[must_use]
    pub const fn container(&self) -> DimDelta {
        self.get(SubElement::Container)
    }
}

/// Zone-keyed propagation table.
///
/// A row may be absent (see [`DeltaTable::without`]); callers treat a missing
/// row as "this zone does not edit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTable {
    rows: [Option<ZoneRow>; Zone::COUNT],
}

impl DeltaTable {
    /// Table with a row for all nine zones.
    pub const STANDARD: Self = Self::build();

    const fn build() -> Self {
        let mut rows = [None; Zone::COUNT];
        let mut i = 0;
        while i < Zone::COUNT {
            let zone = Zone::PRIORITY[i];
            rows[zone.index()] = Some(ZoneRow::from_container(container_multipliers(zone)));
            i += 1;
        }
        Self { rows }
    }

    /// The standard table.
    #[inline]
    #[must_use]
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// Row for a zone, if present.
    #[inline]
    #[must_use]
    pub fn row(&self, zone: Zone) -> Option<&ZoneRow> {
        self.rows[zone.index()].as_ref()
    }

    /// Remove the row for `zone`.
    #[must_use]
    pub fn without(mut self, zone: Zone) -> Self {
        self.rows[zone.index()] = None;
        self
    }

    /// Replace the row for `zone`.
    #[must_use]
    pub fn with_row(mut self, zone: Zone, row: ZoneRow) -> Self {
        self.rows[zone.index()] = Some(row);
        self
    }
}

impl Default for DeltaTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoxLayout, DEFAULT_HANDLE_RADIUS};

    fn base() -> BoxLayout {
        BoxLayout::new(PixelBounds::new(75.0, 100.0, 75.0, 100.0), DEFAULT_HANDLE_RADIUS)
    }

    fn row(zone: Zone) -> ZoneRow {
        *DeltaTable::STANDARD.row(zone).expect("standard row")
    }

    #[test]
    fn standard_table_has_every_zone() {
        for zone in Zone::PRIORITY {
            assert!(DeltaTable::standard().row(zone).is_some(), "{zone}");
        }
    }

    #[test]
    fn move_only_translates_the_container() {
        let r = row(Zone::Move);
        assert_eq!(r.container(), DimDelta::new(1, 1, 0, 0));
        assert!(r.container().is_translation());
        for element in SubElement::ALL {
            if element != SubElement::Container {
                assert!(r.get(element).is_zero(), "{element:?}");
            }
        }
    }

    #[test]
    fn bottom_right_grows_outline_and_moves_bottom_right_handle() {
        let r = row(Zone::BottomRightResize);
        assert_eq!(r.container(), DimDelta::new(0, 0, 1, 1));
        assert!(!r.container().is_translation());
        assert_eq!(r.get(SubElement::Outline), DimDelta::new(0, 0, 1, 1));
        assert_eq!(r.get(SubElement::BottomRightHandle), DimDelta::new(1, 1, 0, 0));
        assert!(r.get(SubElement::TopLeftHandle).is_zero());
    }

    #[test]
    fn top_left_moves_origin_and_shrinks() {
        let r = row(Zone::TopLeftResize);
        assert_eq!(r.container(), DimDelta::new(1, 1, -1, -1));
        assert_eq!(r.get(SubElement::Outline), DimDelta::new(0, 0, -1, -1));
        assert_eq!(r.get(SubElement::BottomRightHandle), DimDelta::new(-1, -1, 0, 0));
    }

    #[test]
    fn handles_stay_on_corners_for_every_zone() {
        for zone in Zone::PRIORITY {
            let moved = base().apply(&row(zone), 13.0, -7.0);
            let b = moved.box_bounds();
            let expect = [
                (SubElement::TopLeftHandle, (b.left, b.top)),
                (SubElement::TopRightHandle, (b.right(), b.top)),
                (SubElement::BottomLeftHandle, (b.left, b.bottom())),
                (SubElement::BottomRightHandle, (b.right(), b.bottom())),
            ];
            for (element, (x, y)) in expect {
                let c = moved.absolute(element).center();
                assert!(
                    (c.x - x).abs() < 1e-9 && (c.y - y).abs() < 1e-9,
                    "{zone}: {element:?} at ({}, {}) expected ({x}, {y})",
                    c.x,
                    c.y
                );
            }
        }
    }

    #[test]
    fn preview_equals_fresh_layout_of_transformed_bounds() {
        for zone in Zone::PRIORITY {
            let r = row(zone);
            let moved = base().apply(&r, 20.0, 20.0);
            let bounds = r
                .container()
                .scale(20.0, 20.0)
                .apply_to_pixels(base().box_bounds());
            assert_eq!(moved, BoxLayout::new(bounds, DEFAULT_HANDLE_RADIUS), "{zone}");
        }
    }

    #[test]
    fn without_removes_single_row() {
        let table = DeltaTable::standard().without(Zone::Move);
        assert!(table.row(Zone::Move).is_none());
        assert!(table.row(Zone::TopResize).is_some());
        let restored = table.with_row(Zone::Move, row(Zone::Move));
        assert_eq!(restored, DeltaTable::STANDARD);
    }

    #[test]
    fn normalized_scaling_matches_commit_arithmetic() {
        let delta = NormalizedDelta { dx: 0.05, dy: 0.1 };
        let next = row(Zone::Move)
            .container()
            .scale_normalized(delta)
            .apply_to_box(BoxBounds::new(0.25, 0.25, 0.25, 0.25));
        assert!((next.top - 0.35).abs() < 1e-12);
        assert!((next.left - 0.30).abs() < 1e-12);
        assert_eq!(next.height, 0.25);
        assert_eq!(next.width, 0.25);
    }
}
