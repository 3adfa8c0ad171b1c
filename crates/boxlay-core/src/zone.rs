#![forbid(unsafe_code)]

//! Zone classification: which part of a box a pointer position falls in.
//!
//! A box's padded hit area is split into nine zones: four corner handles,
//! four edge strips, and the interior [`Zone::Move`] body. Each zone is the
//! product of a horizontal and a vertical [`Band`], so the geometry is
//! described once per band instead of once per direction.
//!
//! With hit margin `m` and `h = m / 2`, on each axis:
//!
//! ```text
//!   Start             Middle              End
//! [lo-h, lo+h]    [lo+h, hi-h]      [hi-h, hi+h]
//! ```
//!
//! # Invariants
//!
//! 1. [`which_zone`] returns at most one zone.
//! 2. Corners win over edges, edges win over `Move`, on shared boundaries.
//! 3. The union of all zones is exactly the padded rectangle
//!    `[l-h, r+h] x [t-h, b+h]`: `which_zone` is `None` iff the point lies
//!    outside it.
//! 4. Inverted boxes are classified by their normalized rectangle.

use crate::geometry::{PixelBounds, PixelPoint};

/// Default hit-target diameter in pixels.
pub const DEFAULT_HIT_MARGIN: f64 = 12.0;

/// Position of a band along one axis of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Straddling the low edge (left or top).
    Start,
    /// Between the two edge bands.
    Middle,
    /// Straddling the high edge (right or bottom).
    End,
}

impl Band {
    /// Inclusive span of this band for an axis running from `lo` to `hi`.
    ///
    /// The span is empty (`min > max`) for a `Middle` band on an axis
    /// shorter than the margin.
    #[inline]
    #[must_use]
    pub fn span(self, lo: f64, hi: f64, half_margin: f64) -> (f64, f64) {
        match self {
            Self::Start => (lo - half_margin, lo + half_margin),
            Self::Middle => (lo + half_margin, hi - half_margin),
            Self::End => (hi - half_margin, hi + half_margin),
        }
    }
}

/// Interaction zone of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Move,
    TopLeftResize,
    TopRightResize,
    BottomLeftResize,
    BottomRightResize,
    TopResize,
    BottomResize,
    LeftResize,
    RightResize,
}

impl Zone {
    /// Number of zones.
    pub const COUNT: usize = 9;

    /// All zones in classification priority order: corners, edges, move.
    pub const PRIORITY: [Zone; Zone::COUNT] = [
        Zone::TopLeftResize,
        Zone::TopRightResize,
        Zone::BottomLeftResize,
        Zone::BottomRightResize,
        Zone::TopResize,
        Zone::BottomResize,
        Zone::LeftResize,
        Zone::RightResize,
        Zone::Move,
    ];

    /// Dense index for table lookups.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Move => 0,
            Self::TopLeftResize => 1,
            Self::TopRightResize => 2,
            Self::BottomLeftResize => 3,
            Self::BottomRightResize => 4,
            Self::TopResize => 5,
            Self::BottomResize => 6,
            Self::LeftResize => 7,
            Self::RightResize => 8,
        }
    }

    /// `(horizontal, vertical)` bands that make up this zone.
    #[inline]
    #[must_use]
    pub const fn bands(self) -> (Band, Band) {
        match self {
            Self::Move => (Band::Middle, Band::Middle),
            Self::TopLeftResize => (Band::Start, Band::Start),
            Self::TopRightResize => (Band::End, Band::Start),
            Self::BottomLeftResize => (Band::Start, Band::End),
            Self::BottomRightResize => (Band::End, Band::End),
            Self::TopResize => (Band::Middle, Band::Start),
            Self::BottomResize => (Band::Middle, Band::End),
            Self::LeftResize => (Band::Start, Band::Middle),
            Self::RightResize => (Band::End, Band::Middle),
        }
    }

    /// True for the four corner handles.
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self.bands(),
            (Band::Start | Band::End, Band::Start | Band::End)
        )
    }

    /// True for the four edge strips.
    #[inline]
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !self.is_corner() && !matches!(self, Self::Move)
    }

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::TopLeftResize => "top-left-resize",
            Self::TopRightResize => "top-right-resize",
            Self::BottomLeftResize => "bottom-left-resize",
            Self::BottomRightResize => "bottom-right-resize",
            Self::TopResize => "top-resize",
            Self::BottomResize => "bottom-resize",
            Self::LeftResize => "left-resize",
            Self::RightResize => "right-resize",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel region covered by `zone` for a box with the given pixel bounds.
///
/// The region may be inverted (empty) for a `Middle` band on a box smaller
/// than the margin.
#[must_use]
pub fn zone_bounds(bounds: &PixelBounds, zone: Zone, margin: f64) -> PixelBounds {
    let rect = bounds.normalized();
    let half = margin / 2.0;
    let (h_band, v_band) = zone.bands();
    let (x0, x1) = h_band.span(rect.left, rect.right(), half);
    let (y0, y1) = v_band.span(rect.top, rect.bottom(), half);
    PixelBounds::new(y0, x0, y1 - y0, x1 - x0)
}

/// True if `point` lies in `zone` of a box.
///
/// Compares against the band spans directly rather than through
/// [`zone_bounds`], so adjacent zones share their boundary values exactly.
#[must_use]
pub fn zone_contains(bounds: &PixelBounds, zone: Zone, margin: f64, point: PixelPoint) -> bool {
    let rect = bounds.normalized();
    let half = margin / 2.0;
    let (h_band, v_band) = zone.bands();
    within(h_band.span(rect.left, rect.right(), half), point.x)
        && within(v_band.span(rect.top, rect.bottom(), half), point.y)
}

/// True if `point` lies in the padded hit area `[l-h, r+h] x [t-h, b+h]`.
#[must_use]
pub fn in_hit_area(bounds: &PixelBounds, point: PixelPoint, margin: f64) -> bool {
    let rect = bounds.normalized();
    let half = margin / 2.0;
    within((rect.left - half, rect.right() + half), point.x)
        && within((rect.top - half, rect.bottom() + half), point.y)
}

/// Classify `point` against one box.
///
/// Returns the first zone in [`Zone::PRIORITY`] containing the point, or
/// `None` if the point lies outside the padded box.
#[must_use]
pub fn which_zone(bounds: &PixelBounds, point: PixelPoint, margin: f64) -> Option<Zone> {
    if !in_hit_area(bounds, point, margin) {
        return None;
    }
    Zone::PRIORITY
        .into_iter()
        .find(|&zone| zone_contains(bounds, zone, margin, point))
}

#[inline]
fn within((lo, hi): (f64, f64), v: f64) -> bool {
    lo <= v && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: f64 = DEFAULT_HIT_MARGIN;

    fn rect() -> PixelBounds {
        PixelBounds::new(75.0, 100.0, 75.0, 100.0)
    }

    fn at(x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    #[test]
    fn interior_is_move() {
        assert_eq!(which_zone(&rect(), at(150.0, 112.0), M), Some(Zone::Move));
    }

    #[test]
    fn literal_corners_resolve_to_corner_zones() {
        let r = rect();
        assert_eq!(which_zone(&r, at(100.0, 75.0), M), Some(Zone::TopLeftResize));
        assert_eq!(which_zone(&r, at(200.0, 75.0), M), Some(Zone::TopRightResize));
        assert_eq!(which_zone(&r, at(100.0, 150.0), M), Some(Zone::BottomLeftResize));
        assert_eq!(which_zone(&r, at(200.0, 150.0), M), Some(Zone::BottomRightResize));
    }

    #[test]
    fn edge_midpoints_resolve_to_edge_zones() {
        let r = rect();
        assert_eq!(which_zone(&r, at(150.0, 75.0), M), Some(Zone::TopResize));
        assert_eq!(which_zone(&r, at(150.0, 150.0), M), Some(Zone::BottomResize));
        assert_eq!(which_zone(&r, at(100.0, 112.0), M), Some(Zone::LeftResize));
        assert_eq!(which_zone(&r, at(200.0, 112.0), M), Some(Zone::RightResize));
    }

    #[test]
    fn corner_wins_on_shared_boundary() {
        // x = left + h is both the corner's inner edge and the top strip's start.
        let r = rect();
        assert_eq!(which_zone(&r, at(106.0, 75.0), M), Some(Zone::TopLeftResize));
        assert_eq!(which_zone(&r, at(106.1, 75.0), M), Some(Zone::TopResize));
    }

    #[test]
    fn edge_wins_over_move_on_shared_boundary() {
        let r = rect();
        assert_eq!(which_zone(&r, at(150.0, 81.0), M), Some(Zone::TopResize));
        assert_eq!(which_zone(&r, at(150.0, 81.1), M), Some(Zone::Move));
    }

    #[test]
    fn padded_margin_is_inclusive() {
        let r = rect();
        assert_eq!(which_zone(&r, at(94.0, 69.0), M), Some(Zone::TopLeftResize));
        assert_eq!(which_zone(&r, at(93.9, 69.0), M), None);
        assert_eq!(which_zone(&r, at(206.0, 112.0), M), Some(Zone::RightResize));
        assert_eq!(which_zone(&r, at(206.1, 112.0), M), None);
    }

    #[test]
    fn zone_bounds_agree_with_zone_contains() {
        let r = rect();
        for zone in Zone::PRIORITY {
            let region = zone_bounds(&r, zone, M);
            let mid = region.center();
            assert!(zone_contains(&r, zone, M, mid), "{zone}");
        }
    }

    #[test]
    fn far_away_point_is_none() {
        assert_eq!(which_zone(&rect(), at(0.0, 0.0), M), None);
    }

    #[test]
    fn tiny_box_is_all_corners() {
        let tiny = PixelBounds::new(10.0, 10.0, 4.0, 4.0);
        for x in [4.0, 10.0, 12.0, 14.0, 20.0] {
            for y in [4.0, 12.0, 20.0] {
                let zone = which_zone(&tiny, at(x, y), M);
                assert!(zone.is_some_and(Zone::is_corner), "({x},{y}) -> {zone:?}");
            }
        }
    }

    #[test]
    fn inverted_box_uses_normalized_geometry() {
        let inverted = PixelBounds::new(150.0, 200.0, -75.0, -100.0);
        assert_eq!(which_zone(&inverted, at(150.0, 112.0), M), Some(Zone::Move));
        assert_eq!(
            which_zone(&inverted, at(100.0, 75.0), M),
            Some(Zone::TopLeftResize)
        );
    }

    #[test]
    fn bands_round_trip_through_zones() {
        for zone in Zone::PRIORITY {
            let (h, v) = zone.bands();
            let found = Zone::PRIORITY
                .into_iter()
                .filter(|z| z.bands() == (h, v))
                .count();
            assert_eq!(found, 1, "{zone} bands are not unique");
        }
    }

    #[test]
    fn indexes_are_dense_and_unique() {
        let mut seen = [false; Zone::COUNT];
        for zone in Zone::PRIORITY {
            assert!(!seen[zone.index()]);
            seen[zone.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn corner_and_edge_predicates() {
        assert_eq!(Zone::PRIORITY.iter().filter(|z| z.is_corner()).count(), 4);
        assert_eq!(Zone::PRIORITY.iter().filter(|z| z.is_edge()).count(), 4);
        assert!(!Zone::Move.is_corner());
        assert!(!Zone::Move.is_edge());
    }
}
