#![forbid(unsafe_code)]

//! Selection resolution across overlapping boxes.
//!
//! Hit regions of neighbouring boxes overlap once they are padded by the hit
//! margin. When several boxes claim a point, the one whose un-padded center
//! is nearest wins, so a box that is merely grazed at its margin loses to
//! the box the pointer is actually over. Exact ties go to the earliest box
//! in iteration order.

use crate::geometry::{PixelPoint, Surface};
use crate::model::BoxSet;
use crate::zone::{Zone, which_zone};

/// The winning `(box, zone)` pair for a pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Position of the box in the set.
    pub index: usize,
    /// Zone of that box containing the point.
    pub zone: Zone,
    /// Distance from the point to the box's un-padded center.
    pub distance: f64,
}

/// Pick the best box and zone under `point`.
#[must_use]
pub fn resolve(boxes: &BoxSet, surface: &Surface, margin: f64, point: PixelPoint) -> Option<Resolved> {
    let mut best: Option<Resolved> = None;
    for (index, b) in boxes.iter().enumerate() {
        let bounds = surface.to_pixel_bounds(&b.bounding_box);
        let Some(zone) = which_zone(&bounds, point, margin) else {
            continue;
        };
        let distance = point.distance(bounds.center());
        // Strict comparison keeps the earlier box on ties.
        if best.is_none_or(|current| distance < current.distance) {
            best = Some(Resolved {
                index,
                zone,
                distance,
            });
        }
    }
    #[cfg(feature = "tracing")]
    if let Some(hit) = &best {
        crate::trace!(
            index = hit.index,
            zone = %hit.zone,
            distance = hit.distance,
            "resolved selection"
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxBounds;
    use crate::model::LabeledBox;
    use crate::zone::DEFAULT_HIT_MARGIN;

    fn surface() -> Surface {
        Surface::new(400.0, 300.0).expect("valid surface")
    }

    /// Box centered on `(cx, cy)` pixels with the given pixel size.
    fn centered(id: &str, cx: f64, cy: f64, w: f64, h: f64) -> LabeledBox {
        let s = surface();
        LabeledBox::new(
            id,
            "obj",
            BoxBounds::new(
                (cy - h / 2.0) / s.height_px,
                (cx - w / 2.0) / s.width_px,
                h / s.height_px,
                w / s.width_px,
            ),
        )
    }

    #[test]
    fn nearest_center_wins() {
        let boxes = BoxSet::new(vec![
            centered("a", 100.0, 100.0, 80.0, 80.0),
            centered("b", 105.0, 100.0, 80.0, 80.0),
        ])
        .expect("unique ids");
        let hit = resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(102.0, 100.0))
            .expect("point is inside both");
        assert_eq!(hit.index, 0);
        assert_eq!(hit.zone, Zone::Move);
        assert!((hit.distance - 2.0).abs() < 1e-9);

        let hit = resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(104.0, 100.0))
            .expect("point is inside both");
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn ties_go_to_first_box() {
        // Dyadic fractions of the surface keep both centers exact.
        let boxes = BoxSet::new(vec![
            centered("a", 100.0, 150.0, 50.0, 150.0),
            centered("b", 150.0, 150.0, 50.0, 150.0),
        ])
        .expect("unique ids");
        let hit = resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(125.0, 150.0))
            .expect("point is on the shared edge");
        assert_eq!(hit.distance, 25.0);
        assert_eq!(hit.index, 0);
        assert_eq!(hit.zone, Zone::RightResize);
    }

    #[test]
    fn margin_graze_loses_to_interior_hit() {
        // The point sits in b's padded right strip and a's left strip, but a's
        // center is 6px away against b's 24px.
        let boxes = BoxSet::new(vec![
            centered("b", 60.0, 100.0, 40.0, 40.0),
            centered("a", 90.0, 100.0, 20.0, 20.0),
        ])
        .expect("unique ids");
        let hit = resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(84.0, 100.0))
            .expect("point is inside both margins");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.zone, Zone::LeftResize);

        let hit = resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(90.0, 100.0))
            .expect("point is inside a");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.zone, Zone::Move);
    }

    #[test]
    fn empty_space_resolves_to_none() {
        let boxes = BoxSet::new(vec![centered("a", 100.0, 100.0, 20.0, 20.0)]).expect("unique ids");
        assert!(resolve(&boxes, &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(300.0, 250.0)).is_none());
        assert!(resolve(&BoxSet::default(), &surface(), DEFAULT_HIT_MARGIN, PixelPoint::new(0.0, 0.0)).is_none());
    }
}
