#![forbid(unsafe_code)]

//! Sub-element layout of a rendered box.
//!
//! A box renders as a container frame padded by the handle radius, an
//! outline inside it, and four corner handles. Only the container is placed
//! in surface coordinates; the others are relative to the container's
//! top-left so a move only has to touch one element.
//!
//! ```text
//!  container (t-r, l-r, h+2r, w+2r)
//!  +--o-------------------o--+    o = handle, 2r x 2r
//!  |  +-------------------+  |        TL (0,0)   TR (0,w)
//!  |  |      outline      |  |        BL (h,0)   BR (h,w)
//!  |  |   (r, r, h, w)    |  |
//!  |  +-------------------+  |
//!  +--o-------------------o--+
//! ```

use crate::delta::ZoneRow;
use crate::geometry::PixelBounds;

/// Default handle radius in pixels.
pub const DEFAULT_HANDLE_RADIUS: f64 = 3.0;

/// A visual part of a rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubElement {
    /// Padded frame, positioned on the surface.
    Container,
    /// Visible border, relative to the container.
    Outline,
    TopLeftHandle,
    TopRightHandle,
    BottomLeftHandle,
    BottomRightHandle,
}

impl SubElement {
    /// Number of sub-elements.
    pub const COUNT: usize = 6;

    /// All sub-elements in index order.
    pub const ALL: [SubElement; SubElement::COUNT] = [
        SubElement::Container,
        SubElement::Outline,
        SubElement::TopLeftHandle,
        SubElement::TopRightHandle,
        SubElement::BottomLeftHandle,
        SubElement::BottomRightHandle,
    ];

    /// Dense index for table lookups.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Container => 0,
            Self::Outline => 1,
            Self::TopLeftHandle => 2,
            Self::TopRightHandle => 3,
            Self::BottomLeftHandle => 4,
            Self::BottomRightHandle => 5,
        }
    }

    /// True for the four handles.
    #[inline]
    #[must_use]
    pub const fn is_handle(self) -> bool {
        !matches!(self, Self::Container | Self::Outline)
    }
}

/// Pixel bounds of every sub-element of one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLayout {
    elements: [PixelBounds; SubElement::COUNT],
}

impl BoxLayout {
    /// Lay out a box whose un-padded pixel rectangle is `bounds`.
    #[must_use]
    pub fn new(bounds: PixelBounds, handle_radius: f64) -> Self {
        let r = handle_radius;
        let d = 2.0 * r;
        let (h, w) = (bounds.height, bounds.width);
        let mut elements = [PixelBounds::default(); SubElement::COUNT];
        elements[SubElement::Container.index()] = bounds.expand(r);
        elements[SubElement::Outline.index()] = PixelBounds::new(r, r, h, w);
        elements[SubElement::TopLeftHandle.index()] = PixelBounds::new(0.0, 0.0, d, d);
        elements[SubElement::TopRightHandle.index()] = PixelBounds::new(0.0, w, d, d);
        elements[SubElement::BottomLeftHandle.index()] = PixelBounds::new(h, 0.0, d, d);
        elements[SubElement::BottomRightHandle.index()] = PixelBounds::new(h, w, d, d);
        Self { elements }
    }

    /// Bounds of one sub-element (container-relative except the container).
    #[inline]
    #[must_use]
    pub fn get(&self, element: SubElement) -> PixelBounds {
        self.elements[element.index()]
    }

    /// The container frame in surface coordinates.
    #[inline]
    #[must_use]
    pub fn container(&self) -> PixelBounds {
        self.get(SubElement::Container)
    }

    /// Bounds of a sub-element in surface coordinates.
    #[must_use]
    pub fn absolute(&self, element: SubElement) -> PixelBounds {
        let own = self.get(element);
        match element {
            SubElement::Container => own,
            _ => {
                let c = self.container();
                own.offset(c.left, c.top)
            }
        }
    }

    /// The un-padded box rectangle in surface coordinates.
    #[must_use]
    pub fn box_bounds(&self) -> PixelBounds {
        self.absolute(SubElement::Outline)
    }

    /// Apply a propagation row for a pointer displacement of `(dx, dy)` pixels.
    #[must_use]
    pub fn apply(&self, row: &ZoneRow, dx: f64, dy: f64) -> Self {
        let mut elements = self.elements;
        for element in SubElement::ALL {
            let slot = &mut elements[element.index()];
            *slot = row.get(element).scale(dx, dy).apply_to_pixels(*slot);
        }
        Self { elements }
    }

    /// Iterate `(sub-element, bounds)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SubElement, PixelBounds)> + '_ {
        SubElement::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoxLayout {
        BoxLayout::new(PixelBounds::new(75.0, 100.0, 75.0, 100.0), 3.0)
    }

    #[test]
    fn container_is_padded_by_radius() {
        assert_eq!(layout().container(), PixelBounds::new(72.0, 97.0, 81.0, 106.0));
    }

    #[test]
    fn outline_recovers_box_bounds() {
        assert_eq!(
            layout().box_bounds(),
            PixelBounds::new(75.0, 100.0, 75.0, 100.0)
        );
    }

    #[test]
    fn handles_are_centered_on_corners() {
        let l = layout();
        let corners = [
            (SubElement::TopLeftHandle, (100.0, 75.0)),
            (SubElement::TopRightHandle, (200.0, 75.0)),
            (SubElement::BottomLeftHandle, (100.0, 150.0)),
            (SubElement::BottomRightHandle, (200.0, 150.0)),
        ];
        for (element, (x, y)) in corners {
            let center = l.absolute(element).center();
            assert_eq!((center.x, center.y), (x, y), "{element:?}");
        }
    }

    #[test]
    fn iter_visits_every_element_once() {
        let seen: Vec<_> = layout().iter().map(|(e, _)| e).collect();
        assert_eq!(seen, SubElement::ALL);
        assert_eq!(SubElement::ALL.iter().filter(|e| e.is_handle()).count(), 4);
    }
}
