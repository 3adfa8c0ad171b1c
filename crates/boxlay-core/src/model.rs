#![forbid(unsafe_code)]

//! The authoritative box model.
//!
//! [`BoxSet`] keeps boxes in rendering order and indexes them by id. The id
//! of a box never changes; only its [`BoxBounds`] are rewritten, and only by
//! a committed drag.

use std::fmt;

use ahash::AHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::BoxBounds;

/// An annotated rectangle with a stable identity.
///
/// With the `serde` feature the wire names follow the host model:
/// `tagId`, `tagName`, `boundingBox`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabeledBox {
    #[cfg_attr(feature = "serde", serde(rename = "tagId"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "tagName"))]
    pub label: String,
    #[cfg_attr(feature = "serde", serde(rename = "boundingBox"))]
    pub bounding_box: BoxBounds,
}

impl LabeledBox {
    /// Create a new box.
    pub fn new(id: impl Into<String>, label: impl Into<String>, bounding_box: BoxBounds) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            bounding_box,
        }
    }
}

/// Errors building a [`BoxSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two boxes share the same id.
    DuplicateId(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate box id {id:?}"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Ordered collection of boxes with unique ids.
///
/// Order is z-order; the selection resolver also uses it to break ties.
#[derive(Debug, Clone, Default)]
pub struct BoxSet {
    boxes: Vec<LabeledBox>,
    index: AHashMap<String, usize>,
}

impl BoxSet {
    /// Build a set, rejecting duplicate ids.
    pub fn new(boxes: Vec<LabeledBox>) -> Result<Self, ModelError> {
        let mut index = AHashMap::with_capacity(boxes.len());
        for (i, b) in boxes.iter().enumerate() {
            if index.insert(b.id.clone(), i).is_some() {
                #[cfg(feature = "tracing")]
                crate::warn!(id = %b.id, "rejecting box set with duplicate id");
                return Err(ModelError::DuplicateId(b.id.clone()));
            }
        }
        Ok(Self { boxes, index })
    }

    /// Number of boxes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if the set holds no boxes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Position of the box with `id`.
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Look up a box by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LabeledBox> {
        self.position(id).map(|i| &self.boxes[i])
    }

    /// Box at a position in rendering order.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&LabeledBox> {
        self.boxes.get(index)
    }

    /// Replace the bounds of the box with `id`.
    ///
    /// Returns the previous bounds, or `None` if no such box exists.
    pub fn set_bounds(&mut self, id: &str, bounds: BoxBounds) -> Option<BoxBounds> {
        let i = self.position(id)?;
        Some(std::mem::replace(&mut self.boxes[i].bounding_box, bounds))
    }

    /// Iterate boxes in rendering order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabeledBox> {
        self.boxes.iter()
    }

    /// Borrow the boxes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[LabeledBox] {
        &self.boxes
    }

    /// Consume the set, returning the boxes in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<LabeledBox> {
        self.boxes
    }
}

impl<'a> IntoIterator for &'a BoxSet {
    type Item = &'a LabeledBox;
    type IntoIter = std::slice::Iter<'a, LabeledBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LabeledBox> {
        vec![
            LabeledBox::new("a", "cat", BoxBounds::new(0.1, 0.1, 0.2, 0.2)),
            LabeledBox::new("b", "dog", BoxBounds::new(0.5, 0.5, 0.2, 0.2)),
        ]
    }

    #[test]
    fn lookup_by_id_and_position() {
        let set = BoxSet::new(sample()).expect("unique ids");
        assert_eq!(set.len(), 2);
        assert_eq!(set.position("b"), Some(1));
        assert_eq!(set.get("a").map(|b| b.label.as_str()), Some("cat"));
        assert!(set.get("zzz").is_none());
        assert_eq!(set.at(1).map(|b| b.id.as_str()), Some("b"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut boxes = sample();
        boxes.push(LabeledBox::new("a", "bird", BoxBounds::default()));
        let err = BoxSet::new(boxes).unwrap_err();
        assert_eq!(err, ModelError::DuplicateId("a".into()));
        assert_eq!(err.to_string(), "duplicate box id \"a\"");
    }

    #[test]
    fn set_bounds_replaces_in_place() {
        let mut set = BoxSet::new(sample()).expect("unique ids");
        let next = BoxBounds::new(0.0, 0.0, 1.0, 1.0);
        let prev = set.set_bounds("b", next);
        assert_eq!(prev, Some(BoxBounds::new(0.5, 0.5, 0.2, 0.2)));
        assert_eq!(set.get("b").map(|b| b.bounding_box), Some(next));
        assert_eq!(set.set_bounds("missing", next), None);
    }

    #[test]
    fn iteration_preserves_order() {
        let set = BoxSet::new(sample()).expect("unique ids");
        let ids: Vec<_> = set.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(set.into_vec().len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_host_wire_names() {
        let json = r#"{"tagId":"7","tagName":"car","boundingBox":{"top":0.1,"left":0.2,"height":0.3,"width":0.4}}"#;
        let parsed: LabeledBox = serde_json::from_str(json).expect("valid json");
        assert_eq!(parsed.id, "7");
        assert_eq!(parsed.label, "car");
        assert_eq!(parsed.bounding_box, BoxBounds::new(0.1, 0.2, 0.3, 0.4));
        let out = serde_json::to_string(&parsed).expect("serializable");
        assert!(out.contains("\"tagId\":\"7\""));
    }
}
