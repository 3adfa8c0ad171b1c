#![forbid(unsafe_code)]

//! Label color assignment.
//!
//! Labels are numbered in the order they are first seen, and the number picks
//! a palette slot. Two boxes with the same label always share a color; the
//! palette wraps once there are more labels than colors.
//!
//! # Failure Modes
//!
//! An empty palette cannot pick anything. [`LabelPalette::color_for`] falls
//! back to [`Rgba::MAGENTA`] and logs a warning instead of panicking.

use ahash::AHashMap;
use tracing::warn;

use crate::color::Rgba;

/// Colors used when no palette is configured.
pub const DEFAULT_PALETTE: [Rgba; 6] = [
    Rgba::MAGENTA,
    Rgba::CYAN,
    Rgba::YELLOW,
    Rgba::LIME,
    Rgba::ORANGE,
    Rgba::AZURE,
];

/// Chooses an outline color for a label.
///
/// `label_index` is the first-seen position of the label among all boxes of
/// the session, as computed by [`LabelIndex`].
pub trait ColorPolicy {
    fn color_for(&self, label: &str, label_index: usize) -> Rgba;
}

impl<F> ColorPolicy for F
where
    F: Fn(&str, usize) -> Rgba,
{
    fn color_for(&self, label: &str, label_index: usize) -> Rgba {
        self(label, label_index)
    }
}

/// Cycles a fixed list of colors by label index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPalette {
    colors: Vec<Rgba>,
}

impl LabelPalette {
    /// Palette over the given colors.
    #[must_use]
    pub fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    /// The colors in slot order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Number of distinct slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for LabelPalette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

impl ColorPolicy for LabelPalette {
    fn color_for(&self, label: &str, label_index: usize) -> Rgba {
        if self.colors.is_empty() {
            warn!(label, "empty palette, falling back to magenta");
            return Rgba::MAGENTA;
        }
        self.colors[label_index % self.colors.len()]
    }
}

/// First-seen numbering of labels.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    indices: AHashMap<String, usize>,
}

impl LabelIndex {
    /// Number labels in iteration order, skipping repeats.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut indices = AHashMap::new();
        for label in labels {
            let next = indices.len();
            indices.entry(label.to_owned()).or_insert(next);
        }
        Self { indices }
    }

    /// Index of a label, if it was seen.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn labels_are_numbered_by_first_appearance() {
        let index = LabelIndex::from_labels(["cat", "dog", "cat", "bird", "dog"]);
        assert_eq!(index.get("cat"), Some(0));
        assert_eq!(index.get("dog"), Some(1));
        assert_eq!(index.get("bird"), Some(2));
        assert_eq!(index.get("fish"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn palette_wraps_around() {
        let palette = LabelPalette::new(vec![Rgba::RED, Rgba::CYAN]);
        assert_eq!(palette.color_for("a", 0), Rgba::RED);
        assert_eq!(palette.color_for("b", 1), Rgba::CYAN);
        assert_eq!(palette.color_for("c", 2), Rgba::RED);
    }

    #[test]
    fn default_palette_starts_with_magenta() {
        assert_eq!(LabelPalette::default().color_for("x", 0), Rgba::MAGENTA);
    }

    #[traced_test]
    #[test]
    fn empty_palette_falls_back_and_warns() {
        let palette = LabelPalette::new(Vec::new());
        assert_eq!(palette.color_for("car", 3), Rgba::MAGENTA);
        assert!(logs_contain("empty palette"));
    }

    #[test]
    fn closures_are_color_policies() {
        let policy = |label: &str, _: usize| if label == "car" { Rgba::RED } else { Rgba::WHITE };
        assert_eq!(policy.color_for("car", 0), Rgba::RED);
        assert_eq!(policy.color_for("bus", 1), Rgba::WHITE);
    }
}
