//! Per-box visual states.
//!
//! A box is drawn in one of three states: [`BoxState::Normal`] when nothing
//! is selected, [`BoxState::Selected`] for the box under the pointer, and
//! [`BoxState::Dimmed`] for every other box while a selection exists.
//! [`BoxStyle`] holds a base [`BoxVisual`] plus optional per-state patches,
//! resolved by layering the patch over the base.
//!
//! # Example
//!
//! ```
//! use boxlay_style::color::Rgba;
//! use boxlay_style::visual::{BoxState, BoxStyle};
//!
//! let style = BoxStyle::standard(Rgba::MAGENTA, 26);
//! let selected = style.resolve(BoxState::Selected);
//! assert!(selected.handles_visible);
//! assert_eq!(style.resolve(BoxState::Dimmed).outline.a, 26);
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Alpha applied to unselected boxes while another box is selected (about 0.1).
pub const DEFAULT_DIM_ALPHA: u8 = 26;

/// Which of the three presentation states a box is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoxState {
    #[default]
    Normal,
    Selected,
    Dimmed,
}

impl BoxState {
    /// State of one box given the current selection.
    ///
    /// With `dim_unselected` off, unselected boxes stay [`BoxState::Normal`].
    #[inline]
    #[must_use]
    pub const fn classify(is_selected: bool, any_selected: bool, dim_unselected: bool) -> Self {
        if is_selected {
            Self::Selected
        } else if any_selected && dim_unselected {
            Self::Dimmed
        } else {
            Self::Normal
        }
    }
}

/// What a renderer needs to draw one box in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxVisual {
    pub state: BoxState,
    pub outline: Rgba,
    pub handles_visible: bool,
}

impl BoxVisual {
    /// Unselected visual in the given outline color.
    #[must_use]
    pub const fn new(outline: Rgba) -> Self {
        Self {
            state: BoxState::Normal,
            outline,
            handles_visible: false,
        }
    }

    /// Layer a patch over this visual.
    ///
    /// `outline` replaces the color first, then `alpha` adjusts it.
    #[must_use]
    pub fn patch(self, patch: &VisualPatch) -> Self {
        let mut outline = patch.outline.unwrap_or(self.outline);
        if let Some(a) = patch.alpha {
            outline = outline.with_alpha(a);
        }
        Self {
            state: self.state,
            outline,
            handles_visible: patch.handles_visible.unwrap_or(self.handles_visible),
        }
    }
}

/// Optional overrides for a state. Unset fields inherit from the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualPatch {
    pub outline: Option<Rgba>,
    pub alpha: Option<u8>,
    pub handles_visible: Option<bool>,
}

impl VisualPatch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outline: None,
            alpha: None,
            handles_visible: None,
        }
    }

    #[must_use]
    pub const fn outline(mut self, color: Rgba) -> Self {
        self.outline = Some(color);
        self
    }

    #[must_use]
    pub const fn alpha(mut self, a: u8) -> Self {
        self.alpha = Some(a);
        self
    }

    #[must_use]
    pub const fn handles_visible(mut self, visible: bool) -> Self {
        self.handles_visible = Some(visible);
        self
    }
}

/// Base visual plus per-state overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub normal: BoxVisual,
    pub selected: Option<VisualPatch>,
    pub dimmed: Option<VisualPatch>,
}

impl BoxStyle {
    #[must_use]
    pub const fn new(normal: BoxVisual) -> Self {
        Self {
            normal,
            selected: None,
            dimmed: None,
        }
    }

    /// The overlay's usual look: full-alpha outline, handles only when
    /// selected, outline faded to `dim_alpha` when dimmed.
    #[must_use]
    pub const fn standard(color: Rgba, dim_alpha: u8) -> Self {
        Self::new(BoxVisual::new(color))
            .selected(VisualPatch::new().alpha(255).handles_visible(true))
            .dimmed(VisualPatch::new().alpha(dim_alpha).handles_visible(false))
    }

    #[must_use]
    pub const fn selected(mut self, patch: VisualPatch) -> Self {
        self.selected = Some(patch);
        self
    }

    #[must_use]
    pub const fn dimmed(mut self, patch: VisualPatch) -> Self {
        self.dimmed = Some(patch);
        self
    }

    /// Visual for a state: the base with that state's patch on top.
    #[must_use]
    pub fn resolve(&self, state: BoxState) -> BoxVisual {
        let patch = match state {
            BoxState::Normal => None,
            BoxState::Selected => self.selected.as_ref(),
            BoxState::Dimmed => self.dimmed.as_ref(),
        };
        let base = BoxVisual {
            state,
            ..self.normal
        };
        match patch {
            Some(p) => base.patch(p),
            None => base,
        }
    }

    /// Whether a state changes anything relative to the base.
    #[must_use]
    pub fn has_override(&self, state: BoxState) -> bool {
        match state {
            BoxState::Normal => false,
            BoxState::Selected => self.selected.is_some(),
            BoxState::Dimmed => self.dimmed.is_some(),
        }
    }
}

impl From<BoxVisual> for BoxStyle {
    fn from(normal: BoxVisual) -> Self {
        Self::new(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_all_cases() {
        assert_eq!(BoxState::classify(true, true, true), BoxState::Selected);
        assert_eq!(BoxState::classify(false, true, true), BoxState::Dimmed);
        assert_eq!(BoxState::classify(false, true, false), BoxState::Normal);
        assert_eq!(BoxState::classify(false, false, true), BoxState::Normal);
    }

    #[test]
    fn normal_returns_base() {
        let style = BoxStyle::standard(Rgba::CYAN, 26);
        let v = style.resolve(BoxState::Normal);
        assert_eq!(v, BoxVisual::new(Rgba::CYAN));
    }

    #[test]
    fn selected_shows_handles_at_full_alpha() {
        let style = BoxStyle::standard(Rgba::CYAN.with_alpha(100), 26);
        let v = style.resolve(BoxState::Selected);
        assert_eq!(v.state, BoxState::Selected);
        assert_eq!(v.outline, Rgba::CYAN);
        assert!(v.handles_visible);
    }

    #[test]
    fn dimmed_fades_outline_and_hides_handles() {
        let v = BoxStyle::standard(Rgba::CYAN, 26).resolve(BoxState::Dimmed);
        assert_eq!(v.outline, Rgba::CYAN.with_alpha(26));
        assert!(!v.handles_visible);
    }

    #[test]
    fn standard_overrides_only_non_normal_states() {
        let style = BoxStyle::standard(Rgba::LIME, 26);
        assert!(!style.has_override(BoxState::Normal));
        assert!(style.has_override(BoxState::Selected));
        assert!(style.has_override(BoxState::Dimmed));
    }

    #[test]
    fn missing_override_inherits_base_but_reports_state() {
        let style = BoxStyle::new(BoxVisual::new(Rgba::RED));
        assert!(!style.has_override(BoxState::Dimmed));
        assert!(!style.has_override(BoxState::Normal));
        let v = style.resolve(BoxState::Dimmed);
        assert_eq!(v.state, BoxState::Dimmed);
        assert_eq!(v.outline, Rgba::RED);
    }

    #[test]
    fn patch_outline_then_alpha() {
        let patch = VisualPatch::new().outline(Rgba::RED).alpha(10);
        let v = BoxVisual::new(Rgba::CYAN).patch(&patch);
        assert_eq!(v.outline, Rgba::RED.with_alpha(10));
        assert!(!v.handles_visible);
    }
}
