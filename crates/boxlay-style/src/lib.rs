#![forbid(unsafe_code)]

//! Presentation vocabulary for boxlay overlays.
//!
//! # Role in boxlay
//! `boxlay-style` decides how a box looks, never where it is. The runtime
//! asks it for an outline color per label, for the visual of a box in a
//! given selection state, and for the cursor matching a zone.
//!
//! # This crate provides
//! - [`Rgba`] colors with CSS output.
//! - [`ColorPolicy`] and the default [`LabelPalette`], keyed by the
//!   first-seen index from [`LabelIndex`].
//! - [`BoxStyle`] resolving a [`BoxState`] into a [`BoxVisual`].
//! - [`CursorStyle`] tokens derived from zones.
//!
//! # How it fits in the system
//! `boxlay-runtime` embeds [`BoxVisual`] and [`CursorStyle`] in its render
//! commands, so a renderer depends on this crate for the vocabulary and on
//! nothing else.

pub mod color;
pub mod cursor;
pub mod palette;
pub mod visual;

pub use color::Rgba;
pub use cursor::CursorStyle;
pub use palette::{ColorPolicy, DEFAULT_PALETTE, LabelIndex, LabelPalette};
pub use visual::{BoxState, BoxStyle, BoxVisual, DEFAULT_DIM_ALPHA, VisualPatch};
