// Forbid unsafe in production; deny (with targeted allows) in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Runtime: the interaction loop of a boxlay overlay.
//!
//! # Role in boxlay
//! `boxlay-runtime` turns pointer events into selection changes, drag
//! previews, and committed edits. It owns the per-surface interaction state
//! and is the only place where box bounds change.
//!
//! # Primary responsibilities
//! - **Editor**: [`Editor`] runs the select / lock / drag state machine and
//!   returns a [`Step`] per event.
//! - **Binding**: [`Overlay::bind`] validates the surface, config, and boxes
//!   and wires the editor to a [`RenderSink`] and a [`BoxModel`].
//! - **Configuration**: [`OverlayConfig`], optionally loaded from TOML or
//!   JSON with the `policy-config` feature.
//! - **Errors**: [`BindError`] at bind time, [`InteractionError`] for
//!   invariant violations during a session.
//!
//! # How it fits in the system
//! Geometry, hit-testing, and the propagation table come from
//! `boxlay-core`; colors, visual states, and cursors from `boxlay-style`.
//! The `boxlay` facade re-exports all three.

pub mod config;
pub mod editor;
pub mod error;
pub mod overlay;
pub mod render;

pub use config::{ConfigError, InvertPolicy, OverlayConfig};
pub use editor::{Commit, Editor, InteractionState, Step};
pub use error::{BindError, InteractionError};
pub use overlay::{BoxModel, Overlay, SurfaceHost};
pub use render::{Decoration, RenderCommand, RenderSink};
