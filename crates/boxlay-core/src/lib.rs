// Forbid unsafe in production; deny (with targeted allows) in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: geometry, hit-testing, and drag propagation for box overlays.
//!
//! # Role in boxlay
//! `boxlay-core` is the pure half of the engine. It owns the coordinate
//! model, the box model, zone classification, selection resolution, and the
//! delta propagation table. Nothing here holds interaction state or talks to
//! a renderer.
//!
//! # Primary responsibilities
//! - **Coordinate model**: [`geometry::Surface`] converts normalized
//!   [`geometry::BoxBounds`] to [`geometry::PixelBounds`] and pixel
//!   displacements back to normalized ones.
//! - **Zone classifier**: [`zone::which_zone`] maps a point to one of nine
//!   [`zone::Zone`]s.
//! - **Selection resolver**: [`resolve::resolve`] picks the nearest-center
//!   box among overlapping hits.
//! - **Delta propagation**: [`delta::DeltaTable`] maps zones to signed
//!   per-dimension multipliers for every [`layout::SubElement`].
//!
//! # How it fits in the system
//! `boxlay-runtime` drives these functions from pointer events and turns
//! their results into render commands; `boxlay-style` maps zones to cursor
//! tokens.

pub mod delta;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod zone;

pub use delta::{DeltaTable, DimDelta, GeometryDelta, ZoneRow};
pub use event::PointerEvent;
pub use geometry::{BoxBounds, NormalizedDelta, PixelBounds, PixelPoint, Surface};
pub use layout::{BoxLayout, SubElement};
pub use model::{BoxSet, LabeledBox, ModelError};
pub use resolve::{Resolved, resolve};
pub use zone::{Band, Zone, in_hit_area, which_zone, zone_contains};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
