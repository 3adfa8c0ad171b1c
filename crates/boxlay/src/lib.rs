#![forbid(unsafe_code)]

//! boxlay public facade crate.
//!
//! An interactive bounding-box overlay: select boxes by hovering, move and
//! resize them by dragging handles, edges, or interiors, and receive the
//! committed normalized bounds back. This crate re-exports the stable surface
//! of the internal crates and offers a prelude.
//!
//! ```
//! use std::collections::HashMap;
//! use boxlay::prelude::*;
//!
//! let host = HashMap::from([("canvas".to_owned(), (400.0, 300.0))]);
//! let boxes = vec![LabeledBox::new("1", "cat", BoxBounds::new(0.25, 0.25, 0.25, 0.25))];
//! let mut overlay = Overlay::bind("canvas", &host, boxes, Vec::<RenderCommand>::new(), OverlayConfig::default())?;
//!
//! overlay.dispatch(PointerEvent::moved(150.0, 112.0));
//! overlay.dispatch(PointerEvent::down(150.0, 112.0));
//! let commit = overlay.dispatch(PointerEvent::up(170.0, 112.0)).expect("moved");
//! assert!((commit.bounds.left - 0.3).abs() < 1e-9);
//! # Ok::<(), boxlay::Error>(())
//! ```

pub mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use boxlay_core::{
    BoxBounds, BoxLayout, BoxSet, DeltaTable, LabeledBox, ModelError, PixelBounds, PixelPoint,
    PointerEvent, Resolved, SubElement, Surface, Zone, resolve, which_zone,
};

// --- Style re-exports ------------------------------------------------------

pub use boxlay_style::{
    BoxState, BoxStyle, BoxVisual, ColorPolicy, CursorStyle, LabelIndex, LabelPalette, Rgba,
};

// --- Runtime re-exports ----------------------------------------------------

pub use boxlay_runtime::{
    BindError, BoxModel, Commit, ConfigError, Decoration, Editor, InteractionError,
    InteractionState, InvertPolicy, Overlay, OverlayConfig, RenderCommand, RenderSink, Step,
    SurfaceHost,
};

// --- Logging ---------------------------------------------------------------

/// Environment variable holding the log filter directives.
#[cfg(feature = "tracing-json")]
pub const LOG_ENV: &str = "BOXLAY_LOG";

/// Install a global JSON log subscriber.
///
/// The filter is read from `BOXLAY_LOG` and defaults to `info`. Fails if a
/// global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxBounds, BoxModel, Commit, CursorStyle, Error, LabeledBox, Overlay, OverlayConfig,
        PointerEvent, RenderCommand, RenderSink, Result, SurfaceHost, Zone,
    };

    pub use crate::{core, runtime, style};
}

pub use boxlay_core as core;
pub use boxlay_runtime as runtime;
pub use boxlay_style as style;
