#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros so
//! downstream crates and the core modules share one entry point. Without it
//! the core is silent and carries no logging dependency.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
