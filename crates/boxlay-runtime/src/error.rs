#![forbid(unsafe_code)]

//! Runtime error types.
//!
//! [`BindError`] is a configuration problem found while binding a surface;
//! no overlay exists afterwards. [`InteractionError`] is an invariant
//! violation found while handling an event; the offending update is skipped
//! and the session keeps running.

use std::fmt;

use boxlay_core::zone::Zone;

/// Failure to bind an overlay to a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    /// The host knows no surface with this id.
    SurfaceNotFound(String),
    /// The surface has non-finite or non-positive dimensions.
    InvalidSurface { id: String, width: f64, height: f64 },
    /// Two boxes in the model share an id.
    DuplicateBoxId(String),
    /// The config failed validation.
    InvalidConfig(Vec<String>),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceNotFound(id) => write!(f, "no surface with id {id:?}"),
            Self::InvalidSurface { id, width, height } => {
                write!(f, "surface {id:?} has unusable size {width}x{height}")
            }
            Self::DuplicateBoxId(id) => write!(f, "duplicate box id {id:?}"),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid overlay config: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for BindError {}

/// An internal invariant did not hold while handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The propagation table has no row for the active zone.
    MissingPropagation(Zone),
    /// The selected id is not in the box set.
    UnknownBox(String),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPropagation(zone) => write!(f, "no propagation row for zone {zone}"),
            Self::UnknownBox(id) => write!(f, "selected box {id:?} is not in the box set"),
        }
    }
}

impl std::error::Error for InteractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(
            BindError::SurfaceNotFound("canvas".into()).to_string(),
            "no surface with id \"canvas\""
        );
        assert_eq!(
            BindError::InvalidSurface {
                id: "c".into(),
                width: 0.0,
                height: 300.0
            }
            .to_string(),
            "surface \"c\" has unusable size 0x300"
        );
        assert_eq!(
            InteractionError::MissingPropagation(Zone::TopResize).to_string(),
            "no propagation row for zone top-resize"
        );
    }
}
