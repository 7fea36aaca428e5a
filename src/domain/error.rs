//! Error types for shape and body operations.
//!
//! Every error is local and recoverable: a failed spawn leaves the world and
//! the pools untouched, and the caller decides what to tell the user.
//! Removing an absent body is not an error (removal returns `false`).

use std::fmt;

use super::shapes::ShapeKind;

/// Errors returned by body creation and shape spawning.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Unknown kind, or a missing / non-positive / non-finite parameter.
    InvalidArgument(String),
    /// The instance pool for `kind` has no free slot left.
    CapacityExceeded { kind: ShapeKind, capacity: usize },
    /// Every `u32` body ID has been handed out.
    IdsExhausted,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ShapeError::CapacityExceeded { kind, capacity } => write!(
                f,
                "Maximum instances reached for {} (capacity {})",
                kind, capacity
            ),
            ShapeError::IdsExhausted => f.write_str("No body IDs left"),
        }
    }
}

impl std::error::Error for ShapeError {}
