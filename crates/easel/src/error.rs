//! Error types for Easel operations.
//!
//! This module provides the main error type [`EaselError`]. The source this
//! component descends from accepted every input silently; here the failure
//! modes are explicit and returned to the caller.

use thiserror::Error;

use crate::surface::ObjectId;

/// The main error type for Easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    /// Position resolution found no explicit point, no stored default, and
    /// no backdrop image to take a center from.
    #[error("no backdrop image is available to derive a default position")]
    NoBackdrop,

    /// The surface no longer recognizes the handle.
    #[error("object {0} is not registered on the surface")]
    ObjectNotFound(ObjectId),

    /// A configured color string failed CSS parsing.
    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },
}
