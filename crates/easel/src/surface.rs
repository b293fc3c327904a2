//! The capability interface between Easel and its rendering surface.
//!
//! Easel never owns drawable objects or the render loop; it drives an
//! external canvas through the narrow [`Surface`] trait. The trait exposes
//! exactly the operations the annotation policy consumes: constructing and
//! registering a text object, reading and writing its properties, tracking
//! the active object, answering the backdrop-center query, and requesting a
//! redraw. Everything else about the surface's object model stays opaque.

use std::fmt;

use easel_core::{
    geometry::Point,
    style::{Origin, StylePatch, TextStyle},
};

use crate::error::EaselError;

/// An opaque handle to a text object owned by the rendering surface.
///
/// The surface assigns ids and owns the object lifecycle; Easel only passes
/// handles back to the surface when mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wraps a raw surface-assigned id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fully resolved creation request: content plus the merged style and
/// placement the surface should instantiate a text object from.
#[derive(Debug, Clone)]
pub struct TextLabel<'a> {
    content: &'a str,
    style: TextStyle,
    position: Point,
    padding: f32,
    origin: Origin,
}

impl<'a> TextLabel<'a> {
    /// Creates a label from content and a merged style
    /// (position defaults to the origin, padding to zero).
    pub fn new(content: &'a str, style: TextStyle) -> Self {
        Self {
            content,
            style,
            position: Point::default(),
            padding: 0.0,
            origin: Origin::default(),
        }
    }

    /// Sets the label position (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the selection padding around the label (builder style).
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the placement anchor (builder style).
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Returns the visual style.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Returns the position the label is anchored at.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the selection padding.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the placement anchor.
    pub fn origin(&self) -> Origin {
        self.origin
    }
}

/// Operations a rendering surface must provide for text annotation.
///
/// Implementations own the scene graph, the active-object state, and the
/// render loop; [`TextTool`](crate::TextTool) holds one implementation and
/// delegates all drawing concerns to it.
pub trait Surface {
    /// Constructs a text object from the label and registers it on the
    /// scene, returning its handle.
    fn add_text(&mut self, label: &TextLabel<'_>) -> ObjectId;

    /// Returns the currently active (selected) object, if any.
    fn active_object(&self) -> Option<ObjectId>;

    /// Marks the given object as active.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    fn set_active_object(&mut self, id: ObjectId) -> Result<(), EaselError>;

    /// Returns the geometric center of the backdrop image, or `None` when
    /// no backdrop is loaded.
    fn backdrop_center(&self) -> Option<Point>;

    /// Returns a snapshot of the object's current style.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    fn style_of(&self, id: ObjectId) -> Result<TextStyle, EaselError>;

    /// Replaces the object's text content.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    fn set_content(&mut self, id: ObjectId, text: &str) -> Result<(), EaselError>;

    /// Applies a resolved style patch to the object as one batch.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    fn apply_style(&mut self, id: ObjectId, patch: &StylePatch) -> Result<(), EaselError>;

    /// Requests a full redraw of the scene.
    fn request_redraw(&mut self);
}
