//! The mutable default record applied to the next created label.

use easel_core::{
    geometry::Point,
    style::{Origin, TextStyle},
};

use crate::{config::AppConfig, error::EaselError};

/// Selection padding given to new labels when the caller does not choose one.
pub const DEFAULT_PADDING: f32 = 20.0;

/// Per-tool defaults for label creation.
///
/// One record lives inside each [`TextTool`](crate::TextTool) instance and
/// seeds every creation: the base [`TextStyle`] caller patches merge over,
/// the selection padding, the placement anchor, and the position for the
/// *next* label. The position field is not a durable preference — creation
/// overwrites it with whatever position it resolves, which is what lets a
/// position-less creation land where the previous explicit one did.
#[derive(Debug, Clone)]
pub struct LabelDefaults {
    style: TextStyle,
    padding: f32,
    origin: Origin,
    position: Option<Point>,
}

impl LabelDefaults {
    /// Creates defaults with the stock values: black fill, centered anchor,
    /// [`DEFAULT_PADDING`], and no stored position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds defaults from an [`AppConfig`], leaving unconfigured fields
    /// at their stock values.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidColor`] if the configured fill color
    /// string fails to parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, EaselError> {
        let style_config = config.style();
        let mut defaults = Self::default();

        if let Some(fill) = style_config.fill()? {
            defaults.style.set_fill(fill);
        }
        if let Some(family) = style_config.font_family() {
            defaults.style.set_font_family(family);
        }
        if let Some(size) = style_config.font_size() {
            defaults.style.set_font_size(size);
        }
        if let Some(slant) = style_config.font_style() {
            defaults.style.set_font_style(slant);
        }
        if let Some(align) = style_config.text_align() {
            defaults.style.set_text_align(align);
        }
        if let Some(padding) = style_config.padding() {
            defaults.padding = padding;
        }

        Ok(defaults)
    }

    /// Returns the base style for the next label.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Replaces the base style for subsequent labels.
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Returns the selection padding for the next label.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Sets the selection padding for subsequent labels.
    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// Returns the placement anchor for the next label.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Sets the placement anchor for subsequent labels.
    pub fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }

    /// Returns the stored position for the next label, if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Stores the position for the next label. Creation calls this with the
    /// position it resolved.
    pub fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            style: TextStyle::default(),
            padding: DEFAULT_PADDING,
            origin: Origin::default(),
            position: None,
        }
    }
}
