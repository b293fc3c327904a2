//! Easel - a text-annotation component for interactive canvas surfaces.
//!
//! Easel adds editable text labels to a rendering surface it does not own:
//! the embedding editor supplies a scene graph behind the [`Surface`] trait,
//! and [`TextTool`] layers creation, content editing, and style-toggle
//! policy on top of it. Glyph rasterization, hit-testing, selection UI, and
//! the render loop all stay on the surface's side of the trait.
//!
//! # Examples
//!
//! ```
//! # use std::collections::HashMap;
//! # use easel::{EaselError, ObjectId, Surface, TextLabel};
//! # use easel::geometry::{Point, Size};
//! # use easel::style::{StylePatch, TextStyle};
//! # #[derive(Default)]
//! # struct Scene {
//! #     next_id: u64,
//! #     labels: HashMap<ObjectId, (String, TextStyle)>,
//! #     active: Option<ObjectId>,
//! # }
//! # impl Surface for Scene {
//! #     fn add_text(&mut self, label: &TextLabel<'_>) -> ObjectId {
//! #         self.next_id += 1;
//! #         let id = ObjectId::new(self.next_id);
//! #         self.labels
//! #             .insert(id, (label.content().to_string(), label.style().clone()));
//! #         id
//! #     }
//! #     fn active_object(&self) -> Option<ObjectId> {
//! #         self.active
//! #     }
//! #     fn set_active_object(&mut self, id: ObjectId) -> Result<(), EaselError> {
//! #         self.active = Some(id);
//! #         Ok(())
//! #     }
//! #     fn backdrop_center(&self) -> Option<Point> {
//! #         Some(Size::new(300.0, 200.0).center())
//! #     }
//! #     fn style_of(&self, id: ObjectId) -> Result<TextStyle, EaselError> {
//! #         self.labels
//! #             .get(&id)
//! #             .map(|(_, style)| style.clone())
//! #             .ok_or(EaselError::ObjectNotFound(id))
//! #     }
//! #     fn set_content(&mut self, id: ObjectId, text: &str) -> Result<(), EaselError> {
//! #         let (content, _) = self
//! #             .labels
//! #             .get_mut(&id)
//! #             .ok_or(EaselError::ObjectNotFound(id))?;
//! #         *content = text.to_string();
//! #         Ok(())
//! #     }
//! #     fn apply_style(&mut self, id: ObjectId, patch: &StylePatch) -> Result<(), EaselError> {
//! #         let (_, style) = self
//! #             .labels
//! #             .get_mut(&id)
//! #             .ok_or(EaselError::ObjectNotFound(id))?;
//! #         style.apply(patch);
//! #         Ok(())
//! #     }
//! #     fn request_redraw(&mut self) {}
//! # }
//! use easel::{AddSettings, TextTool};
//! use easel::style::FontWeight;
//!
//! let mut tool = TextTool::new(Scene::default());
//!
//! // New label at the backdrop center, auto-selected.
//! let id = tool.add("Hello", AddSettings::default())?;
//!
//! // Toggle bold on, then edit the content.
//! tool.set_style(id, StylePatch::new().with_font_weight(FontWeight::Bold))?;
//! tool.change(id, "Hello, canvas!")?;
//! # Ok::<(), EaselError>(())
//! ```

pub mod config;

mod defaults;
mod error;
mod surface;

pub use easel_core::{color, geometry, style};

pub use defaults::{DEFAULT_PADDING, LabelDefaults};
pub use error::EaselError;
pub use surface::{ObjectId, Surface, TextLabel};

use log::{debug, info};

use easel_core::geometry::Point;
use easel_core::style::StylePatch;

use config::AppConfig;

/// Options for creating a label with [`TextTool::add`].
///
/// Both fields are optional: omitted styles fall back to the tool's
/// [`LabelDefaults`], and an omitted position is resolved from the stored
/// default or the backdrop center.
#[derive(Debug, Clone, Default)]
pub struct AddSettings {
    styles: Option<StylePatch>,
    position: Option<Point>,
}

impl AddSettings {
    /// Creates empty settings: default styles, resolved position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets style overrides to merge over the tool defaults (builder style).
    pub fn with_styles(mut self, styles: StylePatch) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Sets an explicit position for the label (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the style overrides, if any.
    pub fn styles(&self) -> Option<&StylePatch> {
        self.styles.as_ref()
    }

    /// Returns the explicit position, if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// The text-annotation component.
///
/// A `TextTool` owns its [`Surface`] handle and a [`LabelDefaults`] record,
/// and exposes the three annotation operations: [`add`](TextTool::add),
/// [`change`](TextTool::change), and [`set_style`](TextTool::set_style).
/// Owning the surface makes the creation sequence un-interleavable: every
/// mutating operation takes `&mut self`, so two creations can never race
/// through the shared defaults record.
pub struct TextTool<S: Surface> {
    surface: S,
    defaults: LabelDefaults,
}

impl<S: Surface> TextTool<S> {
    /// Creates a tool over the given surface with stock defaults.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            defaults: LabelDefaults::new(),
        }
    }

    /// Creates a tool over the given surface with configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidColor`] if the configured fill color
    /// cannot be parsed.
    pub fn with_config(surface: S, config: &AppConfig) -> Result<Self, EaselError> {
        Ok(Self {
            surface,
            defaults: LabelDefaults::from_config(config)?,
        })
    }

    /// Returns a shared reference to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns an exclusive reference to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the tool, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns the defaults applied to the next created label.
    pub fn defaults(&self) -> &LabelDefaults {
        &self.defaults
    }

    /// Returns the defaults record for mutation, e.g. to change the base
    /// style or padding for subsequent labels.
    pub fn defaults_mut(&mut self) -> &mut LabelDefaults {
        &mut self.defaults
    }

    /// Adds a new text label to the surface.
    ///
    /// The label's style starts from the tool defaults with any caller
    /// overrides merged over it (caller values win per property). Its
    /// position is resolved from, in order: the explicit setting, the
    /// position stored by the previous creation, the backdrop center. The
    /// resolved position is stored back as the default for the next label.
    /// If nothing on the surface is active, the new label becomes active.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::NoBackdrop`] if no position source is
    /// available.
    pub fn add(&mut self, text: &str, settings: AddSettings) -> Result<ObjectId, EaselError> {
        let mut style = self.defaults.style().clone();
        if let Some(patch) = settings.styles() {
            style.apply(patch);
        }

        let position = self.resolve_position(settings.position())?;

        let label = TextLabel::new(text, style)
            .with_position(position)
            .with_padding(self.defaults.padding())
            .with_origin(self.defaults.origin());
        let id = self.surface.add_text(&label);
        info!(object = id.raw(), content_len = text.len(); "added text label");

        if self.surface.active_object().is_none() {
            self.surface.set_active_object(id)?;
            debug!(object = id.raw(); "activated new label");
        }

        Ok(id)
    }

    /// Replaces the text content of an existing label and requests a
    /// redraw. The redraw is unconditional, even when the content is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    pub fn change(&mut self, id: ObjectId, text: &str) -> Result<(), EaselError> {
        self.surface.set_content(id, text)?;
        debug!(object = id.raw(), content_len = text.len(); "changed label content");
        self.surface.request_redraw();
        Ok(())
    }

    /// Applies a style edit to an existing label.
    ///
    /// The patch is normalized against a snapshot of the label's current
    /// style: requesting a value the label already has resets that property
    /// to its baseline (re-applying bold un-bolds). The resolved patch is
    /// applied as one batch, followed by one redraw.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::ObjectNotFound`] if the surface no longer
    /// recognizes the handle.
    pub fn set_style(&mut self, id: ObjectId, patch: StylePatch) -> Result<(), EaselError> {
        let current = self.surface.style_of(id)?;
        let resolved = patch.normalized(&current);

        self.surface.apply_style(id, &resolved)?;
        debug!(object = id.raw(), properties = resolved.touched().len(); "applied style batch");
        self.surface.request_redraw();
        Ok(())
    }

    /// Resolves the position for the next label and stores it back into the
    /// defaults record.
    fn resolve_position(&mut self, explicit: Option<Point>) -> Result<Point, EaselError> {
        let resolved = explicit
            .or_else(|| self.defaults.position())
            .or_else(|| self.surface.backdrop_center())
            .ok_or(EaselError::NoBackdrop)?;

        self.defaults.set_position(resolved);
        Ok(resolved)
    }
}
