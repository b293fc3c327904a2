//! Configuration types for Easel defaults.
//!
//! This module provides configuration structures that control the defaults
//! applied to newly created labels. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources; the
//! embedding application decides where configuration comes from.
//!
//! # Example
//!
//! ```
//! # use easel::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().fill().unwrap().is_none());
//! ```

use serde::Deserialize;

use easel_core::{
    color::Color,
    style::{FontStyle, TextAlign},
};

use crate::error::EaselError;

/// Top-level configuration for the annotation tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style defaults section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style defaults.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style defaults section.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default-style configuration for new labels.
///
/// Fields that are not set fall back to the stock defaults of
/// [`LabelDefaults`](crate::LabelDefaults).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default fill [`Color`] for labels, as a CSS color string.
    #[serde(default)]
    fill: Option<String>,

    /// Default font family for labels.
    #[serde(default)]
    font_family: Option<String>,

    /// Default font size for labels, in points.
    #[serde(default)]
    font_size: Option<u16>,

    /// Default font slant for labels.
    #[serde(default)]
    font_style: Option<FontStyle>,

    /// Default text alignment for labels.
    #[serde(default)]
    text_align: Option<TextAlign>,

    /// Default selection padding for labels.
    #[serde(default)]
    padding: Option<f32>,
}

impl StyleConfig {
    /// Returns the parsed fill [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidColor`] if the configured color string
    /// cannot be parsed.
    pub fn fill(&self) -> Result<Option<Color>, EaselError> {
        self.fill
            .as_ref()
            .map(|value| {
                Color::new(value).map_err(|reason| EaselError::InvalidColor {
                    value: value.clone(),
                    reason,
                })
            })
            .transpose()
    }

    /// Returns the configured font family, if any.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the configured font size, if any.
    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    /// Returns the configured font slant, if any.
    pub fn font_style(&self) -> Option<FontStyle> {
        self.font_style
    }

    /// Returns the configured text alignment, if any.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Returns the configured selection padding, if any.
    pub fn padding(&self) -> Option<f32> {
        self.padding
    }
}
