//! The closed text-style model for Easel labels.
//!
//! This module defines everything the annotation component knows about label
//! appearance:
//!
//! - [`TextStyle`] - the full visual style carried by a text object
//! - [`StylePatch`] - a partial edit over the same properties; unset fields
//!   leave the target untouched
//! - [`BaselineStyle`] - the immutable reference values a property returns to
//!   when an edit re-applies its current value (toggle-reset)
//! - [`StyleProperty`] - the closed, enumerable set of editable properties
//!
//! # Toggle-reset
//!
//! Style edits are normalized before they are applied: requesting a value the
//! object already has resets that property to its baseline instead. This is
//! what makes a bold button un-bold already-bold text.
//!
//! ```
//! # use easel_core::style::{FontWeight, StylePatch, TextStyle};
//! let mut style = TextStyle::default();
//! style.set_font_weight(FontWeight::Bold);
//!
//! let patch = StylePatch::new().with_font_weight(FontWeight::Bold);
//! let resolved = patch.normalized(&style);
//! assert_eq!(resolved.font_weight(), Some(FontWeight::Normal));
//! ```

use std::{fmt, str::FromStr, sync::OnceLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Font size given to new labels when the caller does not choose one.
pub const DEFAULT_FONT_SIZE: u16 = 40;

/// Baseline style values, shared process-wide.
static BASELINE: OnceLock<BaselineStyle> = OnceLock::new();

// =============================================================================
// Property Value Enums
// =============================================================================

/// Slant of the label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright glyphs (default)
    #[default]
    Normal,
    /// Slanted glyphs
    Italic,
}

impl FromStr for FontStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "italic" => Ok(Self::Italic),
            _ => Err("unsupported font style"),
        }
    }
}

impl From<FontStyle> for &'static str {
    fn from(val: FontStyle) -> Self {
        match val {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// Stroke weight of the label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight (default)
    #[default]
    Normal,
    /// Heavy weight
    Bold,
}

impl FromStr for FontWeight {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            _ => Err("unsupported font weight"),
        }
    }
}

impl From<FontWeight> for &'static str {
    fn from(val: FontWeight) -> Self {
        match val {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// Horizontal alignment of multi-line label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align lines to the left edge (default)
    #[default]
    Left,
    /// Center lines
    Center,
    /// Align lines to the right edge
    Right,
}

impl FromStr for TextAlign {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err("unsupported text alignment"),
        }
    }
}

impl From<TextAlign> for &'static str {
    fn from(val: TextAlign) -> Self {
        match val {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// Decorative line drawn through or under the label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    /// No decoration (default)
    #[default]
    None,
    /// Line below the text
    Underline,
    /// Line through the text
    #[serde(rename = "line-through")]
    LineThrough,
    /// Line above the text
    Overline,
}

impl FromStr for TextDecoration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(Self::None),
            "underline" => Ok(Self::Underline),
            "line-through" => Ok(Self::LineThrough),
            "overline" => Ok(Self::Overline),
            _ => Err("unsupported text decoration"),
        }
    }
}

impl From<TextDecoration> for &'static str {
    fn from(val: TextDecoration) -> Self {
        match val {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::LineThrough => "line-through",
            TextDecoration::Overline => "overline",
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

// =============================================================================
// Placement Origin
// =============================================================================

/// Horizontal anchor of a label relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    /// Position marks the left edge
    Left,
    /// Position marks the horizontal center (default)
    #[default]
    Center,
    /// Position marks the right edge
    Right,
}

/// Vertical anchor of a label relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    /// Position marks the top edge
    Top,
    /// Position marks the vertical center (default)
    #[default]
    Center,
    /// Position marks the bottom edge
    Bottom,
}

/// Anchor pair describing which point of the label its position refers to.
///
/// New labels anchor at their center, so a position resolved from the
/// backdrop center puts the label in the middle of the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    x: OriginX,
    y: OriginY,
}

impl Origin {
    /// Creates an origin from its horizontal and vertical anchors.
    pub fn new(x: OriginX, y: OriginY) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal anchor.
    pub fn x(self) -> OriginX {
        self.x
    }

    /// Returns the vertical anchor.
    pub fn y(self) -> OriginY {
        self.y
    }
}

// =============================================================================
// Style Properties
// =============================================================================

/// The closed set of editable style properties.
///
/// Edits are expressed over exactly these properties; there is no dynamic
/// key space. [`StyleProperty::ALL`] supports explicit iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Fill,
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    TextAlign,
    TextDecoration,
}

impl StyleProperty {
    /// Every editable property, in declaration order.
    pub const ALL: [StyleProperty; 7] = [
        StyleProperty::Fill,
        StyleProperty::FontFamily,
        StyleProperty::FontSize,
        StyleProperty::FontStyle,
        StyleProperty::FontWeight,
        StyleProperty::TextAlign,
        StyleProperty::TextDecoration,
    ];
}

impl From<StyleProperty> for &'static str {
    fn from(val: StyleProperty) -> Self {
        match val {
            StyleProperty::Fill => "fill",
            StyleProperty::FontFamily => "font_family",
            StyleProperty::FontSize => "font_size",
            StyleProperty::FontStyle => "font_style",
            StyleProperty::FontWeight => "font_weight",
            StyleProperty::TextAlign => "text_align",
            StyleProperty::TextDecoration => "text_decoration",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

// =============================================================================
// TextStyle
// =============================================================================

/// The full visual style carried by a text object.
///
/// A `TextStyle` always holds a value for every property; partial edits are
/// expressed with [`StylePatch`] and merged in with [`TextStyle::apply`].
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Fill | black |
/// | Font family | `"sans-serif"` |
/// | Font size | [`DEFAULT_FONT_SIZE`] |
/// | Font style | normal |
/// | Font weight | normal |
/// | Text align | left |
/// | Text decoration | none |
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    fill: Color,
    font_family: String,
    font_size: u16,
    font_style: FontStyle,
    font_weight: FontWeight,
    text_align: TextAlign,
    text_decoration: TextDecoration,
}

impl TextStyle {
    /// Creates a new style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font slant.
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Returns the font weight.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the horizontal text alignment.
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Returns the text decoration.
    pub fn text_decoration(&self) -> TextDecoration {
        self.text_decoration
    }

    /// Sets the fill color.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Sets the font family name.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font slant.
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    /// Sets the font weight.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the horizontal text alignment.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    /// Sets the text decoration.
    pub fn set_text_decoration(&mut self, decoration: TextDecoration) {
        self.text_decoration = decoration;
    }

    /// Merges a patch into this style. Set fields win; unset fields leave
    /// the current value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use easel_core::color::Color;
    /// # use easel_core::style::{StylePatch, TextStyle};
    /// let mut style = TextStyle::default();
    /// let red = Color::new("#ff0000").unwrap();
    ///
    /// style.apply(&StylePatch::new().with_fill(red));
    /// assert_eq!(style.fill(), red);
    /// assert_eq!(style.font_size(), easel_core::style::DEFAULT_FONT_SIZE);
    /// ```
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(fill) = patch.fill {
            self.fill = fill;
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(style) = patch.font_style {
            self.font_style = style;
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = weight;
        }
        if let Some(align) = patch.text_align {
            self.text_align = align;
        }
        if let Some(decoration) = patch.text_decoration {
            self.text_decoration = decoration;
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Color::default(),
            font_family: "sans-serif".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
            text_align: TextAlign::default(),
            text_decoration: TextDecoration::default(),
        }
    }
}

// =============================================================================
// StylePatch
// =============================================================================

/// A partial style edit over the closed property set.
///
/// Unset fields leave the target property untouched. Patches are built with
/// the `with_*` methods and applied with [`TextStyle::apply`], usually after
/// [`StylePatch::normalized`] has resolved toggle-resets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    fill: Option<Color>,
    font_family: Option<String>,
    font_size: Option<u16>,
    font_style: Option<FontStyle>,
    font_weight: Option<FontWeight>,
    text_align: Option<TextAlign>,
    text_decoration: Option<TextDecoration>,
}

impl StylePatch {
    /// Creates an empty patch that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the font family (builder style).
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    /// Sets the font size (builder style).
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font slant (builder style).
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the font weight (builder style).
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the horizontal text alignment (builder style).
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Sets the text decoration (builder style).
    pub fn with_text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    /// Returns the requested fill color, if set.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Returns the requested font family, if set.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the requested font size, if set.
    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    /// Returns the requested font slant, if set.
    pub fn font_style(&self) -> Option<FontStyle> {
        self.font_style
    }

    /// Returns the requested font weight, if set.
    pub fn font_weight(&self) -> Option<FontWeight> {
        self.font_weight
    }

    /// Returns the requested text alignment, if set.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Returns the requested text decoration, if set.
    pub fn text_decoration(&self) -> Option<TextDecoration> {
        self.text_decoration
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.touched().is_empty()
    }

    /// Returns the properties this patch touches, in declaration order.
    pub fn touched(&self) -> Vec<StyleProperty> {
        StyleProperty::ALL
            .into_iter()
            .filter(|property| match property {
                StyleProperty::Fill => self.fill.is_some(),
                StyleProperty::FontFamily => self.font_family.is_some(),
                StyleProperty::FontSize => self.font_size.is_some(),
                StyleProperty::FontStyle => self.font_style.is_some(),
                StyleProperty::FontWeight => self.font_weight.is_some(),
                StyleProperty::TextAlign => self.text_align.is_some(),
                StyleProperty::TextDecoration => self.text_decoration.is_some(),
            })
            .collect()
    }

    /// Resolves toggle-resets against a snapshot of the target's current
    /// style, returning the patch that should actually be applied.
    ///
    /// For each set field, if the requested value equals the current value
    /// the resolved value is the baseline value instead; otherwise the
    /// request stands. Every comparison reads `current`, never a value
    /// resolved earlier in the same call, so field order is immaterial.
    ///
    /// # Examples
    ///
    /// ```
    /// # use easel_core::style::{FontWeight, StylePatch, TextStyle};
    /// let style = TextStyle::default(); // weight: normal
    /// let patch = StylePatch::new().with_font_weight(FontWeight::Bold);
    ///
    /// // Not yet bold: request stands.
    /// assert_eq!(patch.normalized(&style).font_weight(), Some(FontWeight::Bold));
    /// ```
    pub fn normalized(&self, current: &TextStyle) -> StylePatch {
        let baseline = BaselineStyle::shared();
        let mut resolved = self.clone();

        toggle_reset(
            StyleProperty::Fill,
            &mut resolved.fill,
            &current.fill,
            &baseline.fill,
        );
        toggle_reset(
            StyleProperty::FontFamily,
            &mut resolved.font_family,
            &current.font_family,
            &baseline.font_family,
        );
        toggle_reset(
            StyleProperty::FontSize,
            &mut resolved.font_size,
            &current.font_size,
            &baseline.font_size,
        );
        toggle_reset(
            StyleProperty::FontStyle,
            &mut resolved.font_style,
            &current.font_style,
            &baseline.font_style,
        );
        toggle_reset(
            StyleProperty::FontWeight,
            &mut resolved.font_weight,
            &current.font_weight,
            &baseline.font_weight,
        );
        toggle_reset(
            StyleProperty::TextAlign,
            &mut resolved.text_align,
            &current.text_align,
            &baseline.text_align,
        );
        toggle_reset(
            StyleProperty::TextDecoration,
            &mut resolved.text_decoration,
            &current.text_decoration,
            &baseline.text_decoration,
        );

        resolved
    }
}

/// Substitutes the baseline value when the request matches the current value.
fn toggle_reset<T: PartialEq + Clone>(
    property: StyleProperty,
    requested: &mut Option<T>,
    current: &T,
    baseline: &T,
) {
    if let Some(value) = requested {
        if value == current {
            debug!(property = property.to_string(); "value already current, resetting to baseline");
            *value = baseline.clone();
        }
    }
}

// =============================================================================
// BaselineStyle
// =============================================================================

/// The immutable reference values used to reset a re-toggled property.
///
/// The table is total over [`StyleProperty::ALL`]: properties with no
/// meaningful neutral keyword reset to an empty value (font family) or the
/// creation default (font size), so normalization never fails.
#[derive(Debug, Clone)]
pub struct BaselineStyle {
    fill: Color,
    font_family: String,
    font_size: u16,
    font_style: FontStyle,
    font_weight: FontWeight,
    text_align: TextAlign,
    text_decoration: TextDecoration,
}

impl BaselineStyle {
    /// Returns the shared process-wide baseline table.
    pub fn shared() -> &'static Self {
        BASELINE.get_or_init(|| BaselineStyle {
            fill: Color::default(),
            font_family: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
        })
    }

    /// Returns the baseline fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the baseline font family (empty: no family preference).
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the baseline font size.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the baseline font slant.
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Returns the baseline font weight.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the baseline text alignment.
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Returns the baseline text decoration.
    pub fn text_decoration(&self) -> TextDecoration {
        self.text_decoration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.fill(), Color::default());
        assert_eq!(style.font_family(), "sans-serif");
        assert_eq!(style.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(style.font_style(), FontStyle::Normal);
        assert_eq!(style.font_weight(), FontWeight::Normal);
        assert_eq!(style.text_align(), TextAlign::Left);
        assert_eq!(style.text_decoration(), TextDecoration::None);
    }

    #[test]
    fn test_apply_merges_set_fields_only() {
        let mut style = TextStyle::default();
        style.set_font_size(18);

        let red = Color::new("#ff0000").unwrap();
        style.apply(&StylePatch::new().with_fill(red));

        assert_eq!(style.fill(), red);
        // Untouched fields survive the merge.
        assert_eq!(style.font_size(), 18);
        assert_eq!(style.font_family(), "sans-serif");
    }

    #[test]
    fn test_apply_empty_patch_is_identity() {
        let mut style = TextStyle::default();
        style.set_font_weight(FontWeight::Bold);
        let before = style.clone();

        style.apply(&StylePatch::new());
        assert_eq!(style, before);
    }

    #[test]
    fn test_normalized_applies_new_value() {
        let style = TextStyle::default();
        let patch = StylePatch::new().with_font_weight(FontWeight::Bold);

        let resolved = patch.normalized(&style);
        assert_eq!(resolved.font_weight(), Some(FontWeight::Bold));
    }

    #[test]
    fn test_normalized_resets_repeated_value_to_baseline() {
        let mut style = TextStyle::default();
        style.set_font_weight(FontWeight::Bold);

        let patch = StylePatch::new().with_font_weight(FontWeight::Bold);
        let resolved = patch.normalized(&style);
        assert_eq!(resolved.font_weight(), Some(FontWeight::Normal));
    }

    #[test]
    fn test_normalized_resets_fill_to_baseline_black() {
        let red = Color::new("#ff0000").unwrap();
        let mut style = TextStyle::default();
        style.set_fill(red);

        let resolved = StylePatch::new().with_fill(red).normalized(&style);
        assert_eq!(resolved.fill(), Some(Color::default()));
    }

    #[test]
    fn test_normalized_resets_font_family_to_empty() {
        let mut style = TextStyle::default();
        style.set_font_family("Courier");

        let resolved = StylePatch::new()
            .with_font_family("Courier")
            .normalized(&style);
        assert_eq!(resolved.font_family(), Some(""));
    }

    #[test]
    fn test_normalized_resets_font_size_to_default() {
        let mut style = TextStyle::default();
        style.set_font_size(72);

        let resolved = StylePatch::new().with_font_size(72).normalized(&style);
        assert_eq!(resolved.font_size(), Some(DEFAULT_FONT_SIZE));
    }

    #[test]
    fn test_normalized_leaves_unset_fields_unset() {
        let style = TextStyle::default();
        let resolved = StylePatch::new()
            .with_text_align(TextAlign::Center)
            .normalized(&style);

        assert_eq!(resolved.text_align(), Some(TextAlign::Center));
        assert_eq!(resolved.fill(), None);
        assert_eq!(resolved.font_weight(), None);
        assert_eq!(resolved.font_family(), None);
    }

    #[test]
    fn test_normalized_fields_are_independent() {
        // One field toggles, the other applies; neither affects the other.
        let mut style = TextStyle::default();
        style.set_font_weight(FontWeight::Bold);

        let resolved = StylePatch::new()
            .with_font_weight(FontWeight::Bold)
            .with_font_style(FontStyle::Italic)
            .normalized(&style);

        assert_eq!(resolved.font_weight(), Some(FontWeight::Normal));
        assert_eq!(resolved.font_style(), Some(FontStyle::Italic));
    }

    #[test]
    fn test_touched_reports_set_fields_in_order() {
        let patch = StylePatch::new()
            .with_text_decoration(TextDecoration::Underline)
            .with_fill(Color::default());

        assert_eq!(
            patch.touched(),
            vec![StyleProperty::Fill, StyleProperty::TextDecoration]
        );
        assert!(!patch.is_empty());
        assert!(StylePatch::new().is_empty());
    }

    #[test]
    fn test_baseline_matches_neutral_values() {
        let baseline = BaselineStyle::shared();
        assert_eq!(baseline.fill(), Color::default());
        assert_eq!(baseline.font_family(), "");
        assert_eq!(baseline.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(baseline.font_style(), FontStyle::Normal);
        assert_eq!(baseline.font_weight(), FontWeight::Normal);
        assert_eq!(baseline.text_align(), TextAlign::Left);
        assert_eq!(baseline.text_decoration(), TextDecoration::None);
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!("bold".parse::<FontWeight>(), Ok(FontWeight::Bold));
        assert_eq!(FontWeight::Bold.to_string(), "bold");
        assert_eq!("italic".parse::<FontStyle>(), Ok(FontStyle::Italic));
        assert_eq!(
            "line-through".parse::<TextDecoration>(),
            Ok(TextDecoration::LineThrough)
        );
        assert_eq!(TextDecoration::LineThrough.to_string(), "line-through");
        // The empty string is accepted as no decoration.
        assert_eq!("".parse::<TextDecoration>(), Ok(TextDecoration::None));
        assert!("wavy".parse::<TextDecoration>().is_err());
    }
}
