//! Color handling for Easel labels.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with CSS
//! color strings the way canvas callers supply them.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Label fills arrive as CSS color strings (`"#ff0000"`, `"rgb(255, 0, 0)"`,
/// `"red"`) and are parsed once into this type; equality on the parsed value
/// is what the style toggle logic compares.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let faded = red.with_alpha(0.5);
    /// assert_eq!(faded.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color,
    /// between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_new_error_names_input() {
        let err = Color::new("##bad").unwrap_err();
        assert!(err.contains("##bad"), "error should name the input: {err}");
    }

    #[test]
    fn test_color_accepts_css_forms() {
        assert!(Color::new("rgb(255, 0, 0)").is_ok());
        assert!(Color::new("rebeccapurple").is_ok());
        assert!(Color::new("#0f0").is_ok());
    }

    #[test]
    fn test_color_default_is_black() {
        let default = Color::default();
        let black = Color::new("black").unwrap();
        assert_eq!(default, black);
    }

    #[test]
    fn test_color_equality_across_spellings() {
        // The toggle logic relies on parsed-value equality, not string equality.
        let hex = Color::new("#000000").unwrap();
        let named = Color::new("black").unwrap();
        assert_eq!(hex, named);
    }

    #[test]
    fn test_color_with_alpha() {
        let red = Color::new("red").unwrap();
        assert_eq!(red.alpha(), 1.0);

        let faded = red.with_alpha(0.25);
        assert_eq!(faded.alpha(), 0.25);
        assert_ne!(red, faded);
    }
}
