//! Stroke colors.

use serde::Deserialize;
use thiserror::Error;

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// `#0099CC`, the default bar color.
    pub const HOLO_BLUE_DARK: Color = Color::new(0.0, 0.6, 0.8, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` (alpha first, as Android resources
    /// write it).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(hex.to_string()))?;
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidDigits(hex.to_string()));
        }
        let byte = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigits(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::from_rgb_u8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_rgba_u8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::HOLO_BLUE_DARK
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    /// The string has neither 6 nor 8 hex digits.
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// The string contains a non-hex character.
    #[error("color `{0}` contains invalid hex digits")]
    InvalidDigits(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_argb() {
        assert_eq!(Color::from_hex("#0099CC"), Ok(Color::HOLO_BLUE_DARK));
        assert_eq!(
            Color::from_hex("#80FFFFFF"),
            Ok(Color::from_rgba_u8(255, 255, 255, 128))
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Color::from_hex("0099CC"),
            Err(ParseColorError::MissingHash("0099CC".to_string()))
        );
        assert_eq!(Color::from_hex("#09C"), Err(ParseColorError::InvalidLength(3)));
        assert_eq!(
            Color::from_hex("#00GGCC"),
            Err(ParseColorError::InvalidDigits("#00GGCC".to_string()))
        );
    }
}
