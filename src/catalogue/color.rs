//! Marker colors and the luminance rule used to pick readable tile text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Luminance above which a color counts as "light" (strict comparison).
pub const LIGHT_LUMINANCE_THRESHOLD: f32 = 0.5;

/// A 24-bit sRGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a color in #RRGGBB form, got {0:?}")]
pub struct InvalidHex(pub String);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (hex digits in either case).
    pub fn parse(value: &str) -> Result<Self, InvalidHex> {
        let invalid = || InvalidHex(value.to_string());

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Perceived brightness in `[0, 1]`: `0.299 R + 0.587 G + 0.114 B`
    /// over channels normalized to `[0, 1]`.
    pub fn luminance(&self) -> f32 {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        0.299 * r + 0.587 * g + 0.114 * b
    }

    /// Whether dark text should be drawn on top of this color.
    pub fn is_light(&self) -> bool {
        is_light_luminance(self.luminance())
    }
}

/// Threshold rule shared by every color check. Exactly 0.5 is dark.
pub fn is_light_luminance(luminance: f32) -> bool {
    luminance > LIGHT_LUMINANCE_THRESHOLD
}

/// Convenience for raw strings: malformed input is treated as dark.
#[allow(dead_code)]
pub fn is_light(hex: &str) -> bool {
    HexColor::parse(hex).is_ok_and(|color| color.is_light())
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHex;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
