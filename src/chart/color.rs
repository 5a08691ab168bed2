//! Display colors and the chart palette
//!
//! Colors serialize as `#rrggbb` hex strings so palettes can live in the
//! settings file next to the rest of the user's preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Error type for color parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    InvalidHex(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::InvalidHex(s) => write!(f, "Invalid hex color: {}", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// An ordered, non-empty sequence of chart colors
///
/// Slices index into the palette modulo its length, so a palette shorter than
/// the category count cycles instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Create a palette from an ordered list of colors
    pub fn new(colors: Vec<Color>) -> Result<Self, EmptyPaletteError> {
        if colors.is_empty() {
            Err(EmptyPaletteError)
        } else {
            Ok(Self(colors))
        }
    }

    /// Color for the slice at `index`, cycling when the palette is short
    pub fn color_for(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: palettes are non-empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The colors in order
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(default_palette())
    }
}

/// The built-in chart palette
///
/// Eight distinct hues matched to the dashboard's visual theme.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0x66, 0x7e, 0xea), // indigo
        Color::rgb(0x48, 0xbb, 0x78), // green
        Color::rgb(0xed, 0x89, 0x36), // orange
        Color::rgb(0xf5, 0x65, 0x65), // red
        Color::rgb(0x9f, 0x7a, 0xea), // purple
        Color::rgb(0x42, 0x99, 0xe1), // blue
        Color::rgb(0xec, 0xc9, 0x4b), // yellow
        Color::rgb(0x38, 0xb2, 0xac), // teal
    ]
}

/// Error returned when constructing a palette with no colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPaletteError;

impl fmt::Display for EmptyPaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Palette must contain at least one color")
    }
}

impl std::error::Error for EmptyPaletteError {}
