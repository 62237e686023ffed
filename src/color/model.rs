//! RGB and HSV value types
//!
//! Both types are plain `Copy` values. [`Rgb`] is built directly from
//! channel literals or parsed from hex; [`Hsv`] is produced by
//! [`ColorConverter`](crate::color::ColorConverter).

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{constants::hue::FULL_TURN, ConversionError, Result};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(x: u8) -> Self {
        Self { r: x, g: x, b: x }
    }

    /// Convert to a hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string (e.g., "#FF1E08")
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF1E08" or "ff1e08")
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidHex`] if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConversionError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {}", digits.chars().count()),
            ));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            let pair = &digits[range];
            // from_str_radix alone would accept a leading sign
            if !pair.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConversionError::invalid_hex(
                    hex,
                    format!("invalid {name} value: {pair:?}"),
                ));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|e| ConversionError::invalid_hex(hex, format!("invalid {name} value: {e}")))
        };

        Ok(Self {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }
}

impl FromStr for Rgb {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {} G: {} B: {}", self.r, self.g, self.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(value: Srgb<u8>) -> Self {
        Self::new(value.red, value.green, value.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(value: Rgb) -> Self {
        Srgb::new(value.r, value.g, value.b)
    }
}

/// HSV color with whole-degree hue and percentage saturation and value.
///
/// Only produced by [`ColorConverter`](crate::color::ColorConverter), so the
/// components always lie in their ranges. It can be serialized for output
/// but not deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Hsv {
    /// [0, 360)
    h: u16,
    /// [0, 100]
    s: f64,
    /// [0, 100]
    v: f64,
}

impl Hsv {
    pub(crate) const fn new(h: u16, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue in whole degrees, [0, 360)
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Saturation in percent, [0, 100]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value in percent, [0, 100]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Hue narrowed to eight bits, wrapping modulo 256.
    ///
    /// Hues of 256 degrees and above do not fit a `u8`; this accessor keeps
    /// the wrapping behavior for callers that store hue in a single byte.
    /// 300 degrees becomes 44.
    pub fn hue_u8_wrapped(&self) -> u8 {
        (self.h % 256) as u8
    }

    /// True when saturation is zero, i.e. the color is a shade of gray.
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }

    pub(crate) fn wrap_hue(degrees: f64) -> u16 {
        (degrees.round() as u16) % FULL_TURN
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(
            f,
            "H: {} S: {:.*} V: {:.*}",
            self.h, precision, self.s, precision, self.v
        )
    }
}
