//! RGB to HSV conversion
//!
//! Channels are normalized to the unit interval, the chroma (`delta`) is
//! taken between the largest and smallest channel, and hue is placed in one
//! of six 60 degree sectors depending on which channel holds the maximum.
//! Saturation and value are reported as percentages.

use crate::{
    color::{
        extrema::{max_of, min_of},
        Hsv, Rgb,
    },
    constants::{channel, hue, PERCENT_SCALE},
    ConversionError, Result,
};

/// Stateless RGB to HSV converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert an 8-bit RGB color to HSV
    ///
    /// # Returns
    ///
    /// HSV color with hue rounded to whole degrees in [0, 360) and
    /// saturation and value in [0, 100]
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::EmptyInput`] or [`ConversionError::Computation`]
    /// if the extrema or hue computation fail. Neither happens for finite
    /// channel values.
    pub fn rgb_to_hsv(&self, rgb: Rgb) -> Result<Hsv> {
        let ri = rgb.r as f64 / channel::MAX;
        let gi = rgb.g as f64 / channel::MAX;
        let bi = rgb.b as f64 / channel::MAX;

        let channels = [ri, gi, bi];
        let cmax = max_of(&channels)?;
        let cmin = min_of(&channels)?;
        let delta = cmax - cmin;

        let h = self.hue(ri, gi, bi, cmax, delta)?;
        let s = self.saturation(cmax, delta);
        let v = cmax * PERCENT_SCALE;

        Ok(Hsv::new(Hsv::wrap_hue(h), s, v))
    }

    /// Hue in degrees, before rounding
    ///
    /// `r`, `g` and `b` are normalized channels; `cmax` must be one of them.
    pub(crate) fn hue(&self, r: f64, g: f64, b: f64, cmax: f64, delta: f64) -> Result<f64> {
        if delta == 0.0 {
            Ok(0.0)
        } else if cmax == r {
            // rem_euclid keeps the sector non-negative when blue exceeds green
            Ok(hue::SECTOR_DEGREES * ((g - b) / delta).rem_euclid(hue::SECTORS))
        } else if cmax == g {
            Ok(hue::SECTOR_DEGREES * ((b - r) / delta + hue::GREEN_OFFSET))
        } else if cmax == b {
            Ok(hue::SECTOR_DEGREES * ((r - g) / delta + hue::BLUE_OFFSET))
        } else {
            Err(ConversionError::computation("unexpected state computing hue"))
        }
    }

    /// Saturation as a percentage of `cmax`
    pub(crate) fn saturation(&self, cmax: f64, delta: f64) -> f64 {
        if cmax == 0.0 {
            0.0
        } else {
            delta / cmax * PERCENT_SCALE
        }
    }
}

/// Convert an 8-bit RGB color to HSV
///
/// Shorthand for [`ColorConverter::rgb_to_hsv`].
pub fn rgb_to_hsv(rgb: Rgb) -> Result<Hsv> {
    ColorConverter::new().rgb_to_hsv(rgb)
}

impl TryFrom<Rgb> for Hsv {
    type Error = ConversionError;

    fn try_from(rgb: Rgb) -> Result<Self> {
        rgb_to_hsv(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsv(rgb: Rgb, h: u16, s: f64, v: f64) {
        let hsv = rgb_to_hsv(rgb).unwrap();
        assert_eq!(hsv.h(), h, "hue of {rgb}");
        assert!((hsv.s() - s).abs() < 0.05, "saturation of {rgb}: {}", hsv.s());
        assert!((hsv.v() - v).abs() < 0.05, "value of {rgb}: {}", hsv.v());
    }

    #[test]
    fn test_black_and_white() {
        assert_hsv(Rgb::gray(0), 0, 0.0, 0.0);
        assert_hsv(Rgb::gray(255), 0, 0.0, 100.0);
    }

    #[test]
    fn test_primaries() {
        assert_hsv(Rgb::new(255, 0, 0), 0, 100.0, 100.0);
        assert_hsv(Rgb::new(0, 255, 0), 120, 100.0, 100.0);
        assert_hsv(Rgb::new(0, 0, 255), 240, 100.0, 100.0);
    }

    #[test]
    fn test_secondaries() {
        assert_hsv(Rgb::new(255, 255, 0), 60, 100.0, 100.0);
        assert_hsv(Rgb::new(0, 255, 255), 180, 100.0, 100.0);
        assert_hsv(Rgb::new(255, 0, 255), 300, 100.0, 100.0);
    }

    #[test]
    fn test_demo_color() {
        // 60 * (22 / 247) = 5.34 degrees
        assert_hsv(Rgb::new(255, 30, 8), 5, 96.9, 100.0);
    }

    #[test]
    fn test_red_sector_wraps_negative_ratio() {
        // (g - b) / delta = -0.5 lands in the last sector, not below zero
        assert_hsv(Rgb::new(255, 0, 128), 330, 100.0, 100.0);

        // 359.76 degrees rounds up to a full turn
        assert_hsv(Rgb::new(255, 0, 1), 0, 100.0, 100.0);
    }

    #[test]
    fn test_dark_and_desaturated() {
        assert_hsv(Rgb::new(128, 64, 64), 0, 50.0, 50.2);
        assert_hsv(Rgb::new(64, 128, 64), 120, 50.0, 50.2);
    }

    #[test]
    fn test_hue_rejects_foreign_maximum() {
        let converter = ColorConverter::new();
        let result = converter.hue(0.1, 0.2, 0.3, 0.9, 0.5);

        match result {
            Err(ConversionError::Computation { message }) => {
                assert_eq!(message, "unexpected state computing hue");
            }
            other => panic!("Expected Computation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_saturation_of_black_is_zero() {
        let converter = ColorConverter::new();
        assert_eq!(converter.saturation(0.0, 0.0), 0.0);
        assert_eq!(converter.saturation(0.5, 0.25), 50.0);
    }

    #[test]
    fn test_try_from() {
        let hsv = Hsv::try_from(Rgb::new(0, 0, 255)).unwrap();
        assert_eq!(hsv.h(), 240);
    }
}
