//! Numeric constants for RGB to HSV conversion
//!
//! This module contains the scale factors shared by the conversion
//! routine and the reference colors used by the demos.

/// Channel scale factors
pub mod channel {
    /// Largest value an 8-bit channel can hold, as a float divisor
    pub const MAX: f64 = 255.0;
}

/// Hue geometry
pub mod hue {
    /// Width of one hue sector in degrees
    pub const SECTOR_DEGREES: f64 = 60.0;

    /// Number of sectors around the hue circle
    pub const SECTORS: f64 = 6.0;

    /// Sector offset when green holds the maximum
    pub const GREEN_OFFSET: f64 = 2.0;

    /// Sector offset when blue holds the maximum
    pub const BLUE_OFFSET: f64 = 4.0;

    /// Full turn in whole degrees
    pub const FULL_TURN: u16 = 360;
}

/// Saturation and value are reported as percentages
pub const PERCENT_SCALE: f64 = 100.0;

/// Reference colors
pub mod reference {
    /// Color converted by the demo when no other input is given
    pub const DEMO_RGB: (u8, u8, u8) = (255, 30, 8);
}
