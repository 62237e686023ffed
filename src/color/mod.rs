//! Color models and conversion
//!
//! This module holds the RGB and HSV value types, the RGB to HSV
//! converter and the extrema reductions it is built on.

pub mod conversion;
pub mod extrema;
pub mod model;

pub use conversion::{rgb_to_hsv, ColorConverter};
pub use model::{Hsv, Rgb};
