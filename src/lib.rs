//! # rgb2hsv
//!
//! A Rust crate for converting 8-bit RGB colors into the HSV
//! (hue, saturation, value) model.
//!
//! The conversion is a pure function:
//! - Channels are normalized to the unit interval
//! - Hue is reported in whole degrees in [0, 360)
//! - Saturation and value are reported as percentages in [0, 100]
//!
//! ## Example
//!
//! ```rust
//! use rgb2hsv::{rgb_to_hsv, Rgb};
//!
//! let hsv = rgb_to_hsv(Rgb::new(0, 255, 0))?;
//! assert_eq!(hsv.h(), 120);
//! println!("HSV Color: {hsv}");
//! # Ok::<(), rgb2hsv::ConversionError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{rgb_to_hsv, ColorConverter, Hsv, Rgb};
pub use config::DemoConfig;
pub use error::{ConversionError, Result};
