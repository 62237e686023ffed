//! Configuration for the rgb2hsv demos.
//!
//! The demo converts a single color and prints it. Which color, and how
//! many decimals saturation and value are printed with, can be loaded from
//! JSON or constructed programmatically:
//!
//! ```no_run
//! use rgb2hsv::DemoConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DemoConfig::from_json_file(Path::new("demo.json"))?;
//!
//! // Or use defaults
//! let config = DemoConfig::default();
//! # Ok::<(), rgb2hsv::ConversionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{constants::reference::DEMO_RGB, ConversionError, Result, Rgb};

/// Decimals used for saturation and value when the config omits them
const DEFAULT_PRECISION: usize = 1;

/// Largest precision accepted; f64 carries at most 17 significant digits
pub const MAX_PRECISION: usize = 17;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Color to convert
    pub color: Rgb,

    /// Decimals printed for saturation and value
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for DemoConfig {
    fn default() -> Self {
        let (r, g, b) = DEMO_RGB;
        Self {
            color: Rgb::new(r, g, b),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DemoConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConversionError::config("invalid JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used for display
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Config`] if `precision` exceeds [`MAX_PRECISION`]
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConversionError::Config {
                message: format!(
                    "precision {} exceeds the maximum of {}",
                    self.precision, MAX_PRECISION
                ),
                source: None,
            });
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log::debug!("loading demo config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConversionError::config(format!("reading {}", path.display()), e))?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded demo config: {:?}", config);
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::config("serializing config", e))?;
        std::fs::write(path, json)
            .map_err(|e| ConversionError::config(format!("writing {}", path.display()), e))?;
        log::debug!("saved demo config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.color, Rgb::new(255, 30, 8));
        assert_eq!(config.precision, 1);
    }

    #[test]
    fn test_precision_is_optional() {
        let config = DemoConfig::from_json_str(r#"{"color":{"r":0,"g":0,"b":255}}"#).unwrap();
        assert_eq!(config.color, Rgb::new(0, 0, 255));
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_invalid_json() {
        let result = DemoConfig::from_json_str(r#"{"color":{"r":256,"g":0,"b":0}}"#);
        assert!(matches!(result, Err(ConversionError::Config { .. })));
    }

    #[test]
    fn test_precision_out_of_range() {
        let json = r#"{"color":{"r":255,"g":30,"b":8},"precision":100000}"#;

        match DemoConfig::from_json_str(json) {
            Err(ConversionError::Config { message, .. }) => {
                assert!(message.contains("100000"), "unexpected message: {message}");
            }
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_precision_limit_is_usable() {
        let json = format!(r#"{{"color":{{"r":0,"g":0,"b":0}},"precision":{MAX_PRECISION}}}"#);
        let config = DemoConfig::from_json_str(&json).unwrap();
        let hsv = crate::rgb_to_hsv(config.color).unwrap();

        let line = format!("{:.*}", config.precision, hsv);
        assert_eq!(line, format!("H: 0 S: {0:.17} V: {0:.17}", 0.0));
    }

    #[test]
    fn test_unwritable_precision_is_rejected() {
        let config = DemoConfig {
            color: Rgb::gray(0),
            precision: MAX_PRECISION + 1,
        };
        let path = std::env::temp_dir().join("rgb2hsv-never-written.json");

        assert!(matches!(config.to_json_file(&path), Err(ConversionError::Config { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("rgb2hsv-config-{}.json", std::process::id()));
        let config = DemoConfig {
            color: Rgb::new(12, 34, 56),
            precision: 3,
        };

        config.to_json_file(&path).unwrap();
        let loaded = DemoConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_file() {
        let result = DemoConfig::from_json_file(Path::new("nonexistent_config.json"));
        assert!(matches!(result, Err(ConversionError::Config { .. })));
    }
}
