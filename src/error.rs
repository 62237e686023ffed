//! Error types for the rgb2hsv library

use thiserror::Error;

/// Result type alias for rgb2hsv operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Error types for color conversion and its supporting surfaces
#[derive(Error, Debug)]
pub enum ConversionError {
    /// An extrema reduction was asked to reduce an empty sequence
    #[error("Supplied sequence is empty")]
    EmptyInput,

    /// Hue computation reached a state where no channel matched the maximum
    #[error("Computation error: {message}")]
    Computation { message: String },

    /// Hexadecimal color string could not be parsed
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConversionError {
    /// Create a computation error
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    /// Create a hex parsing error for the given input
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Conversion failures are deterministic, so retrying with the same
    /// color yields the same error. Only caller-supplied input can be fixed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConversionError::InvalidHex { .. } | ConversionError::Config { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ConversionError::InvalidHex { input, .. } => {
                format!("{input:?} is not a color. Use six hex digits such as #FF1E08.")
            }
            ConversionError::Config { message, .. } => {
                format!("Could not load the configuration: {message}.")
            }
            _ => "Color conversion failed.".to_string(),
        }
    }
}
