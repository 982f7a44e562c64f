//! Error types for the shipping registration library.

use thiserror::Error;

/// Result type alias using the library's error type.
pub type Result<T> = std::result::Result<T, ShippingError>;

/// The two failure kinds a registration can surface.
///
/// Both are returned to the caller immediately; there is no retry or partial
/// success. Application-level failures (profile files, IO) do not belong
/// here and travel as `anyhow::Error` at the binary boundary.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// A mandatory field was missing or blank, or a numeric argument was out
    /// of range. The reason names the offending field.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A status label outside the allowed set. The message carries the
    /// rejected label verbatim.
    #[error("{label} is not a valid shipping status")]
    NotValidStatus { label: String },
}

impl ShippingError {
    /// Short recovery suggestion for user-facing output.
    pub fn hint(&self) -> &'static str {
        match self {
            ShippingError::InvalidArgument { .. } => {
                "Provide every mandatory field and a non-negative cost"
            }
            ShippingError::NotValidStatus { .. } => {
                "Allowed statuses: in transit, on hold, delivered, returned"
            }
        }
    }
}
