use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for airfoil generation.
pub type Result<T> = std::result::Result<T, AirfoilError>;

/// Errors that abort an airfoil generation request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AirfoilError {
    /// Camber position collapses a camber denominator or has no square root.
    #[error("camber position {0} must lie strictly between 0 and 1")]
    InvalidCamberPosition(f32),

    /// Too few sample points to define a step.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points requested.
        actual: usize,
    },

    /// A shape parameter is NaN or infinite.
    #[error("parameter {name} is not finite: {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// Not a NACA 4-digit designation.
    #[error("invalid NACA 4-digit designation {0:?}")]
    InvalidDesignation(String),
}

impl AirfoilError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Create an invalid designation error.
    #[must_use]
    pub fn invalid_designation(designation: impl Into<String>) -> Self {
        Self::InvalidDesignation(designation.into())
    }

    /// Whether the request asked for meaningless geometry.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCamberPosition(_)
                | Self::InsufficientPoints { .. }
                | Self::NonFiniteParameter { .. }
        )
    }
}

impl From<AirfoilError> for JsValue {
    fn from(err: AirfoilError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AirfoilError::insufficient_points(2, 1);
        assert!(err.to_string().contains("need at least 2"));
        assert!(err.to_string().contains("got 1"));

        let err = AirfoilError::InvalidCamberPosition(1.0);
        assert!(err.to_string().contains("camber position 1"));

        let err = AirfoilError::invalid_designation("24x2");
        assert!(err.to_string().contains("\"24x2\""));
    }

    #[test]
    fn test_domain_errors() {
        assert!(AirfoilError::InvalidCamberPosition(0.0).is_domain_error());
        assert!(AirfoilError::insufficient_points(2, 0).is_domain_error());
        assert!(AirfoilError::NonFiniteParameter {
            name: "thickness",
            value: f32::NAN
        }
        .is_domain_error());
        assert!(!AirfoilError::invalid_designation("").is_domain_error());
    }
}
