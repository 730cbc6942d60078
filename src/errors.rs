//! Error types with diagnostic codes using miette
//!
//! Construction failures are reported before any part of the tree is linked
//! into its parent; render failures are reported before any output is written.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Build Errors
// ============================================================================

/// Errors raised while constructing components
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    #[error("{package} pin count {pin_count} is not a positive multiple of {sides}")]
    #[diagnostic(
        code(pinout::build::invalid_pin_count),
        help("a {package} package distributes its pins evenly over {sides} sides")
    )]
    InvalidPinCount {
        package: &'static str,
        pin_count: usize,
        sides: usize,
    },

    #[error("pin {index} is out of range for a {pin_count}-pin {package}")]
    #[diagnostic(
        code(pinout::build::pin_index_out_of_range),
        help("pins are numbered from 1")
    )]
    PinIndexOutOfRange {
        package: &'static str,
        index: usize,
        pin_count: usize,
    },

    #[error("unknown leaderline direction {code:?} on {component}")]
    #[diagnostic(
        code(pinout::build::unknown_direction),
        help("use two characters from {{h, v}}: hh, hv, vh or vv")
    )]
    UnknownDirection { component: String, code: String },

    #[error("unknown leaderline style {style:?} on {component}")]
    #[diagnostic(
        code(pinout::build::unknown_style),
        help("expected one of: straight, angled, curved, diagonal")
    )]
    UnknownStyle { component: String, style: String },

    #[error("invalid configuration for {section}")]
    #[diagnostic(code(pinout::build::invalid_config))]
    InvalidConfig {
        section: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot set config path {path:?}: segment {segment:?} is not an object")]
    #[diagnostic(
        code(pinout::build::config_path),
        help("path segments must be non-empty and name objects, except the last")
    )]
    ConfigPath { path: String, segment: String },

    #[error("invalid value for {component}.{field}: {value}")]
    #[diagnostic(code(pinout::build::invalid_number))]
    InvalidNumber {
        component: String,
        field: &'static str,
        value: f64,
        #[source]
        source: NumericError,
    },
}

impl BuildError {
    /// Wrap a numeric validation failure with the component and field it came from.
    pub fn number(component: impl Into<String>, field: &'static str, value: f64, source: NumericError) -> Self {
        BuildError::InvalidNumber {
            component: component.into(),
            field,
            value,
            source,
        }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing output from a finished tree
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(pinout::render::invalid_bounds))]
    InvalidBounds,

    #[error("invalid document size {width} x {height}")]
    #[diagnostic(code(pinout::render::invalid_size))]
    InvalidSize { width: f64, height: f64 },

    #[error("failed to format output")]
    #[diagnostic(code(pinout::render::format))]
    Format(#[from] std::fmt::Error),
}

/// Result alias for component construction
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_count_message_names_package_and_value() {
        let err = BuildError::InvalidPinCount {
            package: "QFP",
            pin_count: 30,
            sides: 4,
        };
        assert_eq!(err.to_string(), "QFP pin count 30 is not a positive multiple of 4");
    }

    #[test]
    fn invalid_number_keeps_source() {
        let err = BuildError::number("panel", "width", f64::INFINITY, NumericError::Infinite);
        assert_eq!(err.to_string(), "invalid value for panel.width: inf");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("value is infinite"));
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let err = BuildError::UnknownDirection {
            component: "pinlabel".into(),
            code: "hx".into(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("pinout::build::unknown_direction"));
    }
}
