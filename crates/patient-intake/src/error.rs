//! Intake Error Types

use thiserror::Error;

/// Errors during patient intake
#[derive(Debug, Clone, Error)]
pub enum IntakeError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Display label does not map to any known category code
    #[error("unknown {attribute} label: {label}")]
    UnknownLabel {
        attribute: &'static str,
        label: String,
    },

    /// Category code does not exist for the attribute
    #[error("unknown {attribute} code: {code}")]
    UnknownCode {
        attribute: &'static str,
        code: String,
    },
}
