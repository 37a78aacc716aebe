// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for abicodec.
//!
//! Provides error types for typed value decoding:
//! - Unsupported input shapes
//! - Invalid boolean literals
//! - Structural precondition violations
//! - Representation coercion failures
//! - Missing struct fields
//!
//! No error is caught or recovered inside this crate; every failure
//! propagates immediately to the caller and no partial result is returned.

use std::fmt;

/// Errors that can occur while decoding a value against a schema.
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// Decoder variant received an input shape it has no conversion rule for
    Unsupported {
        /// Decoder kind that rejected the input (e.g., "bytes", "struct")
        decoder: String,
        /// Type name of the offending input
        input: String,
    },

    /// Value is a syntactic candidate but outside the recognized literal set
    InvalidBoolean {
        /// Rendered form of the rejected value
        value: String,
    },

    /// Required structural precondition violated
    InvariantViolation {
        /// Description of the invariant that was violated
        invariant: String,
    },

    /// Representation conversion failed
    Coercion {
        /// Target representation (e.g., "integer", "address")
        target: String,
        /// Rendered form of the input value
        value: String,
        /// Underlying conversion error
        reason: String,
    },

    /// Declared struct field absent from the input mapping
    MissingField {
        /// Field name that was not found
        field: String,
    },
}

impl DecodeError {
    /// Create an unsupported-input error.
    pub fn unsupported(decoder: impl Into<String>, input: impl Into<String>) -> Self {
        DecodeError::Unsupported {
            decoder: decoder.into(),
            input: input.into(),
        }
    }

    /// Create an invalid boolean literal error.
    pub fn invalid_boolean(value: impl Into<String>) -> Self {
        DecodeError::InvalidBoolean {
            value: value.into(),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(invariant: impl Into<String>) -> Self {
        DecodeError::InvariantViolation {
            invariant: invariant.into(),
        }
    }

    /// Create a coercion error.
    pub fn coercion(
        target: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DecodeError::Coercion {
            target: target.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        DecodeError::MissingField {
            field: field.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            DecodeError::Unsupported { decoder, input } => {
                vec![("decoder", decoder.clone()), ("input", input.clone())]
            }
            DecodeError::InvalidBoolean { value } => vec![("value", value.clone())],
            DecodeError::InvariantViolation { invariant } => {
                vec![("invariant", invariant.clone())]
            }
            DecodeError::Coercion {
                target,
                value,
                reason,
            } => vec![
                ("target", target.clone()),
                ("value", value.clone()),
                ("reason", reason.clone()),
            ],
            DecodeError::MissingField { field } => vec![("field", field.clone())],
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Unsupported { decoder, input } => {
                write!(f, "Unsupported input for {decoder} decoder: {input}")
            }
            DecodeError::InvalidBoolean { value } => {
                write!(f, "Invalid boolean value: {value}")
            }
            DecodeError::InvariantViolation { invariant } => {
                write!(f, "Invariant violation: {invariant}")
            }
            DecodeError::Coercion {
                target,
                value,
                reason,
            } => {
                write!(f, "Cannot coerce {value} to {target}: {reason}")
            }
            DecodeError::MissingField { field } => {
                write!(f, "Missing struct field: '{field}'")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for abicodec operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
