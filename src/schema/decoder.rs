// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema-driven decoding of JSON-RPC result values.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use abicodec::{AbiValue, JsonValue, TypeDecoder};
//!
//! let schema = TypeDecoder::Bytes;
//! let decoded = schema.process(&JsonValue::String("0x1234".to_string()))?;
//! assert_eq!(decoded, AbiValue::Bytes(vec![0x12, 0x34]));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use tracing::trace;

use crate::core::value::{AbiStruct, AbiValue, JsonValue};
use crate::core::{DecodeError, Result, TypeKind};

/// Schema node describing how to convert one shape of JSON-like value into
/// a typed value.
///
/// One variant per Solidity kind; the set is closed. Nodes are immutable,
/// cheap to clone, and freely reusable across decode calls since
/// [`process`](TypeDecoder::process) is a pure function of the node and its
/// input.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecoder {
    /// Expects a string; the result is the same string in address position.
    Address,
    /// Expects a `0x`-prefixed hex string; the result is the raw bytes.
    Bytes,
    /// Expects a value convertible to an integer (string, bool, or number).
    Integer,
    /// Expects one of the recognized boolean literals
    /// (`"true"`/`"True"`/`true`/`1` and the symmetric false set).
    Boolean,
    /// Expects an ordered sequence; each element is decoded by the inner
    /// node, preserving length and order.
    Array(Box<TypeDecoder>),
    /// Expects a mapping; each declared field is decoded by its node.
    /// Extra input keys are ignored; missing declared keys are an error.
    Struct(HashMap<String, TypeDecoder>),
}

impl TypeDecoder {
    /// Create an array node over an element node.
    pub fn array(inner: TypeDecoder) -> Self {
        TypeDecoder::Array(Box::new(inner))
    }

    /// Create a struct node from `(field name, node)` pairs.
    pub fn struct_of<S, I>(fields: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, TypeDecoder)>,
    {
        TypeDecoder::Struct(
            fields
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    /// Get the kind of this schema node.
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDecoder::Address => TypeKind::Address,
            TypeDecoder::Bytes => TypeKind::Bytes,
            TypeDecoder::Integer => TypeKind::Integer,
            TypeDecoder::Boolean => TypeKind::Boolean,
            TypeDecoder::Array(_) => TypeKind::Array,
            TypeDecoder::Struct(_) => TypeKind::Struct,
        }
    }

    /// Decode one JSON-like value against this schema node.
    ///
    /// Depth-first recursive descent: composite nodes delegate each
    /// element/field to their child node and reassemble the result in the
    /// original shape. The first failure aborts the decode; no partial
    /// result is ever returned and the input is never mutated.
    pub fn process(&self, value: &JsonValue) -> Result<AbiValue> {
        trace!(
            kind = self.kind().as_str(),
            input = value.type_name(),
            "decoding value"
        );

        match self {
            TypeDecoder::Address => decode_address(value),
            TypeDecoder::Bytes => decode_bytes(value),
            TypeDecoder::Integer => decode_integer(value),
            TypeDecoder::Boolean => decode_boolean(value),
            TypeDecoder::Array(inner) => match value {
                JsonValue::Array(items) => {
                    let mut decoded = Vec::with_capacity(items.len());
                    for item in items {
                        decoded.push(inner.process(item)?);
                    }
                    Ok(AbiValue::Array(decoded))
                }
                other => Err(DecodeError::unsupported("array", other.type_name())),
            },
            TypeDecoder::Struct(fields) => match value {
                JsonValue::Object(entries) => {
                    let mut decoded = AbiStruct::with_capacity(fields.len());
                    for (name, node) in fields {
                        let field_value = entries
                            .get(name)
                            .ok_or_else(|| DecodeError::missing_field(name.as_str()))?;
                        decoded.insert(name.clone(), node.process(field_value)?);
                    }
                    Ok(AbiValue::Struct(decoded))
                }
                other => Err(DecodeError::unsupported("struct", other.type_name())),
            },
        }
    }
}

/// Decode an address: a direct string passthrough, no extra validation.
fn decode_address(value: &JsonValue) -> Result<AbiValue> {
    match value {
        JsonValue::String(s) => Ok(AbiValue::Address(s.clone())),
        other => Err(DecodeError::coercion(
            "address",
            other.to_string(),
            "expected a string",
        )),
    }
}

/// Decode bytes from a `0x`-prefixed hex string.
///
/// Only string input is supported; already-raw or numeric input must be
/// rejected rather than silently passed through.
fn decode_bytes(value: &JsonValue) -> Result<AbiValue> {
    match value {
        JsonValue::String(s) => {
            let digits = s.strip_prefix("0x").ok_or_else(|| {
                DecodeError::invariant_violation(format!(
                    "bytes value must start with '0x', got: \"{s}\""
                ))
            })?;
            let raw = hex::decode(digits)
                .map_err(|e| DecodeError::coercion("bytes", format!("\"{s}\""), e.to_string()))?;
            Ok(AbiValue::Bytes(raw))
        }
        other => Err(DecodeError::unsupported("bytes", other.type_name())),
    }
}

/// Decode an integer via direct coercion from string, bool, or number.
fn decode_integer(value: &JsonValue) -> Result<AbiValue> {
    match value {
        JsonValue::Integer(i) => Ok(AbiValue::Int(*i as i128)),
        JsonValue::Bool(b) => Ok(AbiValue::Int(if *b { 1 } else { 0 })),
        JsonValue::String(s) => {
            let parsed = parse_integer_literal(s)
                .map_err(|e| DecodeError::coercion("integer", format!("\"{s}\""), e.to_string()))?;
            Ok(AbiValue::Int(parsed))
        }
        JsonValue::Float(f) => {
            if f.is_finite() {
                // Truncation toward zero
                Ok(AbiValue::Int(*f as i128))
            } else {
                Err(DecodeError::coercion(
                    "integer",
                    value.to_string(),
                    "non-finite float",
                ))
            }
        }
        other => Err(DecodeError::coercion(
            "integer",
            other.to_string(),
            format!("no conversion from {}", other.type_name()),
        )),
    }
}

/// Parse an integer literal, accepting decimal and `0x`-prefixed hex forms.
///
/// JSON-RPC interfaces commonly encode quantities as `0x` hex strings.
fn parse_integer_literal(s: &str) -> std::result::Result<i128, std::num::ParseIntError> {
    let trimmed = s.trim();
    if let Some(digits) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        i128::from_str_radix(digits, 16)
    } else {
        trimmed.parse::<i128>()
    }
}

/// Decode a boolean from the recognized literal set.
///
/// Accepted: `"true"`, `"True"`, `true`, `1` and `"false"`, `"False"`,
/// `false`, `0`. No other spelling is accepted.
fn decode_boolean(value: &JsonValue) -> Result<AbiValue> {
    match value {
        JsonValue::Bool(b) => Ok(AbiValue::Bool(*b)),
        JsonValue::String(s) if s == "true" || s == "True" => Ok(AbiValue::Bool(true)),
        JsonValue::String(s) if s == "false" || s == "False" => Ok(AbiValue::Bool(false)),
        JsonValue::Integer(1) => Ok(AbiValue::Bool(true)),
        JsonValue::Integer(0) => Ok(AbiValue::Bool(false)),
        other => Err(DecodeError::invalid_boolean(other.to_string())),
    }
}
