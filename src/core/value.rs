// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Value type system for abicodec.
//!
//! Provides the two value representations the decoder works with:
//! [`JsonValue`] for the untyped, externally supplied input tree and
//! [`AbiValue`] for the strongly-typed decode result. Both are
//! serde-serializable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Type alias for a JSON object as field name -> value mapping.
///
/// Insertion order is irrelevant; struct decoding looks fields up by key.
pub type JsonObject = HashMap<String, JsonValue>;

/// Untyped JSON-like input value, as produced by parsing a JSON-RPC
/// response.
///
/// This is a recursive tagged union covering the value shapes a JSON-RPC
/// interface can hand back. It is externally supplied and never mutated by
/// the decoder.
///
/// # Design Principles
///
/// - **Serde support**: All variants are serializable for downstream processing
/// - **Owned types**: Uses owned `String`, `Vec`, and `HashMap` for the
///   recursive cases
/// - **Split numbers**: JSON numbers arrive as either `Integer` or `Float`
///   so integer inputs are not forced through floating point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsonValue {
    // Keyed mapping
    Object(JsonObject),

    // Ordered sequence
    Array(Vec<JsonValue>),

    // String (UTF-8)
    String(String),

    // Integer number
    Integer(i64),

    // Floating-point number
    Float(f64),

    // Boolean
    Bool(bool),

    // Null
    Null,
}

impl JsonValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Check if this value is a number (integer or float).
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Integer(_) | JsonValue::Float(_))
    }

    /// Check if this value is a container type (array or object).
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for the integer variant only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to convert this value to f64 (for numeric variants only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Integer(i) => Some(*i as f64),
            JsonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get the inner boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get the inner object.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::String(_) => "string",
            JsonValue::Integer(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::Bool(_) => "bool",
            JsonValue::Null => "null",
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Object(obj) => write!(f, "{{{} fields}}", obj.len()),
            JsonValue::Array(arr) => write!(f, "[{} elements]", arr.len()),
            JsonValue::String(s) => write!(f, "\"{s}\""),
            JsonValue::Integer(i) => write!(f, "{i}"),
            JsonValue::Float(v) => write!(f, "{v}"),
            JsonValue::Bool(b) => write!(f, "{b}"),
            JsonValue::Null => write!(f, "null"),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    JsonValue::Float(f)
                } else {
                    // Unreachable without serde_json's arbitrary_precision
                    JsonValue::Null
                }
            }
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(key, val)| (key, JsonValue::from(val)))
                    .collect(),
            ),
        }
    }
}

// =============================================================================
// Decoded Value
// =============================================================================

/// Type alias for a decoded struct as field name -> value mapping.
pub type AbiStruct = HashMap<String, AbiValue>;

/// Strongly-typed decode result.
///
/// Produced by [`TypeDecoder::process`](crate::schema::TypeDecoder::process);
/// the shape mirrors the schema tree that produced it. One variant per
/// Solidity kind the decoder supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbiValue {
    // Chain account/contract identifier, kept in string form
    Address(String),

    // Raw bytes decoded from a 0x-prefixed hex string
    Bytes(Vec<u8>),

    // Integer (wide enough for common Solidity quantities)
    Int(i128),

    // Boolean
    Bool(bool),

    // Ordered sequence of decoded values
    Array(Vec<AbiValue>),

    // Decoded struct keyed by the schema's declared field names
    Struct(AbiStruct),
}

impl AbiValue {
    /// Check if this value is a container type (array or struct).
    pub fn is_container(&self) -> bool {
        matches!(self, AbiValue::Array(_) | AbiValue::Struct(_))
    }

    /// Try to get the inner address string.
    pub fn as_address(&self) -> Option<&str> {
        match self {
            AbiValue::Address(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AbiValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the inner integer value.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            AbiValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the inner boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AbiValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[AbiValue]> {
        match self {
            AbiValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get the inner struct.
    pub fn as_struct(&self) -> Option<&AbiStruct> {
        match self {
            AbiValue::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            AbiValue::Address(_) => "address",
            AbiValue::Bytes(_) => "bytes",
            AbiValue::Int(_) => "integer",
            AbiValue::Bool(_) => "bool",
            AbiValue::Array(_) => "array",
            AbiValue::Struct(_) => "struct",
        }
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Address(s) => write!(f, "{s}"),
            AbiValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            AbiValue::Int(i) => write!(f, "{i}"),
            AbiValue::Bool(b) => write!(f, "{b}"),
            AbiValue::Array(arr) => write!(f, "[{} elements]", arr.len()),
            AbiValue::Struct(s) => write!(f, "{{{} fields}}", s.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_checking() {
        assert!(JsonValue::Null.is_null());
        assert!(!JsonValue::Bool(false).is_null());
        assert!(JsonValue::Integer(42).is_number());
        assert!(JsonValue::Float(2.5).is_number());
        assert!(!JsonValue::String("42".to_string()).is_number());
        assert!(JsonValue::Array(vec![]).is_container());
        assert!(JsonValue::Object(HashMap::new()).is_container());
        assert!(!JsonValue::Integer(1).is_container());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(
            JsonValue::String("hello".to_string()).as_str(),
            Some("hello")
        );
        assert_eq!(JsonValue::Integer(1).as_str(), None);
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(JsonValue::Integer(42).as_i64(), Some(42));
        assert_eq!(JsonValue::Float(42.0).as_i64(), None);
        assert_eq!(JsonValue::Bool(true).as_i64(), None);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(JsonValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(JsonValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(JsonValue::String("2.5".to_string()).as_f64(), None);
    }

    #[test]
    fn test_as_containers() {
        let arr = vec![JsonValue::Integer(1)];
        assert_eq!(
            JsonValue::Array(arr.clone()).as_array(),
            Some(arr.as_slice())
        );
        assert_eq!(JsonValue::Integer(1).as_array(), None);

        let mut obj = HashMap::new();
        obj.insert("field".to_string(), JsonValue::Integer(42));
        assert_eq!(JsonValue::Object(obj.clone()).as_object(), Some(&obj));
        assert_eq!(JsonValue::Null.as_object(), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(JsonValue::Object(HashMap::new()).type_name(), "object");
        assert_eq!(JsonValue::Array(vec![]).type_name(), "array");
        assert_eq!(JsonValue::String("".to_string()).type_name(), "string");
        assert_eq!(JsonValue::Integer(0).type_name(), "integer");
        assert_eq!(JsonValue::Float(0.0).type_name(), "float");
        assert_eq!(JsonValue::Bool(true).type_name(), "bool");
        assert_eq!(JsonValue::Null.type_name(), "null");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", JsonValue::Integer(42)), "42");
        assert_eq!(format!("{}", JsonValue::Float(1.5)), "1.5");
        assert_eq!(
            format!("{}", JsonValue::String("test".to_string())),
            "\"test\""
        );
        assert_eq!(format!("{}", JsonValue::Bool(true)), "true");
        assert_eq!(format!("{}", JsonValue::Null), "null");
        assert_eq!(format!("{}", JsonValue::Array(vec![])), "[0 elements]");
        assert_eq!(
            format!("{}", JsonValue::Object(HashMap::new())),
            "{0 fields}"
        );
    }

    #[test]
    fn test_from_serde_json_scalars() {
        assert_eq!(JsonValue::from(serde_json::json!(null)), JsonValue::Null);
        assert_eq!(
            JsonValue::from(serde_json::json!(true)),
            JsonValue::Bool(true)
        );
        assert_eq!(
            JsonValue::from(serde_json::json!(42)),
            JsonValue::Integer(42)
        );
        assert_eq!(
            JsonValue::from(serde_json::json!(2.5)),
            JsonValue::Float(2.5)
        );
        assert_eq!(
            JsonValue::from(serde_json::json!("hi")),
            JsonValue::String("hi".to_string())
        );
    }

    #[test]
    fn test_from_serde_json_large_unsigned() {
        // u64 values past i64::MAX fall through to the float variant
        let big = serde_json::json!(u64::MAX);
        assert!(matches!(JsonValue::from(big), JsonValue::Float(_)));
    }

    #[test]
    fn test_from_serde_json_nested() {
        let raw = serde_json::json!({
            "values": [1, "2", false],
            "inner": {"x": null},
        });
        let value = JsonValue::from(raw);

        let obj = value.as_object().unwrap();
        let values = obj.get("values").unwrap().as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], JsonValue::Integer(1));
        assert_eq!(values[1], JsonValue::String("2".to_string()));
        assert_eq!(values[2], JsonValue::Bool(false));

        let inner = obj.get("inner").unwrap().as_object().unwrap();
        assert_eq!(inner.get("x"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_serialization_round_trip() {
        let value = JsonValue::Array(vec![JsonValue::Integer(1), JsonValue::Null]);
        let json = serde_json::to_string(&value).unwrap();
        let decoded: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, value);
    }

    // AbiValue tests

    #[test]
    fn test_abi_value_accessors() {
        assert_eq!(
            AbiValue::Address("0xabc".to_string()).as_address(),
            Some("0xabc")
        );
        assert_eq!(AbiValue::Int(1).as_address(), None);

        let data = vec![0x12, 0x34];
        assert_eq!(
            AbiValue::Bytes(data.clone()).as_bytes(),
            Some(data.as_slice())
        );
        assert_eq!(AbiValue::Bool(true).as_bytes(), None);

        assert_eq!(AbiValue::Int(42).as_i128(), Some(42));
        assert_eq!(AbiValue::Bool(true).as_i128(), None);

        assert_eq!(AbiValue::Bool(false).as_bool(), Some(false));
        assert_eq!(AbiValue::Int(0).as_bool(), None);
    }

    #[test]
    fn test_abi_value_containers() {
        let arr = vec![AbiValue::Int(1), AbiValue::Int(2)];
        assert_eq!(AbiValue::Array(arr.clone()).as_array(), Some(arr.as_slice()));
        assert!(AbiValue::Array(arr).is_container());

        let mut s = AbiStruct::new();
        s.insert("a".to_string(), AbiValue::Bool(true));
        let val = AbiValue::Struct(s.clone());
        assert_eq!(val.as_struct(), Some(&s));
        assert!(val.is_container());
        assert!(!AbiValue::Int(1).is_container());
    }

    #[test]
    fn test_abi_value_type_name() {
        assert_eq!(AbiValue::Address("".to_string()).type_name(), "address");
        assert_eq!(AbiValue::Bytes(vec![]).type_name(), "bytes");
        assert_eq!(AbiValue::Int(0).type_name(), "integer");
        assert_eq!(AbiValue::Bool(true).type_name(), "bool");
        assert_eq!(AbiValue::Array(vec![]).type_name(), "array");
        assert_eq!(AbiValue::Struct(AbiStruct::new()).type_name(), "struct");
    }

    #[test]
    fn test_abi_value_display() {
        assert_eq!(
            format!("{}", AbiValue::Address("0xdead".to_string())),
            "0xdead"
        );
        assert_eq!(
            format!("{}", AbiValue::Bytes(vec![0x12, 0x34])),
            "0x1234"
        );
        assert_eq!(format!("{}", AbiValue::Int(-7)), "-7");
        assert_eq!(format!("{}", AbiValue::Bool(true)), "true");
        assert_eq!(format!("{}", AbiValue::Array(vec![])), "[0 elements]");
        assert_eq!(
            format!("{}", AbiValue::Struct(AbiStruct::new())),
            "{0 fields}"
        );
    }

    #[test]
    fn test_abi_value_serialization() {
        let value = AbiValue::Struct(AbiStruct::from([(
            "data".to_string(),
            AbiValue::Bytes(vec![1, 2, 3]),
        )]));
        let json = serde_json::to_string(&value).unwrap();
        let decoded: AbiValue = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_clone_and_equality() {
        let val = AbiValue::Array(vec![AbiValue::Int(1), AbiValue::Bool(false)]);
        assert_eq!(val, val.clone());
    }
}
