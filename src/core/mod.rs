// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout abicodec.
//!
//! This module provides the foundational types for the library:
//! - [`DecodeError`] - Decode failure taxonomy
//! - [`JsonValue`] - Untyped JSON-like input representation
//! - [`AbiValue`] - Strongly-typed decode result
//! - [`TypeKind`] - Solidity type kind identifier

pub mod error;
pub mod value;

pub use error::{DecodeError, Result};
pub use value::{AbiStruct, AbiValue, JsonObject, JsonValue};

/// Solidity type kind identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Chain account/contract identifier
    Address,
    /// Variable-length raw byte sequence
    Bytes,
    /// Integer
    Integer,
    /// Boolean
    Boolean,
    /// Ordered sequence of one element kind
    Array,
    /// Named fields, each with its own kind
    Struct,
}

/// Error returned when parsing a `TypeKind` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTypeKindError {
    _private: (),
}

impl std::fmt::Display for ParseTypeKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid type kind, expected 'address', 'bytes', 'integer', 'boolean', 'array', or 'struct'"
        )
    }
}

impl std::error::Error for ParseTypeKindError {}

impl std::str::FromStr for TypeKind {
    type Err = ParseTypeKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "address" => Ok(TypeKind::Address),
            "bytes" => Ok(TypeKind::Bytes),
            "integer" | "int" | "uint" => Ok(TypeKind::Integer),
            "boolean" | "bool" => Ok(TypeKind::Boolean),
            "array" => Ok(TypeKind::Array),
            "struct" | "tuple" => Ok(TypeKind::Struct),
            _ => Err(ParseTypeKindError { _private: () }),
        }
    }
}

impl TypeKind {
    /// Check if this kind is a container (array or struct).
    pub fn is_container(&self) -> bool {
        matches!(self, TypeKind::Array | TypeKind::Struct)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Address => "address",
            TypeKind::Bytes => "bytes",
            TypeKind::Integer => "integer",
            TypeKind::Boolean => "boolean",
            TypeKind::Array => "array",
            TypeKind::Struct => "struct",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_kind_round_trip() {
        for kind in [
            TypeKind::Address,
            TypeKind::Bytes,
            TypeKind::Integer,
            TypeKind::Boolean,
            TypeKind::Array,
            TypeKind::Struct,
        ] {
            assert_eq!(TypeKind::from_str(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn test_type_kind_aliases() {
        assert_eq!(TypeKind::from_str("int"), Ok(TypeKind::Integer));
        assert_eq!(TypeKind::from_str("uint"), Ok(TypeKind::Integer));
        assert_eq!(TypeKind::from_str("bool"), Ok(TypeKind::Boolean));
        assert_eq!(TypeKind::from_str("tuple"), Ok(TypeKind::Struct));
        assert_eq!(TypeKind::from_str("ADDRESS"), Ok(TypeKind::Address));
    }

    #[test]
    fn test_type_kind_invalid() {
        let err = TypeKind::from_str("fixed128x18").unwrap_err();
        assert!(err.to_string().contains("invalid type kind"));
    }

    #[test]
    fn test_type_kind_is_container() {
        assert!(TypeKind::Array.is_container());
        assert!(TypeKind::Struct.is_container());
        assert!(!TypeKind::Address.is_container());
        assert!(!TypeKind::Integer.is_container());
    }

    #[test]
    fn test_type_kind_display() {
        assert_eq!(format!("{}", TypeKind::Boolean), "boolean");
        assert_eq!(format!("{}", TypeKind::Bytes), "bytes");
    }
}
