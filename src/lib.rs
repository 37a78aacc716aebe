// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Abicodec
//!
//! Typed value decoding library for JSON-RPC results.
//!
//! This library converts loosely-typed JSON-like values, as returned by a
//! JSON-RPC style interface, into strongly-typed values according to a
//! declared schema resembling Solidity ABI types:
//! - **Value types** in [`core::value`](crate::core::value) module
//! - **Error handling** in [`core::error`](crate::core::error) module
//! - **Schema tree and decoding** in [`schema`](crate::schema) module
//!
//! ## Architecture
//!
//! Decoding is a single-pass, stateless tree transformation. A schema tree
//! of [`TypeDecoder`] nodes is walked in lock-step with a [`JsonValue`],
//! depth-first, producing an [`AbiValue`] whose shape mirrors the schema.
//! Schema nodes are immutable and may be reused across unlimited decode
//! calls; the first failure aborts the decode and propagates to the caller.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use abicodec::{AbiValue, JsonValue, TypeDecoder};
//!
//! let schema = TypeDecoder::struct_of([
//!     ("balance", TypeDecoder::Integer),
//!     ("flags", TypeDecoder::array(TypeDecoder::Boolean)),
//! ]);
//!
//! let raw: JsonValue = serde_json::json!({
//!     "balance": "5",
//!     "flags": ["true", 0],
//! })
//! .into();
//!
//! let decoded = schema.process(&raw)?;
//! assert_eq!(
//!     decoded.as_struct().and_then(|s| s.get("balance")),
//!     Some(&AbiValue::Int(5))
//! );
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{AbiStruct, AbiValue, DecodeError, JsonValue, Result, TypeKind};

// Schema tree and decode dispatch
pub mod schema;

pub use schema::TypeDecoder;
