// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema tree and decode dispatch.
//!
//! This module provides the [`TypeDecoder`] schema node. Schema trees are
//! constructed once, externally (e.g., from an ABI description), and reused
//! across many decode calls; they carry no mutable state.

pub mod decoder;

pub use decoder::TypeDecoder;
