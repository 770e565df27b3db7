//! # morton-core: Morton (Z-order) Encoding with Interchangeable Strategies
//!
//! `morton-core` is a `no_std`, allocation-free library that interleaves the bits
//! of 2D or 3D unsigned coordinates into a single 32- or 64-bit Morton code, and
//! back. Nearby coordinates map to nearby codes, which makes the code a natural
//! key for quadtrees, octrees, spatial hash grids and cache-friendly layouts.
//!
//! ## Bit Layout
//!
//! Bit `i` of axis `a` (x = 0, y = 1, z = 2) is stored at code bit `i * d + a`:
//!
//! ```text
//! 2D: code = ...y2x2y1x1y0x0
//! 3D: code = ...z2y2x2z1y1x1z0y0x0
//! ```
//!
//! | Layout | Coordinate type | Bits per axis |
//! |--------|-----------------|---------------|
//! | 2D, 32-bit | `u16` | 16 |
//! | 2D, 64-bit | `u32` | 32 |
//! | 3D, 32-bit | `u16` | 10 |
//! | 3D, 64-bit | `u32` | 21 |
//!
//! Coordinate bits beyond the per-axis width are discarded on encode. Nothing in
//! this crate returns an error or panics.
//!
//! ## Strategies
//!
//! Every (dimension, width) pair is implemented four ways with bit-identical
//! results:
//!
//! - **`lut`** - byte-wise spread tables for encode, chunk-wise compaction
//!   tables for decode ([`lut`], [`tables`])
//! - **`lut_shifted`** - the same, with the axis offset folded into per-axis tables
//! - **`magicbits`** - mask-and-shift dilation with no table memory ([`magic`])
//! - **`for`** - the per-bit reference loop ([`naive`])
//!
//! ```
//! use morton_core::{morton3d_64_decode_magicbits, morton3d_64_encode_lut};
//!
//! let code = morton3d_64_encode_lut(2, 3, 1);
//! assert_eq!(code, 0b11110);
//! assert_eq!(morton3d_64_decode_magicbits(code), (2, 3, 1));
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`] - Named operations, one per (dimension, width, direction, strategy)
//! - [`strategy`] - [`Strategy`] enum and function-pointer registries
//! - [`layout`] - Effective widths and axis masks
//! - [`tables`] - Compile-time spread and compaction tables
//! - [`lut`], [`magic`], [`naive`] - Generic strategy implementations

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Named encode/decode operations.
pub mod codec;

/// Effective widths and axis masks per (dimension, width).
pub mod layout;

/// Lookup-table strategy.
pub mod lut;

/// Magic-bits (mask and shift) strategy.
pub mod magic;

/// Per-bit reference strategy.
pub mod naive;

/// Strategy enum and function-pointer registries.
pub mod strategy;

/// Compile-time spread and compaction tables.
pub mod tables;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use codec::*;

pub use layout::{Layout, LAYOUT_2D_32, LAYOUT_2D_64, LAYOUT_3D_32, LAYOUT_3D_64};

pub use magic::{Dilation, DILATE_2D_32, DILATE_2D_64, DILATE_3D_32, DILATE_3D_64};

pub use strategy::{
    Codec2, Codec3, Strategy, UnknownStrategy, CODECS_2D_32, CODECS_2D_64, CODECS_3D_32,
    CODECS_3D_64,
};
