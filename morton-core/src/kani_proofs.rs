//! Kani formal verification proofs for the codec strategies.
//!
//! These proofs check the cross-strategy equivalence and round-trip laws over
//! the full input space of the 32-bit layouts, where the state space is small
//! enough for bounded model checking.
//!
//! Run with: `cargo kani --package morton-core`

use crate::codec::*;
use crate::magic::{compact, dilate, DILATE_2D_32, DILATE_3D_32};

// ============================================================================
// Proof 1: magic-bits dilation and compaction are inverses
// ============================================================================
// File: magic.rs
// What: compact(dilate(x)) == x for every representable coordinate

/// 2D/32: 16-bit coordinates survive dilate then compact.
#[kani::proof]
#[kani::unwind(6)]
fn verify_dilate_compact_2d_32_inverse() {
    let x: u16 = kani::any();

    let spread = dilate(x as u64, &DILATE_2D_32);

    kani::assert(spread & !0x5555_5555 == 0, "dilated bits must sit on even positions");
    kani::assert(compact(spread, &DILATE_2D_32) == x as u64, "compact must undo dilate");
}

/// 3D/32: 10-bit coordinates survive dilate then compact.
#[kani::proof]
#[kani::unwind(6)]
fn verify_dilate_compact_3d_32_inverse() {
    let x: u16 = kani::any();
    kani::assume(x <= 0x3FF);

    let spread = dilate(x as u64, &DILATE_3D_32);

    kani::assert(spread & !0x0924_9249 == 0, "dilated bits must sit on x positions");
    kani::assert(compact(spread, &DILATE_3D_32) == x as u64, "compact must undo dilate");
}

// ============================================================================
// Proof 2: every encode strategy agrees with the reference loop
// ============================================================================
// File: lut.rs, magic.rs, naive.rs
// What: bit-identical codes for arbitrary (including out-of-range) input

/// 3D/32 encode equivalence, including truncation of bits 10..16.
#[kani::proof]
#[kani::unwind(11)]
fn verify_encode_3d_32_equivalence() {
    let x: u16 = kani::any();
    let y: u16 = kani::any();
    let z: u16 = kani::any();

    let reference = morton3d_32_encode_for(x, y, z);

    kani::assert(morton3d_32_encode_lut(x, y, z) == reference, "lut must match loop");
    kani::assert(
        morton3d_32_encode_lut_shifted(x, y, z) == reference,
        "preshifted lut must match loop",
    );
    kani::assert(
        morton3d_32_encode_magicbits(x, y, z) == reference,
        "magic bits must match loop",
    );
}

/// 2D/32 decode equivalence over every code.
#[kani::proof]
#[kani::unwind(17)]
fn verify_decode_2d_32_equivalence() {
    let code: u32 = kani::any();

    let reference = morton2d_32_decode_for(code);

    kani::assert(morton2d_32_decode_lut(code) == reference, "lut must match loop");
    kani::assert(
        morton2d_32_decode_lut_shifted(code) == reference,
        "preshifted lut must match loop",
    );
    kani::assert(
        morton2d_32_decode_magicbits(code) == reference,
        "magic bits must match loop",
    );
}

// ============================================================================
// Proof 3: round trip
// ============================================================================
// File: codec.rs
// What: decode(encode(c)) == c for coordinates within the effective width

/// 3D/32 round trip through the table strategy.
#[kani::proof]
#[kani::unwind(11)]
fn verify_roundtrip_3d_32() {
    let x: u16 = kani::any();
    let y: u16 = kani::any();
    let z: u16 = kani::any();
    kani::assume(x <= 0x3FF && y <= 0x3FF && z <= 0x3FF);

    let code = morton3d_32_encode_lut(x, y, z);

    kani::assert(code < (1 << 30), "3D/32 codes never use bits 30 and 31");
    kani::assert(morton3d_32_decode_lut(code) == (x, y, z), "decode must undo encode");
}
