//! Shared test utilities for morton-core tests.
//!
//! Golden tables are generated once from the reference bit loop and reused by
//! the exhaustive checks.

#![allow(dead_code)] // Not all test files use all helpers

use morton_core::{morton2d_32_encode_for, morton3d_64_encode_for};

/// Side length of the exhaustive check cube.
pub const GOLDEN_SIDE: u32 = 16;

/// Worked 3D/64 values pinning the axis convention (x at bit 0, y at bit 1, z at bit 2).
pub const WORKED_3D: &[((u32, u32, u32), u64)] = &[
    ((0, 0, 0), 0),
    ((1, 0, 0), 0b001),
    ((0, 1, 0), 0b010),
    ((0, 0, 1), 0b100),
    ((1, 1, 1), 0b111),
    ((3, 0, 0), 0b1001),
    ((2, 3, 1), 0b11110),
    ((7, 7, 7), 511),
    ((15, 15, 15), 4095),
    ((5, 9, 12), 3395),
    ((0x1F_FFFF, 0, 0), 0x1249_2492_4924_9249),
    ((0, 0, 0x1F_FFFF), 0x4924_9249_2492_4924),
];

/// Worked 2D/32 values (x at bit 0, y at bit 1).
pub const WORKED_2D: &[((u16, u16), u32)] = &[
    ((0, 0), 0),
    ((1, 0), 0b01),
    ((0, 1), 0b10),
    ((3, 0), 0b0101),
    ((2, 3), 0b1110),
    ((5, 9), 147),
    ((0xFFFF, 0), 0x5555_5555),
    ((0xFFFF, 0xFFFF), 0xFFFF_FFFF),
];

/// Reference codes for `(i, j, k)` in `[0, 16)^3`, stored at `k + 16 * (j + 16 * i)`.
pub fn golden_codes_3d() -> Vec<u64> {
    let n = GOLDEN_SIDE;
    let mut codes = Vec::with_capacity((n * n * n) as usize);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                codes.push(morton3d_64_encode_for(i, j, k));
            }
        }
    }
    codes
}

/// Coordinates for every code in `0..4096`, inverted from [`golden_codes_3d`].
pub fn golden_coords_3d() -> Vec<(u32, u32, u32)> {
    let n = GOLDEN_SIDE;
    let codes = golden_codes_3d();
    let mut coords = vec![(u32::MAX, u32::MAX, u32::MAX); codes.len()];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let code = codes[(k + n * (j + n * i)) as usize];
                coords[code as usize] = (i, j, k);
            }
        }
    }
    coords
}

/// Reference codes for `(i, j)` in `[0, 16)^2`, stored at `j + 16 * i`.
pub fn golden_codes_2d() -> Vec<u32> {
    let n = GOLDEN_SIDE as u16;
    let mut codes = Vec::with_capacity((n * n) as usize);
    for i in 0..n {
        for j in 0..n {
            codes.push(morton2d_32_encode_for(i, j));
        }
    }
    codes
}
