// =============================================================================
// Magic-Bits Dilation/Compaction (SWAR)
// =============================================================================
//
// Closed-form bit spreading: each step ORs the value with a shifted copy of
// itself and masks, doubling the gap between coordinate bits. No tables.

use crate::layout::Layout;

/// Ordered `(shift, mask)` steps that dilate a coordinate to every d-th bit.
///
/// Dilation runs the steps forward with left shifts. Compaction runs them
/// backwards with right shifts, masking with the previous step's mask and
/// finally with [`coord_mask`](Dilation::coord_mask).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dilation {
    /// Representable coordinate bits; applied before the first step.
    pub coord_mask: u64,
    /// `(shift, mask)` pairs, widest shift first.
    pub steps: &'static [(u32, u64)],
}

/// 16-bit coordinates to even bits of a 32-bit code.
pub const DILATE_2D_32: Dilation = Dilation {
    coord_mask: 0x0000_FFFF,
    steps: &[
        (8, 0x00FF_00FF),
        (4, 0x0F0F_0F0F),
        (2, 0x3333_3333),
        (1, 0x5555_5555),
    ],
};

/// 32-bit coordinates to even bits of a 64-bit code.
pub const DILATE_2D_64: Dilation = Dilation {
    coord_mask: 0xFFFF_FFFF,
    steps: &[
        (16, 0x0000_FFFF_0000_FFFF),
        (8, 0x00FF_00FF_00FF_00FF),
        (4, 0x0F0F_0F0F_0F0F_0F0F),
        (2, 0x3333_3333_3333_3333),
        (1, 0x5555_5555_5555_5555),
    ],
};

/// 10-bit coordinates to every third bit of a 32-bit code.
pub const DILATE_3D_32: Dilation = Dilation {
    coord_mask: 0x0000_03FF,
    steps: &[
        (16, 0x0300_00FF),
        (8, 0x0300_F00F),
        (4, 0x030C_30C3),
        (2, 0x0924_9249),
    ],
};

/// 21-bit coordinates to every third bit of a 64-bit code.
pub const DILATE_3D_64: Dilation = Dilation {
    coord_mask: 0x001F_FFFF,
    steps: &[
        (32, 0x001F_0000_0000_FFFF),
        (16, 0x001F_0000_FF00_00FF),
        (8, 0x100F_00F0_0F00_F00F),
        (4, 0x10C3_0C30_C30C_30C3),
        (2, 0x1249_2492_4924_9249),
    ],
};

/// Constants for a supported `(D, W)` pair.
#[inline(always)]
pub const fn dilation<const D: usize, const W: u32>() -> &'static Dilation {
    let layout = Layout::of::<D, W>();
    match (layout.dims, layout.code_bits) {
        (2, 32) => &DILATE_2D_32,
        (2, 64) => &DILATE_2D_64,
        (3, 32) => &DILATE_3D_32,
        _ => &DILATE_3D_64,
    }
}

/// Spread the representable bits of `v` to every d-th bit, starting at bit 0.
#[inline(always)]
pub fn dilate(v: u64, dilation: &Dilation) -> u64 {
    let mut x = v & dilation.coord_mask;
    for &(shift, mask) in dilation.steps {
        x = (x | (x << shift)) & mask;
    }
    x
}

/// Gather every d-th bit of `v`, starting at bit 0, into the low bits.
///
/// Bits at other positions are ignored.
#[inline(always)]
pub fn compact(v: u64, dilation: &Dilation) -> u64 {
    let steps = dilation.steps;
    let mut x = match steps.last() {
        Some(&(_, mask)) => v & mask,
        None => v & dilation.coord_mask,
    };
    for i in (0..steps.len()).rev() {
        let mask = if i == 0 {
            dilation.coord_mask
        } else {
            steps[i - 1].1
        };
        x = (x | (x >> steps[i].0)) & mask;
    }
    x
}

/// Encode with magic-bits dilation.
#[inline]
pub fn encode<const D: usize, const W: u32>(coords: [u64; D]) -> u64 {
    let dilation = dilation::<D, W>();
    let mut code = 0u64;
    for (axis, &c) in coords.iter().enumerate() {
        code |= dilate(c, dilation) << axis;
    }
    code
}

/// Decode with magic-bits compaction.
#[inline]
pub fn decode<const D: usize, const W: u32>(code: u64) -> [u64; D] {
    let dilation = dilation::<D, W>();
    let mut coords = [0u64; D];
    for (axis, c) in coords.iter_mut().enumerate() {
        *c = compact(code >> axis, dilation);
    }
    coords
}
