// =============================================================================
// Lookup Tables
// =============================================================================
//
// Spread tables (encode) and compaction tables (decode), generated at compile
// time by `const fn`. Nothing here is initialized at runtime.
//
// Spread tables are keyed by one coordinate byte. Compaction tables are keyed
// by one chunk of the code: 8 bits in 2D (4 bits per axis) and 9 bits in 3D
// (3 bits per axis), so every chunk starts on an x-axis bit.

/// Code bits consumed per compaction lookup in 2D.
pub const CHUNK_BITS_2D: u32 = 8;

/// Code bits consumed per compaction lookup in 3D.
pub const CHUNK_BITS_3D: u32 = 9;

/// Byte spread to every second bit.
pub static SPREAD_2D: [u32; 256] = spread_table(2, 0);

/// Byte spread to every third bit.
pub static SPREAD_3D: [u32; 256] = spread_table(3, 0);

/// [`SPREAD_2D`] with the axis offset folded in, indexed by axis.
pub static SPREAD_2D_SHIFTED: [[u32; 256]; 2] = [spread_table(2, 0), spread_table(2, 1)];

/// [`SPREAD_3D`] with the axis offset folded in, indexed by axis.
pub static SPREAD_3D_SHIFTED: [[u32; 256]; 3] = [
    spread_table(3, 0),
    spread_table(3, 1),
    spread_table(3, 2),
];

/// Even bits of an 8-bit chunk packed into a nibble.
pub static COMPACT_2D: [u8; 256] = compact_table::<256>(2, 0);

/// Every third bit (0, 3, 6) of a 9-bit chunk packed into 3 bits.
pub static COMPACT_3D: [u8; 512] = compact_table::<512>(3, 0);

/// Per-axis compaction of an unshifted 8-bit chunk.
pub static COMPACT_2D_SHIFTED: [[u8; 256]; 2] =
    [compact_table::<256>(2, 0), compact_table::<256>(2, 1)];

/// Per-axis compaction of an unshifted 9-bit chunk.
pub static COMPACT_3D_SHIFTED: [[u8; 512]; 3] = [
    compact_table::<512>(3, 0),
    compact_table::<512>(3, 1),
    compact_table::<512>(3, 2),
];

/// Build a spread table: bit `i` of the index moves to bit `i * stride + offset`.
pub const fn spread_table(stride: u32, offset: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut byte = 0;
    while byte < 256 {
        let mut spread = 0u32;
        let mut i = 0;
        while i < 8 {
            spread |= (((byte as u32) >> i) & 1) << (i * stride + offset);
            i += 1;
        }
        table[byte] = spread;
        byte += 1;
    }
    table
}

/// Build a compaction table over `N`-entry chunks: chunk bit `offset + i * stride`
/// moves to bit `i`. Bits at other positions are ignored.
pub const fn compact_table<const N: usize>(stride: u32, offset: u32) -> [u8; N] {
    let chunk_bits = N.trailing_zeros();
    let mut table = [0u8; N];
    let mut chunk = 0;
    while chunk < N {
        let mut packed = 0u8;
        let mut i = 0;
        while offset + i * stride < chunk_bits {
            packed |= (((chunk >> (offset + i * stride)) & 1) as u8) << i;
            i += 1;
        }
        table[chunk] = packed;
        chunk += 1;
    }
    table
}

/// Mask of the axis-0 positions inside one decode chunk (`0x55` / `0x49`).
pub const fn chunk_axis_mask(dims: usize, chunk_bits: u32) -> u64 {
    let mut mask = 0u64;
    let mut bit = 0;
    while bit < chunk_bits {
        mask |= 1u64 << bit;
        bit += dims as u32;
    }
    mask
}

// =============================================================================
// Per-dimension selection
// =============================================================================
//
// `D` is a const parameter, so each branch folds away after monomorphization.
// Callers validate `D` through `Layout::of`.

#[inline(always)]
pub(crate) fn spread<const D: usize>() -> &'static [u32; 256] {
    if D == 2 {
        &SPREAD_2D
    } else {
        &SPREAD_3D
    }
}

#[inline(always)]
pub(crate) fn spread_shifted<const D: usize>(axis: usize) -> &'static [u32; 256] {
    if D == 2 {
        &SPREAD_2D_SHIFTED[axis]
    } else {
        &SPREAD_3D_SHIFTED[axis]
    }
}

#[inline(always)]
pub(crate) fn compact<const D: usize>() -> &'static [u8] {
    if D == 2 {
        &COMPACT_2D[..]
    } else {
        &COMPACT_3D[..]
    }
}

#[inline(always)]
pub(crate) fn compact_shifted<const D: usize>(axis: usize) -> &'static [u8] {
    if D == 2 {
        &COMPACT_2D_SHIFTED[axis][..]
    } else {
        &COMPACT_3D_SHIFTED[axis][..]
    }
}

#[inline(always)]
pub(crate) const fn chunk_bits<const D: usize>() -> u32 {
    if D == 2 {
        CHUNK_BITS_2D
    } else {
        CHUNK_BITS_3D
    }
}
