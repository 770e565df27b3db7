// =============================================================================
// Lookup-Table Strategy
// =============================================================================
//
// Encode: one spread-table read per coordinate byte.
// Decode: one compaction-table read per chunk of the code (8 bits in 2D,
// 9 bits in 3D), masked down to a single axis before the lookup.
//
// The `_shifted` variants read per-axis tables with the axis offset folded in
// and skip the runtime shift by axis. Output is identical.

use crate::layout::Layout;
use crate::tables;

/// Encode using the base spread table plus a runtime shift by axis.
#[inline]
pub fn encode<const D: usize, const W: u32>(coords: [u64; D]) -> u64 {
    let layout = Layout::of::<D, W>();
    let table = tables::spread::<D>();
    let mut code = 0u64;
    for (axis, &c) in coords.iter().enumerate() {
        let c = c & layout.coord_mask();
        for byte in 0..layout.coord_bytes() as usize {
            let spread = table[((c >> (byte * 8)) & 0xFF) as usize] as u64;
            code |= (spread << (byte * 8 * D)) << axis;
        }
    }
    code
}

/// Encode using per-axis preshifted spread tables.
#[inline]
pub fn encode_shifted<const D: usize, const W: u32>(coords: [u64; D]) -> u64 {
    let layout = Layout::of::<D, W>();
    let mut code = 0u64;
    for (axis, &c) in coords.iter().enumerate() {
        let table = tables::spread_shifted::<D>(axis);
        let c = c & layout.coord_mask();
        for byte in 0..layout.coord_bytes() as usize {
            let spread = table[((c >> (byte * 8)) & 0xFF) as usize] as u64;
            code |= spread << (byte * 8 * D);
        }
    }
    code
}

/// Number of chunk lookups needed to recover every coordinate bit.
#[inline(always)]
const fn chunk_count(layout: Layout, chunk_bits: u32) -> u32 {
    let per_chunk = chunk_bits / layout.dims as u32;
    layout.coord_bits().div_ceil(per_chunk)
}

/// Decode using the axis-0 compaction table after shifting the code by axis.
#[inline]
pub fn decode<const D: usize, const W: u32>(code: u64) -> [u64; D] {
    let layout = Layout::of::<D, W>();
    let chunk_bits = tables::chunk_bits::<D>();
    let per_chunk = chunk_bits as usize / D;
    let chunk_mask = tables::chunk_axis_mask(D, chunk_bits);
    let table = tables::compact::<D>();

    let mut coords = [0u64; D];
    for (axis, c) in coords.iter_mut().enumerate() {
        let bits = code >> axis;
        for k in 0..chunk_count(layout, chunk_bits) as usize {
            let chunk = (bits >> (k * chunk_bits as usize)) & chunk_mask;
            *c |= (table[chunk as usize] as u64) << (k * per_chunk);
        }
        // The last chunk can reach past the effective width in 3D/32.
        *c &= layout.coord_mask();
    }
    coords
}

/// Decode using per-axis compaction tables on unshifted chunks.
#[inline]
pub fn decode_shifted<const D: usize, const W: u32>(code: u64) -> [u64; D] {
    let layout = Layout::of::<D, W>();
    let chunk_bits = tables::chunk_bits::<D>();
    let per_chunk = chunk_bits as usize / D;

    let mut coords = [0u64; D];
    for (axis, c) in coords.iter_mut().enumerate() {
        let table = tables::compact_shifted::<D>(axis);
        let chunk_mask = tables::chunk_axis_mask(D, chunk_bits) << axis;
        for k in 0..chunk_count(layout, chunk_bits) as usize {
            let chunk = (code >> (k * chunk_bits as usize)) & chunk_mask;
            *c |= (table[chunk as usize] as u64) << (k * per_chunk);
        }
        *c &= layout.coord_mask();
    }
    coords
}
