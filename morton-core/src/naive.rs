// =============================================================================
// Reference Bit Loop
// =============================================================================
//
// Direct restatement of the Morton definition: bit `i` of axis `a` <-> code
// bit `i * D + a`. Every other strategy is validated against this one.

use crate::layout::Layout;

/// Encode by moving one coordinate bit at a time.
///
/// Only the low `W / D` bits of each coordinate are visited, which is what
/// truncates out-of-range coordinates.
#[inline]
pub fn encode<const D: usize, const W: u32>(coords: [u64; D]) -> u64 {
    let layout = Layout::of::<D, W>();
    let mut code = 0u64;
    for (axis, &c) in coords.iter().enumerate() {
        for i in 0..layout.coord_bits() as usize {
            code |= ((c >> i) & 1) << (i * D + axis);
        }
    }
    code
}

/// Decode by moving one code bit at a time.
#[inline]
pub fn decode<const D: usize, const W: u32>(code: u64) -> [u64; D] {
    let layout = Layout::of::<D, W>();
    let mut coords = [0u64; D];
    for (axis, c) in coords.iter_mut().enumerate() {
        for i in 0..layout.coord_bits() as usize {
            *c |= ((code >> (i * D + axis)) & 1) << i;
        }
    }
    coords
}
