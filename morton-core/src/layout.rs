// =============================================================================
// Code Layout
// =============================================================================
//
// Fixed-width bookkeeping shared by every strategy: how many bits of each
// coordinate fit into a code, and where each axis lives inside the code.
//
// Bit `i` of axis `a` is stored at code bit `i * dims + a`:
//
//   2D: code = ...y2x2y1x1y0x0
//   3D: code = ...z1y1x1z0y0x0

/// Dimension/width pair of a Morton code.
///
/// All strategies compute in `u64` and narrow to the code type at the
/// public boundary, so masks here are `u64` for both widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Number of interleaved axes (2 or 3).
    pub dims: usize,
    /// Width of the code in bits (32 or 64).
    pub code_bits: u32,
}

/// 2D coordinates in a 32-bit code (16 bits per axis).
pub const LAYOUT_2D_32: Layout = Layout::new(2, 32);
/// 2D coordinates in a 64-bit code (32 bits per axis).
pub const LAYOUT_2D_64: Layout = Layout::new(2, 64);
/// 3D coordinates in a 32-bit code (10 bits per axis).
pub const LAYOUT_3D_32: Layout = Layout::new(3, 32);
/// 3D coordinates in a 64-bit code (21 bits per axis).
pub const LAYOUT_3D_64: Layout = Layout::new(3, 64);

struct Supported<const D: usize, const W: u32>;

impl<const D: usize, const W: u32> Supported<D, W> {
    const OK: () = assert!(
        (D == 2 || D == 3) && (W == 32 || W == 64),
        "Morton codes are defined for 2 or 3 axes in 32 or 64 bits"
    );
}

#[inline(always)]
const fn low_bits(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

impl Layout {
    /// Create a layout without validating it.
    ///
    /// Prefer [`Layout::of`] from generic code; it rejects unsupported
    /// combinations at compile time.
    pub const fn new(dims: usize, code_bits: u32) -> Self {
        Self { dims, code_bits }
    }

    /// Layout for a `(D, W)` pair, checked at monomorphization time.
    #[inline(always)]
    pub const fn of<const D: usize, const W: u32>() -> Self {
        let () = Supported::<D, W>::OK;
        Self::new(D, W)
    }

    /// Effective width: number of low coordinate bits that fit in the code.
    #[inline(always)]
    pub const fn coord_bits(self) -> u32 {
        self.code_bits / self.dims as u32
    }

    /// Number of bytes a coordinate spans once masked to its effective width.
    #[inline(always)]
    pub const fn coord_bytes(self) -> u32 {
        self.coord_bits().div_ceil(8)
    }

    /// Mask keeping the representable bits of a coordinate.
    #[inline(always)]
    pub const fn coord_mask(self) -> u64 {
        low_bits(self.coord_bits())
    }

    /// Mask of the code bits actually populated by an encode.
    ///
    /// Equal to the full width in 2D. In 3D the top `code_bits % 3` bits
    /// are never written.
    #[inline(always)]
    pub const fn used_mask(self) -> u64 {
        low_bits(self.coord_bits() * self.dims as u32)
    }

    /// Mask of the code bits that belong to `axis`.
    ///
    /// `axis_mask(0)` for 3D/32 is `0x0924_9249`.
    pub const fn axis_mask(self, axis: usize) -> u64 {
        let mut mask = 0u64;
        let mut i = 0;
        while i < self.coord_bits() as usize {
            mask |= 1u64 << (i * self.dims + axis);
            i += 1;
        }
        mask
    }
}
