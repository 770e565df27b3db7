//! Correctness checks against control tables.
//!
//! The control tables are not produced by any codec: they come from walking
//! the cube in Z order by recursive subdivision, numbering cells as they are
//! reached. A strategy passes when its encode reproduces that numbering and
//! its decode inverts it.

use log::{debug, warn};
use morton_core::{Codec2, Codec3, Layout, Strategy};

use crate::lane::Lane;

/// Control cube side is `1 << CONTROL_LEVELS` (16).
pub const CONTROL_LEVELS: u32 = 4;

/// Z-order numbering of a `D`-dimensional cube.
#[derive(Debug, Clone)]
pub struct ControlTable<const D: usize> {
    pub side: u64,
    /// Code of each cell, at `cell_index(cell)` (last axis fastest).
    pub codes: Vec<u64>,
    /// Cell of each code.
    pub cells: Vec<[u64; D]>,
}

impl<const D: usize> ControlTable<D> {
    /// Number a cube of side `1 << levels`.
    pub fn build(levels: u32) -> Self {
        let side = 1u64 << levels;
        let count = side.pow(D as u32) as usize;
        let mut codes = vec![0u64; count];
        let mut cells = vec![[0u64; D]; count];

        let mut next = 0u64;
        subdivide([0; D], side, &mut |cell: [u64; D]| {
            codes[cell_index(cell, side)] = next;
            cells[next as usize] = cell;
            next += 1;
        });

        Self { side, codes, cells }
    }

    pub fn code_of(&self, cell: [u64; D]) -> u64 {
        self.codes[cell_index(cell, self.side)]
    }
}

fn cell_index<const D: usize>(cell: [u64; D], side: u64) -> usize {
    cell.iter().fold(0, |index, &c| index * side + c) as usize
}

/// Visit the cells of the cube at `origin` in Z order.
///
/// Child `n` of a cube is offset by half a side along every axis whose bit
/// is set in `n`, with x as bit 0.
fn subdivide<const D: usize, F>(origin: [u64; D], side: u64, visit: &mut F)
where
    F: FnMut([u64; D]),
{
    if side == 1 {
        visit(origin);
        return;
    }
    let half = side / 2;
    for child in 0..(1usize << D) {
        let mut corner = origin;
        for (axis, c) in corner.iter_mut().enumerate() {
            if ((child >> axis) & 1) == 1 {
                *c += half;
            }
        }
        subdivide(corner, half, visit);
    }
}

/// Outcome of one direction of a codec check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub checked: usize,
    pub failures: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    fn record(&mut self, ok: bool) {
        self.checked += 1;
        if !ok {
            self.failures += 1;
        }
    }
}

/// Encode and decode outcomes for one codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecReport {
    pub layout: Layout,
    pub strategy: Strategy,
    pub encode: CheckReport,
    pub decode: CheckReport,
}

impl CodecReport {
    pub fn failures(&self) -> usize {
        self.encode.failures + self.decode.failures
    }
}

pub fn check_codec_3d<C: Lane, K: Lane>(
    codec: &Codec3<C, K>,
    layout: Layout,
    control: &ControlTable<3>,
) -> CodecReport {
    check(
        control,
        layout,
        codec.strategy,
        |[x, y, z]: [u64; 3]| -> u64 {
            (codec.encode)(K::from_bits(x), K::from_bits(y), K::from_bits(z)).into()
        },
        |code: u64| -> [u64; 3] {
            let (x, y, z) = (codec.decode)(C::from_bits(code));
            [x.into(), y.into(), z.into()]
        },
    )
}

pub fn check_codec_2d<C: Lane, K: Lane>(
    codec: &Codec2<C, K>,
    layout: Layout,
    control: &ControlTable<2>,
) -> CodecReport {
    check(
        control,
        layout,
        codec.strategy,
        |[x, y]: [u64; 2]| -> u64 { (codec.encode)(K::from_bits(x), K::from_bits(y)).into() },
        |code: u64| -> [u64; 2] {
            let (x, y) = (codec.decode)(C::from_bits(code));
            [x.into(), y.into()]
        },
    )
}

fn check<const D: usize>(
    control: &ControlTable<D>,
    layout: Layout,
    strategy: Strategy,
    encode: impl Fn([u64; D]) -> u64,
    decode: impl Fn(u64) -> [u64; D],
) -> CodecReport {
    let mut encode_report = CheckReport::default();
    let mut decode_report = CheckReport::default();

    for (code, &cell) in control.cells.iter().enumerate() {
        let code = code as u64;

        let expected = control.code_of(cell);
        let got = encode(cell);
        encode_report.record(got == expected);
        if got != expected {
            warn!(
                "{}D/{} {} encode({:?}) = {:#x}, expected {:#x}",
                layout.dims, layout.code_bits, strategy, cell, got, expected
            );
        }

        let got = decode(code);
        decode_report.record(got == cell);
        if got != cell {
            warn!(
                "{}D/{} {} decode({:#x}) = {:?}, expected {:?}",
                layout.dims, layout.code_bits, strategy, code, got, cell
            );
        }
    }

    debug!(
        "{}D/{} {}: {} encodes, {} decodes checked",
        layout.dims, layout.code_bits, strategy, encode_report.checked, decode_report.checked
    );

    CodecReport {
        layout,
        strategy,
        encode: encode_report,
        decode: decode_report,
    }
}
