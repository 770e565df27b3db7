//! Sweep configuration and validation.

use clap::ValueEnum;
use morton_core::{Layout, LAYOUT_2D_32, LAYOUT_2D_64, LAYOUT_3D_32, LAYOUT_3D_64};
use thiserror::Error;

/// Which interleavings to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dimension {
    Two,
    Three,
    All,
}

impl Dimension {
    pub fn includes_2d(self) -> bool {
        matches!(self, Dimension::Two | Dimension::All)
    }

    pub fn includes_3d(self) -> bool {
        matches!(self, Dimension::Three | Dimension::All)
    }

    /// Layouts exercised for this selection, 3D first.
    pub fn layouts(self) -> Vec<Layout> {
        let mut layouts = Vec::with_capacity(4);
        if self.includes_3d() {
            layouts.extend([LAYOUT_3D_32, LAYOUT_3D_64]);
        }
        if self.includes_2d() {
            layouts.extend([LAYOUT_2D_32, LAYOUT_2D_64]);
        }
        layouts
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    #[error("no sweep sizes given")]
    NoSizes,

    #[error("sweep size must be at least 1")]
    ZeroSize,

    #[error("--times must be at least 1")]
    ZeroRepetitions,

    #[error("size {size} does not fit a {dims}D {bits}-bit code (at most {max} per axis)")]
    SizeOutOfRange {
        size: u64,
        dims: usize,
        bits: u32,
        max: u64,
    },
}

/// Validated sweep parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    pub sizes: Vec<u64>,
    pub times: u32,
    pub seed: u64,
    pub dimension: Dimension,
}

impl SweepConfig {
    /// Check that every cube side fits every selected layout.
    ///
    /// A side of `n` uses coordinates `0..n`, so `n - 1` must survive the
    /// layout's coordinate mask.
    pub fn new(
        sizes: Vec<u64>,
        times: u32,
        seed: u64,
        dimension: Dimension,
    ) -> Result<Self, BenchError> {
        if sizes.is_empty() {
            return Err(BenchError::NoSizes);
        }
        if times == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        for &size in &sizes {
            if size == 0 {
                return Err(BenchError::ZeroSize);
            }
            for layout in dimension.layouts() {
                let max = layout.coord_mask() + 1;
                if size > max {
                    return Err(BenchError::SizeOutOfRange {
                        size,
                        dims: layout.dims,
                        bits: layout.code_bits,
                        max,
                    });
                }
            }
        }
        Ok(Self {
            sizes,
            times,
            seed,
            dimension,
        })
    }
}

/// Number of cells in a cube of side `size` for `layout`.
pub fn cell_count(size: u64, layout: Layout) -> u64 {
    size.pow(layout.dims as u32)
}
