//! Throughput sweeps.
//!
//! Each codec is timed four ways over `size^d` inputs: encoding cells in
//! linear order, encoding random cells, decoding codes `0..size^d` in order,
//! and decoding random codes. Random inputs are drawn in batches outside the
//! timed region so the generator does not count against the strategy.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use morton_core::{Codec2, Codec3, Layout, Strategy};
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::cell_count;
use crate::lane::Lane;
use crate::stats::{average_millis, TimingRow};

/// Random inputs generated per timed batch.
pub const BATCH: usize = 1 << 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Encode,
    Decode,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Encode => "encode",
            Op::Decode => "decode",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Linear,
    Random,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::Linear => "linear",
            Order::Random => "random",
        })
    }
}

/// One cube side, repeated `times` times.
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    pub size: u64,
    pub times: u32,
}

impl Sweep {
    pub fn codec_3d<C: Lane, K: Lane>(
        &self,
        codec: &Codec3<C, K>,
        layout: Layout,
        rng: &mut Xoshiro256PlusPlus,
    ) -> [TimingRow; 4] {
        self.measure(
            layout,
            codec.strategy,
            rng,
            |[x, y, z]: [u64; 3]| -> u64 {
                (codec.encode)(K::from_bits(x), K::from_bits(y), K::from_bits(z)).into()
            },
            |code: u64| -> [u64; 3] {
                let (x, y, z) = (codec.decode)(C::from_bits(code));
                [x.into(), y.into(), z.into()]
            },
        )
    }

    pub fn codec_2d<C: Lane, K: Lane>(
        &self,
        codec: &Codec2<C, K>,
        layout: Layout,
        rng: &mut Xoshiro256PlusPlus,
    ) -> [TimingRow; 4] {
        self.measure(
            layout,
            codec.strategy,
            rng,
            |[x, y]: [u64; 2]| -> u64 { (codec.encode)(K::from_bits(x), K::from_bits(y)).into() },
            |code: u64| -> [u64; 2] {
                let (x, y) = (codec.decode)(C::from_bits(code));
                [x.into(), y.into()]
            },
        )
    }

    fn measure<const D: usize>(
        &self,
        layout: Layout,
        strategy: Strategy,
        rng: &mut Xoshiro256PlusPlus,
        encode: impl Fn([u64; D]) -> u64,
        decode: impl Fn(u64) -> [u64; D],
    ) -> [TimingRow; 4] {
        let cells = cell_count(self.size, layout);
        let coord_mask = layout.coord_mask();
        let used_mask = layout.used_mask();

        let encode_linear = self.linear_cells(cells, |cell: [u64; D]| {
            black_box(encode(black_box(cell)));
        });
        let encode_random = self.batched(
            cells,
            [0u64; D],
            |batch| {
                for cell in batch.iter_mut() {
                    for c in cell.iter_mut() {
                        *c = rng.gen::<u64>() & coord_mask;
                    }
                }
            },
            |cell| {
                black_box(encode(black_box(cell)));
            },
        );
        let decode_linear = self.repeat(|| {
            for code in 0..cells {
                black_box(decode(black_box(code)));
            }
        });
        let decode_random = self.batched(
            cells,
            0u64,
            |batch| {
                for code in batch.iter_mut() {
                    *code = rng.gen::<u64>() & used_mask;
                }
            },
            |code| {
                black_box(decode(black_box(code)));
            },
        );

        let row = |op, order, elapsed| TimingRow {
            size: self.size,
            layout,
            strategy,
            op,
            order,
            cells,
            millis: average_millis(elapsed, self.times),
        };
        [
            row(Op::Encode, Order::Linear, encode_linear),
            row(Op::Encode, Order::Random, encode_random),
            row(Op::Decode, Order::Linear, decode_linear),
            row(Op::Decode, Order::Random, decode_random),
        ]
    }

    /// Total time of `times` runs of `body`.
    fn repeat(&self, mut body: impl FnMut()) -> Duration {
        let mut elapsed = Duration::ZERO;
        for _ in 0..self.times {
            let t0 = Instant::now();
            body();
            elapsed += t0.elapsed();
        }
        elapsed
    }

    /// Visit every cell of the cube, last axis fastest.
    fn linear_cells<const D: usize>(&self, cells: u64, mut body: impl FnMut([u64; D])) -> Duration {
        let size = self.size;
        self.repeat(|| {
            let mut cell = [0u64; D];
            for _ in 0..cells {
                body(cell);
                for c in cell.iter_mut().rev() {
                    *c += 1;
                    if *c < size {
                        break;
                    }
                    *c = 0;
                }
            }
        })
    }

    /// Run `body` over `count` inputs produced by `fill`, timing only `body`.
    fn batched<T: Copy>(
        &self,
        count: u64,
        zero: T,
        mut fill: impl FnMut(&mut [T]),
        mut body: impl FnMut(T),
    ) -> Duration {
        let mut buffer = vec![zero; (count as usize).clamp(1, BATCH)];
        let mut elapsed = Duration::ZERO;
        for _ in 0..self.times {
            let mut remaining = count;
            while remaining > 0 {
                let len = remaining.min(buffer.len() as u64) as usize;
                let batch = &mut buffer[..len];
                fill(batch);

                let t0 = Instant::now();
                for &input in batch.iter() {
                    body(input);
                }
                elapsed += t0.elapsed();

                remaining -= len as u64;
            }
        }
        elapsed
    }
}
