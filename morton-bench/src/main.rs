//! Correctness and Throughput Harness for morton-core
//!
//! Checks every encode/decode strategy against independently derived
//! control tables, then times each strategy over cubes of increasing size in
//! linear and random order.
//!
//! # Usage
//!
//! ```bash
//! # Run with default settings (sizes 32..512, 10 repetitions)
//! cargo run --release -p morton-bench
//!
//! # Only 3D, fewer sizes, CSV on stdout
//! cargo run --release -p morton-bench -- --dimension three --sizes 32,64 --csv
//!
//! # Correctness checks only, with per-codec detail
//! RUST_LOG=debug cargo run --release -p morton-bench -- --no-perf
//! ```

mod config;
mod lane;
mod stats;
mod sweep;
mod verification;

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use morton_core::{
    CODECS_2D_32, CODECS_2D_64, CODECS_3D_32, CODECS_3D_64, LAYOUT_2D_32, LAYOUT_2D_64,
    LAYOUT_3D_32, LAYOUT_3D_64,
};

use crate::config::{cell_count, Dimension, SweepConfig};
use crate::stats::{format_number, TimingRow, CSV_HEADER};
use crate::sweep::{Op, Order, Sweep};
use crate::verification::{
    check_codec_2d, check_codec_3d, CodecReport, ControlTable, CONTROL_LEVELS,
};

#[derive(Parser, Debug)]
#[command(name = "morton-bench")]
#[command(about = "Correctness and throughput harness for morton-core strategies")]
struct Args {
    /// Cube sides to sweep (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = vec![32, 64, 128, 256, 512])]
    sizes: Vec<u64>,

    /// Repetitions per measurement, averaged
    #[arg(long, default_value_t = 10)]
    times: u32,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Interleavings to run
    #[arg(long, value_enum, default_value_t = Dimension::All)]
    dimension: Dimension,

    /// Skip timing (correctness checks only)
    #[arg(long)]
    no_perf: bool,

    /// Output timings as CSV to stdout
    #[arg(long)]
    csv: bool,
}

/// Sections of the timing table, in print order.
const SECTIONS: [(Op, Order); 4] = [
    (Op::Encode, Order::Linear),
    (Op::Encode, Order::Random),
    (Op::Decode, Order::Linear),
    (Op::Decode, Order::Random),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = SweepConfig::new(args.sizes, args.times, args.seed, args.dimension)
        .context("invalid sweep configuration")?;

    info!(
        "sizes {:?}, {} repetitions averaged, seed {}, {:?}",
        config.sizes, config.times, config.seed, config.dimension
    );

    let reports = run_checks(config.dimension);
    let failures: usize = reports.iter().map(CodecReport::failures).sum();

    if !args.no_perf {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if args.csv {
            writeln!(out, "{}", CSV_HEADER)?;
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        for &size in &config.sizes {
            let sweep = Sweep {
                size,
                times: config.times,
            };
            let rows = run_sweep(config.dimension, &sweep, &mut rng);

            if args.csv {
                for row in &rows {
                    writeln!(out, "{}", row.to_csv())?;
                }
            } else {
                print_table(&mut out, size, &rows)?;
            }
        }
        out.flush().context("failed to flush timing output")?;
    }

    if failures > 0 {
        bail!("{} results disagreed with the control tables", failures);
    }
    info!("Benchmark complete.");
    Ok(())
}

/// Check every registered codec against the control tables.
fn run_checks(dimension: Dimension) -> Vec<CodecReport> {
    let mut reports = Vec::new();

    if dimension.includes_3d() {
        let control = ControlTable::<3>::build(CONTROL_LEVELS);
        for codec in &CODECS_3D_32 {
            reports.push(check_codec_3d(codec, LAYOUT_3D_32, &control));
        }
        for codec in &CODECS_3D_64 {
            reports.push(check_codec_3d(codec, LAYOUT_3D_64, &control));
        }
    }
    if dimension.includes_2d() {
        let control = ControlTable::<2>::build(CONTROL_LEVELS);
        for codec in &CODECS_2D_32 {
            reports.push(check_codec_2d(codec, LAYOUT_2D_32, &control));
        }
        for codec in &CODECS_2D_64 {
            reports.push(check_codec_2d(codec, LAYOUT_2D_64, &control));
        }
    }

    for report in &reports {
        let label = format!(
            "{}D/{} {}",
            report.layout.dims, report.layout.code_bits, report.strategy
        );
        if report.encode.passed() && report.decode.passed() {
            info!(
                "{}: encode {} / decode {} checks passed",
                label, report.encode.checked, report.decode.checked
            );
        } else {
            warn!(
                "{}: {} encode and {} decode mismatches",
                label, report.encode.failures, report.decode.failures
            );
        }
    }

    reports
}

/// Time every selected codec for one cube side.
fn run_sweep(dimension: Dimension, sweep: &Sweep, rng: &mut Xoshiro256PlusPlus) -> Vec<TimingRow> {
    let mut rows = Vec::new();

    if dimension.includes_3d() {
        info!("timing 3D codecs over {}^3 cells", sweep.size);
        for codec in &CODECS_3D_32 {
            rows.extend(sweep.codec_3d(codec, LAYOUT_3D_32, rng));
        }
        for codec in &CODECS_3D_64 {
            rows.extend(sweep.codec_3d(codec, LAYOUT_3D_64, rng));
        }
    }
    if dimension.includes_2d() {
        info!("timing 2D codecs over {}^2 cells", sweep.size);
        for codec in &CODECS_2D_32 {
            rows.extend(sweep.codec_2d(codec, LAYOUT_2D_32, rng));
        }
        for codec in &CODECS_2D_64 {
            rows.extend(sweep.codec_2d(codec, LAYOUT_2D_64, rng));
        }
    }

    rows
}

fn print_table(out: &mut impl Write, size: u64, rows: &[TimingRow]) -> io::Result<()> {
    for dims in [3, 2] {
        for (op, order) in SECTIONS {
            let section: Vec<&TimingRow> = rows
                .iter()
                .filter(|r| r.layout.dims == dims && r.op == op && r.order == order)
                .collect();
            let Some(first) = section.first() else {
                continue;
            };

            let verb = match op {
                Op::Encode => "Encoding",
                Op::Decode => "Decoding",
            };
            writeln!(
                out,
                "++ {} {}^{} morton codes in {} order ({} in total)",
                verb,
                size,
                dims,
                order.to_string().to_uppercase(),
                format_number(cell_count(size, first.layout)),
            )?;
            for row in section {
                writeln!(out, "{}", row.to_line())?;
            }
        }
    }
    writeln!(out)
}
