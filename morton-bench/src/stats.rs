//! Timing aggregation and report formatting.

use std::time::Duration;

use morton_core::{Layout, Strategy};

use crate::sweep::{Op, Order};

/// Averaged timing of one codec for one (op, order) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRow {
    /// Cube side.
    pub size: u64,
    pub layout: Layout,
    pub strategy: Strategy,
    pub op: Op,
    pub order: Order,
    /// Inputs processed per repetition.
    pub cells: u64,
    /// Mean wall time of one repetition in milliseconds.
    pub millis: f64,
}

impl TimingRow {
    /// Mean cost of one encode or decode in nanoseconds.
    pub fn nanos_per_code(&self) -> f64 {
        if self.cells == 0 {
            return 0.0;
        }
        self.millis * 1e6 / self.cells as f64
    }

    /// Format as CSV row.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{:.3},{:.3}",
            self.size,
            self.layout.dims,
            self.layout.code_bits,
            self.op,
            self.order,
            self.strategy,
            self.cells,
            self.millis,
            self.nanos_per_code(),
        )
    }

    /// Format as an indented table line, e.g. `    64-bit lut_shifted:   12.345 ms`.
    pub fn to_line(&self) -> String {
        format!(
            "    {}-bit {:<12} {:>10.3} ms  ({:.2} ns/code)",
            self.layout.code_bits,
            format!("{}:", self.strategy),
            self.millis,
            self.nanos_per_code(),
        )
    }
}

/// CSV header matching [`TimingRow::to_csv`].
pub const CSV_HEADER: &str = "size,dims,code_bits,op,order,strategy,cells,millis,ns_per_code";

/// Mean of `times` repetitions whose durations sum to `total`, in milliseconds.
pub fn average_millis(total: Duration, times: u32) -> f64 {
    if times == 0 {
        return 0.0;
    }
    total.as_secs_f64() * 1e3 / times as f64
}

/// Format a large number with K/M/G suffixes.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}G", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        format!("{}", n)
    }
}
