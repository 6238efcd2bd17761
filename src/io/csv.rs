use std::io::{self, Write};

use crate::fidelity::{EvalCounters, Fidelity};

/// Per-sweep snapshot of the fidelity decision and accumulated cost.
#[derive(Debug, Clone, Copy)]
pub struct SweepRecord {
    pub iteration: u32,
    pub rel_error: f64,
    pub fidelity: Fidelity,
    pub degree_cost: f64,
    pub approx_evals: u64,
}

impl SweepRecord {
    /// Capture a completed sweep from the counters' running totals.
    pub fn capture(
        iteration: u32,
        rel_error: f64,
        fidelity: Fidelity,
        counters: &EvalCounters,
    ) -> Self {
        SweepRecord {
            iteration,
            rel_error,
            fidelity,
            degree_cost: counters.degree_cost(),
            approx_evals: counters.approx_evals(),
        }
    }
}

/// Write a fidelity sweep history to CSV format.
///
/// Columns: iteration, rel_error, fidelity, degree_cost, approx_evals
pub fn write_sweep_history<W: Write>(writer: &mut W, history: &[SweepRecord]) -> io::Result<()> {
    writeln!(writer, "iteration,rel_error,fidelity,degree_cost,approx_evals")?;

    for rec in history {
        writeln!(
            writer,
            "{},{:.6e},{},{:.4},{}",
            rec.iteration,
            rec.rel_error,
            rec.fidelity.label(),
            rec.degree_cost,
            rec.approx_evals,
        )?;
    }

    Ok(())
}

/// Write a sweep history to a CSV file at the given path.
pub fn write_sweep_history_file(path: &str, history: &[SweepRecord]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_sweep_history(&mut file, history)
}
