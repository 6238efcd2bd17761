// ---------------------------------------------------------------------------
// Evaluation-cost accounting
// ---------------------------------------------------------------------------

/// Work counters for one propagation run.
///
/// Owned by the caller and charged in place by the models: harmonic
/// evaluations accrue (effective/max)^2, matching the square-law growth of
/// evaluation cost with truncation degree, while low-fidelity evaluations
/// are a flat tally. Both are monotone within a run; `reset` starts the
/// next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvalCounters {
    degree_cost: f64,
    approx_evals: u64,
}

impl EvalCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated harmonic degree cost, in units of full-degree evaluations.
    pub fn degree_cost(&self) -> f64 {
        self.degree_cost
    }

    /// Number of closed-form low-fidelity evaluations.
    pub fn approx_evals(&self) -> u64 {
        self.approx_evals
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn charge_harmonic(&mut self, effective: u32, max_degree: u32) {
        if max_degree == 0 {
            return;
        }
        let ratio = effective as f64 / max_degree as f64;
        self.degree_cost += ratio * ratio;
    }

    pub(crate) fn tally_approx(&mut self) {
        self.approx_evals += 1;
    }
}
