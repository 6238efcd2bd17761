// ---------------------------------------------------------------------------
// Fidelity level
// ---------------------------------------------------------------------------

/// Accuracy/cost tier of a gravity evaluation.
///
/// An enum rather than a bool: partial-degree intermediate tiers are a
/// planned extension of the dispatcher policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    /// Closed-form two-body + J2.
    Low,
    /// Degree-adaptive spherical harmonics.
    High,
}

impl Fidelity {
    pub fn label(&self) -> &'static str {
        match self {
            Fidelity::Low => "low",
            Fidelity::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-segment iteration context
// ---------------------------------------------------------------------------

/// Mutable Picard-iteration state for one trajectory segment.
///
/// Owned by the segment-propagation routine and passed into every dispatcher
/// call — never shared between segments, so independent propagations can run
/// on independent threads without locking. The dispatcher is the only
/// mutator: it fixes the fidelity at each sweep start and advances the
/// iteration counter at each sweep end.
#[derive(Debug, Clone)]
pub struct IterationContext {
    segment: usize,
    iteration: u32,
    fidelity: Fidelity,
    hot_start: bool,
    last_error: f64,
}

impl IterationContext {
    /// Fresh context for a segment. A hot start resumes from a previously
    /// converged run and enters directly at high fidelity; a cold start
    /// warms up on the low model.
    pub fn new(segment: usize, hot_start: bool) -> Self {
        Self {
            segment,
            iteration: 0,
            fidelity: if hot_start { Fidelity::High } else { Fidelity::Low },
            hot_start,
            last_error: f64::INFINITY,
        }
    }

    /// Reinitialize for a new propagation of the same segment.
    pub fn reset(&mut self, hot_start: bool) {
        *self = Self::new(self.segment, hot_start);
    }

    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Outer Picard iteration index, advanced once per completed sweep.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    pub fn hot_start(&self) -> bool {
        self.hot_start
    }

    /// Relative error estimate seen at the most recent sweep start
    /// (infinite until the first sweep).
    pub fn last_error(&self) -> f64 {
        self.last_error
    }

    pub(crate) fn begin_sweep(&mut self, fidelity: Fidelity, rel_error: f64) {
        self.fidelity = fidelity;
        self.last_error = rel_error;
    }

    pub(crate) fn advance(&mut self) {
        self.iteration += 1;
    }
}
