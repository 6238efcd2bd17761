use log::{debug, trace};
use nalgebra::Vector3;

use super::{EvalCounters, Fidelity, IterationContext};
use crate::error::GravityError;
use crate::gravity::{low_fidelity, DegreeSelector, GravityParams, HarmonicModel, HighFidelity};
use crate::orbit::SampleState;

// ---------------------------------------------------------------------------
// Switching policy
// ---------------------------------------------------------------------------

/// When to trade the closed-form model for the harmonic expansion.
///
/// Early sweeps refine the trajectory shape, where harmonic detail is wasted
/// effort; once the Picard error estimate closes to within `error_band` of
/// the tolerance, truncation error dominates and the segment escalates. An
/// escalated segment never drops back: near convergence the low model would
/// re-introduce the error the escalation removed.
#[derive(Debug, Clone, Copy)]
pub struct SwitchPolicy {
    /// Sweeps forced onto the low model on a cold segment.
    pub warmup_iterations: u32,
    /// Escalation threshold as a multiple of the run tolerance.
    pub error_band: f64,
}

impl Default for SwitchPolicy {
    fn default() -> Self {
        Self {
            warmup_iterations: 1,
            error_band: 1.0e3,
        }
    }
}

impl SwitchPolicy {
    fn select(&self, ctx: &IterationContext, rel_error: f64, tolerance: f64) -> Fidelity {
        if ctx.fidelity() == Fidelity::High {
            return Fidelity::High; // latched for the rest of the segment
        }
        if !ctx.hot_start() && ctx.iteration() < self.warmup_iterations {
            return Fidelity::Low;
        }
        if rel_error <= tolerance * self.error_band {
            Fidelity::High
        } else {
            Fidelity::Low
        }
    }
}

// ---------------------------------------------------------------------------
// Force dispatcher
// ---------------------------------------------------------------------------

/// Per-sample gravity evaluation with sweep-level fidelity selection.
///
/// The integrator calls [`evaluate`](ForceDispatcher::evaluate) once per
/// sample point per Picard sweep; exactly one gravity model runs per call.
/// Run-constant inputs (central body, tolerance, degree cap, seams) live
/// here; per-segment mutable state lives in the caller's
/// [`IterationContext`].
pub struct ForceDispatcher {
    pub params: GravityParams,
    pub max_degree: u32,
    pub tolerance: f64,
    pub policy: SwitchPolicy,
    high: HighFidelity,
}

impl ForceDispatcher {
    pub fn new(
        params: GravityParams,
        max_degree: u32,
        tolerance: f64,
        selector: Box<dyn DegreeSelector>,
        model: Box<dyn HarmonicModel>,
    ) -> Self {
        Self {
            params,
            max_degree,
            tolerance,
            policy: SwitchPolicy::default(),
            high: HighFidelity::new(selector, model),
        }
    }

    /// Replace the default switching policy for this run.
    pub fn with_policy(mut self, policy: SwitchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Gravitational acceleration (km/s^2) for one sample of one sweep.
    ///
    /// `sample_index` runs 1..=`sample_count` + 1 within a sweep. The
    /// fidelity for the whole sweep is fixed on the `sample_index == 1`
    /// call, keeping the force field continuous across a polynomial fit;
    /// the `sample_count + 1` call marks the sweep complete and advances
    /// the context's iteration counter — the only place it changes.
    ///
    /// `rel_error` is the integrator's relative error estimate from the
    /// previous sweep. Positions must be finite with nonzero radius; that
    /// contract is the caller's to enforce.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &self,
        t: f64,
        state: &SampleState,
        rel_error: f64,
        sample_index: usize,
        sample_count: usize,
        ctx: &mut IterationContext,
        counters: &mut EvalCounters,
    ) -> Result<Vector3<f64>, GravityError> {
        if sample_index == 1 {
            let chosen = self.policy.select(ctx, rel_error, self.tolerance);
            if chosen != ctx.fidelity() {
                debug!(
                    "segment {}: sweep {} escalates to {} fidelity (err {:.3e}, tol {:.1e})",
                    ctx.segment(),
                    ctx.iteration(),
                    chosen.label(),
                    rel_error,
                    self.tolerance
                );
            }
            ctx.begin_sweep(chosen, rel_error);
        }

        let accel = match ctx.fidelity() {
            Fidelity::Low => {
                counters.tally_approx();
                low_fidelity::two_body_j2(&state.pos, &self.params)
            }
            Fidelity::High => self.high.acceleration(
                &state.pos,
                &self.params,
                self.tolerance,
                self.max_degree,
                counters,
            )?,
        };

        if sample_index == sample_count + 1 {
            trace!(
                "segment {}: sweep {} complete at t={:.1} s ({} fidelity)",
                ctx.segment(),
                ctx.iteration(),
                t,
                ctx.fidelity().label()
            );
            ctx.advance();
        }

        Ok(accel)
    }
}
