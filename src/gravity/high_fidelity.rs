use nalgebra::Vector3;

use super::{low_fidelity, DegreeSelector, GravityParams, HarmonicModel};
use crate::error::GravityError;
use crate::fidelity::EvalCounters;

// ---------------------------------------------------------------------------
// Degree-adaptive high-fidelity evaluation path
// ---------------------------------------------------------------------------

/// The expensive half of the dispatcher: degree selection, harmonic
/// evaluation, and degree-cost accounting.
///
/// Picks an effective truncation degree for the current sample, runs the
/// harmonic seam at that degree, and charges the degree-cost accumulator
/// (effective/max)^2 per evaluation. Effective degrees 0 and 1
/// short-circuit to point-mass gravity without touching the harmonic model.
pub struct HighFidelity {
    selector: Box<dyn DegreeSelector>,
    model: Box<dyn HarmonicModel>,
}

impl HighFidelity {
    pub fn new(selector: Box<dyn DegreeSelector>, model: Box<dyn HarmonicModel>) -> Self {
        Self { selector, model }
    }

    /// Acceleration at `position` (km/s^2), truncated where the run
    /// tolerance allows. Collaborator failures propagate untouched.
    pub fn acceleration(
        &self,
        position: &Vector3<f64>,
        params: &GravityParams,
        tolerance: f64,
        max_degree: u32,
        counters: &mut EvalCounters,
    ) -> Result<Vector3<f64>, GravityError> {
        let effective = self
            .selector
            .effective_degree(position, tolerance, max_degree)
            .min(max_degree);

        let accel = if effective < 2 {
            low_fidelity::point_mass(position, params.mu)
        } else {
            self.model.acceleration(position, effective)?
        };

        counters.charge_harmonic(effective, max_degree);
        Ok(accel)
    }
}
