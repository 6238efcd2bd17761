use thiserror::Error;

/// Failures raised by gravity-model collaborators.
///
/// The dispatcher never recovers from these; they abort the current
/// propagation run and surface to the integrator.
#[derive(Error, Debug)]
pub enum GravityError {
    /// The harmonic evaluator has no coefficient data at the requested degree.
    #[error("harmonic coefficients unavailable: degree {requested} requested, table ends at degree {available}")]
    MissingCoefficients { requested: u32, available: u32 },

    /// Fault reported by an external harmonic evaluator implementation.
    #[error("harmonic evaluation failed: {0}")]
    Evaluator(String),
}
