//! Gravity models: the closed-form low-fidelity approximation, the
//! degree-adaptive high-fidelity evaluation path, and the seams behind
//! which the full spherical-harmonic machinery lives.

pub mod degree;
pub mod high_fidelity;
pub mod low_fidelity;
pub mod zonal;

pub use degree::{DegreeSelector, FixedDegree, RadialDegree};
pub use high_fidelity::HighFidelity;
pub use zonal::ZonalHarmonics;

use nalgebra::Vector3;

use crate::error::GravityError;

// ---------------------------------------------------------------------------
// Physical constants (EGM2008-consistent Earth, km units)
// ---------------------------------------------------------------------------

pub const MU_EARTH: f64 = 398_600.4418; // km^3/s^2
pub const R_EQ_EARTH: f64 = 6_378.137; // equatorial radius, km
pub const J2_EARTH: f64 = 1_082.63e-6; // second zonal harmonic

// ---------------------------------------------------------------------------
// Central-body parameters
// ---------------------------------------------------------------------------

/// Central-body parameters for the closed-form gravity models.
///
/// Constant for the lifetime of a propagation run. Units must be mutually
/// consistent; the defaults are km / km^3/s^2.
#[derive(Debug, Clone, Copy)]
pub struct GravityParams {
    pub mu: f64,  // gravitational parameter, km^3/s^2
    pub req: f64, // equatorial radius, km
    pub j2: f64,  // oblateness coefficient
}

impl GravityParams {
    pub fn earth() -> Self {
        Self {
            mu: MU_EARTH,
            req: R_EQ_EARTH,
            j2: J2_EARTH,
        }
    }
}

impl Default for GravityParams {
    fn default() -> Self {
        Self::earth()
    }
}

// ---------------------------------------------------------------------------
// Harmonic expansion seam
// ---------------------------------------------------------------------------

/// A truncated spherical-harmonic gravity evaluator.
///
/// Production implementations wrap a coefficient table (EGM2008 and friends)
/// loaded elsewhere; [`ZonalHarmonics`] is the built-in zonal-only stand-in.
/// Implementations evaluate at exactly the requested truncation degree and
/// must refuse degrees their coefficient data cannot cover.
pub trait HarmonicModel: Send + Sync {
    /// Acceleration of the expansion truncated at `degree`, km/s^2.
    fn acceleration(
        &self,
        position: &Vector3<f64>,
        degree: u32,
    ) -> Result<Vector3<f64>, GravityError>;

    /// Highest degree this model's coefficient data covers.
    fn max_degree(&self) -> u32;

    /// Model name for reports and logs.
    fn name(&self) -> &'static str;
}
