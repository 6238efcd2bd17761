pub mod error;
pub mod fidelity;
pub mod gravity;
pub mod io;
pub mod orbit;

// Flat re-exports for the common call path
pub use error::GravityError;
pub use fidelity::{EvalCounters, Fidelity, ForceDispatcher, IterationContext, SwitchPolicy};
pub use gravity::{DegreeSelector, GravityParams, HarmonicModel, RadialDegree, ZonalHarmonics};
pub use orbit::SampleState;
