use nalgebra::Vector3;

/// Trajectory sample handed to the force evaluation, ECI frame.
///
/// Velocity rides along for force models that need it (drag, SRP); the
/// gravity models here read only the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleState {
    pub pos: Vector3<f64>, // km
    pub vel: Vector3<f64>, // km/s
}

impl SampleState {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self { pos, vel }
    }

    /// Geocentric distance (km).
    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    /// Inertial speed (km/s).
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}
