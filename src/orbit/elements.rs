use nalgebra::Vector3;

use super::SampleState;
use crate::gravity::{MU_EARTH, R_EQ_EARTH};

/// Classical Keplerian orbital elements.
#[derive(Debug, Clone, Copy)]
pub struct KeplerianElements {
    pub sma: f64,       // semi-major axis, km
    pub ecc: f64,       // eccentricity (0 = circular)
    pub inc: f64,       // inclination, rad
    pub raan: f64,      // right ascension of ascending node, rad
    pub argp: f64,      // argument of periapsis, rad
    pub true_anom: f64, // true anomaly, rad
}

impl KeplerianElements {
    /// Create a circular orbit at given altitude (km) and inclination (rad).
    pub fn circular(altitude: f64, inc: f64) -> Self {
        KeplerianElements {
            sma: R_EQ_EARTH + altitude,
            ecc: 0.0,
            inc,
            raan: 0.0,
            argp: 0.0,
            true_anom: 0.0,
        }
    }

    /// Convert Keplerian elements to an ECI state vector.
    pub fn to_state_vector(&self) -> SampleState {
        self.to_state_vector_mu(MU_EARTH)
    }

    /// Convert with explicit gravitational parameter (km^3/s^2).
    pub fn to_state_vector_mu(&self, mu: f64) -> SampleState {
        let p = self.sma * (1.0 - self.ecc * self.ecc); // semi-latus rectum
        let r = p / (1.0 + self.ecc * self.true_anom.cos());

        // Position in perifocal frame (PQW)
        let r_pqw = Vector3::new(
            r * self.true_anom.cos(),
            r * self.true_anom.sin(),
            0.0,
        );

        // Velocity in perifocal frame
        let sqrt_mu_p = (mu / p).sqrt();
        let v_pqw = Vector3::new(
            -sqrt_mu_p * self.true_anom.sin(),
            sqrt_mu_p * (self.ecc + self.true_anom.cos()),
            0.0,
        );

        // Rotation matrix from PQW to ECI
        let cos_raan = self.raan.cos();
        let sin_raan = self.raan.sin();
        let cos_argp = self.argp.cos();
        let sin_argp = self.argp.sin();
        let cos_inc = self.inc.cos();
        let sin_inc = self.inc.sin();

        let rot = |v: &Vector3<f64>| -> Vector3<f64> {
            Vector3::new(
                (cos_raan * cos_argp - sin_raan * sin_argp * cos_inc) * v.x
                    + (-cos_raan * sin_argp - sin_raan * cos_argp * cos_inc) * v.y,
                (sin_raan * cos_argp + cos_raan * sin_argp * cos_inc) * v.x
                    + (-sin_raan * sin_argp + cos_raan * cos_argp * cos_inc) * v.y,
                (sin_argp * sin_inc) * v.x + (cos_argp * sin_inc) * v.y,
            )
        };

        SampleState::new(rot(&r_pqw), rot(&v_pqw))
    }

    /// Orbital period for elliptical orbit (s).
    pub fn period(&self) -> f64 {
        self.period_mu(MU_EARTH)
    }

    pub fn period_mu(&self, mu: f64) -> f64 {
        2.0 * std::f64::consts::PI * (self.sma.powi(3) / mu).sqrt()
    }
}
