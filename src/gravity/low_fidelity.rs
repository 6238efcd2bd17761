use nalgebra::Vector3;

use super::GravityParams;

// ---------------------------------------------------------------------------
// Closed-form low-fidelity gravity: two-body + J2 oblateness
// ---------------------------------------------------------------------------

/// Point-mass acceleration a = -mu/r^3 * r (km/s^2).
pub fn point_mass(position: &Vector3<f64>, mu: f64) -> Vector3<f64> {
    let r = position.norm();
    -mu / (r * r * r) * position
}

/// Two-body plus J2 oblateness acceleration (km/s^2).
///
/// The workhorse of early Picard iterations: O(1) per sample, within ~1e-3
/// relative of the full field at LEO. Caller guarantees a finite, nonzero
/// position.
pub fn two_body_j2(position: &Vector3<f64>, params: &GravityParams) -> Vector3<f64> {
    let r = position.norm();
    let z_r = position.z / r;
    let z_r2 = z_r * z_r;

    // -(3/2) J2 (mu/r^2) (Req/r)^2, applied per axis with distinct brackets
    let req_r = params.req / r;
    let j2_factor = -1.5 * params.j2 * (params.mu / (r * r)) * req_r * req_r;

    let xy_bracket = 1.0 - 5.0 * z_r2;
    let z_bracket = 3.0 - 5.0 * z_r2;

    point_mass(position, params.mu)
        + Vector3::new(
            j2_factor * xy_bracket * position.x / r,
            j2_factor * xy_bracket * position.y / r,
            j2_factor * z_bracket * position.z / r,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equatorial_leo_sample() {
        // 7000 km equatorial position: point mass dominates, J2 enters the
        // x-axis through the (1 - 5 z^2/r^2) = 1 bracket.
        let params = GravityParams::earth();
        let pos = Vector3::new(7000.0, 0.0, 0.0);
        let a = two_body_j2(&pos, &params);

        let pm = params.mu / (7000.0_f64 * 7000.0); // 8.1347e-3 km/s^2
        assert!((a.x + pm).abs() < 2.0e-5, "point mass should dominate, got {:.6e}", a.x);
        assert_eq!(a.y, 0.0);
        assert_eq!(a.z, 0.0);

        // Exact closed form for the J2 x-term at z = 0
        let req_r = params.req / 7000.0;
        let j2_x = -1.5 * params.j2 * pm * req_r * req_r;
        assert_relative_eq!(a.x, -pm + j2_x, epsilon = 1e-15);
    }

    #[test]
    fn j2_close_to_pointmass_at_leo() {
        let params = GravityParams::earth();
        let pos = Vector3::new(4000.0, 3000.0, 4500.0);
        let a_j2 = two_body_j2(&pos, &params);
        let a_pm = point_mass(&pos, params.mu);
        // J2 correction is ~0.1% at LEO
        let diff = (a_j2 - a_pm).norm() / a_pm.norm();
        assert!(diff < 0.01, "J2 correction should be <1% at LEO, got {:.4}%", diff * 100.0);
    }

    #[test]
    fn polar_bracket_differs_from_equatorial() {
        // Over the pole z/r = 1, so the z bracket is (3 - 5) = -2 while an
        // equatorial sample uses (1 - 0) = 1: J2 weakens polar gravity.
        let params = GravityParams::earth();
        let r = 7000.0;
        let a_pole = two_body_j2(&Vector3::new(0.0, 0.0, r), &params);
        let a_eq = two_body_j2(&Vector3::new(r, 0.0, 0.0), &params);
        assert!(
            a_pole.z.abs() < a_eq.x.abs(),
            "oblateness pulls harder over the equator: pole {:.6e} vs equator {:.6e}",
            a_pole.z.abs(),
            a_eq.x.abs()
        );
    }

    #[test]
    fn acceleration_points_inward() {
        let params = GravityParams::earth();
        let pos = Vector3::new(5000.0, -3500.0, 2000.0);
        let a = two_body_j2(&pos, &params);
        assert!(a.dot(&pos) < 0.0, "gravity should point toward the body");
    }
}
