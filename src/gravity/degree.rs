use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Effective-degree selection
// ---------------------------------------------------------------------------

/// Maps a sample position, run tolerance, and requested maximum degree to
/// the truncation degree actually worth evaluating.
///
/// Pure function of its inputs: no side effects, no per-call state.
pub trait DegreeSelector: Send + Sync {
    fn effective_degree(&self, position: &Vector3<f64>, tolerance: f64, max_degree: u32) -> u32;
}

/// Altitude-driven degree selection.
///
/// The degree-n harmonic contribution decays like (Req/r)^n, so the smallest
/// degree with (Req/r)^n <= tol bounds the relative truncation error by the
/// run tolerance. High orbits get cheap low-degree evaluations; near the
/// surface the clamp to `max_degree` wins.
#[derive(Debug, Clone, Copy)]
pub struct RadialDegree {
    req: f64, // equatorial radius, km
}

impl RadialDegree {
    pub fn new(req: f64) -> Self {
        Self { req }
    }
}

impl DegreeSelector for RadialDegree {
    fn effective_degree(&self, position: &Vector3<f64>, tolerance: f64, max_degree: u32) -> u32 {
        if max_degree <= 2 {
            return max_degree;
        }
        let r = position.norm();
        if r <= self.req {
            return max_degree;
        }
        let decay = self.req / r; // per-degree amplitude ratio, < 1 here
        let needed = tolerance.ln() / decay.ln();
        if !needed.is_finite() {
            return max_degree;
        }
        (needed.ceil() as u32).clamp(2, max_degree)
    }
}

/// Constant-degree selection, for benchmarking runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDegree(pub u32);

impl DegreeSelector for FixedDegree {
    fn effective_degree(&self, _position: &Vector3<f64>, _tolerance: f64, max_degree: u32) -> u32 {
        self.0.min(max_degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::R_EQ_EARTH;

    fn radial() -> RadialDegree {
        RadialDegree::new(R_EQ_EARTH)
    }

    #[test]
    fn degree_drops_with_altitude() {
        let sel = radial();
        let leo = Vector3::new(6700.0, 0.0, 0.0);
        let geo = Vector3::new(42_164.0, 0.0, 0.0);
        let d_leo = sel.effective_degree(&leo, 1e-12, 70);
        let d_geo = sel.effective_degree(&geo, 1e-12, 70);
        assert!(d_leo > d_geo, "LEO needs more degrees: {} vs {}", d_leo, d_geo);
        assert_eq!(d_leo, 70, "tight tolerance at LEO saturates the clamp");
        assert!((2..=70).contains(&d_geo));
    }

    #[test]
    fn loose_tolerance_clamps_to_minimum() {
        let sel = radial();
        let pos = Vector3::new(8000.0, 0.0, 0.0);
        assert_eq!(sel.effective_degree(&pos, 1.0, 70), 2);
    }

    #[test]
    fn tighter_tolerance_never_lowers_degree() {
        let sel = radial();
        let pos = Vector3::new(20_000.0, 5_000.0, 3_000.0);
        let loose = sel.effective_degree(&pos, 1e-6, 70);
        let tight = sel.effective_degree(&pos, 1e-14, 70);
        assert!(tight >= loose, "{} should be >= {}", tight, loose);
    }

    #[test]
    fn surface_and_below_use_full_degree() {
        let sel = radial();
        let pos = Vector3::new(6000.0, 0.0, 0.0);
        assert_eq!(sel.effective_degree(&pos, 1e-12, 70), 70);
    }

    #[test]
    fn zero_tolerance_uses_full_degree() {
        let sel = radial();
        let pos = Vector3::new(9000.0, 0.0, 0.0);
        assert_eq!(sel.effective_degree(&pos, 0.0, 70), 70);
    }

    #[test]
    fn degenerate_max_degree_passes_through() {
        let sel = radial();
        let pos = Vector3::new(7000.0, 0.0, 0.0);
        assert_eq!(sel.effective_degree(&pos, 1e-12, 1), 1);
    }

    #[test]
    fn fixed_degree_caps_at_max() {
        let pos = Vector3::new(7000.0, 0.0, 0.0);
        assert_eq!(FixedDegree(90).effective_degree(&pos, 1e-12, 70), 70);
        assert_eq!(FixedDegree(4).effective_degree(&pos, 1e-12, 70), 4);
        assert_eq!(FixedDegree(0).effective_degree(&pos, 1e-12, 70), 0);
    }
}
