use nalgebra::Vector3;

use super::SampleState;
use crate::gravity::{low_fidelity, GravityParams};

/// Largest RK4 substep (s); wider node spacing is subdivided internally.
const MAX_SUBSTEP_S: f64 = 1.0;

/// RK4 step under the closed-form two-body + J2 field.
fn rk4_step(state: &SampleState, dt: f64, params: &GravityParams) -> SampleState {
    let deriv = |pos: &Vector3<f64>, vel: &Vector3<f64>| -> (Vector3<f64>, Vector3<f64>) {
        (*vel, low_fidelity::two_body_j2(pos, params))
    };

    let (k1_dr, k1_dv) = deriv(&state.pos, &state.vel);
    let (k2_dr, k2_dv) = deriv(
        &(state.pos + k1_dr * dt * 0.5),
        &(state.vel + k1_dv * dt * 0.5),
    );
    let (k3_dr, k3_dv) = deriv(
        &(state.pos + k2_dr * dt * 0.5),
        &(state.vel + k2_dv * dt * 0.5),
    );
    let (k4_dr, k4_dv) = deriv(&(state.pos + k3_dr * dt), &(state.vel + k3_dv * dt));

    SampleState {
        pos: state.pos + (k1_dr + 2.0 * k2_dr + 2.0 * k3_dr + k4_dr) * (dt / 6.0),
        vel: state.vel + (k1_dv + 2.0 * k2_dv + 2.0 * k3_dv + k4_dv) * (dt / 6.0),
    }
}

/// Sample a trajectory segment at `count` + 1 uniformly spaced nodes.
///
/// Propagates `initial` from `t0` to `tf` under the low-fidelity field and
/// returns the `(time, state)` pairs an iterative fit over the segment would
/// visit, first node included.
pub fn sample_segment(
    initial: &SampleState,
    t0: f64,
    tf: f64,
    count: usize,
    params: &GravityParams,
) -> Vec<(f64, SampleState)> {
    let mut nodes = Vec::with_capacity(count + 1);
    nodes.push((t0, *initial));
    if count == 0 {
        return nodes;
    }

    let spacing = (tf - t0) / count as f64;
    let substeps = (spacing.abs() / MAX_SUBSTEP_S).ceil().max(1.0) as usize;
    let dt = spacing / substeps as f64;

    let mut state = *initial;
    for node in 1..=count {
        for _ in 0..substeps {
            state = rk4_step(&state, dt, params);
        }
        nodes.push((t0 + node as f64 * spacing, state));
    }
    nodes
}
