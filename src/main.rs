use varigrav::io::{write_sweep_history_file, SweepRecord};
use varigrav::orbit::{sample_segment, KeplerianElements};
use varigrav::{
    EvalCounters, Fidelity, ForceDispatcher, GravityParams, HarmonicModel, IterationContext,
    RadialDegree, ZonalHarmonics,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // -----------------------------------------------------------------------
    // Run setup: LEO segment, zonal field, radius-driven degree selection
    // -----------------------------------------------------------------------
    let params = GravityParams::earth();
    let model = ZonalHarmonics::earth();
    let model_name = model.name();
    let max_degree = model.max_degree();
    let tolerance = 1.0e-12;

    let dispatcher = ForceDispatcher::new(
        params,
        max_degree,
        tolerance,
        Box::new(RadialDegree::new(params.req)),
        Box::new(model),
    );

    let orbit = KeplerianElements::circular(500.0, 51.6_f64.to_radians());
    let period = orbit.period();
    let span = period / 8.0; // one fitting segment
    let sample_count = 16;
    let nodes = sample_segment(&orbit.to_state_vector(), 0.0, span, sample_count, &params);

    // Relative error estimates a converging iterative fit would report,
    // one per sweep. Band is tolerance * 1e3 = 1e-9: the jump to high
    // fidelity lands on the sixth sweep.
    let error_profile = [1.0, 3.2e-2, 8.1e-4, 2.7e-6, 9.4e-9, 6.2e-11, 8.8e-13];

    // -----------------------------------------------------------------------
    // Drive the sweeps
    // -----------------------------------------------------------------------
    let mut ctx = IterationContext::new(0, false);
    let mut counters = EvalCounters::new();
    let mut history = Vec::with_capacity(error_profile.len());
    let mut final_accel = None;

    for (sweep, &rel_error) in error_profile.iter().enumerate() {
        for (k, (t, state)) in nodes.iter().enumerate() {
            let accel = dispatcher
                .evaluate(*t, state, rel_error, k + 1, sample_count, &mut ctx, &mut counters)
                .expect("gravity evaluation failed");
            if k == 0 {
                final_accel = Some(accel);
            }
        }
        history.push(SweepRecord::capture(
            sweep as u32,
            rel_error,
            ctx.fidelity(),
            &counters,
        ));
    }

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  VARIABLE-FIDELITY GRAVITY — LEO segment sweep replay");
    println!("====================================================================");
    println!();
    println!("  Run Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Orbit:         {:>6.0} km circular, {:>5.1} deg inclination",
        orbit.sma - params.req,
        orbit.inc.to_degrees()
    );
    println!(
        "  Segment:       {:>6.0} s ({} samples + endpoint)",
        span, sample_count
    );
    println!(
        "  Model:         {} (max degree {})",
        model_name, max_degree
    );
    println!(
        "  Tolerance:     {:>9.1e}   escalation band: {:>9.1e}",
        tolerance,
        tolerance * dispatcher.policy.error_band
    );
    println!();

    println!("  Sweep History");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>5}  {:>12}  {:>8}  {:>10}  {:>10}",
        "sweep", "est. error", "fidelity", "harm. cost", "low evals"
    );
    println!("  {}", "─".repeat(54));

    let mut prev_cost = 0.0;
    let mut prev_evals = 0;
    for rec in &history {
        println!(
            "  {:>5}  {:>12.3e}  {:>8}  {:>10.1}  {:>10}",
            rec.iteration,
            rec.rel_error,
            rec.fidelity.label(),
            rec.degree_cost - prev_cost,
            rec.approx_evals - prev_evals,
        );
        prev_cost = rec.degree_cost;
        prev_evals = rec.approx_evals;
    }
    println!();

    let low_sweeps = history.iter().filter(|r| r.fidelity == Fidelity::Low).count();
    let all_high = (error_profile.len() * (sample_count + 1)) as f64;
    println!("  Cost Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Harmonic cost: {:>8.1} full-degree equivalents (all-high: {:.1})",
        counters.degree_cost(),
        all_high
    );
    println!(
        "  Closed-form:   {:>8} evaluations across {} low sweeps",
        counters.approx_evals(),
        low_sweeps
    );
    if let Some(a) = final_accel {
        println!(
            "  |a| at node 0: {:>12.6e} km/s^2 (converged sweep)",
            a.norm()
        );
    }
    println!();

    let csv_path = "fidelity_history.csv";
    write_sweep_history_file(csv_path, &history).expect("failed to write sweep history");
    println!("  Sweep history written to {}", csv_path);
    println!("====================================================================");
    println!();
}
