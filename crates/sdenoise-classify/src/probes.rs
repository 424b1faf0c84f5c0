//! Sampling probes on an opaque diffusion function.
//!
//! Each probe evaluates σ at a handful of points and compares the outputs
//! exactly. A genuinely state- or time-independent σ returns the same bits for
//! every input, while a dependent one almost surely differs somewhere on a
//! random sample, so no tolerance is applied.

use sdenoise_core::{Diffusion, NoiseMatrix, SampleGenerator, State, Time};
use tracing::trace;

/// Same shape and the same `f64` bit pattern in every entry.
pub fn outputs_identical(a: &NoiseMatrix, b: &NoiseMatrix) -> bool {
    a.shape() == b.shape()
        && a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

fn all_identical(outputs: &[NoiseMatrix]) -> bool {
    match outputs.split_first() {
        Some((first, rest)) => rest.iter().all(|o| outputs_identical(first, o)),
        None => true,
    }
}

/// True iff σ gives identical outputs at `samples` random perturbations of `u`.
pub fn is_state_independent<P, D>(
    g: &D,
    u: &State,
    p: &P,
    t: Time,
    rng: &mut SampleGenerator,
    samples: usize,
) -> bool
where
    D: Diffusion<P> + ?Sized,
{
    let outputs: Vec<NoiseMatrix> = (0..samples)
        .map(|_| {
            let perturbed = rng.perturb(u);
            g.sigma(&perturbed, p, t)
        })
        .collect();
    let independent = all_identical(&outputs);
    trace!(samples, independent, "state-independence probe");
    independent
}

/// True iff σ gives identical outputs at `t0 + offset` for every offset.
pub fn is_time_independent<P, D>(
    g: &D,
    u: &State,
    p: &P,
    t0: Time,
    offsets: &[Time],
) -> bool
where
    D: Diffusion<P> + ?Sized,
{
    let outputs: Vec<NoiseMatrix> = offsets
        .iter()
        .map(|dt| g.sigma(u, p, t0 + dt))
        .collect();
    let independent = all_identical(&outputs);
    trace!(t0, independent, "time-independence probe");
    independent
}

fn sum(a: &NoiseMatrix, b: &NoiseMatrix) -> Option<NoiseMatrix> {
    (a.shape() == b.shape()).then(|| a + b)
}

/// Additivity `f(x + y) == f(x) + f(y)` and homogeneity `f(c·x) == c·f(x)`,
/// both compared with exact equality.
pub fn is_linear<Fx>(f: Fx, x: &State, y: &State, c: f64) -> bool
where
    Fx: Fn(&State) -> NoiseMatrix,
{
    let fx = f(x);
    let additive = match sum(&fx, &f(y)) {
        Some(fx_plus_fy) => f(&(x + y)) == fx_plus_fy,
        None => false,
    };
    additive && f(&(x * c)) == fx * c
}

/// Runs the linearity check on `trials` sampled pairs
/// `x = u0 + i·r1`, `y = u0 + i·r2` (i = 1..=trials, fresh r1, r2 each time).
///
/// Every trial is evaluated even after a failure; the result is true only if
/// all trials pass.
pub fn linearity_trials<P, D>(
    g: &D,
    u0: &State,
    p: &P,
    t: Time,
    rng: &mut SampleGenerator,
    trials: usize,
    c: f64,
) -> bool
where
    D: Diffusion<P> + ?Sized,
{
    let f = |u: &State| g.sigma(u, p, t);
    let mut linear = true;
    for i in 1..=trials {
        let r1 = rng.uniform(u0.dim());
        let r2 = rng.uniform(u0.dim());
        let x = u0 + &(&r1 * i as f64);
        let y = u0 + &(&r2 * i as f64);
        let passed = is_linear(f, &x, &y, c);
        trace!(trial = i, passed, "linearity trial");
        linear &= passed;
    }
    linear
}
