use sdenoise_core::{DiffusionFunction, SdeProblem, State, Time};
use nalgebra::DMatrix;

/// Geometric Brownian Motion: dX_t = μ X_t dt + σ X_t dW_t
///
/// Multiplicative noise: σ(x) = σ diag(x) depends on the state but is linear in it.
#[derive(Clone, Debug)]
pub struct GeometricBrownianMotion {
    pub mu: f64,
    pub sigma: f64,
}

impl GeometricBrownianMotion {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    pub fn diffusion() -> DiffusionFunction<Self> {
        DiffusionFunction::out_of_place(|u: &State, p: &Self, _t: Time| {
            let n = u.dim();
            // Diagonal matrix with σ * x_i on diagonal
            let mut s = DMatrix::zeros(n, n);
            for i in 0..n {
                s[(i, i)] = p.sigma * u.0[i];
            }
            s
        })
    }

    pub fn problem(self, u0: State, tspan: (Time, Time)) -> SdeProblem<Self> {
        let n = u0.dim();
        SdeProblem::new(
            // μ X_t (elementwise multiplication)
            |u: &State, p: &Self, _t: Time| State(p.mu * &u.0),
            Some(Self::diffusion()),
            u0,
            tspan,
            self,
        )
        .with_noise_rate_prototype(DMatrix::zeros(n, n))
    }
}
