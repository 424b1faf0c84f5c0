use sdenoise_core::{DiffusionFunction, NoiseMatrix, SdeProblem, State, Time};
use nalgebra::DMatrix;

/// Ornstein-Uhlenbeck process: dX_t = θ(μ - X_t) dt + σ dW_t
#[derive(Clone, Debug)]
pub struct OrnsteinUhlenbeck {
    pub theta: f64,    // Mean reversion rate
    pub mu: f64,       // Long-term mean
    pub sigma: f64,    // Volatility
}

impl OrnsteinUhlenbeck {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        Self { theta, mu, sigma }
    }

    /// Effective noise covariance σ² I
    pub fn noise_covariance(&self, n: usize) -> NoiseMatrix {
        DMatrix::from_diagonal_element(n, n, self.sigma * self.sigma)
    }

    pub fn diffusion() -> DiffusionFunction<Self> {
        DiffusionFunction::out_of_place(|u: &State, p: &Self, _t: Time| {
            let n = u.dim();
            // Constant diffusion: σ * I
            DMatrix::from_diagonal_element(n, n, p.sigma)
        })
    }

    pub fn problem(self, u0: State, tspan: (Time, Time)) -> SdeProblem<Self> {
        let n = u0.dim();
        SdeProblem::new(
            // θ(μ - X_t)
            |u: &State, p: &Self, _t: Time| State(p.theta * u.0.map(|xi| p.mu - xi)),
            Some(Self::diffusion()),
            u0,
            tspan,
            self,
        )
        .with_noise_rate_prototype(DMatrix::zeros(n, n))
    }
}
