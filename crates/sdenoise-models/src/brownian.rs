use sdenoise_core::{DiffusionFunction, NoiseMatrix, SdeProblem, State, Time};
use nalgebra::DMatrix;

/// Standard Brownian Motion: dX_t = 0 dt + σ dW_t
#[derive(Clone, Debug)]
pub struct BrownianMotion {
    pub sigma: f64,
}

impl BrownianMotion {
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// Standard Brownian motion with σ = 1
    pub fn standard() -> Self {
        Self::new(1.0)
    }

    /// Effective noise covariance σ² I
    pub fn noise_covariance(&self, n: usize) -> NoiseMatrix {
        DMatrix::from_diagonal_element(n, n, self.sigma * self.sigma)
    }

    /// In-place σ I, written into the caller's n x n buffer
    pub fn diffusion() -> DiffusionFunction<Self> {
        DiffusionFunction::in_place(|du: &mut NoiseMatrix, _u: &State, p: &Self, _t: Time| {
            du.fill(0.0);
            du.fill_diagonal(p.sigma);
        })
    }

    pub fn problem(self, u0: State, tspan: (Time, Time)) -> SdeProblem<Self> {
        let n = u0.dim();
        SdeProblem::new(
            // Zero drift
            |u: &State, _p: &Self, _t: Time| State::zeros(u.dim()),
            Some(Self::diffusion()),
            u0,
            tspan,
            self,
        )
        .with_noise_rate_prototype(DMatrix::zeros(n, n))
    }
}
