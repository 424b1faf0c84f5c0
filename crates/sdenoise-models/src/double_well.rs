use sdenoise_core::{DiffusionFunction, NoiseDescriptor, SdeProblem, State, Time};
use nalgebra::DMatrix;

/// Double-well potential model: dX_t = -∇U(X_t) dt + √(2β⁻¹) dW_t
/// where U(x) = a*x^4 - b*x^2 (quartic double-well potential)
#[derive(Clone, Debug)]
pub struct DoubleWell {
    pub a: f64,          // Quartic coefficient (a > 0)
    pub b: f64,          // Quadratic coefficient (b > 0 for double well)
    pub temperature: f64, // β⁻¹ = k_B T (inverse temperature)
}

impl DoubleWell {
    pub fn new(a: f64, b: f64, temperature: f64) -> Self {
        assert!(a > 0.0, "Quartic coefficient a must be positive for stability");
        assert!(b > 0.0, "Quadratic coefficient b must be positive for double well");
        assert!(temperature > 0.0, "Temperature must be positive");

        Self { a, b, temperature }
    }

    /// Standard symmetric double well with unit barrier
    pub fn standard() -> Self {
        Self::new(1.0, 2.0, 0.1)
    }

    /// Force (negative gradient): -dU/dx = -4ax³ + 2bx
    pub fn force(&self, x: f64) -> f64 {
        -4.0 * self.a * x.powi(3) + 2.0 * self.b * x
    }

    /// Effective noise strength: √(2β⁻¹)
    pub fn noise_strength(&self) -> f64 {
        (2.0 * self.temperature).sqrt()
    }

    /// Diagonal noise: one independent √(2β⁻¹) per coordinate, as an n x 1 column.
    pub fn diffusion() -> DiffusionFunction<Self> {
        DiffusionFunction::out_of_place(|u: &State, p: &Self, _t: Time| {
            DMatrix::from_element(u.dim(), 1, p.noise_strength())
        })
    }

    /// Diagonal-noise problem driven by uncorrelated Wiener increments; no
    /// noise prototype, so the noise is read as one channel per coordinate.
    pub fn problem(self, u0: State, tspan: (Time, Time)) -> SdeProblem<Self> {
        SdeProblem::new(
            // Drift is the negative gradient of potential: -∇U(x)
            |u: &State, p: &Self, _t: Time| State(u.0.map(|xi| p.force(xi))),
            Some(Self::diffusion()),
            u0,
            tspan,
            self,
        )
        .with_noise(NoiseDescriptor::wiener())
    }
}
