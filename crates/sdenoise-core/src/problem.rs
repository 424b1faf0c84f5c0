use crate::diffusion::DiffusionFunction;
use crate::drift::Drift;
use crate::{NoiseMatrix, State, Time};
use std::fmt;
use std::sync::Arc;

/// Description of the driving noise process.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseDescriptor {
    pub name: String,
    /// Correlation carried by the process itself
    pub covariance: Option<NoiseMatrix>,
}

impl NoiseDescriptor {
    /// Uncorrelated Wiener increments
    pub fn wiener() -> Self {
        Self { name: "wiener".to_string(), covariance: None }
    }

    pub fn correlated(name: impl Into<String>, covariance: NoiseMatrix) -> Self {
        Self { name: name.into(), covariance: Some(covariance) }
    }

    pub fn is_correlated(&self) -> bool {
        self.covariance.is_some()
    }
}

/// du = f(u, p, t) dt + g(u, p, t) dW on `tspan`.
///
/// `g` is optional: without it the noise is described by a covariance alone.
pub struct SdeProblem<P> {
    pub f: Arc<dyn Drift<P>>,
    pub g: Option<DiffusionFunction<P>>,
    pub u0: State,
    pub tspan: (Time, Time),
    pub p: P,
    pub noise: Option<NoiseDescriptor>,
    pub noise_rate_prototype: Option<NoiseMatrix>,
}

impl<P> SdeProblem<P> {
    pub fn new<F>(
        f: F,
        g: Option<DiffusionFunction<P>>,
        u0: State,
        tspan: (Time, Time),
        p: P,
    ) -> Self
    where
        F: Drift<P> + 'static,
    {
        Self {
            f: Arc::new(f),
            g,
            u0,
            tspan,
            p,
            noise: None,
            noise_rate_prototype: None,
        }
    }

    pub fn with_noise(mut self, noise: NoiseDescriptor) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn with_noise_rate_prototype(mut self, prototype: NoiseMatrix) -> Self {
        self.noise_rate_prototype = Some(prototype);
        self
    }

    pub fn dim(&self) -> usize {
        self.u0.dim()
    }

    pub fn initial_time(&self) -> Time {
        self.tspan.0
    }

    pub fn is_in_place(&self) -> bool {
        self.g.as_ref().is_some_and(DiffusionFunction::is_in_place)
    }

    pub fn drift(&self, u: &State, t: Time) -> State {
        self.f.mu(u, &self.p, t)
    }
}

impl<P: Clone> Clone for SdeProblem<P> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            g: self.g.clone(),
            u0: self.u0.clone(),
            tspan: self.tspan,
            p: self.p.clone(),
            noise: self.noise.clone(),
            noise_rate_prototype: self.noise_rate_prototype.clone(),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for SdeProblem<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdeProblem")
            .field("g", &self.g)
            .field("u0", &self.u0)
            .field("tspan", &self.tspan)
            .field("p", &self.p)
            .field("noise", &self.noise)
            .field("noise_rate_prototype", &self.noise_rate_prototype)
            .finish_non_exhaustive()
    }
}
