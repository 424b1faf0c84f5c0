use crate::{NoiseMatrix, State, Time};
use std::fmt;
use std::sync::Arc;

/// g(u, p, t) returning a freshly allocated noise matrix.
pub type OutOfPlaceFn<P> = dyn Fn(&State, &P, Time) -> NoiseMatrix + Send + Sync;

/// g(du, u, p, t) writing the noise matrix into `du`.
pub type InPlaceFn<P> = dyn Fn(&mut NoiseMatrix, &State, &P, Time) + Send + Sync;

/// A user-supplied diffusion coefficient together with its calling convention.
///
/// The convention is fixed when the function is constructed and is never
/// inferred from what the function does.
pub enum DiffusionFunction<P> {
    OutOfPlace(Arc<OutOfPlaceFn<P>>),
    InPlace(Arc<InPlaceFn<P>>),
}

impl<P> DiffusionFunction<P> {
    pub fn out_of_place<G>(g: G) -> Self
    where
        G: Fn(&State, &P, Time) -> NoiseMatrix + Send + Sync + 'static,
    {
        DiffusionFunction::OutOfPlace(Arc::new(g))
    }

    pub fn in_place<G>(g: G) -> Self
    where
        G: Fn(&mut NoiseMatrix, &State, &P, Time) + Send + Sync + 'static,
    {
        DiffusionFunction::InPlace(Arc::new(g))
    }

    pub fn is_in_place(&self) -> bool {
        matches!(self, DiffusionFunction::InPlace(_))
    }
}

impl<P> Clone for DiffusionFunction<P> {
    fn clone(&self) -> Self {
        match self {
            DiffusionFunction::OutOfPlace(g) => DiffusionFunction::OutOfPlace(Arc::clone(g)),
            DiffusionFunction::InPlace(g) => DiffusionFunction::InPlace(Arc::clone(g)),
        }
    }
}

impl<P> fmt::Debug for DiffusionFunction<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let convention = if self.is_in_place() { "InPlace" } else { "OutOfPlace" };
        f.debug_tuple("DiffusionFunction").field(&convention).finish()
    }
}

pub trait Diffusion<P>: Send + Sync {
    /// σ(u, p, t): maps the noise increment dW onto the state
    fn sigma(&self, u: &State, p: &P, t: Time) -> NoiseMatrix;

    /// Number of noise dimensions (columns in σ matrix)
    fn noise_dim(&self, u: &State, p: &P, t: Time) -> usize {
        self.sigma(u, p, t).ncols()
    }
}

/// A diffusion function normalised to the pure `sigma(u, p, t)` convention.
pub struct AdaptedDiffusion<'a, P> {
    g: &'a DiffusionFunction<P>,
    prototype: Option<&'a NoiseMatrix>,
}

impl<'a, P> AdaptedDiffusion<'a, P> {
    pub fn prototype(&self) -> Option<&'a NoiseMatrix> {
        self.prototype
    }

    pub fn is_in_place(&self) -> bool {
        self.g.is_in_place()
    }
}

impl<P> Diffusion<P> for AdaptedDiffusion<'_, P> {
    fn sigma(&self, u: &State, p: &P, t: Time) -> NoiseMatrix {
        match self.g {
            DiffusionFunction::OutOfPlace(g) => g(u, p, t),
            DiffusionFunction::InPlace(g) => {
                // Callers keep earlier outputs around, so every call gets its own buffer.
                let mut du = match self.prototype {
                    Some(proto) => proto.clone(),
                    None => u.to_column(),
                };
                g(&mut du, u, p, t);
                du
            }
        }
    }
}

/// Wrap `g` so that it can be called as `sigma(u, p, t)` whatever its convention.
pub fn make_diffusion<'a, P>(
    g: &'a DiffusionFunction<P>,
    noise_prototype: Option<&'a NoiseMatrix>,
) -> AdaptedDiffusion<'a, P> {
    AdaptedDiffusion { g, prototype: noise_prototype }
}
