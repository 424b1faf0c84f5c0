use crate::config::ClassifierConfig;
use crate::probes::{is_state_independent, is_time_independent, linearity_trials};
use nalgebra::DMatrix;
use sdenoise_core::linalg::{is_invertible, outer_product};
use sdenoise_core::{
    make_diffusion, ConfigurationConflict, Diffusion, DiffusionFunction, NoiseDescriptor,
    NoiseMatrix, NoiseResult, SampleGenerator, SdeProblem, State, Time,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Structural properties of an SDE's noise term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoiseType {
    /// σ does not depend on the state
    pub additive: bool,
    /// σ does not depend on time
    pub autonomous: bool,
    pub linear: bool,
    /// The effective covariance is non-singular
    pub invertible: bool,
}

impl NoiseType {
    pub fn new(additive: bool, autonomous: bool, linear: bool, invertible: bool) -> Self {
        Self { additive, autonomous, linear, invertible }
    }

    /// Constant, non-degenerate noise: every property holds.
    pub fn is_scalar_like(&self) -> bool {
        self.additive && self.autonomous && self.linear && self.invertible
    }
}

impl fmt::Display for NoiseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |b: bool| if b { '+' } else { '-' };
        write!(
            f,
            "{}additive {}autonomous {}linear {}invertible",
            flag(self.additive),
            flag(self.autonomous),
            flag(self.linear),
            flag(self.invertible)
        )
    }
}

/// Result of a classification: the noise type and, where it is defined, the
/// effective constant covariance matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub noise_type: NoiseType,
    pub covariance: Option<NoiseMatrix>,
}

impl Classification {
    pub fn into_parts(self) -> (NoiseType, Option<NoiseMatrix>) {
        (self.noise_type, self.covariance)
    }
}

/// Heuristic noise classifier.
///
/// Owns the random stream used by the probes, so a classifier built with a
/// fixed seed classifies reproducibly. The result is correct with high
/// probability, not with certainty.
pub struct NoiseClassifier {
    config: ClassifierConfig,
    rng: SampleGenerator,
}

impl NoiseClassifier {
    /// Seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: ClassifierConfig) -> NoiseResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SampleGenerator::new(seed),
            None => SampleGenerator::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: ClassifierConfig::default().with_seed(seed),
            rng: SampleGenerator::new(seed),
        }
    }

    /// Classifier on the stream derived from `(global_seed, stream_id)`.
    pub fn with_stream(
        config: ClassifierConfig,
        global_seed: u64,
        stream_id: u64,
    ) -> NoiseResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SampleGenerator::from_path_id(global_seed, stream_id),
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify the noise of `du = … dt + g(u, p, t) dW` around `(u0, t0)`.
    ///
    /// Branches, first match wins:
    /// 1. `noise` carries its own covariance: conflict.
    /// 2. no `g`: additive, autonomous and linear; covariance is the given one
    ///    (checked for invertibility) or the identity.
    /// 3. `g` and `covariance` both given: conflict.
    /// 4. otherwise probe `g`.
    #[allow(clippy::too_many_arguments)]
    pub fn find_noise_type<P>(
        &mut self,
        g: Option<&DiffusionFunction<P>>,
        u0: &State,
        p: &P,
        t0: Time,
        noise: Option<&NoiseDescriptor>,
        covariance: Option<&NoiseMatrix>,
        noise_prototype: Option<&NoiseMatrix>,
    ) -> NoiseResult<Classification> {
        if noise.is_some_and(NoiseDescriptor::is_correlated) {
            return Err(ConfigurationConflict::NoiseCorrelation.into());
        }

        let dim = u0.dim();
        let g = match (g, covariance) {
            (None, None) => {
                debug!(dim, "no diffusion function, identity covariance");
                return Ok(Classification {
                    noise_type: NoiseType::new(true, true, true, true),
                    covariance: Some(DMatrix::identity(dim, dim)),
                });
            }
            (None, Some(cov)) => {
                let invertible = is_invertible(cov, self.config.invertibility_tol);
                if !invertible {
                    warn!(dim, "explicit covariance is singular");
                }
                return Ok(Classification {
                    noise_type: NoiseType::new(true, true, true, invertible),
                    covariance: Some(cov.clone()),
                });
            }
            (Some(_), Some(_)) => {
                return Err(ConfigurationConflict::DiffusionWithCovariance.into());
            }
            (Some(g), None) => g,
        };

        let sigma = make_diffusion(g, noise_prototype);
        let classification = self.probe(&sigma, u0, p, t0, noise_prototype);
        debug!(
            in_place = sigma.is_in_place(),
            noise_type = %classification.noise_type,
            "classified diffusion function"
        );
        Ok(classification)
    }

    /// Classify from a full problem description, starting at `tspan.0`.
    ///
    /// No separate covariance is accepted here; it must already be encoded in
    /// `g` or in the problem's noise descriptor.
    pub fn find_noise_type_for_problem<P>(
        &mut self,
        problem: &SdeProblem<P>,
    ) -> NoiseResult<Classification> {
        self.find_noise_type(
            problem.g.as_ref(),
            &problem.u0,
            &problem.p,
            problem.initial_time(),
            problem.noise.as_ref(),
            None,
            problem.noise_rate_prototype.as_ref(),
        )
    }

    fn probe<P, D>(
        &mut self,
        sigma: &D,
        u0: &State,
        p: &P,
        t0: Time,
        noise_prototype: Option<&NoiseMatrix>,
    ) -> Classification
    where
        D: Diffusion<P> + ?Sized,
    {
        let config = &self.config;
        let dim = u0.dim();

        let probe_state = self.rng.uniform(dim);
        let autonomous = is_time_independent(sigma, &probe_state, p, t0, &config.time_offsets);
        let additive = is_state_independent(sigma, u0, p, t0, &mut self.rng, config.state_samples);

        // State-independent noise is linear in the state by definition.
        let linear = additive
            || linearity_trials(
                sigma,
                u0,
                p,
                t0,
                &mut self.rng,
                config.linearity_trials,
                config.homogeneity_scale,
            );

        if !(autonomous && additive) {
            return Classification {
                noise_type: NoiseType::new(additive, autonomous, linear, false),
                covariance: None,
            };
        }

        let (invertible, covariance) = match noise_prototype {
            Some(proto) if proto.is_square() => {
                let a = sigma.sigma(&State::zeros(dim), p, 0.0);
                let cov = outer_product(&a);
                let invertible = is_invertible(&cov, config.invertibility_tol);
                if !invertible {
                    warn!(dim, "constant noise has a singular covariance");
                }
                (invertible, Some(cov))
            }
            Some(proto) => {
                debug!(
                    rows = proto.nrows(),
                    cols = proto.ncols(),
                    "non-square noise prototype, no covariance"
                );
                (false, None)
            }
            None => (true, Some(DMatrix::identity(dim, dim))),
        };

        Classification {
            noise_type: NoiseType::new(additive, autonomous, linear, invertible),
            covariance,
        }
    }
}

/// Classify with an entropy-seeded classifier and default settings.
#[allow(clippy::too_many_arguments)]
pub fn find_noise_type<P>(
    g: Option<&DiffusionFunction<P>>,
    u0: &State,
    p: &P,
    t0: Time,
    noise: Option<&NoiseDescriptor>,
    covariance: Option<&NoiseMatrix>,
    noise_prototype: Option<&NoiseMatrix>,
) -> NoiseResult<Classification> {
    NoiseClassifier::new(ClassifierConfig::default())?
        .find_noise_type(g, u0, p, t0, noise, covariance, noise_prototype)
}

/// [`find_noise_type`] on a full problem description.
pub fn find_noise_type_for_problem<P>(problem: &SdeProblem<P>) -> NoiseResult<Classification> {
    NoiseClassifier::new(ClassifierConfig::default())?.find_noise_type_for_problem(problem)
}
