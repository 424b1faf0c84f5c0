//! Classifier settings.

use sdenoise_core::{NoiseError, NoiseResult, Time, DEFAULT_INVERTIBILITY_TOL};
use serde::{Deserialize, Serialize};

/// Sampling settings for [`NoiseClassifier`](crate::NoiseClassifier).
///
/// The defaults reproduce the standard probe schedule: 10 perturbed states,
/// 5 irregularly spaced time offsets, 10 linearity trials with scale 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Perturbed states evaluated by the state-independence probe
    #[serde(default = "default_state_samples")]
    pub state_samples: usize,
    /// Offsets from t0 evaluated by the time-independence probe
    #[serde(default = "default_time_offsets")]
    pub time_offsets: Vec<Time>,
    /// Sampled (x, y) pairs checked by the linearity probe
    #[serde(default = "default_linearity_trials")]
    pub linearity_trials: usize,
    /// Scalar c in the homogeneity check f(c·x) == c·f(x)
    #[serde(default = "default_homogeneity_scale")]
    pub homogeneity_scale: f64,
    /// Determinant magnitudes at or below this are singular
    #[serde(default = "default_invertibility_tol")]
    pub invertibility_tol: f64,
    /// Fixed seed for the sampling stream; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            state_samples: default_state_samples(),
            time_offsets: default_time_offsets(),
            linearity_trials: default_linearity_trials(),
            homogeneity_scale: default_homogeneity_scale(),
            invertibility_tol: default_invertibility_tol(),
            seed: None,
        }
    }
}

fn default_state_samples() -> usize {
    10
}

fn default_time_offsets() -> Vec<Time> {
    // Irregular spacing so periodic diffusion terms do not alias
    vec![0.0, 0.101, 1.01, 10.1, 101.0]
}

fn default_linearity_trials() -> usize {
    10
}

fn default_homogeneity_scale() -> f64 {
    2.0
}

fn default_invertibility_tol() -> f64 {
    DEFAULT_INVERTIBILITY_TOL
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_state_samples(mut self, samples: usize) -> Self {
        self.state_samples = samples;
        self
    }

    pub fn with_time_offsets(mut self, offsets: Vec<Time>) -> Self {
        self.time_offsets = offsets;
        self
    }

    pub fn with_linearity_trials(mut self, trials: usize) -> Self {
        self.linearity_trials = trials;
        self
    }

    pub fn with_homogeneity_scale(mut self, scale: f64) -> Self {
        self.homogeneity_scale = scale;
        self
    }

    pub fn with_invertibility_tol(mut self, tol: f64) -> Self {
        self.invertibility_tol = tol;
        self
    }

    /// Reject settings under which a probe cannot produce a meaningful answer.
    pub fn validate(&self) -> NoiseResult<()> {
        if self.state_samples == 0 {
            return Err(NoiseError::InvalidConfig(
                "state_samples must be at least 1".to_string(),
            ));
        }
        if self.time_offsets.is_empty() {
            return Err(NoiseError::InvalidConfig(
                "time_offsets must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self.time_offsets.iter().find(|t| !t.is_finite()) {
            return Err(NoiseError::InvalidConfig(format!(
                "time offset {} is not finite",
                bad
            )));
        }
        if self.linearity_trials == 0 {
            return Err(NoiseError::InvalidConfig(
                "linearity_trials must be at least 1".to_string(),
            ));
        }
        if !self.homogeneity_scale.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "homogeneity_scale {} is not finite",
                self.homogeneity_scale
            )));
        }
        if !(self.invertibility_tol.is_finite() && self.invertibility_tol > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "invertibility_tol {} must be positive and finite",
                self.invertibility_tol
            )));
        }
        Ok(())
    }
}
