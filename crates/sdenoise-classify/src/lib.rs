//! Noise-structure classification for SDE models.
//!
//! Decides, by sampling an opaque diffusion function, whether the noise of an
//! SDE is additive, autonomous, linear and invertible, and derives the
//! effective constant covariance where one exists. Integrators use the result
//! to pick a specialised scheme.

pub mod config;
pub mod probes;
pub mod classifier;
pub mod batch;

pub use config::ClassifierConfig;
pub use classifier::{find_noise_type, find_noise_type_for_problem, Classification, NoiseClassifier, NoiseType};
pub use batch::classify_batch;
pub use probes::{is_linear, is_state_independent, is_time_independent, linearity_trials};
