pub mod state;
pub mod drift;
pub mod diffusion;
pub mod problem;
pub mod noise;
pub mod linalg;
pub mod error;

// Core types
pub use state::{NoiseMatrix, State, Time};
pub use noise::SampleGenerator;
pub use error::{ConfigurationConflict, NoiseError, NoiseResult};

// SDE description
pub use drift::Drift;
pub use diffusion::{make_diffusion, AdaptedDiffusion, Diffusion, DiffusionFunction};
pub use problem::{NoiseDescriptor, SdeProblem};

// Numeric checks
pub use linalg::{is_invertible, DEFAULT_INVERTIBILITY_TOL};
