//! Canonical SDE models with known noise structure.
//!
//! Each model is its own parameter type `P` and builds an [`SdeProblem`] whose
//! diffusion function reads its coefficients from `p`.
//!
//! [`SdeProblem`]: sdenoise_core::SdeProblem

pub mod gbm;
pub mod ou;
pub mod brownian;
pub mod double_well;

pub use gbm::GeometricBrownianMotion;
pub use ou::OrnsteinUhlenbeck;
pub use brownian::BrownianMotion;
pub use double_well::DoubleWell;
