use thiserror::Error;

/// Mutually exclusive ways of specifying the noise covariance.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationConflict {
    #[error("the noise process carries its own covariance; correlated noise processes are not supported, pass the covariance explicitly instead")]
    NoiseCorrelation,

    #[error("a diffusion function and an explicit covariance were both given; encode the covariance in the diffusion function via a square noise prototype")]
    DiffusionWithCovariance,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("Configuration conflict: {0}")]
    ConfigurationConflict(#[from] ConfigurationConflict),

    #[error("Invalid classifier configuration: {0}")]
    InvalidConfig(String),
}

pub type NoiseResult<T> = Result<T, NoiseError>;
