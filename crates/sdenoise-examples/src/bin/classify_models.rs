use sdenoise_classify::{classify_batch, ClassifierConfig, NoiseClassifier};
use sdenoise_core::{DiffusionFunction, NoiseMatrix, SdeProblem, State, Time};
use sdenoise_models::{BrownianMotion, DoubleWell, GeometricBrownianMotion, OrnsteinUhlenbeck};
use nalgebra::DMatrix;
use serde_json::json;
use tracing_subscriber::EnvFilter;

// State-dependent diffusion: σ(x) = 0.4 + 0.3x², nonlinear in the state
fn quadratic_noise_problem(u0: State, tspan: (Time, Time)) -> SdeProblem<()> {
    let g = DiffusionFunction::out_of_place(|u: &State, _p: &(), _t: Time| {
        let n = u.dim();
        let mut s = DMatrix::zeros(n, n);
        for i in 0..n {
            s[(i, i)] = 0.4 + 0.3 * u.0[i] * u.0[i];
        }
        s
    });
    let n = u0.dim();
    SdeProblem::new(|u: &State, _p: &(), _t: Time| State(-&u.0), Some(g), u0, tspan, ())
        .with_noise_rate_prototype(DMatrix::zeros(n, n))
}

// Seasonal volatility: σ(t) = 1 + 0.5 sin(2πt), additive but not autonomous
fn seasonal_noise_problem(u0: State, tspan: (Time, Time)) -> SdeProblem<()> {
    let g = DiffusionFunction::out_of_place(|u: &State, _p: &(), t: Time| {
        let n = u.dim();
        DMatrix::from_diagonal_element(n, n, 1.0 + 0.5 * (2.0 * std::f64::consts::PI * t).sin())
    });
    let n = u0.dim();
    SdeProblem::new(|u: &State, _p: &(), _t: Time| State::zeros(u.dim()), Some(g), u0, tspan, ())
        .with_noise_rate_prototype(DMatrix::zeros(n, n))
}

fn describe_covariance(cov: &Option<NoiseMatrix>) -> serde_json::Value {
    match cov {
        Some(c) => json!(c.row_iter().map(|r| r.iter().copied().collect::<Vec<f64>>()).collect::<Vec<_>>()),
        None => serde_json::Value::Null,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = 42;
    let u0 = State::new(vec![1.0, 1.0]);
    let tspan = (0.0, 1.0);
    let mut classifier = NoiseClassifier::new(ClassifierConfig::new().with_seed(seed))?;

    println!("Classifying canonical models (seed = {})", seed);
    println!();

    let cases = vec![
        ("brownian", classifier.find_noise_type_for_problem(&BrownianMotion::new(0.5).problem(u0.clone(), tspan))?),
        ("ou", classifier.find_noise_type_for_problem(&OrnsteinUhlenbeck::new(2.0, 5.0, 1.5).problem(u0.clone(), tspan))?),
        ("gbm", classifier.find_noise_type_for_problem(&GeometricBrownianMotion::new(0.05, 0.25).problem(u0.clone(), tspan))?),
        ("double-well", classifier.find_noise_type_for_problem(&DoubleWell::standard().problem(u0.clone(), tspan))?),
    ];

    for (name, result) in &cases {
        println!("{:<12} {}", name, result.noise_type);
        println!(
            "{:<12} covariance = {}",
            "",
            describe_covariance(&result.covariance)
        );
    }

    // Ad-hoc diffusion functions, classified in parallel on per-problem streams
    let custom = vec![
        quadratic_noise_problem(u0.clone(), tspan),
        seasonal_noise_problem(u0.clone(), tspan),
    ];
    let batch = classify_batch(&custom, classifier.config(), seed);
    let names = ["quadratic", "seasonal"];

    println!();
    for (name, result) in names.iter().zip(batch) {
        let result = result?;
        println!("{:<12} {}", name, result.noise_type);
    }

    Ok(())
}
