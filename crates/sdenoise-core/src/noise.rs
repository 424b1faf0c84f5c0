use crate::State;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Uniform};

/// Random stream that drives the sampling probes.
///
/// Seeded generators reproduce the same sample points, and therefore the same
/// classification, on every run.
pub struct SampleGenerator {
    rng: ChaCha20Rng,
    unit: Uniform<f64>,
    seed: Option<u64>,
}

impl SampleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            unit: Uniform::new(0.0, 1.0),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
            unit: Uniform::new(0.0, 1.0),
            seed: None,
        }
    }

    pub fn from_path_id(global_seed: u64, path_id: u64) -> Self {
        // Combine seeds deterministically
        let seed = global_seed.wrapping_add(path_id.wrapping_mul(0x9e3779b97f4a7c15));
        Self::new(seed)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Elementwise draw from U[0, 1).
    pub fn uniform(&mut self, n: usize) -> State {
        let values: Vec<f64> = (0..n)
            .map(|_| self.unit.sample(&mut self.rng))
            .collect();
        State::new(values)
    }

    /// `u + r - 0.5` with `r ~ U[0, 1)`, i.e. a perturbation uniform on [-0.5, 0.5).
    pub fn perturb(&mut self, u: &State) -> State {
        let r = self.uniform(u.dim());
        State(u.0.zip_map(&r.0, |ui, ri| ui + ri - 0.5))
    }
}
