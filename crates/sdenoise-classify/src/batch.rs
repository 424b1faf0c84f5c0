use crate::classifier::{Classification, NoiseClassifier};
use crate::config::ClassifierConfig;
use rayon::prelude::*;
use sdenoise_core::{NoiseResult, SdeProblem};

/// Classify independent problems in parallel.
///
/// Problem `i` is classified on the stream derived from `(global_seed, i)`, so
/// the output does not depend on the thread count and matches classifying each
/// problem with `NoiseClassifier::with_stream(config, global_seed, i)`.
/// `config.seed` is ignored in favour of `global_seed`.
pub fn classify_batch<P>(
    problems: &[SdeProblem<P>],
    config: &ClassifierConfig,
    global_seed: u64,
) -> Vec<NoiseResult<Classification>>
where
    P: Sync,
{
    problems
        .par_iter()
        .enumerate()
        .map(|(id, problem)| {
            let mut classifier = NoiseClassifier::with_stream(config.clone(), global_seed, id as u64)?;
            classifier.find_noise_type_for_problem(problem)
        })
        .collect()
}
