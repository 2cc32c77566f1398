//! Ensemble EMD: runs independent EMD trials over noise-perturbed copies of
//! the signal in parallel and averages corresponding IMFs. Grounded in
//! `EemdDecomposer` in the source decomposition header, including its
//! per-index partial-count averaging when trials produce different IMF
//! counts.

use crate::config::EemdConfig;
use crate::emd;
use crate::error::{Error, Result};
use crate::float::HhtFloat;
use crate::signal::Signal;
use num_traits::{Float, NumCast, ToPrimitive, Zero};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

/// Decomposes `(xs, ys)` via EEMD. Returns averaged IMFs only; no residue
/// (averaging residues across trials is not meaningful). Fails with
/// `PreconditionViolated` when the input is empty, mismatched in length,
/// `xs` is not strictly increasing, or `ensemble_count`/`noise_sd` are
/// non-positive.
pub fn eemd_decompose<F: HhtFloat>(xs: &[F], ys: &[F], config: EemdConfig<F>) -> Result<Vec<Vec<F>>>
where
    F: NumCast,
{
    Signal::new(xs.to_vec(), ys.to_vec())?;

    if config.ensemble_count == 0 {
        return Err(Error::PreconditionViolated(
            "ensemble_count must be positive".into(),
        ));
    }
    let noise_sd: f64 = config.noise_sd.to_f64().unwrap_or(0.0);
    if !(noise_sd > 0.0) {
        return Err(Error::PreconditionViolated(
            "noise_sd must be positive".into(),
        ));
    }

    let n = ys.len();
    let seed = config.seed;

    let trials: Vec<Vec<Vec<F>>> = (0..config.ensemble_count)
        .into_par_iter()
        .map(|trial_index| -> Result<Vec<Vec<F>>> {
            let mut rng: rand::rngs::StdRng = match seed {
                Some(s) => rand::rngs::StdRng::seed_from_u64(s.wrapping_add(trial_index as u64)),
                None => rand::rngs::StdRng::from_entropy(),
            };
            let normal = Normal::new(0.0, noise_sd).expect("noise_sd checked positive above");

            let perturbed: Vec<F> = ys
                .iter()
                .map(|&y| {
                    let noise: f64 = normal.sample(&mut rng);
                    y + F::from(noise).unwrap_or(F::zero())
                })
                .collect();

            let decomposition =
                emd::emd_decompose(xs, &perturbed, crate::config::EmdConfig::default())?;
            Ok(decomposition.imfs)
        })
        .collect::<Result<Vec<Vec<Vec<F>>>>>()?;

    let max_imf_count = trials.iter().map(|t| t.len()).max().unwrap_or(0);
    let mut averaged = Vec::with_capacity(max_imf_count);

    for k in 0..max_imf_count {
        let contributing: Vec<&Vec<F>> = trials.iter().filter_map(|t| t.get(k)).collect();
        let count = contributing.len();
        tracing::debug!(imf_index = k, contributing_trials = count, "averaging eemd imf");
        if count == 0 {
            continue;
        }
        let mut mean = vec![F::zero(); n];
        for imf in &contributing {
            for i in 0..n {
                mean[i] = mean[i] + imf[i];
            }
        }
        let divisor = F::from_usize(count);
        for v in &mut mean {
            *v = *v / divisor;
        }
        averaged.push(mean);
    }

    tracing::info!(imf_count = averaged.len(), ensemble_count = config.ensemble_count, "eemd decomposition complete");
    Ok(averaged)
}
