//! Extracts one IMF candidate from a residual signal by iterative
//! mean-envelope subtraction. Grounded in `Sifter` in the source
//! decomposition header; stopping criterion combines the extrema/zero-
//! crossing gap and Huang's normalized SD test, per the most recent source
//! revision.

use crate::envelope;
use crate::error::MonotonicSignal;
use crate::float::HhtFloat;
use num_traits::{Float, Zero};

const SD_THRESHOLD: f64 = 0.1;
const MAX_ITERATIONS: usize = 200;

/// Runs the sifting loop on `(xs, residual)` and returns the extracted IMF,
/// or `Err(MonotonicSignal)` if the residual has no interior extrema (the
/// EMD termination signal).
pub(crate) fn sift<F: HhtFloat>(xs: &[F], residual: &[F]) -> Result<Vec<F>, MonotonicSignal> {
    let mut h = residual.to_vec();
    let sd_threshold = F::from(SD_THRESHOLD).unwrap();
    let two = F::from(2.0).unwrap();

    for iteration in 0..MAX_ITERATIONS {
        let env = envelope::find(xs, &h)?;

        let h_next: Vec<F> = (0..h.len())
            .map(|i| h[i] - (env.upper[i] + env.lower[i]) / two)
            .collect();

        // max_count/min_count are interior-extrema counts (endpoint anchors excluded).
        let gap = (env.max_count as i64 + env.min_count as i64 - env.zero_crossings as i64).abs();

        let mut numerator = F::zero();
        let mut denominator = F::zero();
        for i in 0..h.len() {
            let diff = h[i] - h_next[i];
            numerator = numerator + diff * diff;
            denominator = denominator + h[i] * h[i];
        }
        let sd_ok = denominator == F::zero() || numerator / denominator < sd_threshold;

        h = h_next;

        tracing::trace!(iteration, gap, sd_ok, "sift iteration");

        if gap < 2 && sd_ok {
            break;
        }
    }

    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn single_sine_cycle_converges_near_identity() {
        let n = 64;
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..n).map(|i| (2.0 * PI * i as f64 / n as f64).sin()).collect();
        let imf = sift(&xs, &ys).unwrap();
        let residual_norm: f64 = ys
            .iter()
            .zip(imf.iter())
            .map(|(&y, &h)| (y - h).powi(2))
            .sum::<f64>()
            .sqrt();
        assert!(residual_norm < 1.0, "residual norm {residual_norm}");
    }

    #[test]
    fn monotone_residual_fails() {
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys = xs.clone();
        assert!(sift(&xs, &ys).is_err());
    }
}
