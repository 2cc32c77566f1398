//! Empirical Mode Decomposition: repeatedly sifts IMFs out of the running
//! residue until it goes monotone or the IMF budget is exhausted. Grounded
//! in `InternalEmdDecomposer` in the source decomposition header.

use crate::config::EmdConfig;
use crate::error::Result;
use crate::float::HhtFloat;
use crate::sifter;
use crate::signal::Signal;
use num_traits::ToPrimitive;

/// Result of an EMD run: the extracted IMFs (highest to lowest frequency
/// content) and the final residue.
pub struct Decomposition<F: HhtFloat> {
    pub imfs: Vec<Vec<F>>,
    pub residue: Vec<F>,
}

/// Decomposes `(xs, ys)` into IMFs plus a residue. Fails with
/// `PreconditionViolated` when the input is empty, mismatched in length, or
/// `xs` is not strictly increasing.
pub fn emd_decompose<F: HhtFloat>(xs: &[F], ys: &[F], config: EmdConfig) -> Result<Decomposition<F>> {
    Signal::new(xs.to_vec(), ys.to_vec())?;

    let n = ys.len();
    let log2_cap = (n as f64).log2().floor() as usize + 1;
    let mut budget = config.max_imfs.min(log2_cap);

    let mut residue = ys.to_vec();
    let mut imfs = Vec::new();

    while budget > 0 {
        match sifter::sift(xs, &residue) {
            Ok(imf) => {
                for i in 0..n {
                    residue[i] = residue[i] - imf[i];
                }
                tracing::debug!(imf_index = imfs.len(), "extracted imf");
                imfs.push(imf);
                budget -= 1;
            }
            Err(_) => break,
        }
    }

    tracing::info!(
        imf_count = imfs.len(),
        residue_norm = residue.iter().map(|&r| (r * r).to_f64().unwrap_or(0.0)).sum::<f64>().sqrt(),
        "emd decomposition complete"
    );

    Ok(Decomposition { imfs, residue })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn boundary_n_equals_2_yields_no_imfs() {
        let xs = [0.0_f64, 1.0];
        let ys = [0.0_f64, 1.0];
        let d = emd_decompose(&xs, &ys, EmdConfig::default()).unwrap();
        assert!(d.imfs.is_empty());
        assert_eq!(d.residue, ys);
    }

    #[test]
    fn constant_signal_yields_no_imfs() {
        let xs: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let ys = vec![3.0_f64; 16];
        let d = emd_decompose(&xs, &ys, EmdConfig::default()).unwrap();
        assert!(d.imfs.is_empty());
        assert_eq!(d.residue, ys);
    }

    #[test]
    fn single_sine_cycle_yields_one_imf() {
        let n = 8;
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..n).map(|i| (2.0 * PI * i as f64 / n as f64).sin()).collect();
        let d = emd_decompose(&xs, &ys, EmdConfig::default()).unwrap();
        assert!(!d.imfs.is_empty());
        let residue_norm: f64 = d.residue.iter().map(|r| r * r).sum::<f64>().sqrt();
        assert!(residue_norm < 1e-2);
    }

    #[test]
    fn imfs_and_residue_sum_to_signal() {
        let n = 128;
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * i as f64 / 32.0).sin() + 0.5 * (2.0 * PI * i as f64 / 8.0).sin())
            .collect();
        let d = emd_decompose(&xs, &ys, EmdConfig::default()).unwrap();
        for i in 0..n {
            let sum: f64 = d.imfs.iter().map(|imf| imf[i]).sum::<f64>() + d.residue[i];
            assert!((sum - ys[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn rejects_empty_input() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];
        assert!(emd_decompose(&xs, &ys, EmdConfig::default()).is_err());
    }

    #[test]
    fn rejects_non_monotone_xs() {
        let xs = [0.0_f64, 0.0, 1.0];
        let ys = [0.0_f64, 1.0, 2.0];
        assert!(emd_decompose(&xs, &ys, EmdConfig::default()).is_err());
    }
}
