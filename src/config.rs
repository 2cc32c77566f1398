//! Configuration structs for the decomposers, in the style of the DSP
//! library's `*Config` types (see `compressor::CompressorConfig`): plain
//! data, `Default`-able, and `serde`-derived so a caller can (de)serialize
//! them with whichever format their own configuration layer already uses.

use serde::{Deserialize, Serialize};

/// EMD decomposition parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmdConfig {
    /// Hard cap on the number of IMFs to extract. The effective cap used by
    /// `emd_decompose` is `min(max_imfs, floor(log2(N)) + 1)`.
    pub max_imfs: usize,
}

impl Default for EmdConfig {
    fn default() -> Self {
        Self {
            max_imfs: usize::MAX,
        }
    }
}

/// EEMD (ensemble EMD) parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EemdConfig<F> {
    pub ensemble_count: usize,
    pub noise_sd: F,
    /// Fixed RNG seed for reproducible ensembles. `None` seeds from entropy,
    /// matching the source's default (nondeterministic) behaviour.
    pub seed: Option<u64>,
}

impl<F: From<f32>> Default for EemdConfig<F> {
    fn default() -> Self {
        Self {
            ensemble_count: 100,
            noise_sd: F::from(1.0),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emd_config_default() {
        let c = EmdConfig::default();
        assert_eq!(c.max_imfs, usize::MAX);
    }

    #[test]
    fn eemd_config_default() {
        let c: EemdConfig<f64> = EemdConfig::default();
        assert_eq!(c.ensemble_count, 100);
        assert_eq!(c.noise_sd, 1.0);
        assert!(c.seed.is_none());
    }
}
