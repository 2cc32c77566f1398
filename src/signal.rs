//! Input signal type shared by every stage of the pipeline.

use crate::error::{Error, Result};
use crate::float::HhtFloat;

/// A sampled real-valued signal over a strictly increasing time axis.
#[derive(Debug, Clone)]
pub struct Signal<F: HhtFloat> {
    pub xs: Vec<F>,
    pub ys: Vec<F>,
}

impl<F: HhtFloat> Signal<F> {
    /// Build a signal, validating the invariants every downstream stage
    /// relies on: equal lengths, at least two samples, strictly increasing
    /// time axis.
    pub fn new(xs: Vec<F>, ys: Vec<F>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::PreconditionViolated(format!(
                "xs and ys length mismatch: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(Error::PreconditionViolated(
                "signal must have at least 2 samples".into(),
            ));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::PreconditionViolated(
                "xs must be strictly increasing".into(),
            ));
        }
        Ok(Self { xs, ys })
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Mean sample interval, used as the effective timestep by callers that
    /// only have a time axis rather than an explicit `Δt`.
    pub fn mean_timestep(&self) -> F {
        let n = self.xs.len();
        (self.xs[n - 1] - self.xs[0]) / F::from_usize(n - 1)
    }
}
