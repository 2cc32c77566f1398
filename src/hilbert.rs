//! Discrete-time analytic signal via FFT, following `HilbertTransform::Forward`
//! in the source spectral-analysis header: double the positive frequencies,
//! zero the negative ones, leave DC and Nyquist untouched, then invert.

use crate::fft;
use crate::float::HhtFloat;
use num_complex::Complex;
use num_traits::{Float, Zero};

/// Returns the analytic signal of `ys`, padded to the FFT length `M >= N`.
/// Callers use the first `N` entries.
pub fn analytic<F: HhtFloat>(ys: &[F]) -> Vec<Complex<F>> {
    let (mut spectrum, m) = fft::forward_real(ys);

    let two = F::from(2.0).unwrap();
    let half = m / 2;
    for bin in spectrum.iter_mut().take(half).skip(1) {
        *bin = *bin * two;
    }
    for bin in spectrum.iter_mut().take(m).skip(half + 1) {
        *bin = Complex::new(F::zero(), F::zero());
    }
    // bins 0 and half (if present) are left unchanged.

    fft::inverse(&spectrum).expect("spectrum length is always a power of two")
}
