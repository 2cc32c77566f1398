//! Iterative radix-2 Cooley-Tukey FFT.
//!
//! Preserves the source's non-standard forward sign convention
//! (`+2*pi*i` twiddles, the convention usually associated with an inverse
//! DFT) so that spectra produced here match the original bit for bit in
//! shape. The inverse is recovered by conjugation, which cancels the sign
//! choice out.

use crate::error::{Error, Result};
use crate::float::HhtFloat;
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use rayon::prelude::*;

/// Smallest power of two that is `>= n`.
fn next_pow2(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let mut m = 1usize;
    while m < n {
        m <<= 1;
    }
    m
}

fn bit_reverse_permute<F: HhtFloat>(buf: &mut [Complex<F>]) {
    let n = buf.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            buf.swap(i, j);
        }
    }
}

/// One iterative radix-2 forward transform, in place. `buf.len()` must be a
/// power of two. Uses the `+2*pi*i` twiddle convention (see module docs).
fn fft_in_place<F: HhtFloat>(buf: &mut [Complex<F>]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    bit_reverse_permute(buf);

    let two = F::from(2.0).unwrap();
    let mut m = 2usize;
    while m <= n {
        let theta = two * F::PI() / F::from_usize(m);
        let wm = Complex::new(theta.cos(), theta.sin());
        let half = m / 2;

        buf.par_chunks_mut(m).for_each(|block| {
            let mut w = Complex::new(F::one(), F::zero());
            for j in 0..half {
                let t = w * block[j + half];
                let u = block[j];
                block[j] = u + t;
                block[j + half] = u - t;
                w *= wm;
            }
        });

        m <<= 1;
    }
}

/// Zero-pads `ys` to the next power-of-two length and returns its forward
/// transform. Never fails: any real input of any length is admissible.
pub fn forward_real<F: HhtFloat>(ys: &[F]) -> (Vec<Complex<F>>, usize) {
    let m = next_pow2(ys.len());
    let mut buf: Vec<Complex<F>> = Vec::with_capacity(m);
    buf.extend(ys.iter().map(|&y| Complex::new(y, F::zero())));
    buf.resize(m, Complex::new(F::zero(), F::zero()));
    fft_in_place(&mut buf);
    (buf, m)
}

/// Inverse transform via conjugation: conjugate, forward-transform,
/// conjugate, divide by length. Requires a power-of-two length.
pub fn inverse<F: HhtFloat>(buf: &[Complex<F>]) -> Result<Vec<Complex<F>>> {
    let n = buf.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(Error::PreconditionViolated(format!(
            "inverse FFT requires a power-of-two length, got {n}"
        )));
    }
    let mut work: Vec<Complex<F>> = buf.iter().map(|c| c.conj()).collect();
    fft_in_place(&mut work);
    let scale = F::from_usize(n);
    for c in &mut work {
        *c = c.conj() / scale;
    }
    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn impulse_transforms_to_all_ones() {
        let (buf, m) = forward_real(&[1.0_f64, 0.0, 0.0, 0.0]);
        assert_eq!(m, 4);
        for c in &buf {
            assert!(close(c.re, 1.0) && close(c.im, 0.0));
        }
    }

    #[test]
    fn constant_transforms_to_spike_at_dc() {
        let (buf, _) = forward_real(&[1.0_f64, 1.0, 1.0, 1.0]);
        assert!(close(buf[0].re, 4.0) && close(buf[0].im, 0.0));
        for c in &buf[1..] {
            assert!(close(c.re, 0.0) && close(c.im, 0.0));
        }
    }

    #[test]
    fn forward_then_inverse_round_trips() {
        let ys = [1.0_f64, 2.0, -1.0, 0.5, 3.0, -2.0, 0.0, 1.5];
        let (buf, m) = forward_real(&ys);
        let back = inverse(&buf).unwrap();
        for i in 0..m {
            assert!(close(back[i].re, ys[i]));
            assert!(close(back[i].im, 0.0));
        }
    }

    #[test]
    fn inverse_rejects_non_power_of_two() {
        let buf = vec![Complex::new(1.0_f64, 0.0); 3];
        assert!(inverse(&buf).is_err());
    }

    #[test]
    fn pads_non_power_of_two_input() {
        let (_, m) = forward_real(&[1.0_f64; 5]);
        assert_eq!(m, 8);
    }
}
