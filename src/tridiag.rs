//! Thomas algorithm for symmetric tridiagonal systems, as used by the
//! natural cubic spline's second-derivative solve (`TriDiagonalMatrix` in
//! the source decomposition header).
//!
//! The forward sweep reads `i-1`, so it must start at `i = 1` with `i = 0`
//! seeded directly; one source revision starts the loop at `i = 0` and reads
//! out of bounds.

use crate::float::HhtFloat;
use num_traits::Zero;

/// Solves `T x = d` for a tridiagonal `T` with sub-diagonal `a`, main
/// diagonal `b`, super-diagonal `c`, each length `N` (`a[0]` and `c[N-1]`
/// are unused, kept for uniform indexing).
pub fn solve<F: HhtFloat>(a: &[F], b: &[F], c: &[F], d: &[F]) -> Vec<F> {
    let n = b.len();
    let mut c_prime = vec![F::zero(); n];
    let mut d_prime = vec![F::zero(); n];

    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let denom = b[i] - c_prime[i - 1] * a[i];
        c_prime[i] = c[i] / denom;
        d_prime[i] = (d[i] - d_prime[i - 1] * a[i]) / denom;
    }

    let mut x = vec![F::zero(); n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_identity_system() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 1.0, 1.0];
        let c = [0.0, 0.0, 0.0];
        let d = [1.0, 2.0, 3.0];
        let x = solve::<f64>(&a, &b, &c, &d);
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn solves_classic_tridiagonal_system() {
        // [2 1 0; 1 2 1; 0 1 2] x = [1, 0, 1]
        let a = [0.0, 1.0, 1.0];
        let b = [2.0, 2.0, 2.0];
        let c = [1.0, 1.0, 0.0];
        let d = [1.0, 0.0, 1.0];
        let x = solve::<f64>(&a, &b, &c, &d);
        // Verify by substitution rather than hand-derived expected values.
        assert!((2.0 * x[0] + x[1] - 1.0).abs() < 1e-9);
        assert!((x[0] + 2.0 * x[1] + x[2] - 0.0).abs() < 1e-9);
        assert!((x[1] + 2.0 * x[2] - 1.0).abs() < 1e-9);
    }
}
