//! Natural cubic spline interpolation through a set of knots, with a linear
//! fallback for the degenerate 2-knot case. Grounded in `CubicSpline` /
//! `LinearSpline` in the source decomposition header.

use crate::error::{Error, Result};
use crate::float::HhtFloat;
use crate::tridiag;
use num_traits::{Float, One, Zero};

/// Fits a natural cubic spline through `(knot_x, knot_y)` and evaluates it at
/// every point in `eval_x`. Requires `knot_x.len() >= 3` and strictly
/// increasing knots.
pub fn cubic_spline<F: HhtFloat>(knot_x: &[F], knot_y: &[F], eval_x: &[F]) -> Result<Vec<F>> {
    let k = knot_x.len();
    if k < 3 || knot_y.len() != k {
        return Err(Error::PreconditionViolated(
            "cubic spline requires at least 3 matching knots".into(),
        ));
    }

    let second_derivs = solve_natural_spline(knot_x, knot_y);

    let out = eval_x
        .iter()
        .map(|&x| evaluate_at(knot_x, knot_y, &second_derivs, x))
        .collect();
    Ok(out)
}

/// Degenerate 2-knot affine fit.
pub fn linear_spline<F: HhtFloat>(knot_x: &[F], knot_y: &[F], eval_x: &[F]) -> Result<Vec<F>> {
    if knot_x.len() != 2 || knot_y.len() != 2 {
        return Err(Error::PreconditionViolated(
            "linear spline requires exactly 2 knots".into(),
        ));
    }
    let (x0, x1) = (knot_x[0], knot_x[1]);
    let (y0, y1) = (knot_y[0], knot_y[1]);
    let slope = (y1 - y0) / (x1 - x0);
    Ok(eval_x.iter().map(|&x| y0 + slope * (x - x0)).collect())
}

fn solve_natural_spline<F: HhtFloat>(knot_x: &[F], knot_y: &[F]) -> Vec<F> {
    let k = knot_x.len();
    let mut a = vec![F::zero(); k];
    let mut b = vec![F::zero(); k];
    let mut c = vec![F::zero(); k];
    let mut d = vec![F::zero(); k];

    let two = F::from(2.0).unwrap();
    let six = F::from(6.0).unwrap();

    b[0] = F::one();
    b[k - 1] = F::one();

    for i in 1..k - 1 {
        let h_im1 = knot_x[i] - knot_x[i - 1];
        let h_i = knot_x[i + 1] - knot_x[i];
        a[i] = h_im1;
        b[i] = two * (h_im1 + h_i);
        c[i] = h_i;
        d[i] = six
            * ((knot_y[i + 1] - knot_y[i]) / h_i - (knot_y[i] - knot_y[i - 1]) / h_im1);
    }

    tridiag::solve(&a, &b, &c, &d)
}

fn evaluate_at<F: HhtFloat>(knot_x: &[F], knot_y: &[F], m: &[F], x: F) -> F {
    let k = knot_x.len();
    let mut j = match knot_x.binary_search_by(|probe| probe.partial_cmp(&x).unwrap()) {
        Ok(idx) => idx.max(1),
        Err(idx) => idx.clamp(1, k - 1),
    };
    if j == 0 {
        j = 1;
    }

    let h = knot_x[j] - knot_x[j - 1];
    let dx0 = x - knot_x[j - 1];
    let dx1 = knot_x[j] - x;
    let six = F::from(6.0).unwrap();

    let term_m = (dx1 * dx1 * dx1 * m[j - 1] + dx0 * dx0 * dx0 * m[j]) / (six * h);
    let term_lin = (dx1 * (knot_y[j - 1] - m[j - 1] * h * h / six)
        + dx0 * (knot_y[j] - m[j] * h * h / six))
        / h;
    term_m + term_lin
}
