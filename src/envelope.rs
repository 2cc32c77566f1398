//! Upper/lower envelope extraction for EMD sifting.
//!
//! Finds local extrema and zero crossings in a signal, anchors each extrema
//! sequence at the signal's endpoints, and fits the upper and lower
//! envelopes in parallel (cubic spline when there are enough knots, linear
//! fallback otherwise). Grounded in `EnvelopeFinder` in the source
//! decomposition header.

use crate::error::MonotonicSignal;
use crate::float::HhtFloat;
use crate::spline;
use num_traits::Zero;
use rayon::join;

/// An extrema sequence together with its matching envelope values on the
/// original time grid.
pub struct Envelope<F: HhtFloat> {
    pub upper: Vec<F>,
    pub lower: Vec<F>,
    /// Interior maxima only (the two endpoint anchors are excluded), matching
    /// `GetUpperExtremaCount` in the source decomposition header.
    pub max_count: usize,
    /// Interior minima only (the two endpoint anchors are excluded), matching
    /// `GetLowerExtremaCount` in the source decomposition header.
    pub min_count: usize,
    pub zero_crossings: usize,
}

struct Extrema<F: HhtFloat> {
    tx: Vec<F>,
    ty: Vec<F>,
}

fn find_extrema<F: HhtFloat>(xs: &[F], ys: &[F]) -> (Extrema<F>, Extrema<F>, usize) {
    let n = ys.len();
    let mut max_tx = vec![xs[0]];
    let mut max_ty = vec![ys[0]];
    let mut min_tx = vec![xs[0]];
    let mut min_ty = vec![ys[0]];

    for i in 1..n - 1 {
        if ys[i - 1] < ys[i] && ys[i] > ys[i + 1] {
            max_tx.push(xs[i]);
            max_ty.push(ys[i]);
        } else if ys[i - 1] > ys[i] && ys[i] < ys[i + 1] {
            min_tx.push(xs[i]);
            min_ty.push(ys[i]);
        }
    }

    max_tx.push(xs[n - 1]);
    max_ty.push(ys[n - 1]);
    min_tx.push(xs[n - 1]);
    min_ty.push(ys[n - 1]);

    let mut zero_crossings = 0usize;
    let zero = F::zero();
    if ys[0] == zero && ys[1] != zero {
        zero_crossings += 1;
    }
    for i in 0..n - 1 {
        let straddles = (ys[i] < zero && ys[i + 1] >= zero) || (ys[i] > zero && ys[i + 1] <= zero);
        if straddles {
            zero_crossings += 1;
        }
    }

    (
        Extrema { tx: max_tx, ty: max_ty },
        Extrema { tx: min_tx, ty: min_ty },
        zero_crossings,
    )
}

fn fit<F: HhtFloat>(extrema: &Extrema<F>, eval_x: &[F]) -> Vec<F> {
    if extrema.tx.len() >= 3 {
        spline::cubic_spline(&extrema.tx, &extrema.ty, eval_x)
            .expect("extrema count checked above")
    } else {
        spline::linear_spline(&extrema.tx, &extrema.ty, eval_x)
            .expect("2-knot fallback checked above")
    }
}

/// Computes the upper/lower envelope pair of `(xs, ys)`. Fails with
/// `MonotonicSignal` when the signal has no interior extrema at all.
pub(crate) fn find<F: HhtFloat>(xs: &[F], ys: &[F]) -> Result<Envelope<F>, MonotonicSignal> {
    let (max_extrema, min_extrema, zero_crossings) = find_extrema(xs, ys);

    // Only the two anchored endpoints: no interior extrema means the signal
    // is effectively monotone and cannot be sifted further.
    if max_extrema.tx.len() <= 2 && min_extrema.tx.len() <= 2 {
        return Err(MonotonicSignal);
    }

    let (upper, lower) = join(|| fit(&max_extrema, xs), || fit(&min_extrema, xs));

    Ok(Envelope {
        upper,
        lower,
        max_count: max_extrema.tx.len() - 2,
        min_count: min_extrema.tx.len() - 2,
        zero_crossings,
    })
}
