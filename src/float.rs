//! Floating-point abstraction used throughout the decomposition and spectral
//! analysis pipeline, so the algorithms are written once and instantiated for
//! both `f32` and `f64`.

use num_traits::{Float, FloatConst};

/// Element type usable by the HHT pipeline.
///
/// Blanket-implemented for `f32` and `f64`; there is no reason for a caller
/// to implement this themselves.
pub trait HhtFloat:
    Float
    + FloatConst
    + Send
    + Sync
    + std::iter::Sum
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + std::ops::RemAssign
    + 'static
{
    fn from_usize(v: usize) -> Self;
}

impl HhtFloat for f32 {
    fn from_usize(v: usize) -> Self {
        v as f32
    }
}

impl HhtFloat for f64 {
    fn from_usize(v: usize) -> Self {
        v as f64
    }
}
