/// Error type for the Hilbert-Huang pipeline.
///
/// Mirrors the fingerprint server's error enum: a small `thiserror`-derived
/// set of public, fatal conditions. The internal `MonotonicSignal` condition
/// used by the envelope finder and sifter never reaches this type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    #[error("numerical failure: {0}")]
    NumericalFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Raised internally when a signal (or residual) has no interior extrema.
/// Consumed by the sifter to terminate IMF extraction; never surfaced.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MonotonicSignal;
