//! HHT Core - Hilbert-Huang Transform for non-stationary signal analysis
//!
//! Decomposes a real-valued signal into Intrinsic Mode Functions via EMD or
//! noise-assisted EEMD, then derives per-IMF instantaneous amplitude, phase
//! and frequency via the Hilbert transform, aggregated into a Hilbert
//! spectrum:
//! - FFT: iterative radix-2 Cooley-Tukey transform
//! - Hilbert transform: analytic signal via frequency-domain masking
//! - EMD/EEMD: sifting-based decomposition into IMFs plus residue
//! - Spectral analysis: instantaneous amplitude/phase/frequency per IMF
//! - Hilbert spectrum: time-frequency energy density and its marginal

pub mod config;
pub mod eemd;
pub mod emd;
pub mod envelope;
pub mod error;
pub mod fft;
pub mod float;
pub mod hilbert;
pub mod sifter;
pub mod signal;
pub mod spectral;
pub mod spectrum;
pub mod spline;
mod tridiag;

pub use config::{EemdConfig, EmdConfig};
pub use eemd::eemd_decompose;
pub use emd::{emd_decompose, Decomposition};
pub use error::{Error, Result};
pub use float::HhtFloat;
pub use signal::Signal;
pub use spectral::{analyse, SpectralAnalysis};
pub use spectrum::HilbertSpectrum;
