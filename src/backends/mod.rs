//! Inference backend adapters and availability probing.

pub mod fallback;
pub mod mlx;
pub mod pipeline;
#[cfg(feature = "inference")]
pub mod textgen;

use once_cell::sync::Lazy;
use tracing::debug;

/// Prefix marking identifiers curated for the accelerated backend.
pub const ACCELERATED_PREFIX: &str = "mlx-community/";

/// Minimum summary length enforced on the seq2seq paths.
pub const MIN_SUMMARY_TOKENS: usize = 30;

/// Generation knobs shared by every backend.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_tokens: usize,
    pub temperature: f64,
    pub top_p: f64,
}

impl GenerationParams {
    /// Sampling is enabled only for strictly positive temperatures.
    pub fn sampling_enabled(&self) -> bool {
        self.temperature > 0.0
    }
}

/// One summarization request as assembled by the CLI shell.
#[derive(Debug, Clone)]
pub struct Request {
    pub text: String,
    pub model: String,
    pub use_mlx: bool,
    pub params: GenerationParams,
}

impl Request {
    /// Raw namespace membership, independent of the `--use-mlx` flag.
    pub fn in_accelerated_namespace(&self) -> bool {
        self.model.starts_with(ACCELERATED_PREFIX)
    }

    /// Whether this request is routed through the accelerated backend.
    pub fn accelerated(&self) -> bool {
        self.use_mlx && self.in_accelerated_namespace()
    }
}

/// Per-backend availability for this process.
#[derive(Debug, Clone, Copy)]
pub struct DependencySet {
    pub mlx: bool,
    pub general: bool,
}

static PROBED: Lazy<DependencySet> = Lazy::new(|| DependencySet {
    mlx: mlx_available(),
    general: general_available(),
});

/// Probe backend availability; a failed probe is permanent for the process lifetime.
pub fn probe() -> DependencySet {
    *PROBED
}

#[cfg(feature = "metal")]
fn mlx_available() -> bool {
    let available = candle_core::utils::metal_is_available();
    if !available {
        debug!("metal feature compiled in but no usable Metal device found");
    }
    available
}

#[cfg(not(feature = "metal"))]
fn mlx_available() -> bool {
    debug!("accelerated backend not compiled in; rebuild with --features metal");
    false
}

#[cfg(feature = "inference")]
fn general_available() -> bool {
    true
}

#[cfg(not(feature = "inference"))]
fn general_available() -> bool {
    debug!("inference stack not compiled in; rebuild with --features inference");
    false
}
