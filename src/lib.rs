#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod pipeline;
pub mod types;

// Stage-level modules – public, but considered unstable internals.
pub mod config;
pub mod detect;
pub mod resize;
pub mod score;

// --- High-level re-exports -------------------------------------------------

// Main entry points: scorer + results.
pub use crate::error::{Error, Result};
pub use crate::params::{ScorerParams, TARGET_PIXELS};
pub use crate::pipeline::{EdgeScorer, EdginessOutput, ScoredRun};
pub use crate::types::{EdgeMask, EdginessResult};

// High-level diagnostics returned by the scorer.
pub use crate::diagnostics::{EdginessReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_scorer::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let raster = RasterU8::new_gray(w, h, vec![0u8; w * h]).unwrap();
///
/// let scorer = EdgeScorer::new(ScorerParams::default()).unwrap();
/// let result = scorer.process(&raster).unwrap().result;
/// println!("edginess={:.2} latency_ms={:.3}", result.score, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RasterU8;
    pub use crate::{EdgeMask, EdgeScorer, EdginessResult, ScorerParams};
}
