//! Parameter types for the scoring pipeline.
//!
//! The caller-facing surface is deliberately small: the two hysteresis
//! threshold ratios and the pixel-count target. Smoothing constants are
//! fixed inside the detector so that scores stay comparable across runs.

/// Nominal pixel-count target the resizer drives inputs toward, and the
/// denominator of the edginess score.
pub const TARGET_PIXELS: usize = 1_000_000;

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug)]
pub struct ScorerParams {
    /// Low hysteresis threshold, as a ratio of the max thinned magnitude.
    pub low: f32,
    /// High hysteresis threshold, as a ratio of the max thinned magnitude.
    pub high: f32,
    /// Pixel-count target for size normalization and score normalization.
    pub target_pixels: usize,
}

impl Default for ScorerParams {
    fn default() -> Self {
        Self {
            low: 0.04,
            high: 0.13,
            target_pixels: TARGET_PIXELS,
        }
    }
}
