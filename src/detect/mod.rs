//! Canny-style edge detector: smoothing → gradient → suppression → hysteresis.
//!
//! Strictly staged with no state carried between calls; each stage fully
//! materializes its output before the next one reads it. The stages live in
//! focused submodules:
//!
//! - [`gaussian`]: separable Gaussian smoothing (fixed kernel, replicate
//!   borders).
//! - [`grad`]: Sobel derivative pair with magnitude and 4-bin quantized
//!   direction.
//! - [`nms`]: direction-aligned non-maximum suppression.
//! - [`hysteresis`]: relative double thresholds plus stack-based
//!   8-connected promotion of weak pixels.
//!
//! The front type [`EdgeDetector`] validates the threshold pair once and
//! runs the chain on a grayscale float plane.

pub mod gaussian;
pub mod grad;
pub mod hysteresis;
pub mod nms;

use crate::error::{Error, Result};
use crate::image::ImageF32;
use crate::types::EdgeMask;
use log::debug;
use std::time::Instant;

/// Edge detector configured with a validated threshold pair.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    low: f32,
    high: f32,
}

/// Mask plus per-stage wall times, for diagnostics reporting.
pub struct DetectOutcome {
    pub mask: EdgeMask,
    pub blur_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

impl EdgeDetector {
    /// Create a detector. The pair must satisfy `0 <= low <= high <= 1`,
    /// otherwise [`Error::InvalidConfiguration`] is returned.
    pub fn new(low: f32, high: f32) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || high > 1.0 || low > high {
            return Err(Error::InvalidConfiguration(format!(
                "threshold pair ({low}, {high}) violates 0 <= low <= high <= 1"
            )));
        }
        Ok(Self { low, high })
    }

    /// Run the four stages on a grayscale plane in [0, 1].
    ///
    /// The output mask has the input's dimensions. A flat input (zero max
    /// gradient magnitude) yields an all-zero mask; that is defined
    /// behavior, not an error.
    pub fn detect(&self, gray: &ImageF32) -> EdgeMask {
        self.detect_with_timings(gray).mask
    }

    /// Same as [`detect`](Self::detect), also reporting per-stage times.
    pub fn detect_with_timings(&self, gray: &ImageF32) -> DetectOutcome {
        let blur_start = Instant::now();
        let smoothed = gaussian::gaussian_blur(gray);
        let blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

        let grad_start = Instant::now();
        let grad = grad::sobel_gradients(&smoothed);
        let gradient_ms = grad_start.elapsed().as_secs_f64() * 1000.0;

        let nms_start = Instant::now();
        let thinned = nms::suppress_non_maxima(&grad);
        let nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;

        let hyst_start = Instant::now();
        let mask = hysteresis::hysteresis(&thinned, self.low, self.high);
        let hysteresis_ms = hyst_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "EdgeDetector::detect w={} h={} edges={} blur_ms={:.3} grad_ms={:.3} nms_ms={:.3} hyst_ms={:.3}",
            gray.w,
            gray.h,
            mask.count_set(),
            blur_ms,
            gradient_ms,
            nms_ms,
            hysteresis_ms
        );

        DetectOutcome {
            mask,
            blur_ms,
            gradient_ms,
            nms_ms,
            hysteresis_ms,
        }
    }
}
