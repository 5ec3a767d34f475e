//! Pipeline driving the scoring end-to-end.
//!
//! [`EdgeScorer`] exposes a simple API: feed a raster and get the edginess
//! score, the binary mask, and a rendered edge image. Internally it
//! coordinates size normalization, grayscale conversion, the four-stage
//! detector, and the score computation, strictly in that order with no
//! state carried across calls.
//!
//! Typical usage:
//! ```no_run
//! use edge_scorer::{EdgeScorer, ScorerParams};
//! use edge_scorer::image::RasterU8;
//!
//! # fn example(raster: RasterU8) {
//! let scorer = EdgeScorer::new(ScorerParams::default()).unwrap();
//! let output = scorer.process(&raster).unwrap();
//! println!("edginess={:.2}", output.result.score);
//! # }
//! ```
use crate::detect::EdgeDetector;
use crate::diagnostics::{EdginessReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::error::Result;
use crate::image::RasterU8;
use crate::params::ScorerParams;
use crate::resize::normalize_size;
use crate::score::edginess;
use crate::types::{EdgeMask, EdginessResult};
use log::debug;
use std::time::Instant;

/// Full pipeline output: score facts, the mask, and the rendered edge image.
///
/// The edge image is an 8-bit grayscale raster of the mask's dimensions
/// (edge = 255, background = 0); the caller owns all three and is
/// responsible for any persistence or encoding.
pub struct EdginessOutput {
    pub result: EdginessResult,
    pub mask: EdgeMask,
    pub edge_image: RasterU8,
}

/// Scored run with the serializable trace attached.
pub struct ScoredRun {
    pub output: EdginessOutput,
    pub report: EdginessReport,
}

/// Edginess scorer orchestrating resize, detection, and scoring.
pub struct EdgeScorer {
    params: ScorerParams,
    detector: EdgeDetector,
}

impl EdgeScorer {
    /// Create a scorer, validating the threshold pair once up front.
    pub fn new(params: ScorerParams) -> Result<Self> {
        let detector = EdgeDetector::new(params.low, params.high)?;
        Ok(Self { params, detector })
    }

    /// Run the pipeline, returning the output without a trace.
    pub fn process(&self, input: &RasterU8) -> Result<EdginessOutput> {
        Ok(self.process_with_diagnostics(input)?.output)
    }

    /// Run the pipeline and collect a per-stage diagnostics trace.
    pub fn process_with_diagnostics(&self, input: &RasterU8) -> Result<ScoredRun> {
        debug!(
            "EdgeScorer::process start w={} h={} channels={} target={}",
            input.width(),
            input.height(),
            input.channels(),
            self.params.target_pixels
        );
        let total_start = Instant::now();

        let resize_start = Instant::now();
        let resized = normalize_size(input, self.params.target_pixels);
        let resize_ms = resize_start.elapsed().as_secs_f64() * 1000.0;

        let gray_start = Instant::now();
        let gray = resized.to_luma_f32();
        let grayscale_ms = gray_start.elapsed().as_secs_f64() * 1000.0;

        let outcome = self.detector.detect_with_timings(&gray);
        let mask = outcome.mask;

        let score = edginess(&mask, self.params.target_pixels);
        let edge_image = mask.to_gray_raster();
        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "EdgeScorer::process done score={:.3} edges={} total_ms={:.3}",
            score,
            mask.count_set(),
            total_ms
        );

        let result = EdginessResult {
            score,
            width: resized.width(),
            height: resized.height(),
            edge_pixels: mask.count_set(),
            latency_ms: total_ms,
        };

        let mut timing = TimingBreakdown::with_total(total_ms);
        timing.push("resize", resize_ms);
        timing.push("grayscale", grayscale_ms);
        timing.push("gaussianBlur", outcome.blur_ms);
        timing.push("gradient", outcome.gradient_ms);
        timing.push("nonMaximumSuppression", outcome.nms_ms);
        timing.push("hysteresis", outcome.hysteresis_ms);

        let report = EdginessReport {
            result: result.clone(),
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: input.width(),
                    height: input.height(),
                    channels: input.channels(),
                },
                timing,
            },
        };

        Ok(ScoredRun {
            output: EdginessOutput {
                result,
                mask,
                edge_image,
            },
            report,
        })
    }
}
