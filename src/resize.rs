//! Size normalization toward a fixed pixel budget.
//!
//! `normalize_size` rescales a raster so its pixel count approaches the
//! target while preserving aspect ratio: `scale = sqrt(target / (w * h))`,
//! new dimensions truncated toward zero. Truncation matches the reference
//! behavior and biases the resized pixel count slightly below the target,
//! which in turn keeps the edginess score (normalized against the nominal
//! target) inside its [0, 100] bound.
//!
//! Resampling uses a separable Lanczos-3 windowed-sinc kernel with
//! per-output-pixel weight normalization. The kernel footprint is widened by
//! the inverse scale when downsampling so it acts as a low-pass filter and
//! does not alias the gradient stages downstream. Source indices are clamped
//! at the borders (replicate).
//!
//! Pure transformation, no I/O. Zero-area inputs cannot reach this module:
//! [`RasterU8`](crate::image::RasterU8) construction rejects them with
//! `Error::InvalidImage`.
use crate::image::RasterU8;

const LANCZOS_A: f32 = 3.0;

#[inline]
fn lanczos3(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1e-6 {
        return 1.0;
    }
    if ax >= LANCZOS_A {
        return 0.0;
    }
    let px = std::f32::consts::PI * x;
    LANCZOS_A * px.sin() * (px / LANCZOS_A).sin() / (px * px)
}

/// Filter taps for one output coordinate along one axis.
struct TapSet {
    start: usize,
    weights: Vec<f32>,
}

/// Precompute normalized Lanczos taps mapping `src_len` samples to `dst_len`.
fn axis_taps(src_len: usize, dst_len: usize) -> Vec<TapSet> {
    let scale = dst_len as f32 / src_len as f32;
    // Widen the footprint when downsampling (filter_scale < 1).
    let filter_scale = scale.min(1.0);
    let radius = LANCZOS_A / filter_scale;

    (0..dst_len)
        .map(|d| {
            let center = (d as f32 + 0.5) / scale - 0.5;
            let lo = ((center - radius).floor() as i64).max(0) as usize;
            let hi = ((center + radius).ceil() as i64).min(src_len as i64 - 1) as usize;
            let mut weights = Vec::with_capacity(hi - lo + 1);
            let mut sum = 0.0f32;
            for s in lo..=hi {
                let w = lanczos3((s as f32 - center) * filter_scale);
                sum += w;
                weights.push(w);
            }
            if sum.abs() > f32::EPSILON {
                for w in &mut weights {
                    *w /= sum;
                }
            }
            TapSet { start: lo, weights }
        })
        .collect()
}

/// Horizontal pass: (src_w × rows) → (dst_w × rows).
fn resample_rows(src: &[f32], src_w: usize, rows: usize, taps: &[TapSet]) -> Vec<f32> {
    let dst_w = taps.len();
    let mut out = vec![0.0f32; dst_w * rows];
    for y in 0..rows {
        let src_row = &src[y * src_w..(y + 1) * src_w];
        let out_row = &mut out[y * dst_w..(y + 1) * dst_w];
        for (dst, tap) in out_row.iter_mut().zip(taps.iter()) {
            let mut acc = 0.0f32;
            for (k, &w) in tap.weights.iter().enumerate() {
                acc += w * src_row[tap.start + k];
            }
            *dst = acc;
        }
    }
    out
}

/// Vertical pass: (width × src_h) → (width × dst_h).
fn resample_cols(src: &[f32], width: usize, taps: &[TapSet]) -> Vec<f32> {
    let dst_h = taps.len();
    let mut out = vec![0.0f32; width * dst_h];
    for (dy, tap) in taps.iter().enumerate() {
        let out_row = &mut out[dy * width..(dy + 1) * width];
        for (k, &w) in tap.weights.iter().enumerate() {
            let src_row = &src[(tap.start + k) * width..(tap.start + k + 1) * width];
            for (dst, &s) in out_row.iter_mut().zip(src_row.iter()) {
                *dst += w * s;
            }
        }
    }
    out
}

/// Resample every channel of `input` to `dst_w × dst_h`.
fn resample(input: &RasterU8, dst_w: usize, dst_h: usize) -> RasterU8 {
    let (src_w, src_h) = (input.width(), input.height());
    let channels = input.channels();
    let x_taps = axis_taps(src_w, dst_w);
    let y_taps = axis_taps(src_h, dst_h);

    let mut out = vec![0u8; dst_w * dst_h * channels];
    let mut plane = vec![0.0f32; src_w * src_h];
    for c in 0..channels {
        for (i, v) in plane.iter_mut().enumerate() {
            *v = input.data()[i * channels + c] as f32;
        }
        let horiz = resample_rows(&plane, src_w, src_h, &x_taps);
        let full = resample_cols(&horiz, dst_w, &y_taps);
        for (i, &v) in full.iter().enumerate() {
            out[i * channels + c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    RasterU8::new(dst_w, dst_h, channels, out)
        .unwrap_or_else(|_| unreachable!("resampled dimensions are nonzero"))
}

/// Rescale `input` so its pixel count approaches `target_pixels`, preserving
/// aspect ratio. Dimensions are truncated toward zero (and clamped to at
/// least 1 for extreme aspect ratios). Upsampling small inputs is valid.
pub fn normalize_size(input: &RasterU8, target_pixels: usize) -> RasterU8 {
    let (w, h) = (input.width(), input.height());
    let scale = (target_pixels as f64 / (w * h) as f64).sqrt();
    let mut dst_w = ((w as f64 * scale) as usize).max(1);
    let mut dst_h = ((h as f64 * scale) as usize).max(1);
    // The 1-pixel clamp on a degenerate axis can push the product past the
    // target; cap the other axis so `dst_w * dst_h <= target_pixels` holds
    // for every input.
    if dst_w * dst_h > target_pixels {
        if dst_w == 1 {
            dst_h = target_pixels.max(1);
        } else {
            dst_w = target_pixels.max(1);
        }
    }
    if dst_w == w && dst_h == h {
        return input.clone();
    }
    resample(input, dst_w, dst_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_gray(w: usize, h: usize, v: u8) -> RasterU8 {
        RasterU8::new_gray(w, h, vec![v; w * h]).unwrap()
    }

    #[test]
    fn target_pixel_count_within_rounding() {
        let img = solid_gray(2000, 1000, 128);
        let resized = normalize_size(&img, 1_000_000);
        assert_eq!(resized.width(), 1414);
        assert_eq!(resized.height(), 707);
        let count = resized.width() * resized.height();
        assert!(count <= 1_000_000);
        assert!(1_000_000 - count < resized.width() + resized.height());
    }

    #[test]
    fn aspect_ratio_preserved() {
        let img = solid_gray(1600, 900, 50);
        let resized = normalize_size(&img, 1_000_000);
        let src_ratio = 1600.0 / 900.0;
        let dst_ratio = resized.width() as f64 / resized.height() as f64;
        assert!((src_ratio - dst_ratio).abs() / src_ratio < 0.01);
    }

    #[test]
    fn already_at_target_is_identity() {
        let img = solid_gray(1000, 1000, 77);
        let resized = normalize_size(&img, 1_000_000);
        assert_eq!(resized.width(), 1000);
        assert_eq!(resized.height(), 1000);
        assert_eq!(resized.data(), img.data());
    }

    #[test]
    fn degenerate_aspect_ratio_never_exceeds_target() {
        // 1 x 40000: the width truncates to 0 and clamps to 1, so the
        // height must absorb the cap to keep the product inside the target.
        let img = solid_gray(1, 40_000, 64);
        let resized = normalize_size(&img, 10_000);
        assert_eq!(resized.width(), 1);
        assert_eq!(resized.height(), 10_000);
        assert!(resized.width() * resized.height() <= 10_000);
        assert!(resized.data().iter().all(|&v| v == 64));
    }

    #[test]
    fn upsampling_small_input_does_not_crash() {
        let img = solid_gray(10, 10, 200);
        let resized = normalize_size(&img, 1_000_000);
        assert_eq!(resized.width(), 1000);
        assert_eq!(resized.height(), 1000);
        // Normalized taps preserve constant input exactly.
        assert!(resized.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn solid_input_stays_solid_after_downsampling() {
        let img = solid_gray(3000, 2000, 90);
        let resized = normalize_size(&img, 1_000_000);
        assert!(resized.data().iter().all(|&v| v == 90));
    }

    #[test]
    fn rgb_channels_resampled_independently() {
        let mut data = Vec::with_capacity(2000 * 1000 * 3);
        for _ in 0..(2000 * 1000) {
            data.extend_from_slice(&[10, 120, 240]);
        }
        let img = RasterU8::new_rgb(2000, 1000, data).unwrap();
        let resized = normalize_size(&img, 1_000_000);
        assert_eq!(resized.channels(), 3);
        assert_eq!(resized.sample(100, 100, 0), 10);
        assert_eq!(resized.sample(100, 100, 1), 120);
        assert_eq!(resized.sample(100, 100, 2), 240);
    }
}
