//! Separable Gaussian smoothing ahead of differentiation.
//!
//! Fixed configuration (5-tap kernel, sigma 1.0) kept internal to the
//! detector so scores stay comparable across runs. Border handling clamps
//! indices (replicate). The two 1D passes are row-parallel: each output row
//! reads only the immutable input of its pass.
use crate::image::ImageF32;
use rayon::prelude::*;

/// Half-width of the smoothing kernel (5 taps total).
pub const KERNEL_RADIUS: usize = 2;
/// Standard deviation of the smoothing kernel.
pub const SIGMA: f32 = 1.0;

/// Normalized 1D Gaussian taps for the fixed radius/sigma.
fn gaussian_taps() -> [f32; 2 * KERNEL_RADIUS + 1] {
    let mut taps = [0.0f32; 2 * KERNEL_RADIUS + 1];
    let denom = 2.0 * SIGMA * SIGMA;
    for (i, tap) in taps.iter_mut().enumerate() {
        let d = i as f32 - KERNEL_RADIUS as f32;
        *tap = (-(d * d) / denom).exp();
    }
    let sum: f32 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}

/// Smooth a single-channel float image with the fixed Gaussian kernel.
pub fn gaussian_blur(input: &ImageF32) -> ImageF32 {
    let (w, h) = (input.w, input.h);
    let mut blurred = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return blurred;
    }
    let taps = gaussian_taps();
    let r = KERNEL_RADIUS as i64;

    // Horizontal pass: each output row depends on its own input row only.
    let mut tmp = ImageF32::new(w, h);
    tmp.data
        .par_chunks_mut(w)
        .zip(input.data.par_chunks(w))
        .for_each(|(out_row, in_row)| {
            for x in 0..w {
                let mut acc = 0.0f32;
                for (i, &tap) in taps.iter().enumerate() {
                    let sx = (x as i64 + i as i64 - r).clamp(0, w as i64 - 1) as usize;
                    acc += tap * in_row[sx];
                }
                out_row[x] = acc;
            }
        });

    // Vertical pass: output rows read the finished horizontal pass.
    let tmp_data = &tmp.data;
    blurred
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (i, &tap) in taps.iter().enumerate() {
                let sy = (y as i64 + i as i64 - r).clamp(0, h as i64 - 1) as usize;
                let src_row = &tmp_data[sy * w..sy * w + w];
                for (dst, &s) in out_row.iter_mut().zip(src_row.iter()) {
                    *dst += tap * s;
                }
            }
        });

    blurred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_are_normalized_and_symmetric() {
        let taps = gaussian_taps();
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!((taps[0] - taps[4]).abs() < 1e-7);
        assert!((taps[1] - taps[3]).abs() < 1e-7);
        assert!(taps[2] > taps[1]);
    }

    #[test]
    fn constant_image_is_unchanged() {
        let mut img = ImageF32::new(16, 9);
        img.data.fill(0.5);
        let blurred = gaussian_blur(&img);
        assert!(blurred.data.iter().all(|&v| (v - 0.5).abs() < 1e-5));
    }

    #[test]
    fn step_edge_is_softened_not_moved() {
        let mut img = ImageF32::new(20, 5);
        for y in 0..5 {
            for x in 10..20 {
                img.set(x, y, 1.0);
            }
        }
        let blurred = gaussian_blur(&img);
        // Ramp straddles the step, monotone left to right.
        for x in 1..20 {
            assert!(blurred.get(x, 2) >= blurred.get(x - 1, 2) - 1e-6);
        }
        assert!(blurred.get(0, 2) < 0.05);
        assert!(blurred.get(19, 2) > 0.95);
        assert!(blurred.get(10, 2) > 0.4 && blurred.get(10, 2) < 0.9);
    }
}
