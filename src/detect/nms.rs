//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the magnitude is compared against the two neighbors lying
//! along its quantized gradient direction; only local maxima survive, which
//! thins wide gradient ridges down to single-pixel-wide candidate edges.
//!
//! Conventions (documented, deliberately chosen once):
//! - Tie-break: a pixel survives on `>=` against both neighbors. Keeping
//!   ties preserves plateau ridges that a strict comparison would erase
//!   entirely on symmetric textures.
//! - Border: the outer 1-pixel frame has no full neighbor set and is
//!   suppressed to zero.
//!
//! Rows are processed in parallel; each output row reads only the immutable
//! gradient buffers.
use super::grad::{Direction, Grad};
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

/// Suppress non-maxima, producing a thinned magnitude image of equal size.
pub fn suppress_non_maxima(grad: &Grad) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut thinned = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return thinned;
    }

    let mag = &grad.mag;
    let dir = &grad.dir_q4;
    thinned
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            if y == 0 || y == h - 1 {
                return;
            }
            let mag_prev = mag.row(y - 1);
            let mag_row = mag.row(y);
            let mag_next = mag.row(y + 1);
            for x in 1..w - 1 {
                let m = mag_row[x];
                if m == 0.0 {
                    continue;
                }
                let (n1, n2) = match dir[y * w + x] {
                    Direction::Horizontal => (mag_row[x - 1], mag_row[x + 1]),
                    Direction::Vertical => (mag_prev[x], mag_next[x]),
                    Direction::DiagonalDown => (mag_next[x + 1], mag_prev[x - 1]),
                    Direction::DiagonalUp => (mag_next[x - 1], mag_prev[x + 1]),
                };
                if m >= n1 && m >= n2 {
                    out_row[x] = m;
                }
            }
        });

    thinned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::grad::sobel_gradients;

    #[test]
    fn thins_a_soft_vertical_ramp_to_one_column() {
        // Smooth-ish ramp: gradient is widest in the middle column.
        let w = 9;
        let mut img = ImageF32::new(w, 7);
        let profile = [0.0, 0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0, 1.0];
        for y in 0..7 {
            for x in 0..w {
                img.set(x, y, profile[x]);
            }
        }
        let grad = sobel_gradients(&img);
        let thinned = suppress_non_maxima(&grad);

        // Interior rows keep exactly the locally maximal column(s).
        let survivors: Vec<usize> = (1..w - 1)
            .filter(|&x| thinned.get(x, 3) > 0.0)
            .collect();
        assert!(!survivors.is_empty());
        for &x in &survivors {
            let m = grad.mag.get(x, 3);
            assert!(m >= grad.mag.get(x - 1, 3));
            assert!(m >= grad.mag.get(x + 1, 3));
        }
    }

    #[test]
    fn border_frame_is_suppressed() {
        let mut img = ImageF32::new(6, 6);
        for y in 0..6 {
            for x in 3..6 {
                img.set(x, y, 1.0);
            }
        }
        let grad = sobel_gradients(&img);
        let thinned = suppress_non_maxima(&grad);
        for x in 0..6 {
            assert_eq!(thinned.get(x, 0), 0.0);
            assert_eq!(thinned.get(x, 5), 0.0);
        }
        for y in 0..6 {
            assert_eq!(thinned.get(0, y), 0.0);
            assert_eq!(thinned.get(5, y), 0.0);
        }
    }

    #[test]
    fn tiny_images_yield_empty_output() {
        let img = ImageF32::new(2, 2);
        let grad = sobel_gradients(&img);
        let thinned = suppress_non_maxima(&grad);
        assert!(thinned.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn ties_survive_on_plateau_ridges() {
        // Two adjacent columns with identical magnitude: both stay.
        let mut mag = ImageF32::new(7, 5);
        for y in 0..5 {
            mag.set(3, y, 2.0);
            mag.set(4, y, 2.0);
        }
        let dir = vec![Direction::Horizontal; 7 * 5];
        let grad = Grad {
            gx: mag.clone(),
            gy: ImageF32::new(7, 5),
            mag: mag.clone(),
            dir_q4: dir,
        };
        let thinned = suppress_non_maxima(&grad);
        assert!(thinned.get(3, 2) > 0.0);
        assert!(thinned.get(4, 2) > 0.0);
    }
}
