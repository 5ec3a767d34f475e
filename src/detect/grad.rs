//! Image gradients (Sobel) with magnitude and quantized direction.
//!
//! - Convolves the 3×3 Sobel kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)`.
//! - Caches a 4-bin direction quantization (0°, 45°, 90°, 135°) per pixel to
//!   drive the non-maximum-suppression neighbor lookup.
//!
//! Quantization maps the continuous angle `atan2(gy, gx)`, folded modulo π,
//! to the nearest of the four axes.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers + 1 byte/pixel.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Quantized gradient direction used by the suppression stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// Gradient along x: compare left/right neighbors.
    Horizontal = 0,
    /// Gradient along the main diagonal: compare down-right/up-left.
    DiagonalDown = 1,
    /// Gradient along y: compare up/down neighbors.
    Vertical = 2,
    /// Gradient along the anti-diagonal: compare down-left/up-right.
    DiagonalUp = 3,
}

/// Per-pixel gradient buffers and direction quantization.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
    /// Per-pixel quantized direction in 4 bins (π-periodic)
    pub dir_q4: Vec<Direction>,
}

#[inline]
fn quantize_direction(gx: f32, gy: f32) -> Direction {
    let mut deg = gy.atan2(gx).to_degrees();
    if deg < 0.0 {
        deg += 180.0;
    }
    if !(22.5..157.5).contains(&deg) {
        Direction::Horizontal
    } else if deg < 67.5 {
        Direction::DiagonalDown
    } else if deg < 112.5 {
        Direction::Vertical
    } else {
        Direction::DiagonalUp
    }
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    let mut dir_q4 = vec![Direction::Horizontal; w * h];

    if w == 0 || h == 0 {
        return Grad {
            gx,
            gy,
            mag,
            dir_q4,
        };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
            dir_q4[y * w + x] = quantize_direction(sum_x, sum_y);
        }
    }

    Grad {
        gx,
        gy,
        mag,
        dir_q4,
    }
}
