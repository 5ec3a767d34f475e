//! Result types shared across the pipeline stages.
use crate::image::RasterU8;
use serde::Serialize;

/// Binary edge mask, same dimensions as the image that produced it.
///
/// Stored as one byte per pixel (0 or 1) in row-major order. Ownership
/// transfers to the caller with the pipeline output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    data: Vec<u8>,
}

impl EdgeMask {
    /// All-zero mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        self.data[y * self.w + x] = 1;
    }

    /// Number of confirmed edge pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Raw 0/1 bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Render as an 8-bit grayscale raster (edge = 255, background = 0).
    pub fn to_gray_raster(&self) -> RasterU8 {
        let data: Vec<u8> = self.data.iter().map(|&v| if v != 0 { 255 } else { 0 }).collect();
        // Mask dimensions come from a validated raster, so this cannot fail.
        RasterU8::new_gray(self.w, self.h, data)
            .unwrap_or_else(|_| unreachable!("mask dimensions are validated upstream"))
    }
}

/// Compact per-run result: the score plus basic shape and timing facts.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdginessResult {
    /// Edge-density score in [0, 100], normalized against the nominal target.
    pub score: f32,
    /// Width of the resized image and the mask
    pub width: usize,
    /// Height of the resized image and the mask
    pub height: usize,
    /// Confirmed edge pixels in the mask
    pub edge_pixels: usize,
    /// End-to-end wall time in milliseconds
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_and_renders() {
        let mut mask = EdgeMask::new(3, 2);
        mask.set(0, 0);
        mask.set(2, 1);
        assert_eq!(mask.count_set(), 2);
        assert!(mask.get(2, 1));
        assert!(!mask.get(1, 1));

        let raster = mask.to_gray_raster();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.sample(0, 0, 0), 255);
        assert_eq!(raster.sample(1, 0, 0), 0);
    }
}
