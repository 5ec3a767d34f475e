//! Owned interleaved 8-bit raster, the pipeline's input and output type.
//!
//! `RasterU8` is the buffer the caller hands to the pipeline: interleaved
//! samples with an explicit channel count (1 for grayscale, 3 for RGB).
//! The rendered edge map comes back as the same type.
use crate::error::{Error, Result};
use crate::image::ImageF32;

/// Rec. 601 luma weights used for RGB → grayscale conversion.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Owned interleaved 8-bit raster with 1 or 3 channels.
///
/// Immutable once produced by a stage; the resizer consumes one and emits a
/// fresh one, nothing mutates a raster in place.
#[derive(Clone, Debug)]
pub struct RasterU8 {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl RasterU8 {
    /// Construct from raw interleaved samples.
    ///
    /// Fails with [`Error::InvalidImage`] on zero-area dimensions, an
    /// unsupported channel count, or a buffer whose length does not match
    /// `width * height * channels`.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage(format!(
                "zero-area dimensions {width}x{height}"
            )));
        }
        if channels != 1 && channels != 3 {
            return Err(Error::InvalidImage(format!(
                "unsupported channel count {channels} (expected 1 or 3)"
            )));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Error::InvalidImage(format!(
                "pixel buffer length {} does not match {width}x{height}x{channels} = {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Construct a single-channel raster.
    pub fn new_gray(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 1, data)
    }

    /// Construct an interleaved RGB raster.
    pub fn new_rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 3, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (1 or 3)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Raw interleaved samples in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    /// Sample value at (x, y) for channel `c`.
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[(y * self.width + x) * self.channels + c]
    }

    /// Convert to a single-channel float plane in [0, 1].
    ///
    /// RGB input uses Rec. 601 luma weights; grayscale input is a plain
    /// rescale by 1/255.
    pub fn to_luma_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.width, self.height);
        match self.channels {
            1 => {
                for (dst, &src) in out.data.iter_mut().zip(self.data.iter()) {
                    *dst = src as f32 / 255.0;
                }
            }
            _ => {
                for (dst, px) in out.data.iter_mut().zip(self.data.chunks_exact(3)) {
                    let luma =
                        LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
                    *dst = luma / 255.0;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_area_and_mismatched_buffers() {
        assert!(matches!(
            RasterU8::new_gray(0, 10, vec![]),
            Err(Error::InvalidImage(_))
        ));
        assert!(matches!(
            RasterU8::new_gray(10, 0, vec![]),
            Err(Error::InvalidImage(_))
        ));
        assert!(matches!(
            RasterU8::new_gray(4, 4, vec![0u8; 15]),
            Err(Error::InvalidImage(_))
        ));
        assert!(matches!(
            RasterU8::new(4, 4, 2, vec![0u8; 32]),
            Err(Error::InvalidImage(_))
        ));
    }

    #[test]
    fn luma_conversion_matches_rec601() {
        let rgb = RasterU8::new_rgb(1, 1, vec![255, 0, 0]).unwrap();
        let plane = rgb.to_luma_f32();
        assert!((plane.get(0, 0) - 0.299).abs() < 1e-6);

        let gray = RasterU8::new_gray(1, 1, vec![128]).unwrap();
        assert!((gray.to_luma_f32().get(0, 0) - 128.0 / 255.0).abs() < 1e-6);
    }
}
