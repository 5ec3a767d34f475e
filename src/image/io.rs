//! I/O helpers bridging disk files and the in-memory raster types.
//!
//! The pipeline itself does no I/O; these helpers exist for the demo binary
//! and tooling. Built on the `image` crate:
//!
//! - `load_raster`: read a PNG/JPEG/etc. into an owned [`RasterU8`]
//!   (grayscale files stay single-channel, everything else becomes RGB).
//! - `save_gray_u8`: write a single-channel [`RasterU8`] to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RasterU8;
use image::{ColorType, DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk into an owned raster.
pub fn load_raster(path: &Path) -> Result<RasterU8, String> {
    let img =
        image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let raster = match img.color() {
        ColorType::L8 | ColorType::L16 => {
            let gray = img.into_luma8();
            let (w, h) = (gray.width() as usize, gray.height() as usize);
            RasterU8::new_gray(w, h, gray.into_raw())
        }
        _ => {
            let rgb = img.into_rgb8();
            let (w, h) = (rgb.width() as usize, rgb.height() as usize);
            RasterU8::new_rgb(w, h, rgb.into_raw())
        }
    };
    raster.map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save a single-channel raster to a PNG.
pub fn save_gray_u8(raster: &RasterU8, path: &Path) -> Result<(), String> {
    if raster.channels() != 1 {
        return Err(format!(
            "expected single-channel raster, got {} channels",
            raster.channels()
        ));
    }
    ensure_parent_dir(path)?;
    let data = raster.data().to_vec();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(raster.width() as u32, raster.height() as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
