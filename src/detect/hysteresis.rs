//! Double-threshold hysteresis over the thinned magnitude field.
//!
//! Pixels classify as strong (`mag >= high * max`), weak
//! (`low * max <= mag < high * max`), or suppressed. Strong pixels are
//! confirmed edges; a weak pixel is promoted only when it is 8-connected,
//! directly or transitively, to a strong pixel. The connectivity pass is the
//! one global step of the detector and runs as an explicit stack-based flood
//! fill over the pixel arena, seeded from the strong set, so arbitrarily long
//! weak chains cannot overflow the call stack.
//!
//! A zero maximum magnitude (flat input) short-circuits to an all-zero mask
//! instead of producing NaN thresholds.
use crate::image::ImageF32;
use crate::types::EdgeMask;
use log::debug;

/// Apply relative double thresholds and connectivity promotion.
///
/// `low` and `high` are ratios of the maximum thinned magnitude; the caller
/// guarantees `0 <= low <= high <= 1`.
pub fn hysteresis(thinned: &ImageF32, low: f32, high: f32) -> EdgeMask {
    let (w, h) = (thinned.w, thinned.h);
    let mut mask = EdgeMask::new(w, h);

    let max_mag = thinned.max_value();
    if max_mag <= 0.0 {
        debug!("hysteresis: zero max magnitude, returning empty mask");
        return mask;
    }
    let high_abs = high * max_mag;
    let low_abs = low * max_mag;

    // Strong pixels seed the flood fill.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(w * h / 8 + 1);
    for y in 0..h {
        for x in 0..w {
            if thinned.get(x, y) >= high_abs && !mask.get(x, y) {
                mask.set(x, y);
                stack.push((x, y));
            }
        }
    }
    let strong = stack.len();

    // Promote weak pixels reachable through 8-connected chains.
    while let Some((x, y)) = stack.pop() {
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);
        let y1 = (y + 1).min(h - 1);
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if (nx, ny) == (x, y) || mask.get(nx, ny) {
                    continue;
                }
                if thinned.get(nx, ny) >= low_abs {
                    mask.set(nx, ny);
                    stack.push((nx, ny));
                }
            }
        }
    }

    debug!(
        "hysteresis: strong={} confirmed={} (low={:.3} high={:.3} max={:.4})",
        strong,
        mask.count_set(),
        low,
        high,
        max_mag
    );
    mask
}
