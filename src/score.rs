//! Edginess scoring over a binary mask.
//!
//! The denominator is the *nominal* pixel-count target, not the mask's
//! actual pixel count: the resizer's truncation leaves the actual count
//! slightly below the target, and scores stay comparable across runs only
//! when normalized against the same constant. Because the resized count
//! never exceeds the target, the score stays in [0, 100].
use crate::types::EdgeMask;

/// Fraction of set pixels relative to `target_pixels`, scaled to [0, 100].
pub fn edginess(mask: &EdgeMask, target_pixels: usize) -> f32 {
    100.0 * mask.count_set() as f32 / target_pixels as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_scores_zero() {
        let mask = EdgeMask::new(100, 100);
        assert_eq!(edginess(&mask, 1_000_000), 0.0);
    }

    #[test]
    fn normalizes_against_the_nominal_target() {
        let mut mask = EdgeMask::new(10, 10);
        for x in 0..10 {
            mask.set(x, 0);
        }
        // 10 set pixels over a nominal target of 1000, not the 100 actual.
        assert!((edginess(&mask, 1000) - 1.0).abs() < 1e-6);
        assert!((edginess(&mask, 100) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn fully_set_mask_at_target_scores_one_hundred() {
        let mut mask = EdgeMask::new(40, 25);
        for y in 0..25 {
            for x in 0..40 {
                mask.set(x, y);
            }
        }
        assert!((edginess(&mask, 1000) - 100.0).abs() < 1e-4);
    }
}
