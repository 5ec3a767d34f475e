/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Uniform-intensity image.
pub fn solid_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Black image with a single bright column.
pub fn single_column_u8(width: usize, height: usize, col: usize) -> Vec<u8> {
    assert!(col < width, "column must lie inside the image");
    let mut img = vec![0u8; width * height];
    for row in img.chunks_mut(width) {
        row[col] = 255;
    }
    img
}

/// Dark left half, bright right half.
pub fn vertical_step_u8(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![40u8; width * height];
    for row in img.chunks_mut(width) {
        for v in &mut row[width / 2..] {
            *v = 215;
        }
    }
    img
}

/// Deterministic pseudo-random texture (LCG), softened by a box pass so the
/// gradient field has structure at several scales.
pub fn noise_u8(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut raw = vec![0u8; width * height];
    for v in &mut raw {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *v = (state >> 56) as u8;
    }
    // 3x3 box average to avoid pure per-pixel noise.
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            let mut n = 0u32;
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                        sum += raw[ny as usize * width + nx as usize] as u32;
                        n += 1;
                    }
                }
            }
            img[y * width + x] = (sum / n) as u8;
        }
    }
    img
}
