use crate::models::ScanLine;

/// Global threshold binarization of one grayscale row
/// Returns a ScanLine where true = dark (intensity < threshold)
pub fn binarize_row(gray: &[u8], threshold: u8) -> ScanLine {
    let mut line = ScanLine::new(gray.len());
    for (x, &pixel) in gray.iter().enumerate() {
        line.set(x, pixel < threshold);
    }
    line
}

/// Binarize a row using Otsu's threshold computed from the row itself
pub fn otsu_binarize_row(gray: &[u8]) -> ScanLine {
    binarize_row(gray, otsu_threshold(gray))
}

/// Calculate Otsu's optimal threshold
///
/// Pixels strictly below the returned value form the dark class. A row with
/// a single intensity has no split and yields 128.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    // Build histogram
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as u64;
    let total_sum: u64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as u64 * count)
        .sum();

    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;
    let mut dark_pixels = 0u64;
    let mut dark_sum = 0u64;

    // Threshold t puts intensities 0..t in the dark class
    for threshold in 1..=255usize {
        dark_pixels += histogram[threshold - 1];
        dark_sum += (threshold as u64 - 1) * histogram[threshold - 1];

        let light_pixels = total_pixels - dark_pixels;
        if dark_pixels == 0 || light_pixels == 0 {
            continue;
        }

        let dark_mean = dark_sum as f64 / dark_pixels as f64;
        let light_mean = (total_sum - dark_sum) as f64 / light_pixels as f64;
        let weight_dark = dark_pixels as f64 / total_pixels as f64;
        let weight_light = light_pixels as f64 / total_pixels as f64;

        let variance = weight_dark * weight_light * (dark_mean - light_mean).powi(2);
        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}
