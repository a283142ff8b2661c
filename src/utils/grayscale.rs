//! Convert RGB pixels to luminance
//! Y = 0.299*R + 0.587*G + 0.114*B

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32) >> 8;
    lum.min(255) as u8
}

/// Convert a packed RGB row (3 bytes per pixel) to grayscale
///
/// Trailing bytes that do not form a whole pixel are ignored.
pub fn rgb_row_to_grayscale(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect()
}
