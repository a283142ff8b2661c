//! End-to-end encode and decode paths
//!
//! Encode: payload -> modules -> raster. Decode: grayscale row -> scan line
//! -> located symbol -> digits. Every call is independent.

use crate::config;
use crate::decoder::SymbolDecoder;
use crate::detector::GuardLocator;
use crate::encoder::{Encoded, Rasterizer, RenderOptions, SymbolEncoder};
use crate::error::{DecodeError, Error};
use crate::models::{DecodeOutcome, ModuleBits, ScanLine};
use crate::utils::binarization::binarize_row;
use crate::utils::grayscale::rgb_row_to_grayscale;
use image::{GrayImage, RgbImage};
use rayon::prelude::*;
use tracing::debug;

/// Locate, sample and decode a binarized row
pub fn decode_scan_line(line: &ScanLine) -> Result<DecodeOutcome, DecodeError> {
    let located = GuardLocator::locate(line)?;
    SymbolDecoder::decode(&located.modules)
}

/// Binarize a grayscale row at `threshold` and decode it
pub fn decode_gray_row_with_threshold(
    gray: &[u8],
    threshold: u8,
) -> Result<DecodeOutcome, DecodeError> {
    decode_scan_line(&binarize_row(gray, threshold))
}

/// Binarize a grayscale row at the configured threshold and decode it
pub fn decode_gray_row(gray: &[u8]) -> Result<DecodeOutcome, DecodeError> {
    decode_gray_row_with_threshold(gray, config::threshold())
}

/// Row through the vertical midpoint of a raster
pub fn middle_row(image: &GrayImage) -> &[u8] {
    let width = image.width() as usize;
    let y = image.height() as usize / 2;
    let raw: &[u8] = image.as_raw();
    raw.get(y * width..(y + 1) * width).unwrap_or(&[])
}

/// Decode the midpoint row of an upright, unskewed raster
pub fn decode_image(image: &GrayImage) -> Result<DecodeOutcome, DecodeError> {
    decode_gray_row(middle_row(image))
}

/// Luminance of the row through the vertical midpoint of a colour raster
pub fn middle_row_rgb(image: &RgbImage) -> Vec<u8> {
    let stride = image.width() as usize * 3;
    let y = image.height() as usize / 2;
    let raw: &[u8] = image.as_raw();
    raw.get(y * stride..(y + 1) * stride)
        .map(rgb_row_to_grayscale)
        .unwrap_or_default()
}

/// Decode the midpoint row of a colour raster after luminance conversion
pub fn decode_rgb_image(image: &RgbImage) -> Result<DecodeOutcome, DecodeError> {
    decode_gray_row(&middle_row_rgb(image))
}

/// Decode many independent rows in parallel, results in input order
pub fn decode_rows<R>(rows: &[R], threshold: u8) -> Vec<Result<DecodeOutcome, DecodeError>>
where
    R: AsRef<[u8]> + Sync,
{
    rows.par_iter()
        .map(|row| decode_gray_row_with_threshold(row.as_ref(), threshold))
        .collect()
}

/// Paint modules and sample them back as a noiseless scan line
pub fn render_scan_line(modules: &ModuleBits, opts: &RenderOptions) -> Result<ScanLine, Error> {
    let row = Rasterizer::render_row(modules, opts)?;
    Ok(binarize_row(&row, config::DEFAULT_THRESHOLD))
}

/// Encode a payload, render it, and decode the rendering
pub fn round_trip(payload: &str, opts: &RenderOptions) -> Result<(Encoded, DecodeOutcome), Error> {
    let encoded = SymbolEncoder::encode(payload)?;
    let image = Rasterizer::render(&encoded.modules, opts)?;
    let outcome = decode_gray_row_with_threshold(middle_row(&image), config::DEFAULT_THRESHOLD)?;
    if outcome.code() != Some(&encoded.code) {
        debug!(expected = %encoded.code, got = %outcome, "round trip mismatch");
    }
    Ok((encoded, outcome))
}
