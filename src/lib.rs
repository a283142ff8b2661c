//! RustEAN - EAN-13 barcode encoding and scan-line decoding
//!
//! Encodes a 12-digit payload into the 95-module EAN-13 symbol and decodes a
//! rendered or scanned row of pixels back into its 13-digit code. All codec
//! operations are pure and share only the constant symbol tables.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Product catalog collaborator keyed by code
pub mod catalog;
/// Environment-driven defaults
pub mod config;
/// Module pattern to digits
pub mod decoder;
/// Symbol location on a scan line
pub mod detector;
/// Check digit, symbol assembly and rasterization
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Payload, Code13, ModuleBits, ScanLine)
pub mod models;
/// End-to-end encode/decode paths
pub mod pipeline;
/// L/G/R digit patterns and the parity table
pub mod tables;
/// Helpers for the eantool binary
pub mod tools;
/// Utility functions (grayscale, binarization)
pub mod utils;

pub use encoder::{Encoded, RenderOptions};
pub use error::{DecodeError, EncodeError, Error};
pub use models::{Code13, DecodeOutcome, ModuleBits, PartialCode, Payload, ScanLine};
pub use pipeline::{decode_gray_row, decode_image, decode_rgb_image, decode_rows};

use decoder::SymbolDecoder;
use encoder::SymbolEncoder;

/// Encode a 12-digit payload
///
/// # Returns
/// The 13-digit code (payload plus check digit) and its 95 modules, or
/// `EncodeError::InvalidPayload` when the input is not exactly 12 digits.
///
/// # Example
/// ```
/// let encoded = rust_ean::encode("400638133393").unwrap();
/// assert_eq!(encoded.code.to_string(), "4006381333931");
/// assert_eq!(encoded.modules.len(), 95);
/// ```
pub fn encode(payload: &str) -> Result<Encoded, EncodeError> {
    SymbolEncoder::encode(payload)
}

/// Decode a binarized scan line
///
/// # Returns
/// `Complete` with all 13 digits, `PartialUnknown` when only the first digit
/// could not be resolved, or a hard `DecodeError`.
pub fn decode(scan_line: &ScanLine) -> Result<DecodeOutcome, DecodeError> {
    pipeline::decode_scan_line(scan_line)
}

/// Decode an already sampled module pattern
pub fn decode_modules(modules: &ModuleBits) -> Result<DecodeOutcome, DecodeError> {
    SymbolDecoder::decode(modules)
}

/// Scanner with a fixed binarization threshold
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    threshold: u8,
}

impl Scanner {
    /// Create a scanner using the configured threshold (`EAN_THRESHOLD`, default 128)
    pub fn new() -> Self {
        Self {
            threshold: config::threshold(),
        }
    }

    /// Create a scanner with an explicit threshold
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Create a scanner whose threshold is picked by Otsu's method on `sample`
    pub fn calibrated(sample: &[u8]) -> Self {
        Self::with_threshold(utils::binarization::otsu_threshold(sample))
    }

    /// Threshold in use
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Decode a single grayscale row
    pub fn scan_row(&self, gray: &[u8]) -> Result<DecodeOutcome, DecodeError> {
        pipeline::decode_gray_row_with_threshold(gray, self.threshold)
    }

    /// Decode the midpoint row of a raster
    pub fn scan_image(&self, image: &image::GrayImage) -> Result<DecodeOutcome, DecodeError> {
        self.scan_row(pipeline::middle_row(image))
    }

    /// Decode the midpoint row of a colour raster
    pub fn scan_rgb_image(&self, image: &image::RgbImage) -> Result<DecodeOutcome, DecodeError> {
        self.scan_row(&pipeline::middle_row_rgb(image))
    }

    /// Decode many rows in parallel
    pub fn scan_rows<R: AsRef<[u8]> + Sync>(
        &self,
        rows: &[R],
    ) -> Vec<Result<DecodeOutcome, DecodeError>> {
        decode_rows(rows, self.threshold)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
