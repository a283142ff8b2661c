//! Utility functions for scan-line preparation
//!
//! This module provides helper functions for the decode path:
//! - Grayscale conversion (RGB rows to luminance)
//! - Binarization (global threshold and Otsu's method)

/// Threshold and Otsu binarization of grayscale rows
pub mod binarization;
/// RGB to luminance conversion
pub mod grayscale;
