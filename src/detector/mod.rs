//! Barcode detection on a scan line
//!
//! This module locates the symbol on a binarized row:
//! - Outer extent from the first and last dark pixel
//! - Module width estimation over the 95-module symbol
//! - Centre-of-module sampling into a module pattern

/// Guard-bounded symbol location and module sampling
pub mod guard;

pub use guard::{GuardLocator, LocatedSymbol};
