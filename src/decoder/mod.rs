//! EAN-13 decoding
//!
//! This module turns a sampled module pattern back into digits:
//! - Start, center and stop guard validation
//! - L/G lookup of the left half, recording each digit's parity
//! - R lookup of the right half
//! - First digit recovery from the parity sequence

/// Module pattern to digits
pub mod symbol;

pub use symbol::SymbolDecoder;
