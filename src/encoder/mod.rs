//! EAN-13 encoding
//!
//! - Check digit arithmetic
//! - Symbol assembly from the L/G/R tables
//! - Rasterization of module patterns into pixels

/// Check digit calculation
pub mod check_digit;
/// Module string to pixel geometry
pub mod raster;
/// Payload to 95-module symbol
pub mod symbol;

pub use raster::{Rasterizer, RenderOptions};
pub use symbol::{Encoded, SymbolEncoder};
