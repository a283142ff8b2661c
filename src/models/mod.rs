/// Payload, code and decode outcome types
pub mod code;
/// The 95-module pattern and layout ranges
pub mod modules;
/// Packed binarized scan line
pub mod scan_line;

pub use code::{Code13, DecodeOutcome, PartialCode, Payload};
pub use modules::{MODULE_COUNT, ModuleBits};
pub use scan_line::ScanLine;
