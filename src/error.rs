//! Error types for encoding, decoding and parsing

use crate::models::Code13;
use std::fmt;
use thiserror::Error;

/// Which guard pattern failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Start guard `101` at modules 0..3
    Start,
    /// Center guard `01010` at modules 45..50
    Center,
    /// Stop guard `101` at modules 92..95
    Stop,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Start => f.write_str("start"),
            Guard::Center => f.write_str("center"),
            Guard::Stop => f.write_str("stop"),
        }
    }
}

/// Half of the symbol a digit chunk belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Modules 3..45, digits 2-7 (L/G encoded)
    Left,
    /// Modules 50..92, digits 8-13 (R encoded)
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors raised on the encode path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload is not exactly 12 ASCII digits
    #[error("invalid payload {input:?}: {reason}")]
    InvalidPayload {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: PayloadProblem,
    },
    /// Render options cannot produce a raster
    #[error("invalid render geometry: {0}")]
    InvalidGeometry(&'static str),
}

/// Reason a payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadProblem {
    /// Wrong number of characters
    Length(usize),
    /// Non-digit character at the given byte offset
    NonDigit(usize),
}

impl fmt::Display for PayloadProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadProblem::Length(n) => write!(f, "expected 12 digits, got {} characters", n),
            PayloadProblem::NonDigit(at) => write!(f, "non-digit character at offset {}", at),
        }
    }
}

/// Hard failures on the decode path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The scan line contains no dark pixel
    #[error("no barcode found in scan line")]
    NoBarcodeFound,
    /// A guard pattern is missing after sampling
    #[error("{0} guard mismatch")]
    GuardMismatch(Guard),
    /// A 7-module chunk matches no table entry
    #[error("unknown {side} chunk at position {position}")]
    UnknownChunk {
        /// Half of the symbol
        side: Side,
        /// Chunk index within the half (0-5)
        position: usize,
    },
    /// Module sequence is not 95 long
    #[error("expected 95 modules, got {found}")]
    ModuleCount {
        /// Number of modules supplied
        found: usize,
    },
}

/// Errors parsing textual codes and module strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong length for the target type
    #[error("expected {expected} characters, got {found}")]
    Length {
        /// Required length
        expected: usize,
        /// Supplied length
        found: usize,
    },
    /// Character outside the allowed alphabet
    #[error("invalid character {ch:?} at offset {at}")]
    InvalidChar {
        /// Offending character
        ch: char,
        /// Byte offset
        at: usize,
    },
}

/// Outcomes of a catalog operation other than success
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A product with this code is already stored
    #[error("product with code {0} already exists")]
    Duplicate(Code13),
    /// Any other storage failure
    #[error("storage error: {0}")]
    Storage(String),
}

/// Any failure across a full encode or decode pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Encode path failure
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Decode path failure
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Malformed textual input
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Catalog collaborator failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
