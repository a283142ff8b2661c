//! The 95-module bar pattern and its layout

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Number of modules in an EAN-13 symbol
pub const MODULE_COUNT: usize = 95;

/// Module range of the start guard
pub const START_GUARD: std::ops::Range<usize> = 0..3;
/// Module range of the left digit half
pub const LEFT_HALF: std::ops::Range<usize> = 3..45;
/// Module range of the center guard
pub const CENTER_GUARD: std::ops::Range<usize> = 45..50;
/// Module range of the right digit half
pub const RIGHT_HALF: std::ops::Range<usize> = 50..92;
/// Module range of the stop guard
pub const STOP_GUARD: std::ops::Range<usize> = 92..95;

/// The 95 bar/space modules of one symbol (true = bar)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleBits([bool; MODULE_COUNT]);

impl ModuleBits {
    /// Wrap a full module array
    pub fn new(bits: [bool; MODULE_COUNT]) -> Self {
        Self(bits)
    }

    /// Copy from a slice, which must be exactly 95 long
    pub fn from_slice(bits: &[bool]) -> Option<Self> {
        let arr: [bool; MODULE_COUNT] = bits.try_into().ok()?;
        Some(Self(arr))
    }

    /// All modules as a slice
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Module `i` (out of range reads as a space)
    pub fn get(&self, i: usize) -> bool {
        self.0.get(i).copied().unwrap_or(false)
    }

    /// Overwrite module `i` (out of range writes are ignored)
    pub fn set(&mut self, i: usize, bar: bool) {
        if let Some(slot) = self.0.get_mut(i) {
            *slot = bar;
        }
    }

    /// Modules within `range`
    ///
    /// # Panics
    /// If `range` reaches past module 95.
    pub fn range(&self, range: std::ops::Range<usize>) -> &[bool] {
        &self.0[range]
    }

    /// Always 95
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        MODULE_COUNT
    }
}

impl fmt::Display for ModuleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for ModuleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleBits({})", self)
    }
}

impl FromStr for ModuleBits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != MODULE_COUNT {
            return Err(ParseError::Length {
                expected: MODULE_COUNT,
                found,
            });
        }
        let mut bits = [false; MODULE_COUNT];
        for (i, (at, ch)) in s.char_indices().enumerate() {
            bits[i] = match ch {
                '1' => true,
                '0' => false,
                _ => return Err(ParseError::InvalidChar { ch, at }),
            };
        }
        Ok(Self(bits))
    }
}
