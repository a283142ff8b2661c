//! Guard validation and digit recovery from sampled modules

use crate::error::{DecodeError, Guard, Side};
use crate::models::code::CODE_LEN;
use crate::models::modules::{CENTER_GUARD, LEFT_HALF, RIGHT_HALF, START_GUARD, STOP_GUARD};
use crate::models::{Code13, DecodeOutcome, MODULE_COUNT, ModuleBits, PartialCode};
use crate::tables::{self, DIGIT_MODULES, Parity};
use tracing::{debug, trace};

/// Turns 95 sampled modules back into digits
pub struct SymbolDecoder;

impl SymbolDecoder {
    /// Decode a raw module sequence, which must be exactly 95 long
    pub fn decode_bits(bits: &[bool]) -> Result<DecodeOutcome, DecodeError> {
        let modules = ModuleBits::from_slice(bits).ok_or(DecodeError::ModuleCount {
            found: bits.len(),
        })?;
        Self::decode(&modules)
    }

    /// Decode a module pattern
    ///
    /// Guard or body failures abort; an unknown parity sequence only leaves
    /// the first digit unresolved.
    pub fn decode(modules: &ModuleBits) -> Result<DecodeOutcome, DecodeError> {
        Self::check_guard(modules, START_GUARD, &tables::EDGE_GUARD, Guard::Start)?;
        Self::check_guard(modules, STOP_GUARD, &tables::EDGE_GUARD, Guard::Stop)?;
        Self::check_guard(modules, CENTER_GUARD, &tables::CENTER_GUARD, Guard::Center)?;

        let mut body = [0u8; CODE_LEN - 1];
        let mut parity = [Parity::L; 6];

        for (position, chunk) in modules
            .range(LEFT_HALF)
            .chunks_exact(DIGIT_MODULES)
            .enumerate()
        {
            let value = tables::pack_chunk(chunk);
            let Some((digit, p)) = tables::decode_left(value) else {
                debug!(position, chunk = format_args!("{:07b}", value), "unknown left chunk");
                return Err(DecodeError::UnknownChunk {
                    side: Side::Left,
                    position,
                });
            };
            body[position] = digit;
            parity[position] = p;
        }

        for (position, chunk) in modules
            .range(RIGHT_HALF)
            .chunks_exact(DIGIT_MODULES)
            .enumerate()
        {
            let value = tables::pack_chunk(chunk);
            let Some(digit) = tables::decode_right(value) else {
                debug!(position, chunk = format_args!("{:07b}", value), "unknown right chunk");
                return Err(DecodeError::UnknownChunk {
                    side: Side::Right,
                    position,
                });
            };
            body[6 + position] = digit;
        }

        let partial = PartialCode::from_body(tables::first_digit_for(&parity), body);
        match partial.complete() {
            Some(code) => {
                trace!(%code, "decoded symbol");
                Ok(DecodeOutcome::Complete(code))
            }
            None => {
                debug!(?parity, %partial, "parity pattern names no first digit");
                Ok(DecodeOutcome::PartialUnknown(partial))
            }
        }
    }

    /// Decode and require every digit, mapping a partial result to `None`
    pub fn decode_complete(modules: &ModuleBits) -> Result<Option<Code13>, DecodeError> {
        Ok(Self::decode(modules)?.code().copied())
    }

    fn check_guard(
        modules: &ModuleBits,
        range: std::ops::Range<usize>,
        expected: &[bool],
        guard: Guard,
    ) -> Result<(), DecodeError> {
        debug_assert!(range.end <= MODULE_COUNT);
        if modules.range(range) == expected {
            Ok(())
        } else {
            debug!(%guard, modules = %modules, "guard mismatch");
            Err(DecodeError::GuardMismatch(guard))
        }
    }
}
