//! Payload to 95-module symbol assembly

use crate::error::EncodeError;
use crate::models::modules::{CENTER_GUARD, LEFT_HALF, RIGHT_HALF, START_GUARD, STOP_GUARD};
use crate::models::{Code13, MODULE_COUNT, ModuleBits, Payload};
use crate::tables::{self, DIGIT_MODULES, PARITY_PATTERNS};

/// Result of encoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    /// Payload followed by its check digit
    pub code: Code13,
    /// The 95-module bar/space pattern
    pub modules: ModuleBits,
}

/// Builds the module pattern for EAN-13 codes
pub struct SymbolEncoder;

impl SymbolEncoder {
    /// Validate a 12-digit payload and encode it
    pub fn encode(input: &str) -> Result<Encoded, EncodeError> {
        let payload = Payload::parse(input)?;
        Ok(Self::encode_payload(&payload))
    }

    /// Encode an already validated payload
    pub fn encode_payload(payload: &Payload) -> Encoded {
        let code = Code13::from_payload(payload);
        Encoded {
            code,
            modules: Self::modules_for(&code),
        }
    }

    /// Lay out the modules for a full code
    ///
    /// The check digit is taken as given, so this also renders codes whose
    /// check digit does not verify.
    pub fn modules_for(code: &Code13) -> ModuleBits {
        let digits = code.digits();
        let parity = &PARITY_PATTERNS[digits[0] as usize];
        let mut bits = [false; MODULE_COUNT];

        bits[START_GUARD].copy_from_slice(&tables::EDGE_GUARD);

        for (i, (&digit, &p)) in digits[1..7].iter().zip(parity.iter()).enumerate() {
            let start = LEFT_HALF.start + i * DIGIT_MODULES;
            bits[start..start + DIGIT_MODULES]
                .copy_from_slice(&tables::unpack_chunk(tables::left_pattern(digit, p)));
        }

        bits[CENTER_GUARD].copy_from_slice(&tables::CENTER_GUARD);

        for (i, &digit) in digits[7..13].iter().enumerate() {
            let start = RIGHT_HALF.start + i * DIGIT_MODULES;
            bits[start..start + DIGIT_MODULES]
                .copy_from_slice(&tables::unpack_chunk(tables::right_pattern(digit)));
        }

        bits[STOP_GUARD].copy_from_slice(&tables::EDGE_GUARD);

        ModuleBits::new(bits)
    }
}
