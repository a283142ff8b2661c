//! Payload, complete code and partially decoded code types

use crate::encoder::check_digit::check_digit;
use crate::error::{EncodeError, ParseError, PayloadProblem};
use std::fmt;
use std::str::FromStr;

/// Number of digits supplied by the caller
pub const PAYLOAD_LEN: usize = 12;
/// Number of digits in a complete code
pub const CODE_LEN: usize = 13;

/// Validated 12-digit payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payload([u8; PAYLOAD_LEN]);

impl Payload {
    /// Parse a payload, rejecting anything but exactly 12 ASCII digits
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let invalid = |reason| EncodeError::InvalidPayload {
            input: input.to_string(),
            reason,
        };

        let count = input.chars().count();
        if count != PAYLOAD_LEN {
            return Err(invalid(PayloadProblem::Length(count)));
        }

        let mut digits = [0u8; PAYLOAD_LEN];
        for (i, (at, ch)) in input.char_indices().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(invalid(PayloadProblem::NonDigit(at)));
            }
            digits[i] = ch as u8 - b'0';
        }
        Ok(Self(digits))
    }

    /// Digit values 0-9
    pub fn digits(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Payload {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Complete 13-digit EAN code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code13([u8; CODE_LEN]);

impl Code13 {
    /// Append the computed check digit to a payload
    pub fn from_payload(payload: &Payload) -> Self {
        let mut digits = [0u8; CODE_LEN];
        digits[..PAYLOAD_LEN].copy_from_slice(payload.digits());
        digits[PAYLOAD_LEN] = check_digit(payload);
        Self(digits)
    }

    /// Wrap raw digits; every value must be 0-9
    pub fn from_digits(digits: [u8; CODE_LEN]) -> Option<Self> {
        digits.iter().all(|&d| d < 10).then_some(Self(digits))
    }

    /// Parse 13 ASCII digits (the check digit is not verified)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let found = input.chars().count();
        if found != CODE_LEN {
            return Err(ParseError::Length {
                expected: CODE_LEN,
                found,
            });
        }
        let mut digits = [0u8; CODE_LEN];
        for (i, (at, ch)) in input.char_indices().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(ParseError::InvalidChar { ch, at });
            }
            digits[i] = ch as u8 - b'0';
        }
        Ok(Self(digits))
    }

    /// Digit values 0-9
    pub fn digits(&self) -> &[u8; CODE_LEN] {
        &self.0
    }

    /// Implicit first digit (encoded through left-half parity)
    pub fn first_digit(&self) -> u8 {
        self.0[0]
    }

    /// Trailing check digit
    pub fn check_digit(&self) -> u8 {
        self.0[CODE_LEN - 1]
    }

    /// The first twelve digits
    pub fn payload(&self) -> Payload {
        let mut digits = [0u8; PAYLOAD_LEN];
        digits.copy_from_slice(&self.0[..PAYLOAD_LEN]);
        Payload(digits)
    }

    /// Whether the trailing digit matches the one computed from the payload
    pub fn has_valid_check_digit(&self) -> bool {
        check_digit(&self.payload()) == self.check_digit()
    }
}

impl fmt::Display for Code13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Code13 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 13 decoded positions where the first may be unresolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialCode([Option<u8>; CODE_LEN]);

impl PartialCode {
    /// Build from per-position digits
    ///
    /// Returns `None` unless every digit is 0-9 and only the first position
    /// is unresolved.
    pub fn new(digits: [Option<u8>; CODE_LEN]) -> Option<Self> {
        let first_ok = digits[0].is_none_or(|d| d < 10);
        let body_ok = digits[1..].iter().all(|d| matches!(d, Some(d) if *d < 10));
        (first_ok && body_ok).then_some(Self(digits))
    }

    /// Resolved body digits with an optional first digit
    pub(crate) fn from_body(first: Option<u8>, body: [u8; CODE_LEN - 1]) -> Self {
        let mut digits = [first; CODE_LEN];
        for (slot, d) in digits[1..].iter_mut().zip(body) {
            *slot = Some(d);
        }
        Self(digits)
    }

    /// Digit at `i`, or `None` when unresolved
    pub fn digit(&self, i: usize) -> Option<u8> {
        self.0.get(i).copied().flatten()
    }

    /// Per-position validity flags
    pub fn validity(&self) -> [bool; CODE_LEN] {
        self.0.map(|d| d.is_some())
    }

    /// Number of resolved positions
    pub fn known_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_some()).count()
    }

    /// Promote to a full code when every position is known
    pub fn complete(&self) -> Option<Code13> {
        let mut digits = [0u8; CODE_LEN];
        for (slot, d) in digits.iter_mut().zip(self.0.iter()) {
            *slot = (*d)?;
        }
        Some(Code13(digits))
    }
}

impl From<Code13> for PartialCode {
    fn from(code: Code13) -> Self {
        Self(code.0.map(Some))
    }
}

impl fmt::Display for PartialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            match d {
                Some(d) => write!(f, "{}", d)?,
                None => f.write_str("?")?,
            }
        }
        Ok(())
    }
}

/// Successful decode, fully or partially resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// All 13 digits recovered
    Complete(Code13),
    /// Body digits recovered but the parity pattern named no first digit
    PartialUnknown(PartialCode),
}

impl DecodeOutcome {
    /// Whether every digit was recovered
    pub fn is_complete(&self) -> bool {
        matches!(self, DecodeOutcome::Complete(_))
    }

    /// The full code, if recovered
    pub fn code(&self) -> Option<&Code13> {
        match self {
            DecodeOutcome::Complete(code) => Some(code),
            DecodeOutcome::PartialUnknown(_) => None,
        }
    }

    /// Positions with validity, regardless of outcome
    pub fn partial(&self) -> PartialCode {
        match self {
            DecodeOutcome::Complete(code) => PartialCode::from(*code),
            DecodeOutcome::PartialUnknown(partial) => *partial,
        }
    }
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeOutcome::Complete(code) => code.fmt(f),
            DecodeOutcome::PartialUnknown(partial) => partial.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parse() {
        let payload = Payload::parse("400638133393").unwrap();
        assert_eq!(payload.digits()[0], 4);
        assert_eq!(payload.to_string(), "400638133393");
    }

    #[test]
    fn test_payload_rejects_wrong_length() {
        for input in ["40063813339", "4006381333931", ""] {
            match Payload::parse(input) {
                Err(EncodeError::InvalidPayload { reason, .. }) => {
                    assert_eq!(reason, PayloadProblem::Length(input.len()))
                }
                other => panic!("expected InvalidPayload, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_payload_rejects_non_digits() {
        let err = Payload::parse("40063813339a").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidPayload {
                input: "40063813339a".into(),
                reason: PayloadProblem::NonDigit(11),
            }
        );
        // Multi-byte digits in other scripts are not ASCII digits
        assert!(Payload::parse("٤00638133393").is_err());
    }

    #[test]
    fn test_code13_check_digit() {
        let code = Code13::parse("4006381333931").unwrap();
        assert!(code.has_valid_check_digit());
        assert_eq!(code.first_digit(), 4);
        assert_eq!(code.check_digit(), 1);

        let bad = Code13::parse("4006381333932").unwrap();
        assert!(!bad.has_valid_check_digit());
    }

    #[test]
    fn test_partial_code_display() {
        let code = Code13::parse("4006381333931").unwrap();
        let mut digits = PartialCode::from(code).0;
        digits[0] = None;
        let partial = PartialCode::new(digits).unwrap();
        assert_eq!(partial.to_string(), "?006381333931");
        assert_eq!(partial.known_count(), 12);
        assert!(!partial.validity()[0]);
        assert!(partial.validity()[1..].iter().all(|&v| v));
        assert_eq!(partial.complete(), None);
        assert_eq!(PartialCode::from(code).complete(), Some(code));
    }

    #[test]
    fn test_partial_code_new_rejects_gaps_in_body() {
        let code = Code13::parse("5901234123457").unwrap();
        let full = PartialCode::from(code).0;
        assert_eq!(PartialCode::new(full), Some(PartialCode::from(code)));

        let mut gap = full;
        gap[6] = None;
        assert_eq!(PartialCode::new(gap), None);

        let mut too_big = full;
        too_big[12] = Some(10);
        assert_eq!(PartialCode::new(too_big), None);

        let mut bad_first = full;
        bad_first[0] = Some(11);
        assert_eq!(PartialCode::new(bad_first), None);
    }

    #[test]
    fn test_partial_code_from_body() {
        let body = [9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 7];
        let partial = PartialCode::from_body(None, body);
        assert_eq!(partial.to_string(), "?901234123457");
        let code = PartialCode::from_body(Some(5), body).complete().unwrap();
        assert_eq!(code.to_string(), "5901234123457");
    }

    #[test]
    fn test_code13_from_digits() {
        let code = Code13::from_digits([4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3, 1]).unwrap();
        assert_eq!(code, Code13::parse("4006381333931").unwrap());
        assert!(code.has_valid_check_digit());
        assert_eq!(code.payload().to_string(), "400638133393");

        assert_eq!(Code13::from_digits([4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3, 10]), None);
    }
}
