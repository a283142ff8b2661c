//! EAN-13 symbol tables
//!
//! Digit patterns are stored as 7-bit values, most significant bit first,
//! where a set bit is a dark module. Inverse lookups are built at compile
//! time so decoding a chunk is a single array index.

/// Start and stop guard `101`
pub const EDGE_GUARD: [bool; 3] = [true, false, true];

/// Center guard `01010`
pub const CENTER_GUARD: [bool; 5] = [false, true, false, true, false];

/// Width of one digit pattern in modules
pub const DIGIT_MODULES: usize = 7;

/// Left-hand odd parity ("L") patterns, indexed by digit
pub const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

/// Left-hand even parity ("G") patterns, indexed by digit
pub const G_CODES: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
    0b0001001, 0b0010111,
];

/// Right-hand ("R") patterns, indexed by digit
pub const R_CODES: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, 0b1001110, 0b1010000, 0b1000100,
    0b1001000, 0b1110100,
];

/// Parity of a left-half digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Odd parity, L table
    L,
    /// Even parity, G table
    G,
}

use Parity::{G, L};

/// Left-half parity sequence, indexed by the implicit first digit
pub const PARITY_PATTERNS: [[Parity; 6]; 10] = [
    [L, L, L, L, L, L],
    [L, L, G, L, G, G],
    [L, L, G, G, L, G],
    [L, L, G, G, G, L],
    [L, G, L, L, G, G],
    [L, G, G, L, L, G],
    [L, G, G, G, L, L],
    [L, G, L, G, L, G],
    [L, G, L, G, G, L],
    [L, G, G, L, G, L],
];

const fn invert(codes: &[u8; 10]) -> [Option<u8>; 128] {
    let mut out = [None; 128];
    let mut digit = 0;
    while digit < 10 {
        out[codes[digit] as usize] = Some(digit as u8);
        digit += 1;
    }
    out
}

const fn parity_mask(pattern: &[Parity; 6]) -> usize {
    let mut mask = 0;
    let mut i = 0;
    while i < 6 {
        mask <<= 1;
        if let Parity::G = pattern[i] {
            mask |= 1;
        }
        i += 1;
    }
    mask
}

const fn invert_parity(patterns: &[[Parity; 6]; 10]) -> [Option<u8>; 64] {
    let mut out = [None; 64];
    let mut digit = 0;
    while digit < 10 {
        out[parity_mask(&patterns[digit])] = Some(digit as u8);
        digit += 1;
    }
    out
}

static L_INVERSE: [Option<u8>; 128] = invert(&L_CODES);
static G_INVERSE: [Option<u8>; 128] = invert(&G_CODES);
static R_INVERSE: [Option<u8>; 128] = invert(&R_CODES);
static PARITY_INVERSE: [Option<u8>; 64] = invert_parity(&PARITY_PATTERNS);

/// Pattern for a left-half digit with the given parity
pub fn left_pattern(digit: u8, parity: Parity) -> u8 {
    match parity {
        Parity::L => L_CODES[digit as usize],
        Parity::G => G_CODES[digit as usize],
    }
}

/// Pattern for a right-half digit
pub fn right_pattern(digit: u8) -> u8 {
    R_CODES[digit as usize]
}

/// Look a left-half chunk up in the L table, then the G table
pub fn decode_left(chunk: u8) -> Option<(u8, Parity)> {
    let idx = (chunk & 0x7f) as usize;
    if let Some(digit) = L_INVERSE[idx] {
        return Some((digit, Parity::L));
    }
    G_INVERSE[idx].map(|digit| (digit, Parity::G))
}

/// Look a right-half chunk up in the R table
pub fn decode_right(chunk: u8) -> Option<u8> {
    R_INVERSE[(chunk & 0x7f) as usize]
}

/// Recover the implicit first digit from the left-half parity sequence
pub fn first_digit_for(pattern: &[Parity; 6]) -> Option<u8> {
    PARITY_INVERSE[parity_mask(pattern)]
}

/// Pack 7 module bits (MSB first) into a pattern value
pub fn pack_chunk(bits: &[bool]) -> u8 {
    bits.iter()
        .take(DIGIT_MODULES)
        .fold(0u8, |acc, &bit| (acc << 1) | bit as u8)
}

/// Unpack a pattern value into 7 module bits
pub fn unpack_chunk(pattern: u8) -> [bool; DIGIT_MODULES] {
    let mut bits = [false; DIGIT_MODULES];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (pattern >> (DIGIT_MODULES - 1 - i)) & 1 == 1;
    }
    bits
}
