//! EAN-13 check digit calculation
//! Positions are 1-based: odd positions weigh 1, even positions weigh 3

use crate::models::Payload;

/// Check digit for a validated payload
pub fn check_digit(payload: &Payload) -> u8 {
    check_digit_of(payload.digits())
}

/// Check digit over raw digit values
///
/// Works for any leading digit run; callers pass the 12 payload digits.
pub fn check_digit_of(digits: &[u8]) -> u8 {
    let (sum_odd, sum_even) = digits
        .iter()
        .enumerate()
        .fold((0u32, 0u32), |(odd, even), (i, &d)| {
            if i % 2 == 0 {
                (odd + d as u32, even)
            } else {
                (odd, even + d as u32)
            }
        });
    let total = sum_odd + 3 * sum_even;
    ((10 - total % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        let payload = Payload::parse("400638133393").unwrap();
        assert_eq!(check_digit(&payload), 1);
    }

    #[test]
    fn test_zero_remainder_maps_to_zero() {
        assert_eq!(check_digit_of(&[0; 12]), 0);
        // 1*1 + 3*3 = 10, remainder 0
        assert_eq!(check_digit_of(&[1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
    }

    #[test]
    fn test_known_codes() {
        // 5901234123457, 9780201379624
        assert_eq!(check_digit_of(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]), 7);
        assert_eq!(check_digit_of(&[9, 7, 8, 0, 2, 0, 1, 3, 7, 9, 6, 2]), 4);
    }
}
