//! Helpers shared by the command line tool

use crate::models::ScanLine;
use crate::models::modules::{CENTER_GUARD, LEFT_HALF, RIGHT_HALF, START_GUARD, STOP_GUARD};
use crate::models::{DecodeOutcome, ModuleBits};
use crate::tables::DIGIT_MODULES;

/// Module string split into guards and 7-module digit groups
///
/// `101 0001101 ... 01010 1110010 ... 101`
pub fn grouped_modules(modules: &ModuleBits) -> String {
    let s = modules.to_string();
    let mut parts: Vec<&str> = vec![&s[START_GUARD]];
    parts.extend(chunks(&s[LEFT_HALF]));
    parts.push(&s[CENTER_GUARD]);
    parts.extend(chunks(&s[RIGHT_HALF]));
    parts.push(&s[STOP_GUARD]);
    parts.join(" ")
}

fn chunks(s: &str) -> impl Iterator<Item = &str> {
    (0..s.len())
        .step_by(DIGIT_MODULES)
        .map(move |i| &s[i..i + DIGIT_MODULES])
}

/// Text rendering of the bars, `rows` lines high
pub fn ascii_bars(modules: &ModuleBits, rows: usize) -> String {
    let line: String = modules
        .as_slice()
        .iter()
        .map(|&bar| if bar { '█' } else { ' ' })
        .collect();
    vec![line; rows].join("\n")
}

/// Summary statistics for a scan line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanStats {
    /// Number of dark pixels.
    pub dark_pixels: usize,
    /// Total number of pixels.
    pub total_pixels: usize,
    /// Fraction of dark pixels.
    pub dark_ratio: f32,
}

/// Compute dark/total statistics for a scan line.
pub fn scan_stats(line: &ScanLine) -> ScanStats {
    let total_pixels = line.width();
    let dark_pixels = line.count_dark();
    let dark_ratio = if total_pixels > 0 {
        dark_pixels as f32 / total_pixels as f32
    } else {
        0.0
    };
    ScanStats {
        dark_pixels,
        total_pixels,
        dark_ratio,
    }
}

/// One-line report of a decode outcome
pub fn describe_outcome(outcome: &DecodeOutcome) -> String {
    match outcome {
        DecodeOutcome::Complete(code) if code.has_valid_check_digit() => {
            format!("{} (check digit ok)", code)
        }
        DecodeOutcome::Complete(code) => format!("{} (check digit mismatch)", code),
        DecodeOutcome::PartialUnknown(partial) => {
            format!("{} (first digit unresolved)", partial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn test_grouped_modules() {
        let modules = encode("400638133393").unwrap().modules;
        let grouped = grouped_modules(&modules);
        let parts: Vec<&str> = grouped.split(' ').collect();
        assert_eq!(parts.len(), 15);
        assert_eq!(parts[0], "101");
        assert_eq!(parts[1], "0001101");
        assert_eq!(parts[7], "01010");
        assert_eq!(parts[14], "101");
        assert_eq!(grouped.replace(' ', ""), modules.to_string());
    }

    #[test]
    fn test_ascii_bars() {
        let modules = encode("400638133393").unwrap().modules;
        let art = ascii_bars(&modules, 2);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 95);
        assert!(lines[0].starts_with("█ █"));
    }

    #[test]
    fn test_scan_stats() {
        let stats = scan_stats(&ScanLine::from_bools(&[true, false, false, true]));
        assert_eq!(stats.dark_pixels, 2);
        assert_eq!(stats.total_pixels, 4);
        assert!((stats.dark_ratio - 0.5).abs() < f32::EPSILON);
        assert_eq!(scan_stats(&ScanLine::default()).dark_ratio, 0.0);
    }

    #[test]
    fn test_describe_outcome() {
        let code = encode("400638133393").unwrap().code;
        assert_eq!(
            describe_outcome(&DecodeOutcome::Complete(code)),
            "4006381333931 (check digit ok)"
        );
    }
}
