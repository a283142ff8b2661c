//! Symbol extent detection and module sampling along a scan line
use crate::error::DecodeError;
use crate::models::{MODULE_COUNT, ModuleBits, ScanLine};
use tracing::{debug, trace};

/// Symbol located on a scan line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedSymbol {
    /// First dark pixel (left edge of the start guard)
    pub start: usize,
    /// Last dark pixel (right edge of the stop guard)
    pub end: usize,
    /// Estimated pixels per module
    pub module_width: f64,
    /// Sampled modules
    pub modules: ModuleBits,
}

impl LocatedSymbol {
    /// Pixel span from start guard through stop guard
    pub fn pixel_width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Finds the symbol on a scan line and samples its modules
pub struct GuardLocator;

impl GuardLocator {
    /// Bound the symbol by its outermost dark pixels and sample 95 modules
    pub fn locate(line: &ScanLine) -> Result<LocatedSymbol, DecodeError> {
        let (Some(start), Some(end)) = (line.first_dark(), line.last_dark()) else {
            debug!(width = line.width(), "scan line has no dark pixel");
            return Err(DecodeError::NoBarcodeFound);
        };

        let total_width = end - start + 1;
        let module_width = total_width as f64 / MODULE_COUNT as f64;
        trace!(start, end, module_width, "symbol extent");

        let mut bits = [false; MODULE_COUNT];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = line.get(Self::sample_position(start, end, module_width, i));
        }

        Ok(LocatedSymbol {
            start,
            end,
            module_width,
            modules: ModuleBits::new(bits),
        })
    }

    /// Pixel holding the centre of module `i`
    ///
    /// Pixel `x` spans `[x, x + 1)`, so the centre's containing pixel is its
    /// floor. Never reads past the last dark pixel.
    fn sample_position(start: usize, end: usize, module_width: f64, i: usize) -> usize {
        let center = start as f64 + i as f64 * module_width + module_width / 2.0;
        (center.floor() as usize).min(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_from(pattern: &str, module_width: usize, quiet: usize) -> ScanLine {
        let mut flags = vec![false; quiet];
        for ch in pattern.chars() {
            flags.extend(std::iter::repeat_n(ch == '1', module_width));
        }
        flags.extend(std::iter::repeat_n(false, quiet));
        ScanLine::from_bools(&flags)
    }

    fn symbol_pattern() -> String {
        // Guards around arbitrary body modules; only the extent matters here
        let body: String = (0..89).map(|i| if i % 4 == 0 { '1' } else { '0' }).collect();
        format!("101{}101", body)
    }

    #[test]
    fn test_empty_line() {
        let line = ScanLine::new(200);
        assert_eq!(GuardLocator::locate(&line), Err(DecodeError::NoBarcodeFound));
        assert_eq!(
            GuardLocator::locate(&ScanLine::default()),
            Err(DecodeError::NoBarcodeFound)
        );
    }

    #[test]
    fn test_samples_every_module_width() {
        let pattern = symbol_pattern();
        for width in 1..=5 {
            let line = line_from(&pattern, width, 12);
            let located = GuardLocator::locate(&line).unwrap();
            assert_eq!(located.start, 12);
            assert_eq!(located.pixel_width(), 95 * width);
            assert!((located.module_width - width as f64).abs() < 1e-9);
            assert_eq!(located.modules.to_string(), pattern);
        }
    }

    #[test]
    fn test_tolerates_uneven_scaling() {
        // Stretch a 2px-per-module row to 237 px total (2.49 px per module)
        let pattern = symbol_pattern();
        let target = 237usize;
        let flags: Vec<bool> = (0..target)
            .map(|x| {
                let module = x * 95 / target;
                pattern.as_bytes()[module] == b'1'
            })
            .collect();
        let located = GuardLocator::locate(&ScanLine::from_bools(&flags)).unwrap();
        assert_eq!(located.modules.to_string(), pattern);
    }
}
