//! Packed binarized pixel row

/// Compact dark/light row sampled across a barcode
///
/// Bits are packed eight to a byte; `true` means dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLine {
    width: usize,
    data: Vec<u8>,
}

impl ScanLine {
    /// Create an all-light scan line of the given width
    pub fn new(width: usize) -> Self {
        let bytes_needed = width.div_ceil(8);
        Self {
            width,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a scan line from a slice of flags
    pub fn from_bools(flags: &[bool]) -> Self {
        let mut line = Self::new(flags.len());
        for (x, &dark) in flags.iter().enumerate() {
            line.set(x, dark);
        }
        line
    }

    /// Number of pixels in the row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the row has zero pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Get pixel at `x` (out of range reads as light)
    pub fn get(&self, x: usize) -> bool {
        if x >= self.width {
            return false;
        }
        (self.data[x / 8] >> (x % 8)) & 1 == 1
    }

    /// Set pixel at `x` (out of range writes are ignored)
    pub fn set(&mut self, x: usize, dark: bool) {
        if x >= self.width {
            return;
        }
        let byte_index = x / 8;
        let bit_index = x % 8;
        if dark {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Index of the first dark pixel
    pub fn first_dark(&self) -> Option<usize> {
        let byte = self.data.iter().position(|&b| b != 0)?;
        let x = byte * 8 + self.data[byte].trailing_zeros() as usize;
        (x < self.width).then_some(x)
    }

    /// Index of the last dark pixel
    pub fn last_dark(&self) -> Option<usize> {
        let byte = self.data.iter().rposition(|&b| b != 0)?;
        let x = byte * 8 + 7 - self.data[byte].leading_zeros() as usize;
        (x < self.width).then_some(x)
    }

    /// Number of dark pixels
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate pixels left to right
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |x| self.get(x))
    }
}

impl Default for ScanLine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<&[bool]> for ScanLine {
    fn from(flags: &[bool]) -> Self {
        Self::from_bools(flags)
    }
}
