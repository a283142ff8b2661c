//! Module pattern to pixel geometry
//!
//! Module `i` covers columns `[q + i*w, q + (i+1)*w)`. Bars are painted over
//! the full bar height and both quiet zones stay light, which is the only
//! geometry the decode path relies on.

use crate::config;
use crate::error::EncodeError;
use crate::models::{MODULE_COUNT, ModuleBits};
use image::GrayImage;
use std::ops::Range;

/// Pixel value of a bar
pub const DARK: u8 = 0;
/// Pixel value of a space or quiet zone
pub const LIGHT: u8 = 255;

/// Raster geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of one module
    pub module_width: usize,
    /// Light margin on each side
    pub quiet_zone: usize,
    /// Height of every bar
    pub bar_height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: 3,
            quiet_zone: 30,
            bar_height: 100,
        }
    }
}

impl RenderOptions {
    /// Defaults overridden by `EAN_MODULE_WIDTH`, `EAN_QUIET_ZONE`, `EAN_BAR_HEIGHT`
    pub fn from_env() -> Self {
        Self {
            module_width: config::module_width(),
            quiet_zone: config::quiet_zone(),
            bar_height: config::bar_height(),
        }
    }

    /// Total raster width: `95*w + 2*q`
    pub fn image_width(&self) -> usize {
        MODULE_COUNT * self.module_width + 2 * self.quiet_zone
    }

    /// Columns covered by module `i`
    pub fn module_columns(&self, i: usize) -> Range<usize> {
        let start = self.quiet_zone + i * self.module_width;
        start..start + self.module_width
    }

    fn validate(&self) -> Result<(), EncodeError> {
        if self.module_width == 0 {
            return Err(EncodeError::InvalidGeometry("module width must be positive"));
        }
        if self.bar_height == 0 {
            return Err(EncodeError::InvalidGeometry("bar height must be positive"));
        }
        Ok(())
    }
}

/// Paints module patterns as pixels
pub struct Rasterizer;

impl Rasterizer {
    /// Dark column ranges, adjacent bar modules merged into one span
    pub fn bar_spans(
        modules: &ModuleBits,
        opts: &RenderOptions,
    ) -> Result<Vec<Range<usize>>, EncodeError> {
        opts.validate()?;

        let mut spans: Vec<Range<usize>> = Vec::new();
        for (i, &bar) in modules.as_slice().iter().enumerate() {
            if !bar {
                continue;
            }
            let cols = opts.module_columns(i);
            match spans.last_mut() {
                Some(last) if last.end == cols.start => last.end = cols.end,
                _ => spans.push(cols),
            }
        }
        Ok(spans)
    }

    /// A single grayscale row through the bars
    pub fn render_row(modules: &ModuleBits, opts: &RenderOptions) -> Result<Vec<u8>, EncodeError> {
        let mut row = vec![LIGHT; opts.image_width()];
        for span in Self::bar_spans(modules, opts)? {
            row[span].fill(DARK);
        }
        Ok(row)
    }

    /// The full raster, `bar_height` identical rows
    pub fn render(modules: &ModuleBits, opts: &RenderOptions) -> Result<GrayImage, EncodeError> {
        let row = Self::render_row(modules, opts)?;
        let width = u32::try_from(row.len())
            .map_err(|_| EncodeError::InvalidGeometry("raster width overflows u32"))?;
        let height = u32::try_from(opts.bar_height)
            .map_err(|_| EncodeError::InvalidGeometry("bar height overflows u32"))?;

        let mut pixels = Vec::with_capacity(row.len() * opts.bar_height);
        for _ in 0..opts.bar_height {
            pixels.extend_from_slice(&row);
        }
        GrayImage::from_raw(width, height, pixels)
            .ok_or(EncodeError::InvalidGeometry("raster buffer size mismatch"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::SymbolEncoder;

    #[test]
    fn test_geometry() {
        let opts = RenderOptions {
            module_width: 2,
            quiet_zone: 5,
            bar_height: 4,
        };
        assert_eq!(opts.image_width(), 95 * 2 + 10);
        assert_eq!(opts.module_columns(0), 5..7);
        assert_eq!(opts.module_columns(94), 193..195);
    }

    #[test]
    fn test_bar_spans_merge_adjacent_modules() {
        let modules = SymbolEncoder::encode("400638133393").unwrap().modules;
        let opts = RenderOptions {
            module_width: 1,
            quiet_zone: 10,
            bar_height: 1,
        };
        let spans = Rasterizer::bar_spans(&modules, &opts).unwrap();
        // Start guard "101" gives two single-module bars
        assert_eq!(spans[0], 10..11);
        assert_eq!(spans[1], 12..13);
        // Stop guard ends at the last module
        assert_eq!(spans.last().unwrap().end, 10 + 95);

        let dark: usize = spans.iter().map(|s| s.len()).sum();
        let bars = modules.as_slice().iter().filter(|&&b| b).count();
        assert_eq!(dark, bars);
    }

    #[test]
    fn test_quiet_zones_stay_light() {
        let modules = SymbolEncoder::encode("590123412345").unwrap().modules;
        let opts = RenderOptions::default();
        let row = Rasterizer::render_row(&modules, &opts).unwrap();
        assert_eq!(row.len(), 95 * 3 + 60);
        assert!(row[..30].iter().all(|&p| p == LIGHT));
        assert!(row[row.len() - 30..].iter().all(|&p| p == LIGHT));
        assert_eq!(row[30], DARK);
    }

    #[test]
    fn test_render_image() {
        let modules = SymbolEncoder::encode("590123412345").unwrap().modules;
        let opts = RenderOptions {
            module_width: 2,
            quiet_zone: 4,
            bar_height: 6,
        };
        let img = Rasterizer::render(&modules, &opts).unwrap();
        assert_eq!(img.width(), 95 * 2 + 8);
        assert_eq!(img.height(), 6);
        assert_eq!(img.get_pixel(4, 0)[0], DARK);
        assert_eq!(img.get_pixel(4, 5)[0], DARK);
        assert_eq!(img.get_pixel(6, 3)[0], LIGHT);
    }

    #[test]
    fn test_rejects_zero_geometry() {
        let modules = SymbolEncoder::encode("590123412345").unwrap().modules;
        let opts = RenderOptions {
            module_width: 0,
            ..RenderOptions::default()
        };
        assert!(matches!(
            Rasterizer::render_row(&modules, &opts),
            Err(EncodeError::InvalidGeometry(_))
        ));
    }
}
