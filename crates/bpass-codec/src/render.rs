//! # QR Rendering
//!
//! Renders pass text into a PNG QR code suitable for screens and print.
//!
//! ## Scannability Invariants
//!
//! - Error correction is [`EcLevel::H`]: roughly 30% of the symbol may be
//!   damaged or occluded and the code still decodes.
//! - The quiet zone is the standard fixed margin of [`QUIET_ZONE_MODULES`]
//!   modules on every side.
//! - The dark/light pair has a WCAG contrast ratio of at least
//!   [`MIN_CONTRAST_RATIO`]; this is checked by tests, not assumed.
//!
//! Rendering either yields a complete PNG or a [`RenderError`]; nothing
//! partial is ever returned.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb};
use qrcode::{EcLevel, QrCode};

use crate::error::RenderError;

/// Error correction level used for every pass.
pub const ERROR_CORRECTION: EcLevel = EcLevel::H;

/// Width of the margin around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Smallest edge length of a rendered pass, in pixels.
pub const MIN_DIMENSION_PX: u32 = 256;

/// Module color (slate, #1F2937).
pub const DARK: Rgb<u8> = Rgb([0x1f, 0x29, 0x37]);

/// Background color (white).
pub const LIGHT: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Minimum luminance contrast between [`DARK`] and [`LIGHT`].
pub const MIN_CONTRAST_RATIO: f64 = 7.0;

/// Renders pass text to PNG.
#[derive(Debug, Clone, Copy)]
pub struct QrRenderer {
    min_dimension: u32,
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self {
            min_dimension: MIN_DIMENSION_PX,
        }
    }
}

impl QrRenderer {
    /// Create a renderer producing images of at least `min_dimension` pixels
    /// per side. Values below [`MIN_DIMENSION_PX`] are raised to it.
    pub fn with_min_dimension(min_dimension: u32) -> Self {
        Self {
            min_dimension: min_dimension.max(MIN_DIMENSION_PX),
        }
    }

    /// Build the QR symbol for `text`.
    pub fn symbol(&self, text: &str) -> Result<QrCode, RenderError> {
        Ok(QrCode::with_error_correction_level(text.as_bytes(), ERROR_CORRECTION)?)
    }

    /// Render `text` as PNG bytes.
    pub fn render_png(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        let code = self.symbol(text)?;
        let image = code
            .render::<Rgb<u8>>()
            .dark_color(DARK)
            .light_color(LIGHT)
            .quiet_zone(true)
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

/// WCAG 2 contrast ratio between two sRGB colors, in `1.0..=21.0`.
pub fn contrast_ratio(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

fn relative_luminance(color: Rgb<u8>) -> f64 {
    let channel = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let [r, g, b] = color.0;
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}
