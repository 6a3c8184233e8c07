//! Grayscale conversion filter.
//!
//! Reduces an RGB or RGBA pixel buffer to a single-channel luminance map
//! using ITU-R BT.601 weights. A fourth (alpha) channel is ignored.
//!
//! The result stays in f64 and is not clamped: the weights sum to 1, so
//! luminance of an 8-bit source is already within 0-255, and keeping the
//! fractional part avoids rounding error compounding in later stages.

use ndarray::{Array2, ArrayView3, Zip};

use crate::error::{Result, SketchError};

/// ITU-R BT.601 luma coefficients.
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

/// Luminance of one pixel, evaluated as `R*0.299 + G*0.587 + B*0.114`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * LUMA_R + g as f64 * LUMA_G + b as f64 * LUMA_B
}

/// Convert a color pixel buffer to a luminance map.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels) with 3 (RGB) or 4 (RGBA) channels
///
/// # Returns
/// Luminance map of shape (height, width)
///
/// # Errors
/// [`SketchError::InvalidInput`] if the buffer has fewer than 3 channels or
/// a zero height or width.
pub fn grayscale(input: ArrayView3<u8>) -> Result<Array2<f64>> {
    let (height, width, channels) = input.dim();

    if channels < 3 {
        return Err(SketchError::invalid_input(format!(
            "expected at least 3 channels (RGB/RGBA), got {}",
            channels
        )));
    }
    if height == 0 || width == 0 {
        return Err(SketchError::invalid_input(format!(
            "image must have positive dimensions, got {}x{}",
            width, height
        )));
    }

    let mut output = Array2::<f64>::zeros((height, width));
    Zip::indexed(&mut output).par_for_each(|(y, x), out| {
        *out = luminance(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
    });

    Ok(output)
}
