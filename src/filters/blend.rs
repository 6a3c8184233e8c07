//! Color dodge blend.
//!
//! Lightens the `back` layer by dividing it into the `front` layer:
//!
//! ```text
//! back == 255  ->  255
//! otherwise    ->  min(front * 255 / (255 - back), 255)
//! ```
//!
//! This is the only place in the pipeline where float maps are cast to
//! 8-bit. The cast truncates towards zero; negative and NaN values (outside
//! the 0-255 input domain) saturate to 0.

use ndarray::{Array2, ArrayView2, Zip};

use super::invert::WHITE;
use crate::error::{Result, SketchError};

/// Dodge a single sample.
///
/// `back == 255` would divide by zero; it is forced to full white instead.
#[inline]
pub fn dodge_pixel(front: f64, back: f64) -> u8 {
    if back == WHITE {
        return 255;
    }
    let v = front * WHITE / (WHITE - back);
    if v > WHITE {
        255
    } else {
        v as u8
    }
}

/// Color dodge `front` onto `back`.
///
/// # Arguments
/// * `front` - Blend layer (the blurred, inverted luminance), values 0-255
/// * `back` - Base layer (the original luminance), values 0-255
///
/// # Returns
/// 8-bit intensity map of the shared shape
///
/// # Errors
/// [`SketchError::ShapeMismatch`] if the two maps differ in shape.
pub fn color_dodge(front: ArrayView2<f64>, back: ArrayView2<f64>) -> Result<Array2<u8>> {
    if front.dim() != back.dim() {
        return Err(SketchError::ShapeMismatch {
            front: front.dim(),
            back: back.dim(),
        });
    }

    let mut output = Array2::<u8>::zeros(front.dim());
    Zip::from(&mut output)
        .and(&front)
        .and(&back)
        .par_for_each(|out, &f, &b| *out = dodge_pixel(f, b));

    Ok(output)
}
