//! Tonal inversion: the photographic negative of a luminance map.

use ndarray::{Array2, ArrayView2, Zip};

/// Maximum intensity of an 8-bit channel, as used by the float maps.
pub const WHITE: f64 = 255.0;

/// Invert a single-channel map (`255 - v` per element).
///
/// Values are expected in 0-255; anything outside that range is inverted
/// arithmetically without clamping.
pub fn invert(input: ArrayView2<f64>) -> Array2<f64> {
    Zip::from(&input).par_map_collect(|&v| WHITE - v)
}
