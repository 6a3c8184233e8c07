//! WebAssembly exports for the pencil sketch effect.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat row-major byte buffers (e.g. `ImageData.data`, which is
//! RGBA).

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::config::DEFAULT_BLUR_SIGMA;
use crate::pipeline::transform;

/// Convert an RGB/RGBA image into a pencil sketch.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 (RGB) or 4 (RGBA)
/// * `sigma` - Gaussian spread of the blur stage
///
/// # Returns
/// Flat array of `width * height` intensity bytes
#[wasm_bindgen]
pub fn pencil_sketch_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: f64,
) -> Result<Vec<u8>, JsError> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())?;
    let result = transform(input.view(), sigma)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Same as [`pencil_sketch_wasm`] with the default spread (sigma = 10).
#[wasm_bindgen]
pub fn pencil_sketch_default_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    pencil_sketch_wasm(data, width, height, channels, DEFAULT_BLUR_SIGMA)
}

/// Expand a single-channel sketch into RGBA bytes for `ImageData`.
#[wasm_bindgen]
pub fn gray_to_rgba_wasm(gray: &[u8]) -> Vec<u8> {
    gray.iter().flat_map(|&v| [v, v, v, 255]).collect()
}
