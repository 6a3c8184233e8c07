//! Gaussian blur for single-channel float maps.
//!
//! Separable 2-pass convolution (rows along axis 0, then axis 1) with
//! reflect borders: `(d c b a | a b c d | d c b a)`.
//!
//! Each output sample is accumulated relative to the centre sample,
//! `c + sum(w * (v - c))`. For a normalized kernel this equals the plain
//! weighted sum, but constant neighbourhoods come out bit-exact.

use ndarray::{Array2, ArrayView2, Axis};
use rayon::prelude::*;

use super::core::{gaussian_kernel_1d, reflect_index};
use crate::config::DEFAULT_TRUNCATE;
use crate::error::Result;

/// Apply Gaussian blur with the default kernel truncation (4 sigma).
///
/// # Arguments
/// * `input` - Single-channel map (height, width)
/// * `sigma` - Standard deviation of the Gaussian, must be > 0
///
/// # Returns
/// Blurred map with the same dimensions
pub fn gaussian_blur(input: ArrayView2<f64>, sigma: f64) -> Result<Array2<f64>> {
    gaussian_blur_truncated(input, sigma, DEFAULT_TRUNCATE)
}

/// Apply Gaussian blur with an explicit kernel truncation factor.
///
/// Kernel radius is `floor(truncate * sigma + 0.5)`.
pub fn gaussian_blur_truncated(
    input: ArrayView2<f64>,
    sigma: f64,
    truncate: f64,
) -> Result<Array2<f64>> {
    let kernel = gaussian_kernel_1d(sigma, truncate)?;

    let temp = convolve_axis(input, &kernel, Axis(0));
    Ok(convolve_axis(temp.view(), &kernel, Axis(1)))
}

/// Correlate every line along `axis` with a symmetric odd-length kernel.
fn convolve_axis(input: ArrayView2<f64>, kernel: &[f64], axis: Axis) -> Array2<f64> {
    let (height, width) = input.dim();
    let half = (kernel.len() / 2) as isize;
    let mut output = Array2::<f64>::zeros((height, width));

    if height == 0 || width == 0 {
        return output;
    }

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let centre = input[[y, x]];
                let mut acc = 0.0f64;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let offset = ki as isize - half;
                    let sample = if axis == Axis(0) {
                        input[[reflect_index(y as isize + offset, height), x]]
                    } else {
                        input[[y, reflect_index(x as isize + offset, width)]]
                    };
                    acc += kv * (sample - centre);
                }
                *out = centre + acc;
            }
        });

    output
}
