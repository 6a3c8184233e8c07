//! Core utilities shared by the sketch filters.
//!
//! - Gaussian kernel generation
//! - Reflect border indexing

use crate::config::check_positive;
use crate::error::{Result, SketchError};

/// Largest kernel radius accepted, in samples (2M + 1 taps).
pub const MAX_KERNEL_RADIUS: usize = 1 << 20;

/// Kernel radius for a Gaussian of standard deviation `sigma`.
///
/// `floor(truncate * sigma + 0.5)`, matching scipy's `gaussian_filter`.
///
/// # Errors
/// [`SketchError::InvalidParameter`] for `sigma` if the radius exceeds
/// [`MAX_KERNEL_RADIUS`].
pub fn kernel_radius(sigma: f64, truncate: f64) -> Result<usize> {
    let radius = (truncate * sigma + 0.5).floor();
    if !radius.is_finite() || radius > MAX_KERNEL_RADIUS as f64 {
        return Err(SketchError::InvalidParameter {
            name: "sigma",
            value: sigma,
        });
    }
    Ok(radius as usize)
}

/// Generate a normalized 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
/// * `truncate` - Kernel radius in units of `sigma`
///
/// # Returns
/// Odd-length kernel of `2 * radius + 1` taps summing to 1, centre at index `radius`
///
/// # Errors
/// [`SketchError::InvalidParameter`](crate::SketchError::InvalidParameter) if either
/// argument is non-positive or not finite, or if the kernel would exceed
/// [`MAX_KERNEL_RADIUS`].
pub fn gaussian_kernel_1d(sigma: f64, truncate: f64) -> Result<Vec<f64>> {
    check_positive("sigma", sigma)?;
    check_positive("truncate", truncate)?;

    let radius = kernel_radius(sigma, truncate)? as isize;
    let inv_two_var = 0.5 / (sigma * sigma);

    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| {
            let x = i as f64;
            (-inv_two_var * x * x).exp()
        })
        .collect();

    // Normalize
    let sum: f64 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    Ok(kernel)
}

/// Reflect an out-of-range index back into `0..len`.
///
/// Border mode `(d c b a | a b c d | d c b a)`, same as scipy's `reflect`.
/// The pattern repeats with period `2 * len`, so offsets larger than the
/// axis itself are folded correctly too. `len` must be non-zero.
#[inline]
pub fn reflect_index(i: isize, len: usize) -> usize {
    let n = len as isize;
    let period = 2 * n;
    let m = i.rem_euclid(period);
    if m < n {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SketchError;

    #[test]
    fn test_kernel_normalized_and_symmetric() {
        for &sigma in &[0.5, 1.0, 2.5, 10.0] {
            let kernel = gaussian_kernel_1d(sigma, 4.0).unwrap();
            let sum: f64 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "sigma={} sum={}", sigma, sum);

            let n = kernel.len();
            for i in 0..n / 2 {
                assert_eq!(kernel[i], kernel[n - 1 - i]);
            }
        }
    }

    #[test]
    fn test_kernel_radius() {
        assert_eq!(kernel_radius(10.0, 4.0).unwrap(), 40);
        assert_eq!(kernel_radius(1.0, 4.0).unwrap(), 4);
        assert_eq!(kernel_radius(0.1, 4.0).unwrap(), 0);
        assert_eq!(gaussian_kernel_1d(10.0, 4.0).unwrap().len(), 81);
        assert_eq!(gaussian_kernel_1d(0.1, 4.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_kernel_radius_upper_bound() {
        let sigma_at_limit = MAX_KERNEL_RADIUS as f64 / 4.0;
        assert_eq!(kernel_radius(sigma_at_limit, 4.0).unwrap(), MAX_KERNEL_RADIUS);
        for &sigma in &[sigma_at_limit + 1.0, 1e9, 1e300, f64::MAX] {
            assert!(matches!(
                kernel_radius(sigma, 4.0),
                Err(SketchError::InvalidParameter { name: "sigma", .. })
            ));
            assert!(matches!(
                gaussian_kernel_1d(sigma, 4.0),
                Err(SketchError::InvalidParameter { name: "sigma", .. })
            ));
        }
        // Product overflow to infinity is caught too
        assert!(kernel_radius(1e300, 1e300).is_err());
    }

    #[test]
    fn test_kernel_peak_at_centre() {
        let kernel = gaussian_kernel_1d(2.0, 4.0).unwrap();
        let centre = kernel.len() / 2;
        for (i, &v) in kernel.iter().enumerate() {
            assert!(v <= kernel[centre], "tap {} exceeds centre", i);
        }
    }

    #[test]
    fn test_kernel_rejects_bad_parameters() {
        assert!(matches!(
            gaussian_kernel_1d(0.0, 4.0),
            Err(SketchError::InvalidParameter { name: "sigma", .. })
        ));
        assert!(matches!(
            gaussian_kernel_1d(-3.0, 4.0),
            Err(SketchError::InvalidParameter { name: "sigma", .. })
        ));
        assert!(matches!(
            gaussian_kernel_1d(1.0, 0.0),
            Err(SketchError::InvalidParameter { name: "truncate", .. })
        ));
    }

    #[test]
    fn test_reflect_index_in_range() {
        for i in 0..5 {
            assert_eq!(reflect_index(i, 5), i as usize);
        }
    }

    #[test]
    fn test_reflect_index_edges() {
        // d c b a | a b c d | d c b a
        assert_eq!(reflect_index(-1, 4), 0);
        assert_eq!(reflect_index(-2, 4), 1);
        assert_eq!(reflect_index(-4, 4), 3);
        assert_eq!(reflect_index(4, 4), 3);
        assert_eq!(reflect_index(5, 4), 2);
        assert_eq!(reflect_index(7, 4), 0);
    }

    #[test]
    fn test_reflect_index_beyond_one_period() {
        // Second reflection flips direction again
        assert_eq!(reflect_index(8, 4), 0);
        assert_eq!(reflect_index(9, 4), 1);
        assert_eq!(reflect_index(-5, 4), 3);
        assert_eq!(reflect_index(-6, 4), 2);
        assert_eq!(reflect_index(-9, 4), 0);

        // Single-pixel axis always maps to 0
        for i in -10..10 {
            assert_eq!(reflect_index(i, 1), 0);
        }
    }
}
