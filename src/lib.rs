//! Pencil sketch effect for raster photographs.
//!
//! Converts an RGB/RGBA image into a single-channel pencil-sketch rendering:
//! grayscale conversion, tonal inversion, Gaussian blur, and a color-dodge
//! blend of the blurred negative onto the original luminance.
//!
//! ## Image Format
//! - **Source**: `ArrayView3<u8>` of shape (height, width, channels), 3 or 4 channels
//! - **Intermediate maps**: `Array2<f64>` of shape (height, width), nominally 0-255
//! - **Output**: `Array2<u8>` of shape (height, width)
//!
//! ## Bindings
//! - `python` feature: PyO3 module operating on numpy arrays
//! - `wasm` feature: wasm-bindgen exports operating on flat byte buffers
//! - `cli` feature: the `pencil-sketch` command-line tool

pub mod config;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{SketchConfig, DEFAULT_BLUR_SIGMA, DEFAULT_TRUNCATE};
pub use error::{Result, SketchError};
pub use pipeline::{transform, SketchPipeline, SketchStages};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::SketchError;
    use crate::filters::{blend, blur, grayscale as grayscale_mod, invert as invert_mod};
    use crate::{transform, DEFAULT_BLUR_SIGMA};

    impl From<SketchError> for PyErr {
        fn from(err: SketchError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    // ========================================================================
    // Full Pipeline
    // ========================================================================

    /// Convert an RGB/RGBA u8 image (H, W, C) into a pencil sketch.
    ///
    /// Returns a (H, W) u8 array. Raises ValueError for fewer than 3
    /// channels or a non-positive sigma.
    #[pyfunction]
    #[pyo3(name = "pencil_sketch", signature = (image, sigma=DEFAULT_BLUR_SIGMA))]
    pub fn pencil_sketch_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        sigma: f64,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = transform(image.as_array(), sigma)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Individual Stages
    // ========================================================================

    /// BT.601 luminance of an RGB/RGBA u8 image, as float64 (H, W).
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let result = grayscale_mod::grayscale(image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    pub fn invert<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f64>,
    ) -> Bound<'py, PyArray2<f64>> {
        invert_mod::invert(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    #[pyo3(signature = (image, sigma=DEFAULT_BLUR_SIGMA))]
    pub fn gaussian_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f64>,
        sigma: f64,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let result = blur::gaussian_blur(image.as_array(), sigma)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    pub fn color_dodge<'py>(
        py: Python<'py>,
        front: PyReadonlyArray2<'py, f64>,
        back: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = blend::color_dodge(front.as_array(), back.as_array())?;
        Ok(result.into_pyarray(py))
    }

    /// Pencil sketch extension module
    #[pymodule]
    pub fn pencil_sketch(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(pencil_sketch_py, m)?)?;

        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(invert, m)?)?;
        m.add_function(wrap_pyfunction!(gaussian_blur, m)?)?;
        m.add_function(wrap_pyfunction!(color_dodge, m)?)?;

        m.add("DEFAULT_BLUR_SIGMA", DEFAULT_BLUR_SIGMA)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pencil_sketch;
