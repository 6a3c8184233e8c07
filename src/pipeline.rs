//! The sketch pipeline: grayscale -> invert -> blur -> dodge.
//!
//! ```
//! use ndarray::Array3;
//! use pencil_sketch::transform;
//!
//! let photo = Array3::<u8>::from_elem((8, 8, 3), 0);
//! let sketch = transform(photo.view(), 10.0).unwrap();
//! assert!(sketch.iter().all(|&v| v == 255));
//! ```
//!
//! Any stage failure aborts the run; no partial output is returned.

use ndarray::{Array2, ArrayView3};
use tracing::{debug, instrument};

use crate::config::SketchConfig;
use crate::error::Result;
use crate::filters::blend::color_dodge;
use crate::filters::blur::gaussian_blur_truncated;
use crate::filters::grayscale::grayscale;
use crate::filters::invert::invert;

/// Intermediate maps of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchStages {
    /// Luminance of the source.
    pub grayscale: Array2<f64>,
    /// `255 - grayscale`.
    pub inverted: Array2<f64>,
    /// Gaussian-blurred negative.
    pub blurred: Array2<f64>,
    /// Final dodge result.
    pub sketch: Array2<u8>,
}

/// Pencil sketch pipeline bound to a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SketchPipeline {
    config: SketchConfig,
}

impl SketchPipeline {
    pub fn new(config: SketchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Run the pipeline and return only the final intensity map.
    pub fn run(&self, source: ArrayView3<u8>) -> Result<Array2<u8>> {
        self.run_staged(source).map(|stages| stages.sketch)
    }

    /// Run the pipeline and keep every intermediate map.
    ///
    /// # Errors
    /// - [`SketchError::InvalidParameter`](crate::SketchError::InvalidParameter)
    ///   for a non-positive sigma or truncate factor
    /// - [`SketchError::InvalidInput`](crate::SketchError::InvalidInput)
    ///   for fewer than 3 channels or an empty image
    #[instrument(
        skip_all,
        fields(
            height = source.dim().0,
            width = source.dim().1,
            channels = source.dim().2,
            sigma = self.config.blur_sigma,
        )
    )]
    pub fn run_staged(&self, source: ArrayView3<u8>) -> Result<SketchStages> {
        // Reject bad parameters before touching the pixels
        self.config.validate()?;

        let gray = grayscale(source)?;
        debug!("grayscale complete");

        let inverted = invert(gray.view());
        debug!("inversion complete");

        let blurred =
            gaussian_blur_truncated(inverted.view(), self.config.blur_sigma, self.config.truncate)?;
        debug!(truncate = self.config.truncate, "blur complete");

        let sketch = color_dodge(blurred.view(), gray.view())?;
        debug!("dodge complete");

        Ok(SketchStages {
            grayscale: gray,
            inverted,
            blurred,
            sketch,
        })
    }
}

/// Convert a photograph into a pencil sketch.
///
/// # Arguments
/// * `source` - RGB or RGBA image of shape (height, width, channels)
/// * `blur_sigma` - Gaussian spread; [`DEFAULT_BLUR_SIGMA`](crate::DEFAULT_BLUR_SIGMA) is 10
///
/// # Returns
/// Single-channel 8-bit map of shape (height, width)
pub fn transform(source: ArrayView3<u8>, blur_sigma: f64) -> Result<Array2<u8>> {
    SketchPipeline::new(SketchConfig::with_sigma(blur_sigma)).run(source)
}
