//! Pipeline configuration.
//!
//! The blur spread is the only parameter the sketch effect recognises; the
//! truncation factor controls how far the Gaussian kernel reaches and does
//! not change its shape. Both can be read from a JSON file:
//!
//! ```json
//! { "blur_sigma": 6.0 }
//! ```
//!
//! Missing fields fall back to [`SketchConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};
use crate::filters::core::kernel_radius;

/// Default Gaussian standard deviation used by the sketch effect.
pub const DEFAULT_BLUR_SIGMA: f64 = 10.0;

/// Default kernel radius in units of sigma.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Standard deviation of the Gaussian applied to the inverted luminance.
    pub blur_sigma: f64,
    /// Kernel radius is `floor(truncate * blur_sigma + 0.5)`.
    pub truncate: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
            truncate: DEFAULT_TRUNCATE,
        }
    }
}

impl SketchConfig {
    pub fn with_sigma(blur_sigma: f64) -> Self {
        Self {
            blur_sigma,
            ..Self::default()
        }
    }

    /// Check that both parameters are finite and strictly positive, and
    /// that the resulting kernel fits the radius limit.
    pub fn validate(&self) -> Result<()> {
        check_positive("sigma", self.blur_sigma)?;
        check_positive("truncate", self.truncate)?;
        kernel_radius(self.blur_sigma, self.truncate).map(|_| ())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = SketchConfig::default();
        assert_eq!(config.blur_sigma, 10.0);
        assert_eq!(config.truncate, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SketchConfig::from_json_str(r#"{ "blur_sigma": 3.5 }"#).unwrap();
        assert_eq!(config.blur_sigma, 3.5);
        assert_eq!(config.truncate, DEFAULT_TRUNCATE);

        let config = SketchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_sigma() {
        let err = SketchConfig::from_json_str(r#"{ "blur_sigma": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SketchError::InvalidParameter { name: "sigma", .. }
        ));

        assert!(SketchConfig::with_sigma(f64::NAN).validate().is_err());
        assert!(SketchConfig::with_sigma(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_kernel() {
        let err = SketchConfig::from_json_str(r#"{ "blur_sigma": 1e300 }"#).unwrap_err();
        assert!(matches!(
            err,
            SketchError::InvalidParameter { name: "sigma", .. }
        ));
        assert!(SketchConfig::with_sigma(1000.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SketchConfig::from_json_str("{ blur_sigma: }").unwrap_err();
        assert!(matches!(err, SketchError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "blur_sigma": 2.0, "truncate": 3.0 }}"#).unwrap();

        let config = SketchConfig::load(file.path()).unwrap();
        assert_eq!(config.blur_sigma, 2.0);
        assert_eq!(config.truncate, 3.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SketchConfig::load(Path::new("/nonexistent/sketch.json")).unwrap_err();
        assert!(matches!(err, SketchError::Io(_)));
    }
}
