//! `pencil-sketch`: turn a photo on disk into a pencil sketch image.
//!
//! Decoding and encoding go through the `image` crate; the transform itself
//! is [`pencil_sketch::SketchPipeline`].

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::{imageops, DynamicImage, GrayImage, RgbImage};
use ndarray::{Array2, Array3};
use pencil_sketch::{SketchConfig, SketchError, SketchPipeline};
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pencil-sketch")]
#[command(version, about = "Convert a photograph into a pencil sketch", long_about = None)]
struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (format from extension, default: <INPUT>_sketch.png)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Gaussian blur spread (default: 10)
    #[arg(short, long, value_name = "SIGMA")]
    sigma: Option<f64>,

    /// Kernel radius in units of sigma (default: 4)
    #[arg(long, value_name = "FACTOR")]
    truncate: Option<f64>,

    /// JSON config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the original and the sketch next to each other
    #[arg(long)]
    side_by_side: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("the file '{0}' does not exist")]
    MissingInput(PathBuf),

    #[error(transparent)]
    Sketch(#[from] SketchError),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("buffer layout error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("sketch buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(path) => {
            info!(output = %path.display(), "sketch written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let pipeline = SketchPipeline::new(resolve_config(cli)?);

    if !cli.input.is_file() {
        return Err(CliError::MissingInput(cli.input.clone()));
    }

    let original = image::open(&cli.input)?.to_rgb8();
    info!(
        input = %cli.input.display(),
        width = original.width(),
        height = original.height(),
        sigma = pipeline.config().blur_sigma,
        "image loaded"
    );

    let sketch = sketch_image(&original, &pipeline)?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    if cli.side_by_side {
        side_by_side(&original, &sketch).save(&output)?;
    } else {
        sketch.save(&output)?;
    }

    Ok(output)
}

fn resolve_config(cli: &Cli) -> Result<SketchConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig::default(),
    };
    if let Some(sigma) = cli.sigma {
        config.blur_sigma = sigma;
    }
    if let Some(truncate) = cli.truncate {
        config.truncate = truncate;
    }
    config.validate()?;
    Ok(config)
}

fn sketch_image(original: &RgbImage, pipeline: &SketchPipeline) -> Result<GrayImage, CliError> {
    let (width, height) = original.dimensions();
    let pixels = Array3::from_shape_vec(
        (height as usize, width as usize, 3),
        original.as_raw().clone(),
    )?;

    let sketch: Array2<u8> = pipeline.run(pixels.view())?;
    let (raw, _) = sketch.into_raw_vec_and_offset();
    GrayImage::from_raw(width, height, raw).ok_or(CliError::BufferSize { width, height })
}

/// Original on the left, sketch (as gray RGB) on the right.
fn side_by_side(original: &RgbImage, sketch: &GrayImage) -> RgbImage {
    let (width, height) = original.dimensions();
    let mut canvas = RgbImage::new(width * 2, height);
    imageops::replace(&mut canvas, original, 0, 0);
    let sketch_rgb = DynamicImage::ImageLuma8(sketch.clone()).to_rgb8();
    imageops::replace(&mut canvas, &sketch_rgb, i64::from(width), 0);
    canvas
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_sketch.png"))
}
