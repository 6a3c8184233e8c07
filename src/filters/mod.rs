//! Filter stages of the pencil sketch effect.
//!
//! ## Formats
//!
//! | Map | Shape | Type | Description |
//! |-----|-------|------|-------------|
//! | Source | (H, W, 3 or 4) | u8 | RGB or RGBA pixel buffer, 0-255 |
//! | Luminance | (H, W) | f64 | Unclamped float map, nominally 0-255 |
//! | Intensity | (H, W) | u8 | Final sketch, 0-255 |
//!
//! ## Stages
//!
//! - **grayscale** - BT.601 luminance of the source (`grayscale.rs`)
//! - **invert** - `255 - v` negative (`invert.rs`)
//! - **blur** - separable Gaussian with reflect borders (`blur.rs`)
//! - **blend** - color dodge with clamp and 8-bit cast (`blend.rs`)
//!
//! Every stage is a pure function: it borrows its input and allocates a new
//! output. Pixel loops run on rayon; each output sample is computed by one
//! task with a fixed summation order, so results do not depend on the
//! thread count.

pub mod core;
pub mod grayscale;
pub mod invert;
pub mod blur;
pub mod blend;
