//! Binary morphology with a square, all-foreground structuring element.
//!
//! Images are zero padded by `level - 2` pixels and scanned with one `level x level`
//! window per pixel. Erosion keeps a pixel when its whole window is foreground,
//! dilation when any cell is. The composite transforms are built from these two.

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Structuring element and engine configuration.
pub mod kernel;
pub use kernel::{clamp_level, Morphology, StructuringElement, DEFAULT_LEVEL};

/// Constant border padding.
pub mod padding;

/// Windowed extraction over a padded buffer.
pub mod window;
pub use window::{SlidingWindows, Window};

mod ops;
pub use ops::{dilate, erode};

mod composite;
pub use composite::{black_hat, boundary_extraction, close, gradient, open, subtract, top_hat};

mod transform;
pub use transform::MorphTransform;
