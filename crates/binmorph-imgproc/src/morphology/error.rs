use binmorph_image::{ImageError, ImageSize};

use crate::parallel::ParallelError;

/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The structuring element level is too small to compute the padding.
    #[error("Invalid morphology level {0}, it must be at least 2")]
    InvalidLevel(usize),

    /// Two buffers combined pixel-wise have different sizes.
    #[error("Image shapes do not match: {0} vs {1}")]
    ShapeMismatch(ImageSize, ImageSize),

    /// The requested transform name is not known.
    #[error("Unsupported morphological transform: {0:?}")]
    UnsupportedTransform(String),

    /// Error creating or accessing an image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error while scheduling the windowed scan.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
