use binmorph_image::{Image, ImageError};
use binmorph_imgproc::{
    color,
    morphology::{MorphTransform, Morphology, MorphologyError},
    operations::{ImageOperation, OperationError},
    threshold,
};

/// Errors raised while running a request through the pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Error creating or accessing an image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error raised by the morphology engine.
    #[error(transparent)]
    Morphology(#[from] MorphologyError),

    /// Error raised by a point-wise operation.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Convert an rgb image to gray scale.
pub fn to_gray(src: &Image<u8, 3>) -> Result<Image<u8, 1>, PipelineError> {
    let mut gray = Image::from_size_val(src.size(), 0u8)?;
    color::gray_from_rgb_u8(src, &mut gray)?;
    Ok(gray)
}

/// Binarize a gray image and apply a transform to it.
///
/// # Arguments
///
/// * `gray` - The gray scale source image.
/// * `transform` - The transform to apply on the binary image.
/// * `morph` - The engine configuration.
pub fn run_transform(
    gray: &Image<u8, 1>,
    transform: MorphTransform,
    morph: &Morphology,
) -> Result<Image<i16, 1>, PipelineError> {
    let binary = threshold::binarize(gray)?;
    log::debug!("binarized {} image", binary.size());
    Ok(transform.apply(&binary, morph)?)
}

/// Apply a named morphological transform to a gray image.
///
/// Unknown transform names pass the binary image through. Levels below 3, or
/// an absent level, use a 3x3 structuring element.
pub fn morph_gray(
    gray: &Image<u8, 1>,
    transform: &str,
    level: Option<i64>,
) -> Result<Image<i16, 1>, PipelineError> {
    let transform = MorphTransform::from_name_or_none(transform);
    run_transform(gray, transform, &Morphology::new(level))
}

/// Apply a named morphological transform to an rgb image.
///
/// The image is converted to gray scale and binarized first.
///
/// # Example
///
/// ```
/// use binmorph::image::{Image, ImageSize};
/// use binmorph::pipeline::morph_rgb;
///
/// let rgb = Image::<u8, 3>::from_size_val(ImageSize { width: 3, height: 3 }, 255).unwrap();
///
/// let eroded = morph_rgb(&rgb, "erode", Some(3)).unwrap();
/// assert_eq!(eroded.as_slice(), &[0, 0, 0, 0, 255, 0, 0, 0, 0]);
/// ```
pub fn morph_rgb(
    src: &Image<u8, 3>,
    transform: &str,
    level: Option<i64>,
) -> Result<Image<i16, 1>, PipelineError> {
    let gray = to_gray(src)?;
    morph_gray(&gray, transform, level)
}

/// Apply a named point-wise operation on every channel of an rgb image.
///
/// Unknown operation names return a copy of the image.
pub fn apply_operation(src: &Image<u8, 3>, operation: &str) -> Result<Image<u8, 3>, PipelineError> {
    let operation = ImageOperation::from_name_or_none(operation);
    Ok(operation.apply(src)?)
}

/// Apply a named point-wise operation on the gray scale version of an rgb image.
pub fn apply_operation_gray(
    src: &Image<u8, 3>,
    operation: &str,
) -> Result<Image<u8, 1>, PipelineError> {
    let operation = ImageOperation::from_name_or_none(operation);
    let gray = to_gray(src)?;
    Ok(operation.apply(&gray)?)
}
