use binmorph_image::Image;

use super::{dilate, erode, Morphology, MorphologyError};
use crate::parallel;

/// Subtract two binary images pixel-wise into a signed image.
///
/// dst(x,y) = lhs(x,y) - rhs(x,y)
///
/// The result is not clamped, it lies in `[-255, 255]`.
///
/// # Errors
///
/// Returns [`MorphologyError::ShapeMismatch`] if the image sizes differ.
pub fn subtract(lhs: &Image<u8, 1>, rhs: &Image<u8, 1>) -> Result<Image<i16, 1>, MorphologyError> {
    if lhs.size() != rhs.size() {
        return Err(MorphologyError::ShapeMismatch(lhs.size(), rhs.size()));
    }

    let mut dst = Image::from_size_val(lhs.size(), 0i16)?;
    parallel::par_iter_rows_val_two(lhs, rhs, &mut dst, |&a, &b, out| {
        *out = i16::from(a) - i16::from(b);
    });

    Ok(dst)
}

/// Opening: erosion followed by dilation.
///
/// Removes small foreground specks.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::{dilate, erode, open, Morphology};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 4, height: 4 }, 255).unwrap();
/// let morph = Morphology::default();
///
/// let opened = open(&image, &morph).unwrap();
/// assert_eq!(opened, dilate(&erode(&image, &morph).unwrap(), &morph).unwrap());
/// ```
pub fn open(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<u8, 1>, MorphologyError> {
    let eroded = erode(src, morph)?;
    dilate(&eroded, morph)
}

/// Closing: dilation followed by erosion.
///
/// Fills small background holes.
pub fn close(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<u8, 1>, MorphologyError> {
    let dilated = dilate(src, morph)?;
    erode(&dilated, morph)
}

/// Morphological gradient: `dilate(src) - erode(src)`.
pub fn gradient(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<i16, 1>, MorphologyError> {
    let dilated = dilate(src, morph)?;
    let eroded = erode(src, morph)?;
    subtract(&dilated, &eroded)
}

/// Boundary extraction: `src - erode(src)`.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::{boundary_extraction, Morphology};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 3, height: 3 }, 255).unwrap();
///
/// let boundary = boundary_extraction(&image, &Morphology::default()).unwrap();
/// assert_eq!(boundary.as_slice(), &[255, 255, 255, 255, 0, 255, 255, 255, 255]);
/// ```
pub fn boundary_extraction(
    src: &Image<u8, 1>,
    morph: &Morphology,
) -> Result<Image<i16, 1>, MorphologyError> {
    let eroded = erode(src, morph)?;
    subtract(src, &eroded)
}

/// Top-hat: `src - open(src)`, keeps foreground details smaller than the element.
pub fn top_hat(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<i16, 1>, MorphologyError> {
    let opened = open(src, morph)?;
    subtract(src, &opened)
}

/// Black-hat: `close(src) - src`, keeps background details smaller than the element.
pub fn black_hat(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<i16, 1>, MorphologyError> {
    let closed = close(src, morph)?;
    subtract(&closed, src)
}
