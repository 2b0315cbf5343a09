use binmorph_image::{Image, ImageError};

use crate::parallel;

/// The default threshold used by [`solarize`].
pub const SOLARIZE_THRESHOLD: u8 = 128;

/// Invert the intensities of an 8-bit image.
///
/// dst(x,y,c) = 255 - src(x,y,c)
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::enhance::invert;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 3, height: 1 }, vec![0, 100, 255]).unwrap();
/// let mut inverted = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// invert(&image, &mut inverted).unwrap();
/// assert_eq!(inverted.as_slice(), &[255, 155, 0]);
/// ```
pub fn invert<const C: usize>(src: &Image<u8, C>, dst: &mut Image<u8, C>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = !src_pixel;
    });

    Ok(())
}

/// Solarize an 8-bit image.
///
/// Pixels below `threshold` are kept, the others are inverted:
///
/// dst(x,y,c) = src(x,y,c) if src(x,y,c) < threshold else 255 - src(x,y,c)
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
/// * `threshold` - The intensity from which pixels get inverted. See [`SOLARIZE_THRESHOLD`].
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn solarize<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    threshold: u8,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = if src_pixel < threshold {
            src_pixel
        } else {
            !src_pixel
        };
    });

    Ok(())
}
