use num_traits::Zero;
use std::cmp::PartialOrd;

use binmorph_image::{Image, ImageError};

use crate::parallel;

/// The intensity of a foreground (white) pixel.
pub const MAX_PIXEL: u8 = 255;

/// The intensity of a background (black) pixel.
pub const MIN_PIXEL: u8 = 0;

/// The midpoint threshold used to binarize images.
pub const MID_PIXEL: u8 = MAX_PIXEL / 2;

/// Apply a binary threshold to an image.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image with the same number of channels, its pixel type may differ.
/// * `threshold` - The threshold value, in the pixel type of `src`.
/// * `max_value` - The output value when the input value is greater than the threshold.
///
/// # Examples
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 100, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    threshold: T,
    max_value: U,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd,
    U: Copy + Send + Sync + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // run the thresholding operation in parallel
    parallel::par_iter_rows_val(src, dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            max_value
        } else {
            U::zero()
        };
    });

    Ok(())
}

/// Reduce an image to the two levels [`MIN_PIXEL`] and [`MAX_PIXEL`].
///
/// Every pixel less than or equal to [`MID_PIXEL`] becomes [`MIN_PIXEL`], every other
/// pixel becomes [`MAX_PIXEL`]. The input may hold any integer type, values outside
/// `[0, 255]` follow the same rule.
///
/// # Arguments
///
/// * `src` - The input image, usually a single channel grayscale image.
///
/// # Returns
///
/// A new two-level image of the same size.
///
/// # Examples
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::threshold::binarize;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 4, height: 1 }, vec![0, 127, 128, 255]).unwrap();
///
/// let binary = binarize(&image).unwrap();
/// assert_eq!(binary.as_slice(), &[0, 0, 255, 255]);
/// ```
pub fn binarize<T, const C: usize>(src: &Image<T, C>) -> Result<Image<u8, C>, ImageError>
where
    T: Copy + Send + Sync + PartialOrd + From<u8>,
{
    let mut dst = Image::<u8, C>::from_size_val(src.size(), MIN_PIXEL)?;
    threshold_binary(src, &mut dst, T::from(MID_PIXEL), MAX_PIXEL)?;
    Ok(dst)
}
