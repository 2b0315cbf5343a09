use binmorph_image::Image;

use super::padding::pad_constant;
use super::window::{SlidingWindows, Window};
use super::{Morphology, MorphologyError};
use crate::parallel;
use crate::threshold::{MAX_PIXEL, MIN_PIXEL};

/// Zero pad `src`, visit one window per pixel and write MAX_PIXEL where `hit` holds.
fn scan_windows<F>(
    src: &Image<u8, 1>,
    morph: &Morphology,
    hit: F,
) -> Result<Image<u8, 1>, MorphologyError>
where
    F: Fn(&Window<'_>) -> bool + Sync,
{
    let kernel = morph.kernel();
    let padded = pad_constant(src, kernel.pad(), MIN_PIXEL)?;
    let windows = SlidingWindows::new(&padded, src.size(), kernel.level())?;

    let mut dst = Image::from_size_val(windows.output_size(), MIN_PIXEL)?;
    let width = dst.width();

    parallel::for_each_row(morph.strategy(), dst.as_slice_mut(), width, |i, row| {
        row.iter_mut().enumerate().for_each(|(j, px)| {
            *px = if hit(&windows.window(i, j)) {
                MAX_PIXEL
            } else {
                MIN_PIXEL
            };
        });
    })?;

    Ok(dst)
}

/// Erode a binary image with the structuring element of `morph`.
///
/// The image is zero padded by `level - 2` pixels. A pixel becomes [`MAX_PIXEL`] only if
/// every cell of its window equals the structuring element, i.e. the whole window is
/// foreground; otherwise it becomes [`MIN_PIXEL`].
///
/// # Arguments
///
/// * `src` - The binary source image.
/// * `morph` - The engine configuration.
///
/// # Returns
///
/// A new image of the same size as `src`.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::{erode, Morphology};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 3, height: 3 }, 255).unwrap();
///
/// let eroded = erode(&image, &Morphology::default()).unwrap();
/// assert_eq!(eroded.as_slice(), &[0, 0, 0, 0, 255, 0, 0, 0, 0]);
/// ```
pub fn erode(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<u8, 1>, MorphologyError> {
    let value = morph.kernel().value();
    scan_windows(src, morph, |window| window.all_equal(value))
}

/// Dilate a binary image with the structuring element of `morph`.
///
/// Same scan as [`erode`], but a pixel becomes [`MAX_PIXEL`] if any cell of its window is
/// foreground.
///
/// # Arguments
///
/// * `src` - The binary source image.
/// * `morph` - The engine configuration.
///
/// # Returns
///
/// A new image of the same size as `src`.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::{dilate, Morphology};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     vec![0, 0, 0, 0, 255, 0, 0, 0, 0],
/// )
/// .unwrap();
///
/// let dilated = dilate(&image, &Morphology::default()).unwrap();
/// assert!(dilated.as_slice().iter().all(|&v| v == 255));
/// ```
pub fn dilate(src: &Image<u8, 1>, morph: &Morphology) -> Result<Image<u8, 1>, MorphologyError> {
    let value = morph.kernel().value();
    scan_windows(src, morph, |window| window.any_equal(value))
}
