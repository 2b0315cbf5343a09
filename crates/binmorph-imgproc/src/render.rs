use binmorph_image::{ops::cast_and_scale, Image, ImageError};

use crate::parallel;

/// Saturate a signed transform output to `[0, 255]`.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::render::clamp_to_u8;
///
/// let image = Image::<i16, 1>::new(ImageSize { width: 3, height: 1 }, vec![-255, 0, 255]).unwrap();
///
/// let clamped = clamp_to_u8(&image).unwrap();
/// assert_eq!(clamped.as_slice(), &[0, 0, 255]);
/// ```
pub fn clamp_to_u8(src: &Image<i16, 1>) -> Result<Image<u8, 1>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    parallel::par_iter_rows_val(src, &mut dst, |&v, out| {
        *out = v.clamp(0, 255) as u8;
    });
    Ok(dst)
}

/// Linearly map the value range of a signed transform output onto `[0, 255]`.
///
/// The minimum becomes 0 and the maximum 255. A constant image maps to 0.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::render::rescale_to_u8;
///
/// let image = Image::<i16, 1>::new(ImageSize { width: 3, height: 1 }, vec![-255, 0, 255]).unwrap();
///
/// let rescaled = rescale_to_u8(&image).unwrap();
/// assert_eq!(rescaled.as_slice(), &[0, 128, 255]);
/// ```
pub fn rescale_to_u8(src: &Image<i16, 1>) -> Result<Image<u8, 1>, ImageError> {
    let mut values = Image::from_size_val(src.size(), 0f32)?;
    cast_and_scale(src, &mut values, 1.0)?;

    let (min, max) = values
        .as_slice()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;

    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    if range <= 0.0 {
        return Ok(dst);
    }

    parallel::par_iter_rows_val(&values, &mut dst, |&v, out| {
        *out = ((v - min) * 255.0 / range).round() as u8;
    });

    Ok(dst)
}
