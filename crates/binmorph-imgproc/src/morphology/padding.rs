use binmorph_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

/// Surround an image with a constant border of `pad` pixels on every side.
///
/// The padded image has size `(width + 2 * pad) x (height + 2 * pad)` and the source
/// pixels are copied to its centre.
///
/// # Errors
///
/// Returns [`ImageError::ImageSizeOverflow`] if the padded buffer length overflows
/// `usize`, or [`ImageError::AllocationError`] if it cannot be allocated.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `pad` - The border width in pixels.
/// * `value` - The value of the border pixels.
///
/// # Example
///
/// ```rust
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::padding::pad_constant;
///
/// let src = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![7, 9]).unwrap();
/// let padded = pad_constant(&src, 1, 0).unwrap();
///
/// assert_eq!(padded.size(), ImageSize { width: 4, height: 3 });
/// assert_eq!(padded.as_slice(), &[0, 0, 0, 0, 0, 7, 9, 0, 0, 0, 0, 0]);
/// ```
pub fn pad_constant<T, const C: usize>(
    src: &Image<T, C>,
    pad: usize,
    value: T,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Send + Sync,
{
    let grow = |len: usize| pad.checked_mul(2).and_then(|border| border.checked_add(len));
    let (Some(width), Some(height)) = (grow(src.width()), grow(src.height())) else {
        let saturated = |len: usize| pad.saturating_mul(2).saturating_add(len);
        return Err(ImageError::ImageSizeOverflow(
            saturated(src.width()),
            saturated(src.height()),
            C,
        ));
    };
    let padded_size = ImageSize { width, height };
    let mut padded = Image::from_size_val(padded_size, value)?;

    let src_stride = src.width() * C;
    let dst_stride = padded_size.width * C;
    if src_stride == 0 || src.height() == 0 {
        return Ok(padded);
    }

    // copy the source rows into the centre of the padded buffer
    padded
        .as_slice_mut()
        .par_chunks_exact_mut(dst_stride)
        .skip(pad)
        .take(src.height())
        .zip(src.as_slice().par_chunks_exact(src_stride))
        .for_each(|(dst_row, src_row)| {
            dst_row[pad * C..pad * C + src_stride].copy_from_slice(src_row);
        });

    Ok(padded)
}
