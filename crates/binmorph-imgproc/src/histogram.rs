use binmorph_image::{Image, ImageError};
use rayon::prelude::*;

/// Compute the pixel intensity histogram of an image.
///
/// NOTE: this is limited to 8-bit 1-channel images.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `hist` - The output histogram, counts are accumulated into it.
/// * `num_bins` - The number of bins to use for the histogram.
///
/// # Errors
///
/// Returns an error if the number of bins is invalid.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::histogram::compute_histogram;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 3,
///     height: 3,
///   },
///   vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
/// ).unwrap();
///
/// let mut histogram = vec![0; 3];
///
/// compute_histogram(&image, &mut histogram, 3).unwrap();
/// assert_eq!(histogram, vec![3, 3, 3]);
/// ```
pub fn compute_histogram(
    src: &Image<u8, 1>,
    hist: &mut [usize],
    num_bins: usize,
) -> Result<(), ImageError> {
    if num_bins == 0 || num_bins > 256 || hist.len() != num_bins {
        return Err(ImageError::InvalidHistogramBins(num_bins));
    }

    let mut bin_lut = [0usize; 256];
    for (i, bin) in bin_lut.iter_mut().enumerate() {
        *bin = (i * num_bins) >> 8;
    }

    let counts = src
        .as_slice()
        .par_chunks(4096)
        .fold(
            || vec![0usize; num_bins],
            |mut local, chunk| {
                for &px in chunk {
                    local[bin_lut[px as usize]] += 1;
                }
                local
            },
        )
        .reduce(
            || vec![0usize; num_bins],
            |mut a, b| {
                a.iter_mut().zip(b.iter()).for_each(|(a, b)| *a += b);
                a
            },
        );

    hist.iter_mut()
        .zip(counts.iter())
        .for_each(|(h, c)| *h += c);

    Ok(())
}

/// Equalize the histogram of a grayscale image.
///
/// The lookup table maps every intensity `v` to
/// `round((cdf(v) - cdf(v_min)) * 255 / (N - cdf(v_min)))` where `v_min` is the lowest
/// intensity present in the image and `N` the number of pixels. Exact halves round to
/// the nearest even value. A constant image is returned unchanged.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output equalized image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::histogram::equalize_histogram;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 4, height: 1 }, vec![10, 10, 20, 30]).unwrap();
/// let mut equalized = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// equalize_histogram(&image, &mut equalized).unwrap();
/// assert_eq!(equalized.as_slice(), &[0, 0, 128, 255]);
/// ```
pub fn equalize_histogram(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let mut hist = vec![0usize; 256];
    compute_histogram(src, &mut hist, 256)?;

    let total = src.as_slice().len();
    let Some(first) = hist.iter().position(|&count| count > 0) else {
        // empty image
        return Ok(());
    };

    if hist[first] == total {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let scale = 255.0 / (total - hist[first]) as f64;
    let mut lut = [0u8; 256];
    let mut sum = 0usize;
    for v in (first + 1)..256 {
        sum += hist[v];
        // halves round to even
        lut[v] = (sum as f64 * scale).round_ties_even().clamp(0.0, 255.0) as u8;
    }

    dst.as_slice_mut()
        .par_iter_mut()
        .zip(src.as_slice().par_iter())
        .for_each(|(out, &px)| *out = lut[px as usize]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use binmorph_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_compute_histogram() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
        )?;

        let mut histogram = vec![0; 3];

        super::compute_histogram(&image, &mut histogram, 3)?;
        assert_eq!(histogram, vec![3, 3, 3]);

        Ok(())
    }

    #[test]
    fn test_compute_histogram_invalid_bins() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;

        let mut histogram = vec![0; 2];
        assert_eq!(
            super::compute_histogram(&image, &mut histogram, 0),
            Err(ImageError::InvalidHistogramBins(0))
        );
        assert_eq!(
            super::compute_histogram(&image, &mut histogram, 3),
            Err(ImageError::InvalidHistogramBins(3))
        );

        Ok(())
    }

    #[test]
    fn test_equalize_histogram_spreads_range() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![50, 50, 51, 52, 52, 53],
        )?;

        let mut dst = Image::from_size_val(image.size(), 0)?;
        super::equalize_histogram(&image, &mut dst)?;
        // cdf above the minimum: 51 -> 1, 52 -> 3, 53 -> 4 over 4 remaining pixels
        assert_eq!(dst.as_slice(), &[0, 0, 64, 191, 191, 255]);

        Ok(())
    }

    #[test]
    fn test_equalize_histogram_half_rounds_to_even() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 7,
                height: 1,
            },
            vec![0, 10, 20, 20, 20, 20, 20],
        )?;

        let mut dst = Image::from_size_val(image.size(), 0)?;
        super::equalize_histogram(&image, &mut dst)?;
        // 10 maps to 1 * 255 / 6 = 42.5
        assert_eq!(dst.as_slice(), &[0, 42, 255, 255, 255, 255, 255]);

        Ok(())
    }

    #[test]
    fn test_equalize_histogram_constant() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            42,
        )?;

        let mut dst = Image::from_size_val(image.size(), 0)?;
        super::equalize_histogram(&image, &mut dst)?;
        assert_eq!(dst, image);

        Ok(())
    }
}
