use binmorph_image::{Image, ImageSize};

use super::MorphologyError;

/// A square view into a padded buffer.
///
/// The window spans rows `top..top + level` and columns `left..left + level` of the
/// padded buffer. Cells falling outside the buffer are not part of the window.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    padded: &'a Image<u8, 1>,
    top: usize,
    left: usize,
    level: usize,
}

impl<'a> Window<'a> {
    /// The (row, col) of the top-left cell in the padded buffer.
    pub fn origin(&self) -> (usize, usize) {
        (self.top, self.left)
    }

    /// The rows of the window as slices of the padded buffer.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let stride = self.padded.cols();
        let data = self.padded.as_slice();
        let left = self.left.min(stride);
        let right = (self.left + self.level).min(stride);
        let bottom = (self.top + self.level).min(self.padded.rows());

        (self.top..bottom).map(move |r| &data[r * stride + left..r * stride + right])
    }

    /// The cells of the window in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u8> + 'a {
        self.rows().flat_map(|row| row.iter().copied())
    }

    /// Whether every cell of the window equals `value`.
    pub fn all_equal(&self, value: u8) -> bool {
        self.rows().all(|row| row.iter().all(|&v| v == value))
    }

    /// Whether at least one cell of the window equals `value`.
    pub fn any_equal(&self, value: u8) -> bool {
        self.rows().any(|row| row.iter().any(|&v| v == value))
    }
}

/// Row-major enumeration of the windows of a padded buffer.
///
/// Given a padded buffer of size `(H, W)` produced from an image of size
/// `(orig_h, orig_w)`, the reductions are `h_reduce = H - orig_h` and
/// `w_reduce = W - orig_w`. Windows start at every offset `(i, j)` with
/// `i < H - h_reduce` and `j < W - w_reduce`, which yields exactly one window per
/// pixel of the original image.
///
/// # Example
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::morphology::{padding::pad_constant, SlidingWindows};
///
/// let src = Image::<u8, 1>::from_size_val(ImageSize { width: 4, height: 2 }, 255).unwrap();
/// let padded = pad_constant(&src, 1, 0).unwrap();
///
/// let windows = SlidingWindows::new(&padded, src.size(), 3).unwrap();
/// assert_eq!(windows.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a> {
    padded: &'a Image<u8, 1>,
    level: usize,
    output_size: ImageSize,
    next: usize,
}

impl<'a> SlidingWindows<'a> {
    /// Enumerate the `level x level` windows of `padded`, an image of `orig_size` padded
    /// on every side.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::ShapeMismatch`] if the padded buffer is smaller than
    /// the original size.
    pub fn new(
        padded: &'a Image<u8, 1>,
        orig_size: ImageSize,
        level: usize,
    ) -> Result<Self, MorphologyError> {
        if padded.height() < orig_size.height || padded.width() < orig_size.width {
            return Err(MorphologyError::ShapeMismatch(padded.size(), orig_size));
        }

        let h_reduce = padded.height() - orig_size.height;
        let w_reduce = padded.width() - orig_size.width;

        Ok(Self {
            padded,
            level,
            output_size: ImageSize {
                width: padded.width() - w_reduce,
                height: padded.height() - h_reduce,
            },
            next: 0,
        })
    }

    /// The grid of window offsets, equal to the original image size.
    pub fn output_size(&self) -> ImageSize {
        self.output_size
    }

    /// The window whose top-left cell is at `(i, j)` in the padded buffer.
    pub fn window(&self, i: usize, j: usize) -> Window<'a> {
        Window {
            padded: self.padded,
            top: i,
            left: j,
            level: self.level,
        }
    }
}

impl<'a> Iterator for SlidingWindows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.output_size.area() {
            return None;
        }

        let i = self.next / self.output_size.width;
        let j = self.next % self.output_size.width;
        self.next += 1;

        Some(self.window(i, j))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.output_size.area() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingWindows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::padding::pad_constant;

    fn image(width: usize, height: usize, data: Vec<u8>) -> Image<u8, 1> {
        Image::new(ImageSize { width, height }, data).unwrap()
    }

    #[test]
    fn test_window_count_matches_image() -> Result<(), MorphologyError> {
        let src = image(5, 3, vec![0; 15]);
        for level in 3..7 {
            let padded = pad_constant(&src, level - 2, 0)?;
            let windows = SlidingWindows::new(&padded, src.size(), level)?;
            assert_eq!(windows.output_size(), src.size());
            assert_eq!(windows.count(), 15);
        }
        Ok(())
    }

    #[test]
    fn test_windows_row_major_order() -> Result<(), MorphologyError> {
        let src = image(2, 2, vec![1, 2, 3, 4]);
        let padded = pad_constant(&src, 1, 0)?;
        let origins = SlidingWindows::new(&padded, src.size(), 3)?
            .map(|w| w.origin())
            .collect::<Vec<_>>();
        assert_eq!(origins, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        Ok(())
    }

    #[test]
    fn test_window_cells() -> Result<(), MorphologyError> {
        let src = image(2, 2, vec![1, 2, 3, 4]);
        let padded = pad_constant(&src, 1, 0)?;
        let windows = SlidingWindows::new(&padded, src.size(), 3)?;

        let first = windows.window(0, 0).cells().collect::<Vec<_>>();
        assert_eq!(first, vec![0, 0, 0, 0, 1, 2, 0, 3, 4]);

        let last = windows.window(1, 1).cells().collect::<Vec<_>>();
        assert_eq!(last, vec![1, 2, 0, 3, 4, 0, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_windows_level_above_three_are_offset() -> Result<(), MorphologyError> {
        // pad = 3 for level 5, so the first window covers original rows/cols -3..=1
        let src = image(3, 3, (1..=9).collect());
        let padded = pad_constant(&src, 3, 0)?;
        let windows = SlidingWindows::new(&padded, src.size(), 5)?;

        let first = windows.window(0, 0).cells().filter(|&v| v != 0).collect::<Vec<_>>();
        assert_eq!(first, vec![1, 2, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_window_level_two_is_clipped() -> Result<(), MorphologyError> {
        let src = image(2, 2, vec![1, 2, 3, 4]);
        let padded = pad_constant(&src, 0, 0)?;
        let windows = SlidingWindows::new(&padded, src.size(), 2)?;

        assert_eq!(windows.window(0, 0).cells().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(windows.window(0, 1).cells().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(windows.window(1, 1).cells().collect::<Vec<_>>(), vec![4]);
        Ok(())
    }

    #[test]
    fn test_window_predicates() -> Result<(), MorphologyError> {
        let src = image(1, 1, vec![255]);
        let padded = pad_constant(&src, 1, 0)?;
        let windows = SlidingWindows::new(&padded, src.size(), 3)?;
        let window = windows.window(0, 0);
        assert!(window.any_equal(255));
        assert!(!window.all_equal(255));
        Ok(())
    }

    #[test]
    fn test_windows_padded_too_small() {
        let padded = image(1, 1, vec![0]);
        let res = SlidingWindows::new(
            &padded,
            ImageSize {
                width: 2,
                height: 2,
            },
            3,
        );
        assert!(matches!(res, Err(MorphologyError::ShapeMismatch(_, _))));
    }
}
