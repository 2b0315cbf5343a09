use std::fmt;
use std::str::FromStr;

use binmorph_image::{Image, ImageError};

use crate::{enhance, flip, histogram, threshold};

/// Errors related to point-wise image operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The requested operation name is not known.
    #[error("Unsupported image operation: {0:?}")]
    UnsupportedOperation(String),

    /// Error creating or accessing an image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// The point-wise operations that can be applied to an 8-bit image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageOperation {
    /// Return the image unchanged.
    #[default]
    None,
    /// Histogram equalization of every channel.
    Equalize,
    /// Reverse the rows.
    Flip,
    /// Reverse the columns.
    Mirror,
    /// Two-level threshold at the midpoint of every channel.
    Binarize,
    /// Invert the intensities.
    Invert,
    /// Invert the intensities from the solarize threshold up.
    Solarize,
}

impl ImageOperation {
    /// Every operation, in the order they are usually presented.
    pub const ALL: [ImageOperation; 7] = [
        ImageOperation::None,
        ImageOperation::Equalize,
        ImageOperation::Flip,
        ImageOperation::Mirror,
        ImageOperation::Binarize,
        ImageOperation::Invert,
        ImageOperation::Solarize,
    ];

    /// The lowercase name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            ImageOperation::None => "none",
            ImageOperation::Equalize => "equalize",
            ImageOperation::Flip => "flip",
            ImageOperation::Mirror => "mirror",
            ImageOperation::Binarize => "binarize",
            ImageOperation::Invert => "invert",
            ImageOperation::Solarize => "solarize",
        }
    }

    /// Parse an operation name, falling back to [`ImageOperation::None`] for unknown names.
    pub fn from_name_or_none(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: OperationError| {
            log::warn!("{err}, passing the image through");
            ImageOperation::None
        })
    }

    /// Apply the operation to an image with any number of channels.
    ///
    /// # Example
    ///
    /// ```
    /// use binmorph_image::{Image, ImageSize};
    /// use binmorph_imgproc::operations::ImageOperation;
    ///
    /// let image = Image::<u8, 1>::new(ImageSize { width: 3, height: 1 }, vec![1, 2, 3]).unwrap();
    ///
    /// let mirrored = ImageOperation::Mirror.apply(&image).unwrap();
    /// assert_eq!(mirrored.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn apply<const C: usize>(&self, src: &Image<u8, C>) -> Result<Image<u8, C>, OperationError> {
        log::debug!("applying {} on {}", self.name(), src.size());

        let dst = match self {
            ImageOperation::None => src.clone(),
            ImageOperation::Equalize => {
                let channels = src
                    .split_channels()?
                    .iter()
                    .map(|channel| {
                        let mut equalized = Image::from_size_val(channel.size(), 0u8)?;
                        histogram::equalize_histogram(channel, &mut equalized)?;
                        Ok(equalized)
                    })
                    .collect::<Result<Vec<_>, ImageError>>()?;
                Image::from_channels(&channels)?
            }
            ImageOperation::Flip => flip::vertical_flip(src)?,
            ImageOperation::Mirror => flip::horizontal_flip(src)?,
            ImageOperation::Binarize => threshold::binarize(src)?,
            ImageOperation::Invert => {
                let mut dst = Image::from_size_val(src.size(), 0u8)?;
                enhance::invert(src, &mut dst)?;
                dst
            }
            ImageOperation::Solarize => {
                let mut dst = Image::from_size_val(src.size(), 0u8)?;
                enhance::solarize(src, &mut dst, enhance::SOLARIZE_THRESHOLD)?;
                dst
            }
        };

        Ok(dst)
    }
}

impl fmt::Display for ImageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageOperation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ImageOperation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| OperationError::UnsupportedOperation(s.to_string()))
    }
}
