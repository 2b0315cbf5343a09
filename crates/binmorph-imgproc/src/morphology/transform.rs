use std::fmt;
use std::str::FromStr;

use binmorph_image::Image;

use super::{
    black_hat, boundary_extraction, close, dilate, erode, gradient, open, top_hat, Morphology,
    MorphologyError,
};

/// The morphological transforms the engine can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MorphTransform {
    /// Return the binary image unchanged.
    #[default]
    None,
    /// Erosion.
    Erode,
    /// Dilation.
    Dilate,
    /// Erosion followed by dilation.
    Open,
    /// Dilation followed by erosion.
    Close,
    /// Dilation minus erosion.
    Gradient,
    /// Image minus its erosion.
    BoundaryExtraction,
    /// Image minus its opening.
    TopHat,
    /// Closing minus the image.
    BlackHat,
}

impl MorphTransform {
    /// Every transform, in the order they are usually presented.
    pub const ALL: [MorphTransform; 9] = [
        MorphTransform::None,
        MorphTransform::Erode,
        MorphTransform::Dilate,
        MorphTransform::Open,
        MorphTransform::Close,
        MorphTransform::Gradient,
        MorphTransform::BoundaryExtraction,
        MorphTransform::TopHat,
        MorphTransform::BlackHat,
    ];

    /// The lowercase name of the transform.
    pub fn name(&self) -> &'static str {
        match self {
            MorphTransform::None => "none",
            MorphTransform::Erode => "erode",
            MorphTransform::Dilate => "dilate",
            MorphTransform::Open => "open",
            MorphTransform::Close => "close",
            MorphTransform::Gradient => "gradient",
            MorphTransform::BoundaryExtraction => "boundary extraction",
            MorphTransform::TopHat => "top hat",
            MorphTransform::BlackHat => "black hat",
        }
    }

    /// Parse a transform name, falling back to [`MorphTransform::None`] for unknown names.
    ///
    /// # Example
    ///
    /// ```
    /// use binmorph_imgproc::morphology::MorphTransform;
    ///
    /// assert_eq!(MorphTransform::from_name_or_none("Erode"), MorphTransform::Erode);
    /// assert_eq!(MorphTransform::from_name_or_none("sharpen"), MorphTransform::None);
    /// ```
    pub fn from_name_or_none(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: MorphologyError| {
            log::warn!("{err}, passing the image through");
            MorphTransform::None
        })
    }

    /// Apply the transform to a binary image.
    ///
    /// The output is signed since the composite transforms subtract images; it is
    /// never clamped.
    ///
    /// # Arguments
    ///
    /// * `src` - The binary source image.
    /// * `morph` - The engine configuration.
    pub fn apply(
        &self,
        src: &Image<u8, 1>,
        morph: &Morphology,
    ) -> Result<Image<i16, 1>, MorphologyError> {
        log::debug!(
            "applying {} with level {} on {}",
            self.name(),
            morph.level(),
            src.size()
        );

        match self {
            MorphTransform::None => widen(src),
            MorphTransform::Erode => widen(&erode(src, morph)?),
            MorphTransform::Dilate => widen(&dilate(src, morph)?),
            MorphTransform::Open => widen(&open(src, morph)?),
            MorphTransform::Close => widen(&close(src, morph)?),
            MorphTransform::Gradient => gradient(src, morph),
            MorphTransform::BoundaryExtraction => boundary_extraction(src, morph),
            MorphTransform::TopHat => top_hat(src, morph),
            MorphTransform::BlackHat => black_hat(src, morph),
        }
    }
}

fn widen(src: &Image<u8, 1>) -> Result<Image<i16, 1>, MorphologyError> {
    let data = src.as_slice().iter().map(|&v| i16::from(v)).collect();
    Ok(Image::new(src.size(), data)?)
}

impl fmt::Display for MorphTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MorphTransform {
    type Err = MorphologyError;

    /// Parse a transform name, case-insensitive; `_` and `-` count as spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        MorphTransform::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| MorphologyError::UnsupportedTransform(s.to_string()))
    }
}
