/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of two buffers do not match.
    #[error("Image size mismatch ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when the buffer length of an image does not fit in memory addressing.
    #[error("Image size ({0}x{1}) with {2} channels overflows the buffer length")]
    ImageSizeOverflow(usize, usize, usize),

    /// Error when the buffer of an image cannot be allocated.
    #[error("Failed to allocate {0} image elements")]
    AllocationError(usize),

    /// Error when the number of histogram bins is not valid.
    #[error("Invalid number of histogram bins ({0}), must be in [1, 256]")]
    InvalidHistogramBins(usize),
}
