use crate::image::ImageSize;

/// An error type for the image crates.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the image has no pixels to operate on.
    #[error("Invalid image: {0} has no pixels")]
    InvalidImage(ImageSize),

    /// Error when an operation parameter is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error when the pixel buffer cannot be allocated.
    #[error("Failed to allocate a buffer of {0} elements")]
    AllocationFailure(usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast.
    #[error("Failed to cast image data")]
    CastError,
}
