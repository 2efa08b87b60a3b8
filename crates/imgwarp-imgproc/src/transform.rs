//! Whole-image rotation, scaling and translation.
//!
//! Every operation borrows its input and returns a newly allocated image of
//! the same size, channel count and pixel type. The input is never modified,
//! so on error the caller still holds its original image:
//!
//! ```
//! use imgwarp_image::{Image, ImageSize};
//! use imgwarp_imgproc::transform::rotate;
//!
//! let mut image = Image::<u8, 1>::from_size_val([8, 8].into(), 10).unwrap();
//! image = rotate(&image, 30.0).unwrap();
//! assert_eq!(image.size(), ImageSize::from([8, 8]));
//! ```
//!
//! Sampling is bilinear. Output pixels that map from outside the source are zero.

use imgwarp_image::{Image, ImageDtype, ImageError};

use crate::interpolation::InterpolationMode;
use crate::warp::{
    get_rotation_matrix2d, get_translation_matrix2d, invert_affine_transform, transform_point,
    warp_affine,
};

fn ensure_not_empty<T, const C: usize>(image: &Image<T, C>) -> Result<(), ImageError> {
    if image.is_empty() {
        return Err(ImageError::InvalidImage(image.size()));
    }
    Ok(())
}

fn ensure_finite(name: &str, value: f32) -> Result<(), ImageError> {
    if !value.is_finite() {
        return Err(ImageError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}

/// Rotation center of the image, using integer halves of width and height.
fn image_center<T, const C: usize>(image: &Image<T, C>) -> (f32, f32) {
    ((image.width() / 2) as f32, (image.height() / 2) as f32)
}

/// Warp an image with an arbitrary 2x3 matrix into a new image of the same size.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `m` - The 2x3 affine matrix mapping input coordinates to output coordinates.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the image has no pixels.
/// * [`ImageError::AllocationFailure`] if the output cannot be allocated.
pub fn affine<T, const C: usize>(
    image: &Image<T, C>,
    m: &[f32; 6],
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    ensure_not_empty(image)?;

    let mut dst = Image::from_size_val(image.size(), T::default())?;
    warp_affine(image, &mut dst, m, InterpolationMode::Bilinear)?;

    Ok(dst)
}

/// Rotate an image about its center.
///
/// The center is `(width / 2, height / 2)` in integer pixels and the scale is 1.
/// A positive angle rotates the content counter-clockwise as displayed.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `angle` - The rotation angle in degrees.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the image has no pixels.
/// * [`ImageError::InvalidArgument`] if the angle is not finite.
/// * [`ImageError::AllocationFailure`] if the output cannot be allocated.
///
/// # Example
///
/// ```
/// use imgwarp_image::Image;
/// use imgwarp_imgproc::transform::rotate;
///
/// let image = Image::<f32, 1>::new([2, 2].into(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let rotated = rotate(&image, 0.0).unwrap();
/// assert_eq!(rotated, image);
/// ```
pub fn rotate<T, const C: usize>(
    image: &Image<T, C>,
    angle: f32,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    ensure_not_empty(image)?;
    ensure_finite("angle", angle)?;

    let m = get_rotation_matrix2d(image_center(image), angle, 1.0);
    log::debug!("rotate: angle={angle} matrix={m:?}");

    affine(image, &m)
}

/// Scale an image uniformly about its center, keeping the output size.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `factor` - The scale factor. `1.0` leaves the image unchanged.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the image has no pixels.
/// * [`ImageError::InvalidArgument`] if the factor is not finite, not positive, or so
///   small that the center can no longer be recovered from the matrix in `f32`.
/// * [`ImageError::AllocationFailure`] if the output cannot be allocated.
pub fn scale<T, const C: usize>(
    image: &Image<T, C>,
    factor: f32,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    ensure_not_empty(image)?;
    ensure_finite("scale factor", factor)?;
    if factor <= 0.0 {
        return Err(ImageError::InvalidArgument(format!(
            "scale factor must be positive, got {factor}"
        )));
    }

    let center = image_center(image);
    let m = get_rotation_matrix2d(center, 0.0, factor);
    log::debug!("scale: factor={factor} matrix={m:?}");

    // the f32 matrix must still send the output center back onto the source center
    let (u, v) = transform_point(center.0, center.1, &invert_affine_transform(&m));
    if !((u - center.0).abs() <= 0.5 && (v - center.1).abs() <= 0.5) {
        return Err(ImageError::InvalidArgument(format!(
            "scale factor {factor} cannot be represented about center {center:?}"
        )));
    }

    affine(image, &m)
}

/// Translate an image by the same offset along both axes.
///
/// A positive offset moves the content right and down.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `offset` - The shift in pixels, applied to x and y alike.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the image has no pixels.
/// * [`ImageError::InvalidArgument`] if the offset is not finite.
/// * [`ImageError::AllocationFailure`] if the output cannot be allocated.
pub fn translate<T, const C: usize>(
    image: &Image<T, C>,
    offset: f32,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    ensure_not_empty(image)?;
    ensure_finite("offset", offset)?;

    let m = get_translation_matrix2d(offset, offset);
    log::debug!("translate: offset={offset} matrix={m:?}");

    affine(image, &m)
}
