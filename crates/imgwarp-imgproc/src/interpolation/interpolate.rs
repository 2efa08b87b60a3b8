use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use imgwarp_image::{Image, ImageDtype};

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated channel values as `f32`.
///
/// # Example
///
/// ```
/// use imgwarp_image::Image;
/// use imgwarp_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 100]).unwrap();
///
/// let pixel = interpolate_pixel(&image, 0.25, 0.0, InterpolationMode::Bilinear);
/// assert_eq!(pixel, [25.0]);
/// ```
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
