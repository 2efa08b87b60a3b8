use std::f32::consts::PI;

use imgwarp_image::{Image, ImageDtype, ImageError};

use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Inverts a 2x3 affine transformation matrix.
///
/// The determinant and the inverse are evaluated in `f64` so that matrices
/// with very large or very small scale terms stay invertible.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix. A singular matrix yields a
/// zero linear part.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let [a, b, c, d, e, f] = (*m).map(f64::from);

    // follow OpenCV: check for determinant == 0
    // https://github.com/opencv/opencv/blob/4.9.0/modules/imgproc/src/imgwarp.cpp#L2765
    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f].map(|v| v as f32)
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// With image coordinates (x to the right, y down) a positive angle turns the
/// content counter-clockwise as displayed.
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use imgwarp_imgproc::warp::get_rotation_matrix2d;
///
/// let center = (0.0, 0.0);
/// let angle = 90.0;
/// let scale = 1.0;
/// let rotation_matrix = get_rotation_matrix2d(center, angle, scale);
/// assert!((rotation_matrix[1] - 1.0).abs() < 1e-6);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

/// Returns a 2x3 matrix translating by `tx` horizontally and `ty` vertically.
///
/// # Example
///
/// ```
/// use imgwarp_imgproc::warp::get_translation_matrix2d;
///
/// assert_eq!(get_translation_matrix2d(5.0, 2.0), [1.0, 0.0, 5.0, 0.0, 1.0, 2.0]);
/// ```
pub fn get_translation_matrix2d(tx: f32, ty: f32) -> [f32; 6] {
    [1.0, 0.0, tx, 0.0, 1.0, ty]
}

/// Applies an affine transformation to a point.
pub fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to an image.
///
/// Every destination pixel `(x, y)` is filled with the source sampled at
/// `M⁻¹ · (x, y, 1)`. Destination pixels whose sample point lies entirely
/// outside the source are set to zero.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The 2x3 affine transformation matrix mapping `src` to `dst`.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImage`] if `src` has no pixels.
///
/// # Example
///
/// ```
/// use imgwarp_image::{Image, ImageSize};
/// use imgwarp_imgproc::interpolation::InterpolationMode;
/// use imgwarp_imgproc::warp::warp_affine;
///
/// let src = Image::<_, 3>::from_size_val(
///    ImageSize {
///       width: 4,
///      height: 5,
///  },
///  1f32,
/// ).unwrap();
///
/// let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let new_size = ImageSize {
///    width: 4,
///   height: 5,
/// };
///
/// let mut dst = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_affine<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.is_empty() {
        return Err(ImageError::InvalidImage(src.size()));
    }

    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    log::debug!(
        "warp_affine: {} -> {}, inverse map {:?}",
        src.size(),
        dst.size(),
        m_inv
    );

    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);

    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let (u, v) = transform_point(x as f32, y as f32, &m_inv);

        // at least one interpolation tap has to land inside the source
        if u > -1.0 && u < src_cols && v > -1.0 && v < src_rows {
            let pixel = interpolate_pixel(src, u, v, interpolation);
            dst_pixel
                .iter_mut()
                .zip(pixel)
                .for_each(|(d, s)| *d = T::from_f32(s));
        } else {
            dst_pixel.fill(T::default());
        }
    });

    Ok(())
}
