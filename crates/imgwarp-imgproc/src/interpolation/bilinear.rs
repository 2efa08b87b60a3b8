use imgwarp_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values. Neighbours outside the image count as zero.
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let mut pixel = [0.0; C];

    // no tap can land inside the image; also rejects NaN
    if !(u > -1.0 && u < image.cols() as f32 && v > -1.0 && v < image.rows() as f32) {
        return pixel;
    }

    let (rows, cols) = (image.rows() as i64, image.cols() as i64);

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let (iu0, iv0) = (u0 as i64, v0 as i64);

    let taps = [
        (iu0, iv0, frac_uu * frac_vv),
        (iu0 + 1, iv0, frac_u * frac_vv),
        (iu0, iv0 + 1, frac_uu * frac_v),
        (iu0 + 1, iv0 + 1, frac_u * frac_v),
    ];

    let data = image.as_slice();

    for (iu, iv, w) in taps {
        if w == 0.0 || iu < 0 || iv < 0 || iu >= cols || iv >= rows {
            continue;
        }
        let base = (iv * cols + iu) as usize * C;
        pixel
            .iter_mut()
            .zip(&data[base..base + C])
            .for_each(|(p, &s)| *p += w * Into::<f32>::into(s));
    }

    pixel
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imgwarp_image::{Image, ImageError};

    #[test]
    fn bilinear_exact_grid() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 2].into(), vec![10, 20, 30, 40])?;
        assert_eq!(super::bilinear_interpolation(&image, 0.0, 0.0), [10.0]);
        assert_eq!(super::bilinear_interpolation(&image, 1.0, 1.0), [40.0]);
        Ok(())
    }

    #[test]
    fn bilinear_center() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::new([2, 2].into(), vec![0., 1., 2., 3., 4., 5., 6., 7.])?;
        let [a, b] = super::bilinear_interpolation(&image, 0.5, 0.5);
        assert_relative_eq!(a, 3.0);
        assert_relative_eq!(b, 4.0);
        Ok(())
    }

    #[test]
    fn bilinear_zero_border() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([2, 1].into(), vec![8.0, 8.0])?;
        // half of the footprint falls left of the image
        assert_relative_eq!(super::bilinear_interpolation(&image, -0.5, 0.0)[0], 4.0);
        assert_relative_eq!(super::bilinear_interpolation(&image, 1.5, 0.0)[0], 4.0);
        assert_eq!(super::bilinear_interpolation(&image, -3.0, 0.0), [0.0]);
        assert_eq!(super::bilinear_interpolation(&image, 0.0, 1.0), [0.0]);
        Ok(())
    }

    #[test]
    fn bilinear_far_and_nan() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([3, 3].into(), 50)?;
        for (u, v) in [
            (f32::MAX, 0.0),
            (0.0, f32::MAX),
            (f32::MIN, f32::MIN),
            (f32::NAN, 1.0),
            (1.0, f32::NAN),
            (f32::INFINITY, 1.0),
        ] {
            assert_eq!(super::bilinear_interpolation(&image, u, v), [0.0]);
        }
        Ok(())
    }
}
