use imgwarp_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// Returns zeros when the nearest pixel lies outside the image.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows() as i64, image.cols() as i64);

    let mut pixel = [0.0; C];
    if u.is_nan() || v.is_nan() {
        return pixel;
    }

    // saturating casts keep far coordinates out of range
    let iu = u.round() as i64;
    let iv = v.round() as i64;

    if iu < 0 || iv < 0 || iu >= cols || iv >= rows {
        return pixel;
    }

    let base = (iv * cols + iu) as usize * C;
    pixel
        .iter_mut()
        .zip(&image.as_slice()[base..base + C])
        .for_each(|(p, &s)| *p = s.into());

    pixel
}
