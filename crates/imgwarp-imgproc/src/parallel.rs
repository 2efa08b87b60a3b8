use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use imgwarp_image::Image;

/// Apply a function to each pixel of the destination image in parallel by rows.
///
/// The closure receives the pixel column `x`, the pixel row `y` and the
/// mutable channel values of that pixel. Each row is owned by a single task.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send,
{
    let row_stride = C * dst.cols();
    if row_stride == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
        });
}
