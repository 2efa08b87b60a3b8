use imgwarp_image::{Image, ImageError};

/// Location of a pixel, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    /// Row (y) of the pixel.
    pub row: usize,
    /// Column (x) of the pixel.
    pub col: usize,
}

/// Iterate the intensities of a single-channel image in row-major order.
///
/// # Arguments
///
/// * `image` - The single-channel input image.
///
/// # Returns
///
/// An iterator yielding every `(coordinate, intensity)` pair exactly once.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImage`] if the image has no pixels.
///
/// # Example
///
/// ```
/// use imgwarp_image::Image;
/// use imgwarp_imgproc::inspect::{intensities, PixelCoord};
///
/// let image = Image::<u8, 1>::new([2, 1].into(), vec![3, 4]).unwrap();
/// let pairs: Vec<_> = intensities(&image).unwrap().collect();
///
/// assert_eq!(pairs[1], (PixelCoord { row: 0, col: 1 }, 4));
/// ```
pub fn intensities<T: Copy>(
    image: &Image<T, 1>,
) -> Result<impl Iterator<Item = (PixelCoord, T)> + '_, ImageError> {
    if image.is_empty() {
        return Err(ImageError::InvalidImage(image.size()));
    }

    let cols = image.cols();
    Ok(image.as_slice().iter().enumerate().map(move |(i, &value)| {
        (
            PixelCoord {
                row: i / cols,
                col: i % cols,
            },
            value,
        )
    }))
}

/// Visit every pixel of a single-channel image and report its intensity.
///
/// The callback runs sequentially in row-major order, once per pixel.
///
/// # Arguments
///
/// * `image` - The single-channel input image.
/// * `f` - Called with the coordinate and intensity of each pixel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImage`] if the image has no pixels.
pub fn inspect_intensities<T: Copy>(
    image: &Image<T, 1>,
    mut f: impl FnMut(PixelCoord, T),
) -> Result<(), ImageError> {
    let mut visited = 0usize;
    for (coord, value) in intensities(image)? {
        f(coord, value);
        visited += 1;
    }

    log::trace!("inspect_intensities: visited {visited} pixels of {}", image.size());

    Ok(())
}

/// Read the intensity at a single coordinate.
///
/// # Errors
///
/// Returns [`ImageError::PixelIndexOutOfBounds`] outside the image.
pub fn intensity_at<T: Copy>(
    image: &Image<T, 1>,
    row: usize,
    col: usize,
) -> Result<T, ImageError> {
    image.get_pixel(col, row, 0)
}

#[cfg(test)]
mod tests {
    use super::PixelCoord;
    use imgwarp_image::{Image, ImageError, ImageSize};

    #[test]
    fn inspect_constant_image() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            100,
        )?;

        let mut seen = vec![];
        super::inspect_intensities(&image, |coord, value| seen.push((coord, value)))?;

        assert_eq!(seen.len(), 16);
        assert!(seen.iter().all(|(_, v)| *v == 100));

        Ok(())
    }

    #[test]
    fn inspect_row_major_once() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([3, 2].into(), (0..6).map(|v| v as f32).collect())?;

        let mut coords = vec![];
        super::inspect_intensities(&image, |coord, value| {
            assert_eq!(value, (coord.row * 3 + coord.col) as f32);
            coords.push(coord);
        })?;

        let expected: Vec<_> = (0..2)
            .flat_map(|row| (0..3).map(move |col| PixelCoord { row, col }))
            .collect();
        assert_eq!(coords, expected);

        Ok(())
    }

    #[test]
    fn inspect_empty_image() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([5, 0].into(), vec![])?;

        let res = super::inspect_intensities(&image, |_, _| {});
        assert_eq!(res, Err(ImageError::InvalidImage(image.size())));
        assert!(super::intensities(&image).is_err());

        Ok(())
    }

    #[test]
    fn intensity_at_bounds() -> Result<(), ImageError> {
        let image = Image::<u16, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;

        assert_eq!(super::intensity_at(&image, 1, 0)?, 3);
        assert_eq!(
            super::intensity_at(&image, 2, 0),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 2, 2))
        );

        Ok(())
    }
}
