use approx::assert_abs_diff_eq;
use rand::Rng;

use imgwarp_image::{Image, ImageError, ImageSize};
use imgwarp_imgproc::{
    inspect::{inspect_intensities, intensities},
    transform::{rotate, scale, translate},
};

fn random_image<const C: usize>(size: ImageSize) -> Result<Image<u8, C>, ImageError> {
    let mut rng = rand::rng();
    let data = (0..size.width * size.height * C)
        .map(|_| rng.random::<u8>())
        .collect();
    Image::new(size, data)
}

#[test]
fn identity_transforms_on_random_images() -> Result<(), ImageError> {
    for size in [[1, 1], [7, 3], [16, 9], [33, 32]] {
        let image = random_image::<3>(size.into())?;

        assert_eq!(rotate(&image, 0.0)?, image);
        assert_eq!(scale(&image, 1.0)?, image);
        assert_eq!(translate(&image, 0.0)?, image);
    }

    Ok(())
}

#[test]
fn outputs_keep_dimensions() -> Result<(), ImageError> {
    let image = random_image::<1>([13, 8].into())?;

    for angle in [-45.0, 10.0, 90.0, 725.0] {
        assert_eq!(rotate(&image, angle)?.size(), image.size());
    }
    for factor in [0.25, 1.5, 3.0] {
        assert_eq!(scale(&image, factor)?.size(), image.size());
    }
    for offset in [-20.0, 0.5, 4.0] {
        assert_eq!(translate(&image, offset)?.size(), image.size());
    }

    Ok(())
}

#[test]
fn rotate_full_turn_matches_no_turn() -> Result<(), ImageError> {
    let image = random_image::<1>([10, 10].into())?.cast::<f32>()?;

    let turned = rotate(&image, 360.0)?;
    let still = rotate(&image, 0.0)?;

    for (a, b) in turned.as_slice().iter().zip(still.as_slice()) {
        assert_abs_diff_eq!(a, b, epsilon = 0.05);
    }

    Ok(())
}

#[test]
fn translate_by_five() -> Result<(), ImageError> {
    let image = random_image::<1>([12, 12].into())?;
    let moved = translate(&image, 5.0)?;

    let mut visits = 0;
    inspect_intensities(&moved, |coord, value| {
        visits += 1;
        if coord.row < 5 || coord.col < 5 {
            assert_eq!(value, 0);
        } else {
            let source = image.get([coord.row - 5, coord.col - 5, 0]).copied();
            assert_eq!(Some(value), source);
        }
    })?;
    assert_eq!(visits, 144);

    Ok(())
}

#[test]
fn caller_keeps_image_on_error() -> Result<(), ImageError> {
    let mut image = random_image::<1>([4, 4].into())?;
    let before = image.clone();

    match scale(&image, -2.0) {
        Ok(out) => image = out,
        Err(err) => assert!(matches!(err, ImageError::InvalidArgument(_))),
    }
    assert_eq!(image, before);

    image = translate(&image, 1.0)?;
    assert_eq!(intensities(&image)?.next().map(|(_, v)| v), Some(0));

    Ok(())
}
