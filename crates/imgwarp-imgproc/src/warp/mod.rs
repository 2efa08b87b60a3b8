//! Geometric image transformations using affine warps.
//!
//! This module provides the building blocks for 2D affine transformations:
//!
//! - Rotation matrix generation (rotation and uniform scale about a center)
//! - Translation matrix generation
//! - Affine transform inversion
//! - Inverse-mapped warping of an image
//!
//! Matrices are stored row-major as `[a, b, tx, c, d, ty]` and map source
//! coordinates to destination coordinates. [`warp_affine`] inverts the matrix
//! internally to look up the source position of every destination pixel.
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```no_run
//! use imgwarp_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, get_translation_matrix2d, invert_affine_transform, transform_point,
    warp_affine,
};
