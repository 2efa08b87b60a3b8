//! Pixel interpolation methods for image transformations.
//!
//! Sampling points may fall anywhere in the plane. Neighbours outside the
//! source image contribute zero, so the image behaves as if surrounded by a
//! constant border of zeros.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest pixel value (no interpolation)
//! - **Bilinear**: linear interpolation between the four adjacent pixels

mod bilinear;
pub(crate) mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
