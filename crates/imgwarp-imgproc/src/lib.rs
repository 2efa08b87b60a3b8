#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pixel intensity access module.
pub mod inspect;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// rotation, scaling and translation of whole images.
pub mod transform;

/// image geometric transformations module.
pub mod warp;
