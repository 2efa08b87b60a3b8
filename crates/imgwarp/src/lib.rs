#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use imgwarp_image as image;

#[doc(inline)]
pub use imgwarp_imgproc as imgproc;
