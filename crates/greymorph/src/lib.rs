#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use greymorph_image as image;

#[doc(inline)]
pub use greymorph_imgproc as imgproc;

#[doc(inline)]
pub use greymorph_io as io;
