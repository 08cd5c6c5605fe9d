//! Greyscale morphology with a 5x5 square structuring element.
//!
//! Out-of-bounds neighbors never take part in a window: pixels near the
//! borders see a smaller neighborhood instead of a padded one.

/// Error types used by the morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Pointwise inversion of unsigned images.
pub mod invert;
pub use invert::invert;

/// Neighborhood extrema over a square window.
pub mod neighborhood;
pub use neighborhood::{neighborhood_max, neighborhood_min, KERNEL_RADIUS};

/// Erosion, dilation, opening and closing.
pub mod ops;
pub use ops::{close, dilate, dilate_direct, erode, open};
