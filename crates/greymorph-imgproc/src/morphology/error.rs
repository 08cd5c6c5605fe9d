use greymorph_image::ImageError;

use crate::parallel::ParallelError;

/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MorphologyError {
    /// The input image has zero width or height, so no neighborhood exists.
    #[error("Image has zero width or height")]
    EmptyImage,

    /// Error coming from the image containers, e.g. mismatched sizes.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error coming from the execution strategy.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
