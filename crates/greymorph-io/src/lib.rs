#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`](error::IoError) variants for file access and
/// encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Any format supported by the `image` crate is read as 8-bit greyscale; see
/// [`functional::read_image_any_gray8`].
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write 8-bit greyscale PNG images.
pub mod png;
