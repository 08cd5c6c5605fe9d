#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pixelwise image comparison module.
pub mod compare;

/// greyscale morphology module.
pub mod morphology;

/// module containing parallization utilities.
pub mod parallel;
