#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// image flipping module.
pub mod flip;

/// compute image histogram module.
pub mod histogram;

/// binary morphology module.
pub mod morphology;

/// point-wise image operations module.
pub mod operations;

/// module containing parallelization utilities.
pub mod parallel;

/// utilities to turn signed transform output into displayable images.
pub mod render;

/// operations to threshold images.
pub mod threshold;
