//! Preprocessing for small neural networks: unique label extraction, one-hot target encoding,
//! bias augmentation of features and random weight initialization.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod bias;
pub mod encode;
mod error;
pub mod labels;
pub mod matrix;
pub mod typ;
pub mod weights;

pub use error::{Error, Result};

/// A class label. Labels are non-negative by construction.
pub type Label = usize;
