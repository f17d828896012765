//! Augmentation of feature matrices with a constant bias feature.

use crate::{matrix::Matrix, typ::Num};

/// Where the bias column is placed in each row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BiasPosition {
    /// Before the original features.
    #[default]
    First,
    /// After the original features.
    Last,
}

/// Options for [`add_bias_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct BiasOptions<E> {
    /// Column the bias is inserted at.
    pub position: BiasPosition,
    /// Value of every bias entry.
    pub value: E,
}

impl<E> Default for BiasOptions<E>
where
    E: Num,
{
    fn default() -> Self {
        Self {
            position: BiasPosition::First,
            value: E::ONE,
        }
    }
}

/// Return a copy of `features` with a bias column of ones prepended to every row.
///
/// ```
/// use prepnet::{bias::add_bias, matrix::Matrix};
///
/// let features = Matrix::from_rows(&[[5.0, 6.0]]).unwrap();
/// assert_eq!(add_bias(&features).to_rows(), vec![vec![1.0, 5.0, 6.0]]);
/// ```
pub fn add_bias<E>(features: &Matrix<E>) -> Matrix<E>
where
    E: Num,
{
    add_bias_with(features, &BiasOptions::default())
}

/// Return a copy of `features` with a constant column inserted in every row as `options` say.
pub fn add_bias_with<E>(features: &Matrix<E>, options: &BiasOptions<E>) -> Matrix<E>
where
    E: Num,
{
    let cols = features.cols();
    let Ok(out) = Matrix::from_fn(features.rows(), cols + 1, |r, c| {
        match (options.position, c) {
            (BiasPosition::First, 0) => options.value.clone(),
            (BiasPosition::First, c) => features[(r, c - 1)].clone(),
            (BiasPosition::Last, c) if c == cols => options.value.clone(),
            (BiasPosition::Last, c) => features[(r, c)].clone(),
        }
    }) else {
        unreachable!("augmented dimensions are non-zero");
    };
    log::debug!("added bias column to {}x{} features", features.rows(), cols);
    out
}
