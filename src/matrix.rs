//! A dense, row-major, two-dimensional array.

use std::{num::NonZeroUsize, ops};

use crate::{typ::Elem, Error, Result};

/// A rectangular matrix whose dimensions are both non-zero.
///
/// Elements are stored in one buffer in increasing order of the column index, then the row index.
/// Every row is a disjoint slice of that buffer, so mutating one row can never be observed through
/// another.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<E> {
    shape: [NonZeroUsize; 2],
    data: Vec<E>,
}

fn nonzero_shape(rows: usize, cols: usize) -> Result<[NonZeroUsize; 2]> {
    match (NonZeroUsize::new(rows), NonZeroUsize::new(cols)) {
        (Some(r), Some(c)) => Ok([r, c]),
        _ => Err(Error::ZeroDimension { rows, cols }),
    }
}

impl<E> Matrix<E>
where
    E: Elem,
{
    /// Create a matrix given its dimensions and data.
    pub fn new(rows: usize, cols: usize, data: Vec<E>) -> Result<Self> {
        let shape = nonzero_shape(rows, cols)?;
        let expected = rows * cols;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a matrix from a sequence of rows.
    ///
    /// Every row must have the same, non-zero length as the first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[E]>,
    {
        let first = rows.first().ok_or(Error::Empty("rows"))?;
        let cols = first.as_ref().len();
        let shape = nonzero_shape(rows.len(), cols)?;
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::ShapeMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { shape, data })
    }

    /// Create a matrix by calling `f(row, col)` for each position.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> E,
    {
        let shape = nonzero_shape(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { shape, data })
    }

    /// Return the shape of the matrix as `[rows, cols]`.
    pub fn shape(&self) -> [NonZeroUsize; 2] {
        self.shape
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.shape[0].get()
    }

    /// Return the number of columns.
    pub fn cols(&self) -> usize {
        self.shape[1].get()
    }

    /// Return the `i`-th row.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the number of rows.
    pub fn row(&self, i: usize) -> &[E] {
        let start = self.position(i, 0);
        &self.data[start..start + self.cols()]
    }

    /// Return the `i`-th row mutably.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the number of rows.
    pub fn row_mut(&mut self, i: usize) -> &mut [E] {
        let start = self.position(i, 0);
        let cols = self.cols();
        &mut self.data[start..start + cols]
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[E]> + '_ {
        self.data.chunks_exact(self.cols())
    }

    /// Return the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        if row < self.rows() && col < self.cols() {
            self.data.get(self.position(row, col))
        } else {
            None
        }
    }

    /// Return all elements in row-major order.
    pub fn ravel(&self) -> &[E] {
        &self.data
    }

    /// Copy the matrix into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<E>> {
        self.iter_rows().map(<[E]>::to_vec).collect()
    }

    fn position(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }
}

impl<E> ops::Index<(usize, usize)> for Matrix<E>
where
    E: Elem,
{
    type Output = E;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for shape {:?}",
            self.shape
        );
        &self.data[self.position(row, col)]
    }
}

impl<E> ops::IndexMut<(usize, usize)> for Matrix<E>
where
    E: Elem,
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for shape {:?}",
            self.shape
        );
        let position = self.position(row, col);
        &mut self.data[position]
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;
    use crate::Error;

    #[test]
    fn from_rows_is_row_major() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.ravel(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m.get(1, 0), Some(&4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Matrix::from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            Matrix::from_rows(&rows).unwrap_err(),
            Error::Empty("rows")
        ));

        let rows: Vec<Vec<f64>> = vec![Vec::new(), Vec::new()];
        assert!(matches!(
            Matrix::from_rows(&rows).unwrap_err(),
            Error::ZeroDimension { rows: 2, cols: 0 }
        ));
    }

    #[test]
    fn new_checks_buffer_length() {
        assert!(Matrix::new(2, 2, vec![0i32; 4]).is_ok());
        assert!(matches!(
            Matrix::new(2, 2, vec![0i32; 3]).unwrap_err(),
            Error::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(matches!(
            Matrix::new(0, 2, Vec::<i32>::new()).unwrap_err(),
            Error::ZeroDimension { rows: 0, cols: 2 }
        ));
    }

    #[test]
    fn rows_do_not_alias() {
        let mut m = Matrix::from_fn(3, 2, |r, c| (r * 2 + c) as i32).unwrap();
        m.row_mut(1)[0] = 100;
        m[(2, 1)] = -1;
        assert_eq!(m.to_rows(), vec![vec![0, 1], vec![100, 3], vec![4, -1]]);
    }

    #[test]
    fn iter_rows_yields_every_row() {
        let m = Matrix::from_fn(4, 3, |r, _| r).unwrap();
        let rows: Vec<_> = m.iter_rows().collect();
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, &[i, i, i]);
        }
    }
}
