//! Dense fixed-shape tensors.
//!
//! Row-major storage for the per-(operation, machine) and
//! per-(machine, operation, operation) data of a problem. Shapes are fixed
//! at construction; element updates are crate-internal so that a validated
//! problem cannot be changed from the outside.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A dense two-dimensional matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "MatrixRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<MatrixRepr<T>> for Matrix<T> {
    type Error = DataError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self, Self::Error> {
        check_len("matrix", &[repr.rows, repr.cols], repr.data.len())?;
        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            data: repr.data,
        })
    }
}

fn check_len(field: &'static str, shape: &[usize], actual: usize) -> Result<(), DataError> {
    let expected = shape.iter().try_fold(1usize, |n, &d| n.checked_mul(d));
    if expected == Some(actual) {
        return Ok(());
    }
    Err(DataError::DataLength {
        field,
        shape: shape.to_vec(),
        actual,
    })
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows × cols` matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// An empty `rows` yields a `0 × 0` matrix.
    ///
    /// # Errors
    /// [`DataError::RaggedTensor`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, DataError> {
        let num_rows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * cols);

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(DataError::RaggedTensor {
                    field: "matrix",
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: num_rows,
            cols,
            data,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Slice of row `row`, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            self.data.get(row * self.cols..(row + 1) * self.cols)
        } else {
            None
        }
    }

    /// Iterates over `(row, col, &value)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / cols, i % cols, v))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }
}

/// A dense three-dimensional tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Tensor3Repr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Tensor3<T> {
    dims: (usize, usize, usize),
    data: Vec<T>,
}

#[derive(Deserialize)]
struct Tensor3Repr<T> {
    dims: (usize, usize, usize),
    data: Vec<T>,
}

impl<T> TryFrom<Tensor3Repr<T>> for Tensor3<T> {
    type Error = DataError;

    fn try_from(repr: Tensor3Repr<T>) -> Result<Self, Self::Error> {
        let (d0, d1, d2) = repr.dims;
        check_len("tensor", &[d0, d1, d2], repr.data.len())?;
        Ok(Self {
            dims: repr.dims,
            data: repr.data,
        })
    }
}

impl<T: Clone> Tensor3<T> {
    /// Creates a `d0 × d1 × d2` tensor with every entry set to `value`.
    pub fn filled(d0: usize, d1: usize, d2: usize, value: T) -> Self {
        Self {
            dims: (d0, d1, d2),
            data: vec![value; d0 * d1 * d2],
        }
    }
}

impl<T> Tensor3<T> {
    /// Builds a tensor from nested slices.
    ///
    /// # Errors
    /// [`DataError::RaggedTensor`] if the nesting is not rectangular.
    pub fn from_nested(nested: Vec<Vec<Vec<T>>>) -> Result<Self, DataError> {
        let d0 = nested.len();
        let d1 = nested.first().map_or(0, Vec::len);
        let d2 = nested
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let mut data = Vec::with_capacity(d0 * d1 * d2);

        for (i, plane) in nested.into_iter().enumerate() {
            if plane.len() != d1 {
                return Err(DataError::RaggedTensor {
                    field: "tensor",
                    row: i,
                    expected: d1,
                    actual: plane.len(),
                });
            }
            for (j, row) in plane.into_iter().enumerate() {
                if row.len() != d2 {
                    return Err(DataError::RaggedTensor {
                        field: "tensor",
                        row: i * d1 + j,
                        expected: d2,
                        actual: row.len(),
                    });
                }
                data.extend(row);
            }
        }

        Ok(Self {
            dims: (d0, d1, d2),
            data,
        })
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.dims
    }

    /// Entry at `(i, j, k)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        let (d0, d1, d2) = self.dims;
        if i < d0 && j < d1 && k < d2 {
            self.data.get((i * d1 + j) * d2 + k)
        } else {
            None
        }
    }

    /// Iterates over `(i, j, k, &value)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, usize, &T)> {
        let (_, d1, d2) = self.dims;
        let (d1, d2) = (d1.max(1), d2.max(1));
        self.data.iter().enumerate().map(move |(n, v)| {
            let k = n % d2;
            let j = (n / d2) % d1;
            let i = n / (d1 * d2);
            (i, j, k, v)
        })
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        let (d0, d1, d2) = self.dims;
        debug_assert!(i < d0 && j < d1 && k < d2);
        self.data[(i * d1 + j) * d2 + k] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), Some(&6));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_matrix_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedTensor {
                field: "matrix",
                row: 1,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_matrix_indexed_iter() {
        let m = Matrix::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let cells: Vec<_> = m.indexed_iter().map(|(r, c, v)| (r, c, *v)).collect();
        assert_eq!(
            cells,
            vec![(0, 0, 'a'), (0, 1, 'b'), (1, 0, 'c'), (1, 1, 'd')]
        );
    }

    #[test]
    fn test_matrix_set() {
        let mut m = Matrix::filled(2, 2, 0);
        m.set(1, 0, 7);
        assert_eq!(m.get(1, 0), Some(&7));
        assert_eq!(m.get(0, 1), Some(&0));
    }

    #[test]
    fn test_tensor_from_nested() {
        let t = Tensor3::from_nested(vec![
            vec![vec![0, 1], vec![2, 3]],
            vec![vec![4, 5], vec![6, 7]],
        ])
        .unwrap();
        assert_eq!(t.shape(), (2, 2, 2));
        assert_eq!(t.get(1, 0, 1), Some(&5));
        assert_eq!(t.get(0, 2, 0), None);

        let flat: Vec<_> = t.indexed_iter().map(|(i, j, k, v)| (i, j, k, *v)).collect();
        assert_eq!(flat[5], (1, 0, 1, 5));
        assert_eq!(flat[7], (1, 1, 1, 7));
    }

    #[test]
    fn test_tensor_ragged() {
        assert!(Tensor3::from_nested(vec![vec![vec![0, 1], vec![2]]]).is_err());
        assert!(Tensor3::from_nested(vec![vec![vec![0]], vec![]]).is_err());
    }

    #[test]
    fn test_deserialize_checks_data_length() {
        let m: Matrix<i64> =
            serde_json::from_str(r#"{"rows": 1, "cols": 2, "data": [3, 4]}"#).unwrap();
        assert_eq!(m.get(0, 1), Some(&4));

        assert!(serde_json::from_str::<Matrix<i64>>(r#"{"rows": 2, "cols": 2, "data": [1]}"#).is_err());
        assert!(
            serde_json::from_str::<Tensor3<i64>>(r#"{"dims": [1, 1, 2], "data": [1]}"#).is_err()
        );
    }

    #[test]
    fn test_data_length_reports_declared_shape() {
        let err = Matrix::try_from(MatrixRepr {
            rows: 2,
            cols: 2,
            data: vec![1],
        })
        .unwrap_err();
        assert_eq!(
            err,
            DataError::DataLength {
                field: "matrix",
                shape: vec![2, 2],
                actual: 1,
            }
        );
        assert_eq!(err.to_string(), "matrix declares shape [2, 2] but holds 1 elements");

        let err = Tensor3::try_from(Tensor3Repr {
            dims: (usize::MAX, 2, 1),
            data: vec![0u8],
        })
        .unwrap_err();
        assert_eq!(
            err,
            DataError::DataLength {
                field: "tensor",
                shape: vec![usize::MAX, 2, 1],
                actual: 1,
            }
        );
    }

    #[test]
    fn test_tensor_set() {
        let mut t = Tensor3::filled(2, 3, 3, 0);
        t.set(1, 2, 0, 9);
        assert_eq!(t.get(1, 2, 0), Some(&9));
        assert_eq!(t.data.iter().filter(|v| **v != 0).count(), 1);
    }
}
