// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use super::storage::Storage;
use crate::error::{Result, RuntimeError};
use crate::num::kind::{Element, ElementKind};

/// A two-dimensional, row-major container of elements of one kind.
///
/// Like `Vector`, a matrix owns its buffer exclusively and never changes shape
/// after allocation. Binary operations require all operands to share the same
/// `rows × columns` shape and element kind; there is no broadcasting.
///
/// # Examples
///
/// ```rust
/// # use dash_core::container::matrix::Matrix;
/// let m = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get::<i32>(1, 0), Some(3));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    storage: Storage,
}

impl Matrix {
    /// Allocates a zero-filled `rows × columns` matrix of `kind`.
    #[inline]
    pub fn new(kind: ElementKind, rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            storage: Storage::zeroed(kind, rows * columns),
        }
    }

    /// Allocates a matrix from signed dimensions as received from generated code.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::NegativeSize` if either dimension is negative.
    pub fn allocate(kind: ElementKind, rows: i32, columns: i32) -> Result<Self> {
        let dim = |n: i32| {
            usize::try_from(n).map_err(|_| RuntimeError::NegativeSize { size: i64::from(n) })
        };
        Ok(Self::new(kind, dim(rows)?, dim(columns)?))
    }

    /// Creates a matrix that takes ownership of the row-major `values`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::LengthMismatch` if `values` does not hold exactly
    /// `rows * columns` elements.
    pub fn from_vec<T>(rows: usize, columns: usize, values: Vec<T>) -> Result<Self>
    where
        T: Element,
    {
        if values.len() != rows * columns {
            return Err(RuntimeError::LengthMismatch {
                lhs: rows * columns,
                rhs: values.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            storage: Storage::from_vec(values),
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the total number of elements, `rows * columns`.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the element kind.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.storage.kind()
    }

    /// Returns the element at `(row, column)`, or `None` if the position is
    /// out of bounds or the matrix does not hold `T::KIND`.
    pub fn get<T>(&self, row: usize, column: usize) -> Option<T>
    where
        T: Element,
    {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        T::slice_of(&self.storage).map(|values| values[row * self.columns + column])
    }

    /// Borrows the row-major elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the matrix does not hold `T::KIND`.
    #[inline]
    pub fn as_slice<T>(&self) -> Result<&[T]>
    where
        T: Element,
    {
        self.storage.as_slice()
    }

    /// Mutably borrows the row-major elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the matrix does not hold `T::KIND`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> Result<&mut [T]>
    where
        T: Element,
    {
        self.storage.as_mut_slice()
    }

    /// Returns the underlying buffer.
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the underlying buffer mutably.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    /// Checks that `other` has the same number of rows and columns.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::ShapeMismatch` if the shapes differ.
    #[inline]
    pub fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(RuntimeError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            })
        }
    }

    /// Checks that the matrix holds elements of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the kinds differ.
    #[inline]
    pub fn check_kind(&self, kind: ElementKind) -> Result<()> {
        if self.kind() == kind {
            Ok(())
        } else {
            Err(RuntimeError::KindMismatch {
                expected: kind,
                found: self.kind(),
            })
        }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Matrix<{}>[{}x{}]",
            self.kind(),
            self.rows,
            self.columns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed_row_major() {
        let m = Matrix::new(ElementKind::Integer, 2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.len(), 6);
        assert_eq!(m.as_slice::<i32>().unwrap(), &[0; 6]);
    }

    #[test]
    fn test_allocate_rejects_negative_dimensions() {
        assert_eq!(
            Matrix::allocate(ElementKind::Real, -1, 2),
            Err(RuntimeError::NegativeSize { size: -1 })
        );
        assert_eq!(
            Matrix::allocate(ElementKind::Real, 2, -5),
            Err(RuntimeError::NegativeSize { size: -5 })
        );
        assert!(Matrix::allocate(ElementKind::Real, 0, 4).unwrap().is_empty());
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0f32, 2.0, 3.0, 4.0]).is_ok());
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1.0f32, 2.0, 3.0]),
            Err(RuntimeError::LengthMismatch { lhs: 4, rhs: 3 })
        );
    }

    #[test]
    fn test_get_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1i32, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.get::<i32>(0, 2), Some(3));
        assert_eq!(m.get::<i32>(1, 0), Some(4));
        assert_eq!(m.get::<i32>(2, 0), None);
        assert_eq!(m.get::<i32>(0, 3), None);
        assert_eq!(m.get::<f32>(0, 0), None);
    }

    #[test]
    fn test_check_same_shape() {
        let a = Matrix::new(ElementKind::Integer, 2, 3);
        let b = Matrix::new(ElementKind::Integer, 2, 3);
        let c = Matrix::new(ElementKind::Integer, 3, 2);
        assert!(a.check_same_shape(&b).is_ok());
        // Same element count, different shape.
        assert_eq!(
            a.check_same_shape(&c),
            Err(RuntimeError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (3, 2),
            })
        );
    }

    #[test]
    fn test_display() {
        let m = Matrix::new(ElementKind::Real, 2, 4);
        assert_eq!(format!("{}", m), "Matrix<real>[2x4]");
    }
}
