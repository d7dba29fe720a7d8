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

/// An ordered, fixed-length sequence of elements of one kind.
///
/// The vector owns its buffer exclusively. Its size is fixed at allocation;
/// operations overwrite elements in place but never grow or shrink it. The
/// buffer is released when the vector is dropped.
///
/// # Examples
///
/// ```rust
/// # use dash_core::container::vector::Vector;
/// # use dash_core::num::kind::ElementKind;
/// let v = Vector::new(ElementKind::Integer, 3);
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.as_slice::<i32>().unwrap(), &[0, 0, 0]);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Vector {
    storage: Storage,
}

impl Vector {
    /// Allocates a zero-filled vector of `size` elements of `kind`.
    #[inline]
    pub fn new(kind: ElementKind, size: usize) -> Self {
        Self {
            storage: Storage::zeroed(kind, size),
        }
    }

    /// Allocates a vector from a signed size as received from generated code.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::NegativeSize` if `size` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::container::vector::Vector;
    /// # use dash_core::num::kind::ElementKind;
    /// assert!(Vector::allocate(ElementKind::Boolean, 4).is_ok());
    /// assert!(Vector::allocate(ElementKind::Boolean, -1).is_err());
    /// ```
    pub fn allocate(kind: ElementKind, size: i32) -> Result<Self> {
        let size = usize::try_from(size).map_err(|_| RuntimeError::NegativeSize {
            size: i64::from(size),
        })?;
        Ok(Self::new(kind, size))
    }

    /// Creates a vector that takes ownership of `values`.
    #[inline]
    pub fn from_vec<T>(values: Vec<T>) -> Self
    where
        T: Element,
    {
        Self {
            storage: Storage::from_vec(values),
        }
    }

    /// Creates a boolean vector with canonical `0`/`1` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::container::vector::Vector;
    /// let v = Vector::from_bools(&[true, false, true]);
    /// assert_eq!(v.as_slice::<u8>().unwrap(), &[1, 0, 1]);
    /// ```
    pub fn from_bools(values: &[bool]) -> Self {
        Self::from_vec(values.iter().map(|&b| u8::from(b)).collect::<Vec<u8>>())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the element kind.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.storage.kind()
    }

    /// Borrows the elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the vector does not hold `T::KIND`.
    #[inline]
    pub fn as_slice<T>(&self) -> Result<&[T]>
    where
        T: Element,
    {
        self.storage.as_slice()
    }

    /// Mutably borrows the elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the vector does not hold `T::KIND`.
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

    /// Checks that `other` has the same number of elements.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::LengthMismatch` if the sizes differ.
    #[inline]
    pub fn check_same_size(&self, other: &Vector) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(RuntimeError::LengthMismatch {
                lhs: self.size(),
                rhs: other.size(),
            })
        }
    }

    /// Checks that the vector holds elements of `kind`.
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

impl<T> From<Vec<T>> for Vector
where
    T: Element,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector<{}>[{}]", self.kind(), self.size())
    }
}
