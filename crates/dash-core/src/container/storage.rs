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

use crate::error::{Result, RuntimeError};
use crate::num::kind::{Element, ElementKind};

/// A contiguous, exclusively owned buffer of elements of one kind.
///
/// `Storage` replaces an untyped data pointer: the buffer remembers its
/// element kind, so typed access is checked rather than assumed. The length of
/// the buffer is fixed for its lifetime.
#[derive(Clone, PartialEq, Debug)]
pub enum Storage {
    Boolean(Box<[u8]>),
    Character(Box<[i8]>),
    Integer(Box<[i32]>),
    Real(Box<[f32]>),
}

impl Storage {
    /// Allocates a zero-filled buffer for `len` elements of `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::container::storage::Storage;
    /// # use dash_core::num::kind::ElementKind;
    /// let storage = Storage::zeroed(ElementKind::Real, 4);
    /// assert_eq!(storage.len(), 4);
    /// assert_eq!(storage.size_in_bytes(), 16);
    /// ```
    pub fn zeroed(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::Boolean => Storage::Boolean(vec![0; len].into_boxed_slice()),
            ElementKind::Character => Storage::Character(vec![0; len].into_boxed_slice()),
            ElementKind::Integer => Storage::Integer(vec![0; len].into_boxed_slice()),
            ElementKind::Real => Storage::Real(vec![0.0; len].into_boxed_slice()),
        }
    }

    /// Takes ownership of `values` as a buffer of `T::KIND`.
    #[inline]
    pub fn from_vec<T>(values: Vec<T>) -> Self
    where
        T: Element,
    {
        T::into_storage(values.into_boxed_slice())
    }

    /// Returns the element kind of the buffer.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            Storage::Boolean(_) => ElementKind::Boolean,
            Storage::Character(_) => ElementKind::Character,
            Storage::Integer(_) => ElementKind::Integer,
            Storage::Real(_) => ElementKind::Real,
        }
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Storage::Boolean(values) => values.len(),
            Storage::Character(values) => values.len(),
            Storage::Integer(values) => values.len(),
            Storage::Real(values) => values.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the buffer in bytes.
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len() * self.kind().size_in_bytes()
    }

    /// Borrows the elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the buffer does not hold `T::KIND`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::container::storage::Storage;
    /// let storage = Storage::from_vec(vec![1i32, 2, 3]);
    /// assert_eq!(storage.as_slice::<i32>().unwrap(), &[1, 2, 3]);
    /// assert!(storage.as_slice::<f32>().is_err());
    /// ```
    #[inline]
    pub fn as_slice<T>(&self) -> Result<&[T]>
    where
        T: Element,
    {
        let found = self.kind();
        T::slice_of(self).ok_or(RuntimeError::KindMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// Mutably borrows the elements as a slice of `T`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::KindMismatch` if the buffer does not hold `T::KIND`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> Result<&mut [T]>
    where
        T: Element,
    {
        let found = self.kind();
        T::slice_of_mut(self).ok_or(RuntimeError::KindMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// Returns a raw pointer to the first byte of the buffer.
    ///
    /// The pointer is dangling (but non-null and aligned) for an empty buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        match self {
            Storage::Boolean(values) => values.as_ptr(),
            Storage::Character(values) => values.as_ptr().cast(),
            Storage::Integer(values) => values.as_ptr().cast(),
            Storage::Real(values) => values.as_ptr().cast(),
        }
    }

    /// Returns a raw mutable pointer to the first byte of the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        match self {
            Storage::Boolean(values) => values.as_mut_ptr(),
            Storage::Character(values) => values.as_mut_ptr().cast(),
            Storage::Integer(values) => values.as_mut_ptr().cast(),
            Storage::Real(values) => values.as_mut_ptr().cast(),
        }
    }
}
