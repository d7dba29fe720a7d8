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

//! # Element Kinds
//!
//! Every container of the runtime is homogeneous: all of its elements share one
//! `ElementKind`. The kind is both a runtime tag (carried by containers and
//! passed across the C ABI as the numeric identifier assigned by the type
//! system) and, through the `Element` trait, a compile-time storage type.
//!
//! | Kind        | Tag | Storage | Bytes |
//! |-------------|-----|---------|-------|
//! | `Boolean`   | 1   | `u8`    | 1     |
//! | `Character` | 2   | `i8`    | 1     |
//! | `Integer`   | 3   | `i32`   | 4     |
//! | `Real`      | 4   | `f32`   | 4     |
//!
//! Booleans are stored as a single byte holding `0` or `1`.

use crate::container::storage::Storage;
use crate::error::RuntimeError;

/// The scalar type tag of a container's elements.
#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ElementKind {
    Boolean = 1,
    Character = 2,
    Integer = 3,
    Real = 4,
}

impl ElementKind {
    /// All element kinds, ordered from narrowest to widest.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Boolean,
        ElementKind::Character,
        ElementKind::Integer,
        ElementKind::Real,
    ];

    /// Returns the numeric tag of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::num::kind::ElementKind;
    /// assert_eq!(ElementKind::Integer.type_id(), 3);
    /// ```
    #[inline(always)]
    pub const fn type_id(self) -> i32 {
        self as i32
    }

    /// Looks up the kind for a numeric tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::num::kind::ElementKind;
    /// assert_eq!(ElementKind::from_type_id(4), Some(ElementKind::Real));
    /// assert_eq!(ElementKind::from_type_id(9), None);
    /// ```
    #[inline]
    pub const fn from_type_id(type_id: i32) -> Option<Self> {
        match type_id {
            1 => Some(ElementKind::Boolean),
            2 => Some(ElementKind::Character),
            3 => Some(ElementKind::Integer),
            4 => Some(ElementKind::Real),
            _ => None,
        }
    }

    /// Returns the width of one element of this kind in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            ElementKind::Boolean => std::mem::size_of::<u8>(),
            ElementKind::Character => std::mem::size_of::<i8>(),
            ElementKind::Integer => std::mem::size_of::<i32>(),
            ElementKind::Real => std::mem::size_of::<f32>(),
        }
    }

    /// Returns `true` for the kinds the arithmetic engine is defined for.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, ElementKind::Integer | ElementKind::Real)
    }

    /// Returns the lowercase name of this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Boolean => "boolean",
            ElementKind::Character => "character",
            ElementKind::Integer => "integer",
            ElementKind::Real => "real",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ElementKind {
    type Error = RuntimeError;

    fn try_from(type_id: i32) -> Result<Self, Self::Error> {
        ElementKind::from_type_id(type_id).ok_or(RuntimeError::UnknownKind { type_id })
    }
}

impl From<ElementKind> for i32 {
    #[inline]
    fn from(kind: ElementKind) -> Self {
        kind.type_id()
    }
}

/// A storage type that backs containers of exactly one `ElementKind`.
///
/// The trait is the bridge between the untyped `Storage` of a container and
/// the typed slices operation bodies work on. Asking a storage for the wrong
/// element type yields `None` rather than a reinterpretation of its bytes.
pub trait Element: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// The kind tag of this storage type.
    const KIND: ElementKind;

    /// Borrows the elements of `storage` if it holds this kind.
    fn slice_of(storage: &Storage) -> Option<&[Self]>;

    /// Mutably borrows the elements of `storage` if it holds this kind.
    fn slice_of_mut(storage: &mut Storage) -> Option<&mut [Self]>;

    /// Wraps an owned buffer of this kind.
    fn into_storage(values: Box<[Self]>) -> Storage;
}

macro_rules! impl_element {
    ($t:ty, $kind:ident) => {
        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline(always)]
            fn slice_of(storage: &Storage) -> Option<&[Self]> {
                match storage {
                    Storage::$kind(values) => Some(&values[..]),
                    _ => None,
                }
            }

            #[inline(always)]
            fn slice_of_mut(storage: &mut Storage) -> Option<&mut [Self]> {
                match storage {
                    Storage::$kind(values) => Some(&mut values[..]),
                    _ => None,
                }
            }

            #[inline(always)]
            fn into_storage(values: Box<[Self]>) -> Storage {
                Storage::$kind(values)
            }
        }
    };
}

impl_element!(u8, Boolean);
impl_element!(i8, Character);
impl_element!(i32, Integer);
impl_element!(f32, Real);
