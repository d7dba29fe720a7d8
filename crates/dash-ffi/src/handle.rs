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

//! Borrowing operands from raw handles.
//!
//! Generated code may pass the same handle as output and operand
//! (`a = a + b`). An operand that aliases the output is cloned before the
//! output is borrowed mutably, so the engines always see disjoint buffers.

use std::borrow::Cow;

unsafe fn operand<'a, T>(out: *mut T, ptr: *const T) -> Cow<'a, T>
where
    T: Clone,
{
    if std::ptr::eq(out as *const T, ptr) {
        Cow::Owned((*ptr).clone())
    } else {
        Cow::Borrowed(&*ptr)
    }
}

/// Runs `f` on the output and both operands of a binary entry point.
///
/// # Panics
///
/// Panics if any pointer is null.
///
/// # Safety
///
/// Every pointer must be a live handle allocated by this library.
pub(crate) unsafe fn with_binary<T, R>(
    function: &str,
    out: *mut T,
    lhs: *const T,
    rhs: *const T,
    f: impl FnOnce(&mut T, &T, &T) -> R,
) -> R
where
    T: Clone,
{
    assert!(
        !out.is_null(),
        "called `{}` with null output pointer",
        function
    );
    assert!(!lhs.is_null(), "called `{}` with null lhs pointer", function);
    assert!(!rhs.is_null(), "called `{}` with null rhs pointer", function);

    let lhs = operand(out, lhs);
    let rhs = operand(out, rhs);
    f(&mut *out, &*lhs, &*rhs)
}

/// Runs `f` on the output and the operand of a unary entry point.
///
/// # Panics
///
/// Panics if either pointer is null.
///
/// # Safety
///
/// Both pointers must be live handles allocated by this library.
pub(crate) unsafe fn with_unary<T, R>(
    function: &str,
    out: *mut T,
    lhs: *const T,
    f: impl FnOnce(&mut T, &T) -> R,
) -> R
where
    T: Clone,
{
    assert!(
        !out.is_null(),
        "called `{}` with null output pointer",
        function
    );
    assert!(!lhs.is_null(), "called `{}` with null lhs pointer", function);

    let lhs = operand(out, lhs);
    f(&mut *out, &*lhs)
}

/// Borrows a handle for reading.
///
/// # Panics
///
/// Panics if the pointer is null.
///
/// # Safety
///
/// The pointer must be a live handle allocated by this library.
pub(crate) unsafe fn borrow<'a, T>(function: &str, ptr: *const T) -> &'a T {
    assert!(!ptr.is_null(), "called `{}` with null pointer", function);
    &*ptr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliased_operand_is_copied() {
        let mut value = vec![1, 2, 3];
        let ptr: *mut Vec<i32> = &mut value;

        let sum = unsafe {
            with_binary("test", ptr, ptr, ptr, |out, lhs, rhs| {
                let sum: Vec<i32> = lhs.iter().zip(rhs).map(|(a, b)| a + b).collect();
                out.clear();
                out.extend_from_slice(&sum);
                // The operands still hold the values from before the write.
                lhs.len() + rhs.len()
            })
        };

        assert_eq!(sum, 6);
        assert_eq!(value, vec![2, 4, 6]);
    }

    #[test]
    fn test_distinct_operands_are_borrowed() {
        let mut out = vec![0; 2];
        let lhs = vec![5, 6];

        unsafe {
            with_unary("test", &mut out, &lhs, |out, lhs| {
                assert!(!std::ptr::eq(&*out, lhs));
                out.copy_from_slice(lhs);
            });
        }

        assert_eq!(out, lhs);
    }
}
