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

//! # Foreign Function Interface (FFI) for Vectors
//!
//! Lifecycle, inspection, and elementwise arithmetic for one-dimensional
//! containers.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Allocation**: `dash_vector_new` returns a zero-filled vector of the
//!     requested element kind tag (1 boolean, 2 character, 3 integer, 4 real).
//! 2.  **Access**: `dash_vector_data` exposes the element buffer, which stays
//!     valid and fixed in place until the vector is freed.
//! 3.  **Checks**: `dash_vector_check_same_size` returns the status generated
//!     code reports before a binary vector operation.
//! 4.  **Operations**: `dash_vector_<op>_vector` and `dash_vector_negate`
//!     overwrite the output vector in place.
//! 5.  **Cleanup**: `dash_vector_free` releases the vector.
//!
//! ## Safety
//!
//! Callers **must** pass handles allocated by this library that have not been
//! freed. Passing `NULL` to anything except `dash_vector_free` panics, and so
//! does an arithmetic call on mismatched sizes or on a boolean or character
//! vector.

use crate::handle::{borrow, with_binary, with_unary};
use crate::status::{DashStatus, OrFail};
use dash_core::container::vector::Vector;
use dash_core::num::kind::ElementKind;
use dash_core::ops::arithmetic::{vector_binary_dyn, vector_negate_dyn, BinaryOp};
use std::ffi::{c_int, c_void};

/// Allocates a zero-filled vector of `size` elements of the kind tagged `kind`.
///
/// # Panics
///
/// Panics if `kind` is not an element kind tag or `size` is negative.
#[no_mangle]
pub extern "C" fn dash_vector_new(kind: c_int, size: i32) -> *mut Vector {
    let kind = ElementKind::try_from(kind).or_fail("dash_vector_new");
    let vector = Vector::allocate(kind, size).or_fail("dash_vector_new");
    let ptr = Box::into_raw(Box::new(vector));
    tracing::trace!(%kind, size, ?ptr, "allocated vector");
    ptr
}

/// Frees a vector allocated by this library.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_vector_new` or `dash_interval_by`, and that it is
/// not freed twice.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_free(ptr: *mut Vector) {
    if !ptr.is_null() {
        tracing::trace!(?ptr, "freeing vector");
        drop(Box::from_raw(ptr));
    }
}

/// Returns the number of elements.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_size(ptr: *const Vector) -> usize {
    borrow("dash_vector_size", ptr).size()
}

/// Returns the element kind tag.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_kind(ptr: *const Vector) -> c_int {
    borrow("dash_vector_kind", ptr).kind().type_id()
}

/// Returns a pointer to the first element. The pointer is dangling (but
/// non-null) for an empty vector.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by this library. The returned buffer must not be used after
/// the vector is freed, and must be accessed as the vector's element type.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_data(ptr: *mut Vector) -> *mut c_void {
    assert!(!ptr.is_null(), "called `dash_vector_data` with null pointer");
    (*ptr).storage_mut().as_mut_ptr() as *mut c_void
}

/// Checks that two vectors have the same number of elements.
///
/// Returns `DashStatus::LengthMismatch` if they do not.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_check_same_size(
    lhs: *const Vector,
    rhs: *const Vector,
) -> DashStatus {
    let lhs = borrow("dash_vector_check_same_size", lhs);
    let rhs = borrow("dash_vector_check_same_size", rhs);
    DashStatus::from(lhs.check_same_size(rhs))
}

macro_rules! vector_binary_entry {
    ($name:ident, $op:expr, $what:literal) => {
        #[doc = concat!("Writes the elementwise ", $what, " of two integer or real vectors to `out`.")]
        ///
        /// # Panics
        ///
        /// Panics if any pointer is null, the sizes differ, or the vectors are
        /// not all integer or all real. Integer division or modulus by zero
        /// also panics.
        ///
        /// # Safety
        ///
        /// The caller must ensure that all pointers are valid and were
        /// allocated by this library. `out` may be the same handle as an operand.
        #[no_mangle]
        pub unsafe extern "C" fn $name(out: *mut Vector, lhs: *const Vector, rhs: *const Vector) {
            with_binary(stringify!($name), out, lhs, rhs, |out, lhs, rhs| {
                vector_binary_dyn($op, out, lhs, rhs).or_fail(stringify!($name))
            })
        }
    };
}

vector_binary_entry!(dash_vector_add_vector, BinaryOp::Add, "sum");
vector_binary_entry!(dash_vector_subtract_vector, BinaryOp::Subtract, "difference");
vector_binary_entry!(dash_vector_multiply_vector, BinaryOp::Multiply, "product");
vector_binary_entry!(dash_vector_divide_vector, BinaryOp::Divide, "quotient");
vector_binary_entry!(dash_vector_modulus_vector, BinaryOp::Modulus, "remainder");
vector_binary_entry!(dash_vector_power_vector, BinaryOp::Power, "power");

/// Computes `out[i] = -lhs[i]` for an integer or real vector.
///
/// # Panics
///
/// Panics if either pointer is null, the sizes differ, or the kinds differ
/// or are not numeric.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by this library. `out` may be the same handle as `lhs`.
#[no_mangle]
pub unsafe extern "C" fn dash_vector_negate(out: *mut Vector, lhs: *const Vector) {
    with_unary("dash_vector_negate", out, lhs, |out, lhs| {
        vector_negate_dyn(out, lhs).or_fail("dash_vector_negate")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    const INTEGER: c_int = 3;
    const REAL: c_int = 4;

    unsafe fn integer_vector(values: &[i32]) -> *mut Vector {
        let ptr = dash_vector_new(INTEGER, values.len() as i32);
        let data = dash_vector_data(ptr) as *mut i32;
        std::ptr::copy_nonoverlapping(values.as_ptr(), data, values.len());
        ptr
    }

    unsafe fn integer_values(ptr: *mut Vector) -> Vec<i32> {
        let data = dash_vector_data(ptr) as *const i32;
        std::slice::from_raw_parts(data, dash_vector_size(ptr)).to_vec()
    }

    #[test]
    fn test_new_and_free_basic() {
        unsafe {
            let ptr = dash_vector_new(REAL, 5);
            assert!(!ptr.is_null());
            assert_eq!(dash_vector_size(ptr), 5);
            assert_eq!(dash_vector_kind(ptr), REAL);
            dash_vector_free(ptr);
        }
    }

    #[test]
    fn test_new_is_zeroed() {
        unsafe {
            let ptr = dash_vector_new(INTEGER, 3);
            assert_eq!(integer_values(ptr), vec![0, 0, 0]);
            dash_vector_free(ptr);
        }
    }

    #[test]
    fn test_empty_vector() {
        unsafe {
            let ptr = dash_vector_new(INTEGER, 0);
            assert_eq!(dash_vector_size(ptr), 0);
            assert!(!dash_vector_data(ptr).is_null());
            dash_vector_free(ptr);
        }
    }

    #[test]
    fn test_free_null_pointer_is_noop() {
        unsafe {
            dash_vector_free(null_mut());
        }
    }

    #[test]
    fn test_check_same_size() {
        unsafe {
            let a = dash_vector_new(INTEGER, 3);
            let b = dash_vector_new(INTEGER, 3);
            let c = dash_vector_new(INTEGER, 4);
            assert_eq!(dash_vector_check_same_size(a, b), DashStatus::Ok);
            assert_eq!(dash_vector_check_same_size(a, c), DashStatus::LengthMismatch);
            dash_vector_free(a);
            dash_vector_free(b);
            dash_vector_free(c);
        }
    }

    #[test]
    fn test_arithmetic() {
        unsafe {
            let a = integer_vector(&[7, -7, 9]);
            let b = integer_vector(&[2, 2, -4]);
            let out = dash_vector_new(INTEGER, 3);

            dash_vector_add_vector(out, a, b);
            assert_eq!(integer_values(out), vec![9, -5, 5]);

            dash_vector_subtract_vector(out, a, b);
            assert_eq!(integer_values(out), vec![5, -9, 13]);

            dash_vector_multiply_vector(out, a, b);
            assert_eq!(integer_values(out), vec![14, -14, -36]);

            dash_vector_divide_vector(out, a, b);
            assert_eq!(integer_values(out), vec![3, -3, -2]);

            dash_vector_modulus_vector(out, a, b);
            assert_eq!(integer_values(out), vec![1, -1, 1]);

            dash_vector_power_vector(out, a, b);
            assert_eq!(integer_values(out), vec![49, 49, 0]);

            dash_vector_negate(out, a);
            assert_eq!(integer_values(out), vec![-7, 7, -9]);

            dash_vector_free(a);
            dash_vector_free(b);
            dash_vector_free(out);
        }
    }

    #[test]
    fn test_output_may_alias_operands() {
        unsafe {
            let a = integer_vector(&[1, 2, 3]);

            dash_vector_add_vector(a, a, a);
            assert_eq!(integer_values(a), vec![2, 4, 6]);

            dash_vector_negate(a, a);
            assert_eq!(integer_values(a), vec![-2, -4, -6]);

            dash_vector_free(a);
        }
    }

    #[test]
    fn test_real_arithmetic() {
        unsafe {
            let a = dash_vector_new(REAL, 2);
            let b = dash_vector_new(REAL, 2);
            let out = dash_vector_new(REAL, 2);
            std::ptr::copy_nonoverlapping([7.5f32, 2.0].as_ptr(), dash_vector_data(a) as *mut f32, 2);
            std::ptr::copy_nonoverlapping([2.0f32, 0.5].as_ptr(), dash_vector_data(b) as *mut f32, 2);

            dash_vector_modulus_vector(out, a, b);
            let data = std::slice::from_raw_parts(dash_vector_data(out) as *const f32, 2);
            assert_eq!(data, &[1.5, 0.0]);

            dash_vector_power_vector(out, a, b);
            let data = std::slice::from_raw_parts(dash_vector_data(out) as *const f32, 2);
            assert_eq!(data[0], 56.25);
            assert!((data[1] - 2.0f32.sqrt()).abs() < 1e-6);

            dash_vector_free(a);
            dash_vector_free(b);
            dash_vector_free(out);
        }
    }
}
