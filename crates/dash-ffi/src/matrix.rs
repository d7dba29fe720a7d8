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

//! # Foreign Function Interface (FFI) for Matrices
//!
//! Lifecycle, inspection, and elementwise arithmetic for two-dimensional,
//! row-major containers.
//!
//! Generated code guards every binary matrix operation with
//! `dash_matrix_check_same_size` and reports a non-zero status through
//! `dash_runtime_error`. The operations themselves check again and abort on
//! mismatch.
//!
//! ## Exported API
//!
//! ### Lifecycle
//! * `dash_matrix_new`
//! * `dash_matrix_free`
//!
//! ### Inspection
//! * `dash_matrix_rows`
//! * `dash_matrix_columns`
//! * `dash_matrix_kind`
//! * `dash_matrix_data`
//! * `dash_matrix_check_same_size`
//!
//! ### Arithmetic
//! * `dash_matrix_add_matrix`
//! * `dash_matrix_subtract_matrix`
//! * `dash_matrix_multiply_matrix`
//! * `dash_matrix_divide_matrix`
//! * `dash_matrix_modulus_matrix`
//! * `dash_matrix_power_matrix`
//! * `dash_matrix_negate`

use crate::handle::{borrow, with_binary, with_unary};
use crate::status::{DashStatus, OrFail};
use dash_core::container::matrix::Matrix;
use dash_core::num::kind::ElementKind;
use dash_core::ops::arithmetic::{matrix_binary_dyn, matrix_negate_dyn, BinaryOp};
use std::ffi::{c_int, c_void};

/// Allocates a zero-filled `rows × columns` matrix of the kind tagged `kind`.
///
/// # Panics
///
/// Panics if `kind` is not an element kind tag or a dimension is negative.
#[no_mangle]
pub extern "C" fn dash_matrix_new(kind: c_int, rows: i32, columns: i32) -> *mut Matrix {
    let kind = ElementKind::try_from(kind).or_fail("dash_matrix_new");
    let matrix = Matrix::allocate(kind, rows, columns).or_fail("dash_matrix_new");
    let ptr = Box::into_raw(Box::new(matrix));
    tracing::trace!(%kind, rows, columns, ?ptr, "allocated matrix");
    ptr
}

/// Frees a matrix allocated by `dash_matrix_new`.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_matrix_new`, and that it is not freed twice.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_free(ptr: *mut Matrix) {
    if !ptr.is_null() {
        tracing::trace!(?ptr, "freeing matrix");
        drop(Box::from_raw(ptr));
    }
}

/// Returns the number of rows.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_matrix_new`.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_rows(ptr: *const Matrix) -> usize {
    borrow("dash_matrix_rows", ptr).rows()
}

/// Returns the number of columns.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_matrix_new`.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_columns(ptr: *const Matrix) -> usize {
    borrow("dash_matrix_columns", ptr).columns()
}

/// Returns the element kind tag.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_matrix_new`.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_kind(ptr: *const Matrix) -> c_int {
    borrow("dash_matrix_kind", ptr).kind().type_id()
}

/// Returns a pointer to the first element of the row-major buffer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid and was
/// allocated by `dash_matrix_new`. The returned buffer must not be used
/// after the matrix is freed.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_data(ptr: *mut Matrix) -> *mut c_void {
    assert!(!ptr.is_null(), "called `dash_matrix_data` with null pointer");
    (*ptr).storage_mut().as_mut_ptr() as *mut c_void
}

/// Checks that two matrices have the same number of rows and columns.
///
/// Returns `DashStatus::ShapeMismatch` if they do not.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by `dash_matrix_new`.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_check_same_size(
    lhs: *const Matrix,
    rhs: *const Matrix,
) -> DashStatus {
    let lhs = borrow("dash_matrix_check_same_size", lhs);
    let rhs = borrow("dash_matrix_check_same_size", rhs);
    DashStatus::from(lhs.check_same_shape(rhs))
}

macro_rules! matrix_binary_entry {
    ($name:ident, $op:expr, $what:literal) => {
        #[doc = concat!("Writes the elementwise ", $what, " of two integer or real matrices to `out`.")]
        ///
        /// # Panics
        ///
        /// Panics if any pointer is null, the shapes differ, or the matrices
        /// are not all integer or all real. Integer division or modulus by
        /// zero also panics.
        ///
        /// # Safety
        ///
        /// The caller must ensure that all pointers are valid and were
        /// allocated by `dash_matrix_new`. `out` may be the same handle as an
        /// operand.
        #[no_mangle]
        pub unsafe extern "C" fn $name(out: *mut Matrix, lhs: *const Matrix, rhs: *const Matrix) {
            with_binary(stringify!($name), out, lhs, rhs, |out, lhs, rhs| {
                matrix_binary_dyn($op, out, lhs, rhs).or_fail(stringify!($name))
            })
        }
    };
}

matrix_binary_entry!(dash_matrix_add_matrix, BinaryOp::Add, "sum");
matrix_binary_entry!(dash_matrix_subtract_matrix, BinaryOp::Subtract, "difference");
matrix_binary_entry!(dash_matrix_multiply_matrix, BinaryOp::Multiply, "product");
matrix_binary_entry!(dash_matrix_divide_matrix, BinaryOp::Divide, "quotient");
matrix_binary_entry!(dash_matrix_modulus_matrix, BinaryOp::Modulus, "remainder");
matrix_binary_entry!(dash_matrix_power_matrix, BinaryOp::Power, "power");

/// Writes the elementwise negation of an integer or real matrix to `out`.
///
/// # Panics
///
/// Panics if either pointer is null, the shapes differ, or the kinds differ
/// or are not numeric.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by `dash_matrix_new`. `out` may be the same handle as `lhs`.
#[no_mangle]
pub unsafe extern "C" fn dash_matrix_negate(out: *mut Matrix, lhs: *const Matrix) {
    with_unary("dash_matrix_negate", out, lhs, |out, lhs| {
        matrix_negate_dyn(out, lhs).or_fail("dash_matrix_negate")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    const INTEGER: c_int = 3;
    const REAL: c_int = 4;

    unsafe fn fill<T: Copy>(ptr: *mut Matrix, values: &[T]) {
        let len = dash_matrix_rows(ptr) * dash_matrix_columns(ptr);
        assert_eq!(len, values.len());
        std::ptr::copy_nonoverlapping(values.as_ptr(), dash_matrix_data(ptr) as *mut T, len);
    }

    unsafe fn values<T: Copy>(ptr: *mut Matrix) -> Vec<T> {
        let len = dash_matrix_rows(ptr) * dash_matrix_columns(ptr);
        std::slice::from_raw_parts(dash_matrix_data(ptr) as *const T, len).to_vec()
    }

    #[test]
    fn test_new_and_free_basic() {
        unsafe {
            let ptr = dash_matrix_new(INTEGER, 2, 3);
            assert!(!ptr.is_null());
            assert_eq!(dash_matrix_rows(ptr), 2);
            assert_eq!(dash_matrix_columns(ptr), 3);
            assert_eq!(dash_matrix_kind(ptr), INTEGER);
            assert_eq!(values::<i32>(ptr), vec![0; 6]);
            dash_matrix_free(ptr);
        }
    }

    #[test]
    fn test_free_null_pointer_is_noop() {
        unsafe {
            dash_matrix_free(null_mut());
        }
    }

    #[test]
    fn test_check_same_size_compares_shape() {
        unsafe {
            let a = dash_matrix_new(REAL, 2, 3);
            let b = dash_matrix_new(REAL, 2, 3);
            let c = dash_matrix_new(REAL, 3, 2);
            assert_eq!(dash_matrix_check_same_size(a, b), DashStatus::Ok);
            assert_eq!(dash_matrix_check_same_size(a, c), DashStatus::ShapeMismatch);
            dash_matrix_free(a);
            dash_matrix_free(b);
            dash_matrix_free(c);
        }
    }

    #[test]
    fn test_integer_arithmetic() {
        unsafe {
            let a = dash_matrix_new(INTEGER, 2, 2);
            let b = dash_matrix_new(INTEGER, 2, 2);
            let out = dash_matrix_new(INTEGER, 2, 2);
            fill(a, &[10i32, -9, 8, i32::MAX]);
            fill(b, &[3i32, 4, -2, 1]);

            dash_matrix_add_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![13, -5, 6, i32::MIN]);

            dash_matrix_subtract_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![7, -13, 10, i32::MAX - 1]);

            dash_matrix_multiply_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![30, -36, -16, i32::MAX]);

            dash_matrix_divide_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![3, -2, -4, i32::MAX]);

            dash_matrix_modulus_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![1, -1, 0, 0]);

            dash_matrix_power_matrix(out, a, b);
            assert_eq!(values::<i32>(out), vec![1000, 6561, 0, i32::MAX]);

            dash_matrix_negate(out, a);
            assert_eq!(values::<i32>(out), vec![-10, 9, -8, -i32::MAX]);

            dash_matrix_free(a);
            dash_matrix_free(b);
            dash_matrix_free(out);
        }
    }

    #[test]
    fn test_real_arithmetic() {
        unsafe {
            let a = dash_matrix_new(REAL, 1, 3);
            let b = dash_matrix_new(REAL, 1, 3);
            let out = dash_matrix_new(REAL, 1, 3);
            fill(a, &[1.5f32, -4.0, 9.0]);
            fill(b, &[0.5f32, 2.0, 0.0]);

            dash_matrix_divide_matrix(out, a, b);
            let q = values::<f32>(out);
            assert_eq!(&q[..2], &[3.0, -2.0]);
            assert!(q[2].is_infinite() && q[2] > 0.0);

            dash_matrix_power_matrix(out, a, b);
            let p = values::<f32>(out);
            assert!((p[0] - 1.5f32.sqrt()).abs() < 1e-6);
            assert_eq!(&p[1..], &[16.0, 1.0]);

            dash_matrix_free(a);
            dash_matrix_free(b);
            dash_matrix_free(out);
        }
    }

    #[test]
    fn test_output_may_alias_operands() {
        unsafe {
            let a = dash_matrix_new(INTEGER, 1, 3);
            let b = dash_matrix_new(INTEGER, 1, 3);
            fill(a, &[2i32, 3, 4]);
            fill(b, &[1i32, 1, 1]);

            dash_matrix_subtract_matrix(a, a, b);
            assert_eq!(values::<i32>(a), vec![1, 2, 3]);

            dash_matrix_multiply_matrix(b, a, b);
            assert_eq!(values::<i32>(b), vec![1, 2, 3]);

            dash_matrix_free(a);
            dash_matrix_free(b);
        }
    }
}
