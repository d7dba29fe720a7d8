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

//! # Foreign Function Interface (FFI) for Boolean Vectors
//!
//! Logic over vectors allocated with the boolean kind tag (`1`). Elements are
//! single bytes; every output byte is written as canonical `0` or `1`.
//!
//! ## Exported API
//!
//! * `dash_bool_vector_not`
//! * `dash_bool_vector_or_vector`, `dash_bool_vector_xor_vector`,
//!   `dash_bool_vector_and_vector`
//! * `dash_bool_vector_or_scalar`, `dash_bool_vector_xor_scalar`,
//!   `dash_bool_vector_and_scalar`
//! * `dash_bool_vector_eq`, `dash_bool_vector_ne`
//!
//! ## Safety
//!
//! All handles must be live vectors allocated by this library. Non-boolean
//! vectors, mismatched sizes, and `NULL` handles panic.

use crate::handle::{borrow, with_binary, with_unary};
use crate::status::OrFail;
use dash_core::container::vector::Vector;
use dash_core::ops::logic::{
    vector_equals, vector_logic, vector_logic_scalar, vector_not, vector_not_equals, LogicOp,
};

/// Writes the logical negation of `lhs` to `out`.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by this library. `out` may be the same handle as `lhs`.
#[no_mangle]
pub unsafe extern "C" fn dash_bool_vector_not(out: *mut Vector, lhs: *const Vector) {
    with_unary("dash_bool_vector_not", out, lhs, |out, lhs| {
        vector_not(out, lhs).or_fail("dash_bool_vector_not")
    })
}

macro_rules! logic_entries {
    ($vector:ident, $scalar:ident, $op:expr, $what:literal) => {
        #[doc = concat!("Writes the pairwise ", $what, " of two boolean vectors to `out`.")]
        ///
        /// # Safety
        ///
        /// The caller must ensure that all pointers are valid and were
        /// allocated by this library. `out` may be the same handle as an
        /// operand.
        #[no_mangle]
        pub unsafe extern "C" fn $vector(out: *mut Vector, lhs: *const Vector, rhs: *const Vector) {
            with_binary(stringify!($vector), out, lhs, rhs, |out, lhs, rhs| {
                vector_logic($op, out, lhs, rhs).or_fail(stringify!($vector))
            })
        }

        #[doc = concat!("Writes the ", $what, " of every element of `lhs` with the scalar `rhs` to `out`.")]
        ///
        /// # Safety
        ///
        /// The caller must ensure that both pointers are valid and were
        /// allocated by this library. `out` may be the same handle as `lhs`.
        #[no_mangle]
        pub unsafe extern "C" fn $scalar(out: *mut Vector, lhs: *const Vector, rhs: u8) {
            with_unary(stringify!($scalar), out, lhs, |out, lhs| {
                vector_logic_scalar($op, out, lhs, rhs).or_fail(stringify!($scalar))
            })
        }
    };
}

logic_entries!(dash_bool_vector_or_vector, dash_bool_vector_or_scalar, LogicOp::Or, "disjunction");
logic_entries!(dash_bool_vector_xor_vector, dash_bool_vector_xor_scalar, LogicOp::Xor, "exclusive disjunction");
logic_entries!(dash_bool_vector_and_vector, dash_bool_vector_and_scalar, LogicOp::And, "conjunction");

/// Returns `true` if two boolean vectors are equal at every position.
/// Vectors of different sizes are unequal.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn dash_bool_vector_eq(lhs: *const Vector, rhs: *const Vector) -> bool {
    let lhs = borrow("dash_bool_vector_eq", lhs);
    let rhs = borrow("dash_bool_vector_eq", rhs);
    vector_equals(lhs, rhs).or_fail("dash_bool_vector_eq")
}

/// Returns `true` if two boolean vectors differ at any position.
/// Always the complement of `dash_bool_vector_eq`.
///
/// # Safety
///
/// The caller must ensure that both pointers are valid and were
/// allocated by this library.
#[no_mangle]
pub unsafe extern "C" fn dash_bool_vector_ne(lhs: *const Vector, rhs: *const Vector) -> bool {
    let lhs = borrow("dash_bool_vector_ne", lhs);
    let rhs = borrow("dash_bool_vector_ne", rhs);
    vector_not_equals(lhs, rhs).or_fail("dash_bool_vector_ne")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{dash_vector_data, dash_vector_free, dash_vector_new};

    const BOOLEAN: i32 = 1;

    unsafe fn boolean_vector(values: &[u8]) -> *mut Vector {
        let ptr = dash_vector_new(BOOLEAN, values.len() as i32);
        std::ptr::copy_nonoverlapping(values.as_ptr(), dash_vector_data(ptr) as *mut u8, values.len());
        ptr
    }

    unsafe fn bytes(ptr: *mut Vector, len: usize) -> Vec<u8> {
        std::slice::from_raw_parts(dash_vector_data(ptr) as *const u8, len).to_vec()
    }

    #[test]
    fn test_not() {
        unsafe {
            let a = boolean_vector(&[1, 0, 2]);
            let out = dash_vector_new(BOOLEAN, 3);
            dash_bool_vector_not(out, a);
            assert_eq!(bytes(out, 3), vec![0, 1, 0]);
            dash_vector_free(a);
            dash_vector_free(out);
        }
    }

    #[test]
    fn test_vector_operators() {
        unsafe {
            let a = boolean_vector(&[0, 0, 1, 1]);
            let b = boolean_vector(&[0, 1, 0, 1]);
            let out = dash_vector_new(BOOLEAN, 4);

            dash_bool_vector_or_vector(out, a, b);
            assert_eq!(bytes(out, 4), vec![0, 1, 1, 1]);

            dash_bool_vector_xor_vector(out, a, b);
            assert_eq!(bytes(out, 4), vec![0, 1, 1, 0]);

            dash_bool_vector_and_vector(out, a, b);
            assert_eq!(bytes(out, 4), vec![0, 0, 0, 1]);

            dash_vector_free(a);
            dash_vector_free(b);
            dash_vector_free(out);
        }
    }

    #[test]
    fn test_scalar_operators() {
        unsafe {
            let a = boolean_vector(&[0, 1]);
            let out = dash_vector_new(BOOLEAN, 2);

            dash_bool_vector_or_scalar(out, a, 1);
            assert_eq!(bytes(out, 2), vec![1, 1]);

            dash_bool_vector_xor_scalar(out, a, 1);
            assert_eq!(bytes(out, 2), vec![1, 0]);

            dash_bool_vector_and_scalar(out, a, 0);
            assert_eq!(bytes(out, 2), vec![0, 0]);

            // In place.
            dash_bool_vector_xor_scalar(a, a, 1);
            assert_eq!(bytes(a, 2), vec![1, 0]);

            dash_vector_free(a);
            dash_vector_free(out);
        }
    }

    #[test]
    fn test_equality() {
        unsafe {
            let a = boolean_vector(&[1, 0, 1]);
            let b = boolean_vector(&[1, 0, 1]);
            let c = boolean_vector(&[1, 1, 1]);
            let d = boolean_vector(&[1, 0]);

            assert!(dash_bool_vector_eq(a, a));
            assert!(dash_bool_vector_eq(a, b));
            assert!(!dash_bool_vector_ne(a, b));
            assert!(!dash_bool_vector_eq(a, c));
            assert!(dash_bool_vector_ne(a, c));
            assert!(!dash_bool_vector_eq(a, d));
            assert!(dash_bool_vector_ne(a, d));

            for v in [a, b, c, d] {
                dash_vector_free(v);
            }
        }
    }
}
