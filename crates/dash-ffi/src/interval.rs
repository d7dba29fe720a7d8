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

//! # Foreign Function Interface (FFI) for Intervals
//!
//! Intervals own no buffer, so they cross the boundary by value as
//! `FfiInterval` and need no release. Arithmetic never fails at the boundary;
//! dividing by an interval with a zero bound panics. `dash_interval_by` is
//! the only entry point that allocates: it materializes a step range into a
//! new integer vector owned by the caller.
//!
//! ## Exported API
//!
//! * `dash_interval_new`
//! * `dash_interval_add`, `dash_interval_subtract`,
//!   `dash_interval_multiply`, `dash_interval_divide`
//! * `dash_interval_negate`
//! * `dash_interval_eq`, `dash_interval_ne`
//! * `dash_interval_by`

use crate::status::DashStatus;
use dash_core::container::vector::Vector;
use dash_core::math::interval::Interval;

/// A C-compatible representation of a closed interval `[lower, upper]`.
///
/// Bounds are not reordered; `lower > upper` is a valid, empty interval.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FfiInterval {
    pub lower: i32,
    pub upper: i32,
}

impl From<Interval> for FfiInterval {
    #[inline]
    fn from(interval: Interval) -> Self {
        Self {
            lower: interval.lower(),
            upper: interval.upper(),
        }
    }
}

impl From<FfiInterval> for Interval {
    #[inline]
    fn from(val: FfiInterval) -> Self {
        Interval::new(val.lower, val.upper)
    }
}

impl std::fmt::Display for FfiInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Creates an interval from its bounds.
#[no_mangle]
pub extern "C" fn dash_interval_new(lower: i32, upper: i32) -> FfiInterval {
    FfiInterval { lower, upper }
}

/// Returns `[lhs.lower + rhs.lower, lhs.upper + rhs.upper]`.
#[no_mangle]
pub extern "C" fn dash_interval_add(lhs: FfiInterval, rhs: FfiInterval) -> FfiInterval {
    (Interval::from(lhs) + Interval::from(rhs)).into()
}

/// Returns `[lhs.lower - rhs.upper, lhs.upper - rhs.lower]`.
#[no_mangle]
pub extern "C" fn dash_interval_subtract(lhs: FfiInterval, rhs: FfiInterval) -> FfiInterval {
    (Interval::from(lhs) - Interval::from(rhs)).into()
}

/// Returns the four-corner product of two intervals.
#[no_mangle]
pub extern "C" fn dash_interval_multiply(lhs: FfiInterval, rhs: FfiInterval) -> FfiInterval {
    (Interval::from(lhs) * Interval::from(rhs)).into()
}

/// Returns the four-corner quotient of two intervals.
///
/// # Panics
///
/// Panics if either bound of `rhs` is zero.
#[no_mangle]
pub extern "C" fn dash_interval_divide(lhs: FfiInterval, rhs: FfiInterval) -> FfiInterval {
    (Interval::from(lhs) / Interval::from(rhs)).into()
}

/// Returns `[-lhs.lower, -lhs.upper]`. The bounds are not swapped.
#[no_mangle]
pub extern "C" fn dash_interval_negate(lhs: FfiInterval) -> FfiInterval {
    (-Interval::from(lhs)).into()
}

/// Returns `true` if both bounds are equal.
#[no_mangle]
pub extern "C" fn dash_interval_eq(lhs: FfiInterval, rhs: FfiInterval) -> bool {
    Interval::from(lhs).equals(&rhs.into())
}

/// Returns `true` if either bound differs.
#[no_mangle]
pub extern "C" fn dash_interval_ne(lhs: FfiInterval, rhs: FfiInterval) -> bool {
    Interval::from(lhs).not_equals(&rhs.into())
}

/// Materializes `lhs.lower, lhs.lower + by, ...` up to `lhs.upper` into a new
/// integer vector stored in `*out`.
///
/// Returns `DashStatus::Ok` on success. Returns `DashStatus::InvalidStep` if
/// `by < 1`; nothing is allocated and `*out` is left untouched. The vector
/// written to `*out` must be released with `dash_vector_free`.
///
/// # Panics
///
/// Panics if `out` is null.
///
/// # Safety
///
/// `out` must be valid for writing a pointer.
#[no_mangle]
pub unsafe extern "C" fn dash_interval_by(
    out: *mut *mut Vector,
    lhs: FfiInterval,
    by: i32,
) -> DashStatus {
    assert!(!out.is_null(), "called `dash_interval_by` with null output pointer");

    match Interval::from(lhs).step_range(by) {
        Ok(vector) => {
            tracing::debug!(interval = %lhs, by, size = vector.size(), "materialized step range");
            *out = Box::into_raw(Box::new(vector));
            DashStatus::Ok
        }
        Err(err) => {
            tracing::debug!(interval = %lhs, by, error = %err, "rejected step range");
            DashStatus::from(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{dash_vector_data, dash_vector_free, dash_vector_kind, dash_vector_size};
    use std::ptr::null_mut;

    fn iv(lower: i32, upper: i32) -> FfiInterval {
        dash_interval_new(lower, upper)
    }

    unsafe fn step(lhs: FfiInterval, by: i32) -> Vec<i32> {
        let mut out: *mut Vector = null_mut();
        assert_eq!(dash_interval_by(&mut out, lhs, by), DashStatus::Ok);
        assert!(!out.is_null());
        assert_eq!(dash_vector_kind(out), 3);

        let size = dash_vector_size(out);
        let values = std::slice::from_raw_parts(dash_vector_data(out) as *const i32, size).to_vec();
        dash_vector_free(out);
        values
    }

    #[test]
    fn test_new_does_not_reorder() {
        let v = iv(9, 2);
        assert_eq!((v.lower, v.upper), (9, 2));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(dash_interval_add(iv(1, 2), iv(3, 4)), iv(4, 6));
        assert_eq!(dash_interval_subtract(iv(1, 5), iv(2, 3)), iv(-2, 3));
        assert_eq!(dash_interval_multiply(iv(-2, 3), iv(-1, 4)), iv(-8, 12));
        assert_eq!(dash_interval_divide(iv(-10, 20), iv(2, 5)), iv(-5, 10));
    }

    #[test]
    fn test_negate_keeps_bound_order() {
        assert_eq!(dash_interval_negate(iv(1, 3)), iv(-1, -3));
    }

    #[test]
    fn test_equality() {
        assert!(dash_interval_eq(iv(2, 5), iv(2, 5)));
        assert!(!dash_interval_eq(iv(2, 5), iv(2, 6)));
        assert!(!dash_interval_ne(iv(2, 5), iv(2, 5)));
        assert!(dash_interval_ne(iv(2, 5), iv(2, 6)));
    }

    #[test]
    fn test_by() {
        unsafe {
            assert_eq!(step(iv(1, 10), 3), vec![1, 4, 7, 10]);
            assert_eq!(step(iv(5, 5), 1), vec![5]);
            assert_eq!(step(iv(5, 4), 1), Vec::<i32>::new());
        }
    }

    #[test]
    fn test_by_invalid_step_leaves_output_untouched() {
        unsafe {
            let mut out: *mut Vector = null_mut();
            assert_eq!(dash_interval_by(&mut out, iv(1, 10), 0), DashStatus::InvalidStep);
            assert_eq!(DashStatus::InvalidStep.code(), 1);
            assert!(out.is_null());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(-1, 4).to_string(), "[-1, 4]");
    }
}
