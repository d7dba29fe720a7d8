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

//! # Boolean Logic Engine
//!
//! Not, or, xor, and over boolean vectors, the same three binary operators
//! against a broadcast boolean scalar, and whole-vector equality.
//!
//! Boolean elements are bytes holding `0` or `1`, but operands are not trusted
//! to be canonical. `Not`, `Or` and `And` treat any nonzero byte as true.
//! `Xor` combines the raw bytes and keeps the low bit. Every result is masked
//! with `& 1`, so outputs are always canonical.

use crate::container::vector::Vector;
use crate::error::Result;

const MASK: u8 = 1;

/// A binary boolean operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LogicOp {
    Or,
    Xor,
    And,
}

impl LogicOp {
    /// All binary boolean operators.
    pub const ALL: [LogicOp; 3] = [LogicOp::Or, LogicOp::Xor, LogicOp::And];

    /// Applies the operator to a single pair of boolean bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::ops::logic::LogicOp;
    /// assert_eq!(LogicOp::Or.apply(0, 1), 1);
    /// assert_eq!(LogicOp::And.apply(2, 1), 1); // nonzero is true
    /// assert_eq!(LogicOp::Xor.apply(1, 1), 0);
    /// ```
    #[inline(always)]
    pub fn apply(self, lhs: u8, rhs: u8) -> u8 {
        match self {
            LogicOp::Or => u8::from(lhs != 0 || rhs != 0) & MASK,
            LogicOp::Xor => (lhs ^ rhs) & MASK,
            LogicOp::And => u8::from(lhs != 0 && rhs != 0) & MASK,
        }
    }

    /// Returns the lowercase name of the operator.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            LogicOp::Or => "or",
            LogicOp::Xor => "xor",
            LogicOp::And => "and",
        }
    }
}

impl std::fmt::Display for LogicOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes `out[i] = !lhs[i]`, masked to `{0, 1}`.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
pub fn not_into(out: &mut [u8], lhs: &[u8]) {
    assert_eq!(
        out.len(),
        lhs.len(),
        "called `not_into` with buffers of different lengths"
    );

    for (o, &l) in out.iter_mut().zip(lhs) {
        *o = u8::from(l == 0) & MASK;
    }
}

/// Computes `out[i] = lhs[i] OP rhs[i]`, masked to `{0, 1}`.
///
/// # Panics
///
/// Panics if the three slices do not have the same length.
pub fn binary_into(op: LogicOp, out: &mut [u8], lhs: &[u8], rhs: &[u8]) {
    assert!(
        lhs.len() == out.len() && rhs.len() == out.len(),
        "called `binary_into` with buffers of different lengths: out {}, lhs {}, rhs {}",
        out.len(),
        lhs.len(),
        rhs.len()
    );

    for ((o, &l), &r) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = op.apply(l, r);
    }
}

/// Computes `out[i] = lhs[i] OP rhs` with `rhs` broadcast to every position.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
///
/// # Examples
///
/// ```rust
/// # use dash_core::ops::logic::{scalar_into, LogicOp};
/// let mut out = [0u8; 3];
/// scalar_into(LogicOp::Xor, &mut out, &[0, 1, 1], 1);
/// assert_eq!(out, [1, 0, 0]);
/// ```
pub fn scalar_into(op: LogicOp, out: &mut [u8], lhs: &[u8], rhs: u8) {
    assert_eq!(
        out.len(),
        lhs.len(),
        "called `scalar_into` with buffers of different lengths"
    );

    for (o, &l) in out.iter_mut().zip(lhs) {
        *o = op.apply(l, rhs);
    }
}

/// Returns `true` if every corresponding pair of elements is equal.
///
/// The scan always runs to the end: it counts matching positions and compares
/// the count with the length of `lhs`. Slices of different lengths are never
/// equal.
///
/// # Examples
///
/// ```rust
/// # use dash_core::ops::logic::equals;
/// assert!(equals(&[1, 0, 1], &[1, 0, 1]));
/// assert!(!equals(&[1, 0, 1], &[1, 1, 1]));
/// ```
pub fn equals(lhs: &[u8], rhs: &[u8]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let matches = lhs.iter().zip(rhs).filter(|(l, r)| l == r).count();
    matches == lhs.len()
}

/// Returns `true` if any corresponding pair of elements differs.
///
/// Always the complement of `equals`.
#[inline]
pub fn not_equals(lhs: &[u8], rhs: &[u8]) -> bool {
    !equals(lhs, rhs)
}

/// Writes the logical negation of the boolean vector `lhs` into `out`.
///
/// # Errors
///
/// Returns `RuntimeError::KindMismatch` if either vector is not boolean, or
/// `RuntimeError::LengthMismatch` if their sizes differ.
pub fn vector_not(out: &mut Vector, lhs: &Vector) -> Result<()> {
    lhs.check_same_size(out)?;

    let lhs = lhs.as_slice::<u8>()?;
    not_into(out.as_mut_slice::<u8>()?, lhs);
    Ok(())
}

/// Applies `op` pairwise to two boolean vectors, writing `out`.
///
/// # Errors
///
/// Returns `RuntimeError::KindMismatch` if any vector is not boolean, or
/// `RuntimeError::LengthMismatch` if their sizes differ.
///
/// # Examples
///
/// ```rust
/// # use dash_core::container::vector::Vector;
/// # use dash_core::ops::logic::{vector_logic, LogicOp};
/// let lhs = Vector::from_bools(&[true, true, false]);
/// let rhs = Vector::from_bools(&[true, false, false]);
/// let mut out = Vector::from_bools(&[false; 3]);
/// vector_logic(LogicOp::And, &mut out, &lhs, &rhs).unwrap();
/// assert_eq!(out, Vector::from_bools(&[true, false, false]));
/// ```
pub fn vector_logic(op: LogicOp, out: &mut Vector, lhs: &Vector, rhs: &Vector) -> Result<()> {
    lhs.check_same_size(rhs)?;
    lhs.check_same_size(out)?;

    let lhs = lhs.as_slice::<u8>()?;
    let rhs = rhs.as_slice::<u8>()?;
    binary_into(op, out.as_mut_slice::<u8>()?, lhs, rhs);
    Ok(())
}

/// Applies `op` between every element of a boolean vector and a scalar.
///
/// # Errors
///
/// Returns `RuntimeError::KindMismatch` if either vector is not boolean, or
/// `RuntimeError::LengthMismatch` if their sizes differ.
pub fn vector_logic_scalar(op: LogicOp, out: &mut Vector, lhs: &Vector, rhs: u8) -> Result<()> {
    lhs.check_same_size(out)?;

    let lhs = lhs.as_slice::<u8>()?;
    scalar_into(op, out.as_mut_slice::<u8>()?, lhs, rhs);
    Ok(())
}

/// Returns whether two boolean vectors hold equal elements at every position.
///
/// # Errors
///
/// Returns `RuntimeError::KindMismatch` if either vector is not boolean.
pub fn vector_equals(lhs: &Vector, rhs: &Vector) -> Result<bool> {
    Ok(equals(lhs.as_slice::<u8>()?, rhs.as_slice::<u8>()?))
}

/// Returns whether two boolean vectors differ at any position.
///
/// # Errors
///
/// Returns `RuntimeError::KindMismatch` if either vector is not boolean.
pub fn vector_not_equals(lhs: &Vector, rhs: &Vector) -> Result<bool> {
    Ok(not_equals(lhs.as_slice::<u8>()?, rhs.as_slice::<u8>()?))
}
