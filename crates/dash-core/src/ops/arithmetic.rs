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

//! # Elementwise Arithmetic Engine
//!
//! Add, subtract, multiply, divide, modulus, power, and unary negation over
//! equal-shape matrices and equal-size vectors of a numeric element kind.
//!
//! Every operation body is written once over `T: Arithmetic` and instantiated
//! per kind. `Modulus` and `Power` call the kind's `mod`/`power` scalar
//! functions; the others call the kind's by-value arithmetic.
//!
//! ## Layers
//!
//! - Slice kernels (`binary_into`, `negate_into`) run the loop
//!   `out[i] = lhs[i] OP rhs[i]` over buffers of equal length.
//! - Typed entry points (`matrix_binary::<T>`, `vector_negate::<T>`, ...) check
//!   shape and element kind at the container boundary, then run the kernel.
//! - Dispatching entry points (`matrix_binary_dyn`, ...) pick the
//!   instantiation from the operands' runtime kind tag.
//!
//! Division and modulus do not guard against a zero right-hand element: an
//! integer zero divisor panics, a real one produces the IEEE 754 result.

use crate::container::{matrix::Matrix, vector::Vector};
use crate::error::{Result, RuntimeError};
use crate::num::kind::ElementKind;
use crate::num::ops::arithmetic::Arithmetic;

/// A binary elementwise arithmetic operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
}

impl BinaryOp {
    /// All binary operators.
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulus,
        BinaryOp::Power,
    ];

    /// Applies the operator to a single pair of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::ops::arithmetic::BinaryOp;
    /// assert_eq!(BinaryOp::Modulus.apply(7i32, 3), 1);
    /// assert_eq!(BinaryOp::Power.apply(2.0f32, 3.0), 8.0);
    /// ```
    #[inline(always)]
    pub fn apply<T>(self, lhs: T, rhs: T) -> T
    where
        T: Arithmetic,
    {
        match self {
            BinaryOp::Add => lhs.add_val(rhs),
            BinaryOp::Subtract => lhs.sub_val(rhs),
            BinaryOp::Multiply => lhs.mul_val(rhs),
            BinaryOp::Divide => lhs.div_val(rhs),
            BinaryOp::Modulus => lhs.mod_val(rhs),
            BinaryOp::Power => lhs.pow_val(rhs),
        }
    }

    /// Returns the lowercase name of the operator.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Modulus => "modulus",
            BinaryOp::Power => "power",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline(always)]
fn pairwise<T, F>(out: &mut [T], lhs: &[T], rhs: &[T], f: F)
where
    T: Arithmetic,
    F: Fn(T, T) -> T,
{
    for ((o, &l), &r) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = f(l, r);
    }
}

/// Computes `out[i] = lhs[i] OP rhs[i]` for every position.
///
/// # Panics
///
/// Panics if the three slices do not have the same length, and on an integer
/// zero divisor for `Divide` and `Modulus`.
///
/// # Examples
///
/// ```rust
/// # use dash_core::ops::arithmetic::{binary_into, BinaryOp};
/// let mut out = [0i32; 3];
/// binary_into(BinaryOp::Multiply, &mut out, &[1, 2, 3], &[4, 5, 6]);
/// assert_eq!(out, [4, 10, 18]);
/// ```
pub fn binary_into<T>(op: BinaryOp, out: &mut [T], lhs: &[T], rhs: &[T])
where
    T: Arithmetic,
{
    assert!(
        lhs.len() == out.len() && rhs.len() == out.len(),
        "called `binary_into` with buffers of different lengths: out {}, lhs {}, rhs {}",
        out.len(),
        lhs.len(),
        rhs.len()
    );

    // Dispatch once, outside the loop.
    match op {
        BinaryOp::Add => pairwise(out, lhs, rhs, T::add_val),
        BinaryOp::Subtract => pairwise(out, lhs, rhs, T::sub_val),
        BinaryOp::Multiply => pairwise(out, lhs, rhs, T::mul_val),
        BinaryOp::Divide => pairwise(out, lhs, rhs, T::div_val),
        BinaryOp::Modulus => pairwise(out, lhs, rhs, T::mod_val),
        BinaryOp::Power => pairwise(out, lhs, rhs, T::pow_val),
    }
}

/// Computes `out[i] = -lhs[i]` for every position.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
pub fn negate_into<T>(out: &mut [T], lhs: &[T])
where
    T: Arithmetic,
{
    assert_eq!(
        out.len(),
        lhs.len(),
        "called `negate_into` with buffers of different lengths"
    );

    for (o, &l) in out.iter_mut().zip(lhs) {
        *o = l.neg_val();
    }
}

/// Applies `op` elementwise to two matrices of kind `T::KIND`, writing `out`.
///
/// # Errors
///
/// Returns `RuntimeError::ShapeMismatch` if the three matrices do not share one
/// shape, or `RuntimeError::KindMismatch` if any of them does not hold
/// `T::KIND`. `out` is untouched on error.
///
/// # Examples
///
/// ```rust
/// # use dash_core::container::matrix::Matrix;
/// # use dash_core::num::kind::ElementKind;
/// # use dash_core::ops::arithmetic::{matrix_binary, BinaryOp};
/// let lhs = Matrix::from_vec(1, 3, vec![1i32, 2, 3]).unwrap();
/// let rhs = Matrix::from_vec(1, 3, vec![10i32, 20, 30]).unwrap();
/// let mut out = Matrix::new(ElementKind::Integer, 1, 3);
/// matrix_binary::<i32>(BinaryOp::Add, &mut out, &lhs, &rhs).unwrap();
/// assert_eq!(out.as_slice::<i32>().unwrap(), &[11, 22, 33]);
/// ```
pub fn matrix_binary<T>(op: BinaryOp, out: &mut Matrix, lhs: &Matrix, rhs: &Matrix) -> Result<()>
where
    T: Arithmetic,
{
    lhs.check_same_shape(rhs)?;
    lhs.check_same_shape(out)?;

    let lhs = lhs.as_slice::<T>()?;
    let rhs = rhs.as_slice::<T>()?;
    binary_into(op, out.as_mut_slice::<T>()?, lhs, rhs);
    Ok(())
}

/// Negates `lhs` elementwise into `out`.
///
/// # Errors
///
/// Returns `RuntimeError::ShapeMismatch` or `RuntimeError::KindMismatch` as
/// `matrix_binary` does.
pub fn matrix_negate<T>(out: &mut Matrix, lhs: &Matrix) -> Result<()>
where
    T: Arithmetic,
{
    lhs.check_same_shape(out)?;

    let lhs = lhs.as_slice::<T>()?;
    negate_into(out.as_mut_slice::<T>()?, lhs);
    Ok(())
}

/// Applies `op` elementwise to two vectors of kind `T::KIND`, writing `out`.
///
/// # Errors
///
/// Returns `RuntimeError::LengthMismatch` if the sizes differ, or
/// `RuntimeError::KindMismatch` if any vector does not hold `T::KIND`.
pub fn vector_binary<T>(op: BinaryOp, out: &mut Vector, lhs: &Vector, rhs: &Vector) -> Result<()>
where
    T: Arithmetic,
{
    lhs.check_same_size(rhs)?;
    lhs.check_same_size(out)?;

    let lhs = lhs.as_slice::<T>()?;
    let rhs = rhs.as_slice::<T>()?;
    binary_into(op, out.as_mut_slice::<T>()?, lhs, rhs);
    Ok(())
}

/// Negates `lhs` elementwise into `out`.
///
/// # Errors
///
/// Returns `RuntimeError::LengthMismatch` or `RuntimeError::KindMismatch` as
/// `vector_binary` does.
pub fn vector_negate<T>(out: &mut Vector, lhs: &Vector) -> Result<()>
where
    T: Arithmetic,
{
    lhs.check_same_size(out)?;

    let lhs = lhs.as_slice::<T>()?;
    negate_into(out.as_mut_slice::<T>()?, lhs);
    Ok(())
}

/// Applies `op` to two matrices, instantiated for the kind of `lhs`.
///
/// # Errors
///
/// Returns `RuntimeError::UnsupportedKind` for boolean and character matrices,
/// and otherwise the errors of `matrix_binary`.
pub fn matrix_binary_dyn(op: BinaryOp, out: &mut Matrix, lhs: &Matrix, rhs: &Matrix) -> Result<()> {
    match lhs.kind() {
        ElementKind::Integer => matrix_binary::<i32>(op, out, lhs, rhs),
        ElementKind::Real => matrix_binary::<f32>(op, out, lhs, rhs),
        kind => Err(RuntimeError::UnsupportedKind { kind }),
    }
}

/// Negates a matrix, instantiated for the kind of `lhs`.
///
/// # Errors
///
/// Returns `RuntimeError::UnsupportedKind` for boolean and character matrices,
/// and otherwise the errors of `matrix_negate`.
pub fn matrix_negate_dyn(out: &mut Matrix, lhs: &Matrix) -> Result<()> {
    match lhs.kind() {
        ElementKind::Integer => matrix_negate::<i32>(out, lhs),
        ElementKind::Real => matrix_negate::<f32>(out, lhs),
        kind => Err(RuntimeError::UnsupportedKind { kind }),
    }
}

/// Applies `op` to two vectors, instantiated for the kind of `lhs`.
///
/// # Errors
///
/// Returns `RuntimeError::UnsupportedKind` for boolean and character vectors,
/// and otherwise the errors of `vector_binary`.
pub fn vector_binary_dyn(op: BinaryOp, out: &mut Vector, lhs: &Vector, rhs: &Vector) -> Result<()> {
    match lhs.kind() {
        ElementKind::Integer => vector_binary::<i32>(op, out, lhs, rhs),
        ElementKind::Real => vector_binary::<f32>(op, out, lhs, rhs),
        kind => Err(RuntimeError::UnsupportedKind { kind }),
    }
}

/// Negates a vector, instantiated for the kind of `lhs`.
///
/// # Errors
///
/// Returns `RuntimeError::UnsupportedKind` for boolean and character vectors,
/// and otherwise the errors of `vector_negate`.
pub fn vector_negate_dyn(out: &mut Vector, lhs: &Vector) -> Result<()> {
    match lhs.kind() {
        ElementKind::Integer => vector_negate::<i32>(out, lhs),
        ElementKind::Real => vector_negate::<f32>(out, lhs),
        kind => Err(RuntimeError::UnsupportedKind { kind }),
    }
}
