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

//! # Runtime Errors
//!
//! The error taxonomy of the runtime is deliberately small. Most misuse
//! (dividing by zero, overflowing an integer) is left to the numeric semantics
//! of the element kind. What remains are the conditions the runtime detects at
//! its boundary: an invalid step for a step range, operands whose shapes or
//! element kinds disagree, and element kind tags that cannot be dispatched.
//!
//! The messages of the shape variants match the diagnostics generated programs
//! print when their size checks fail.

use crate::num::kind::ElementKind;
use thiserror::Error;

/// The error type of every fallible runtime operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// A step range was requested with a step smaller than one.
    #[error("Interval step must be at least 1, got {step}.")]
    InvalidStep { step: i64 },

    /// Two matrices do not have the same number of rows and columns.
    #[error("Matrices are not the same size.")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Two vectors do not have the same number of elements.
    #[error("Vectors are not the same size.")]
    LengthMismatch { lhs: usize, rhs: usize },

    /// A container holds elements of a different kind than the operation requires.
    #[error("Expected elements of kind {expected}, found {found}.")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    /// The operation is not defined for the given element kind.
    #[error("Operation is not supported for elements of kind {kind}.")]
    UnsupportedKind { kind: ElementKind },

    /// A numeric type tag does not name any element kind.
    #[error("Unknown element kind tag {type_id}.")]
    UnknownKind { type_id: i32 },

    /// A container was requested with a negative number of elements.
    #[error("Container size must not be negative, got {size}.")]
    NegativeSize { size: i64 },
}

/// A specialized `Result` for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_messages_match_generated_diagnostics() {
        let err = RuntimeError::ShapeMismatch {
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(err.to_string(), "Matrices are not the same size.");

        let err = RuntimeError::LengthMismatch { lhs: 4, rhs: 5 };
        assert_eq!(err.to_string(), "Vectors are not the same size.");
    }

    #[test]
    fn test_kind_messages_use_kind_names() {
        let err = RuntimeError::KindMismatch {
            expected: ElementKind::Integer,
            found: ElementKind::Real,
        };
        assert_eq!(
            err.to_string(),
            "Expected elements of kind integer, found real."
        );

        let err = RuntimeError::UnsupportedKind {
            kind: ElementKind::Boolean,
        };
        assert_eq!(
            err.to_string(),
            "Operation is not supported for elements of kind boolean."
        );
    }

    #[test]
    fn test_invalid_step_message() {
        let err = RuntimeError::InvalidStep { step: 0 };
        assert_eq!(err.to_string(), "Interval step must be at least 1, got 0.");
    }
}
