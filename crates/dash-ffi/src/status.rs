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

//! # Status Codes
//!
//! The C-facing view of `RuntimeError`. Fallible entry points return a
//! `DashStatus`; the program reports a non-zero status through
//! `dash_runtime_error`, which prints the message and exits.
//!
//! Entry points that return nothing use `OrFail` to turn an error into a
//! logged panic. Panics do not unwind across `extern "C"`, so the process
//! aborts.

use dash_core::error::RuntimeError;
use std::ffi::{c_char, c_int, CStr};

/// The outcome of a fallible runtime call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashStatus {
    Ok = 0,
    InvalidStep = 1,
    ShapeMismatch = 2,
    LengthMismatch = 3,
    KindMismatch = 4,
    UnsupportedKind = 5,
    UnknownKind = 6,
    NegativeSize = 7,
}

impl DashStatus {
    /// Returns the status for a raw code, or `None` if the code is unknown.
    pub const fn from_code(code: c_int) -> Option<DashStatus> {
        match code {
            0 => Some(DashStatus::Ok),
            1 => Some(DashStatus::InvalidStep),
            2 => Some(DashStatus::ShapeMismatch),
            3 => Some(DashStatus::LengthMismatch),
            4 => Some(DashStatus::KindMismatch),
            5 => Some(DashStatus::UnsupportedKind),
            6 => Some(DashStatus::UnknownKind),
            7 => Some(DashStatus::NegativeSize),
            _ => None,
        }
    }

    /// Returns the raw code.
    #[inline]
    pub const fn code(self) -> c_int {
        self as c_int
    }

    /// Returns `true` for `DashStatus::Ok`.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, DashStatus::Ok)
    }

    /// Returns the diagnostic printed after `RuntimeError: `.
    pub const fn message(self) -> &'static CStr {
        match self {
            DashStatus::Ok => c"No error.",
            DashStatus::InvalidStep => c"Interval step must be at least 1.",
            DashStatus::ShapeMismatch => c"Matrices are not the same size.",
            DashStatus::LengthMismatch => c"Vectors are not the same size.",
            DashStatus::KindMismatch => c"Operand element kinds do not match.",
            DashStatus::UnsupportedKind => c"Operation is not supported for this element kind.",
            DashStatus::UnknownKind => c"Unknown element kind.",
            DashStatus::NegativeSize => c"Container size must not be negative.",
        }
    }
}

impl From<&RuntimeError> for DashStatus {
    fn from(err: &RuntimeError) -> Self {
        match err {
            RuntimeError::InvalidStep { .. } => DashStatus::InvalidStep,
            RuntimeError::ShapeMismatch { .. } => DashStatus::ShapeMismatch,
            RuntimeError::LengthMismatch { .. } => DashStatus::LengthMismatch,
            RuntimeError::KindMismatch { .. } => DashStatus::KindMismatch,
            RuntimeError::UnsupportedKind { .. } => DashStatus::UnsupportedKind,
            RuntimeError::UnknownKind { .. } => DashStatus::UnknownKind,
            RuntimeError::NegativeSize { .. } => DashStatus::NegativeSize,
        }
    }
}

impl From<dash_core::error::Result<()>> for DashStatus {
    fn from(result: dash_core::error::Result<()>) -> Self {
        match result {
            Ok(()) => DashStatus::Ok,
            Err(err) => {
                tracing::debug!(error = %err, "runtime check failed");
                DashStatus::from(&err)
            }
        }
    }
}

impl std::fmt::Display for DashStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().to_string_lossy())
    }
}

/// Converts a boundary error into a logged panic naming the entry point.
pub(crate) trait OrFail<T> {
    fn or_fail(self, function: &str) -> T;
}

impl<T> OrFail<T> for dash_core::error::Result<T> {
    #[inline]
    #[track_caller]
    fn or_fail(self, function: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(function, error = %err, "invalid operands");
                panic!("called `{}` with invalid operands: {}", function, err);
            }
        }
    }
}

/// Returns the diagnostic message for a status code as a static,
/// NUL-terminated string. Unknown codes yield a generic message.
#[no_mangle]
pub extern "C" fn dash_status_message(status: c_int) -> *const c_char {
    match DashStatus::from_code(status) {
        Some(status) => status.message().as_ptr(),
        None => c"Unknown runtime error.".as_ptr(),
    }
}

/// Reports a runtime error and terminates the program.
///
/// Prints `RuntimeError: <message>` to stderr and exits with status 1.
#[no_mangle]
pub extern "C" fn dash_runtime_error(status: c_int) -> ! {
    eprintln!("{}", runtime_error_line(status));
    std::process::exit(1)
}

// The line `dash_runtime_error` prints. Logged at debug only, so stderr shows
// the message once under the default filter.
fn runtime_error_line(status: c_int) -> String {
    let message = DashStatus::from_code(status)
        .map_or(c"Unknown runtime error.", DashStatus::message)
        .to_string_lossy();

    tracing::debug!(status, "{}", message);
    format!("RuntimeError: {}", message)
}
