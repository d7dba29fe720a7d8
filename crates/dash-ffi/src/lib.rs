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

//! # Dash FFI
//!
//! **C-Compatible Runtime Entry Points for Compiled Dash Programs.**
//!
//! Generated code links this crate statically or dynamically and calls one
//! function per arithmetic, logic, or interval expression node. The crate is a
//! thin layer over `dash-core`: it owns no algorithms, only the translation
//! between raw pointers and the safe container types.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: `Vector` and `Matrix` are hidden behind raw pointers
//!     returned by the `_new` functions. The host reads sizes and data through
//!     accessor functions and never touches struct fields.
//! 2.  **Explicit Lifecycle**: Every `_new` call must be matched by exactly one
//!     `_free` call. Freeing `NULL` is a no-op; freeing a handle twice is
//!     undefined behavior.
//! 3.  **Plain Values**: Intervals carry no buffer and cross the boundary by
//!     value as the `#[repr(C)]` struct `FfiInterval`.
//! 4.  **Fail-Fast Safety**: Operations that return nothing check their
//!     operands at the boundary. A `NULL` handle, mismatched shapes, or an
//!     unsupported element kind aborts the process instead of corrupting
//!     memory. The step-range and size-check functions report failures as a
//!     `DashStatus` instead, which the program passes to `dash_runtime_error`.
//!
//! ## Modules
//!
//! - `status`: `DashStatus`, `dash_status_message`, `dash_runtime_error`.
//! - `vector`: vector lifecycle, accessors, size checks, and arithmetic.
//! - `matrix`: matrix lifecycle, accessors, shape checks, and arithmetic.
//! - `logic`: boolean vector logic and equality.
//! - `interval`: `FfiInterval` arithmetic and step-range materialization.
//!
//! ## Logging
//!
//! Entry points emit `tracing` events. Nothing is printed until the program
//! calls `dash_runtime_init`, which installs a subscriber filtered by the
//! `DASH_LOG` environment variable.

mod handle;

pub mod interval;
pub mod logic;
pub mod matrix;
pub mod status;
pub mod vector;

use tracing_subscriber::EnvFilter;

/// The environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DASH_LOG";

/// Installs the runtime's log subscriber.
///
/// Events are written to stderr and filtered by the directives in `DASH_LOG`
/// (for example `DASH_LOG=dash_ffi=trace`). Without the variable only warnings
/// and errors are shown. Calling this more than once, or after another
/// subscriber has been installed, has no effect.
#[no_mangle]
pub extern "C" fn dash_runtime_init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
