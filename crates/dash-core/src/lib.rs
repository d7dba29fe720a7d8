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

//! # Dash Core
//!
//! The runtime support of the Dash language: the containers compiled programs
//! store their aggregate values in, and the elementwise engines they call for
//! every arithmetic, logic, and interval expression. Generated code reaches
//! these through the C ABI of `dash-ffi`; everything here is safe Rust.
//!
//! ## Modules
//!
//! - `container`: Kind-tagged, exclusively owned element storage with the
//!   one-dimensional `Vector` and the row-major `Matrix` built on top of it.
//! - `num`: The `ElementKind` tag (boolean, character, integer, real), the
//!   `Element` trait mapping storage types to kinds, and by-value scalar
//!   arithmetic traits bundled into the `Arithmetic` bound.
//! - `ops`: Elementwise arithmetic over integer and real containers and
//!   boolean logic over boolean vectors. Each engine is written once
//!   generically and instantiated per element kind.
//! - `math`: Closed integer intervals `[lower, upper]` with interval
//!   arithmetic and step ranges.
//! - `error`: The `RuntimeError` taxonomy shared by every fallible operation.
//!
//! ## Numeric Semantics
//!
//! Integer arithmetic wraps on overflow. Integer division and modulus by zero
//! panic. Real arithmetic follows IEEE-754 single precision.
//!
//! Refer to each module for detailed APIs and examples.

pub mod container;
pub mod error;
pub mod math;
pub mod num;
pub mod ops;
