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

//! # Numeric Foundations
//!
//! Element kinds and the scalar operations the runtime engines are built from.
//! Operation bodies are written once, generically, and instantiated per element
//! kind through the traits defined here.
//!
//! ## Submodules
//!
//! - `kind`: The `ElementKind` tag (boolean, character, integer, real) with its
//!   numeric identifiers and byte widths, and the `Element` trait that maps a
//!   storage type to its kind.
//! - `ops`: By-value scalar arithmetic (`AddVal`, `SubVal`, `MulVal`, `DivVal`,
//!   `NegVal`) and the kind-specific `mod`/`power` functions (`ModVal`,
//!   `PowVal`), bundled into the `Arithmetic` bound.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod kind;
pub mod ops;
