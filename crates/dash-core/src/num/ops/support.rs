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

//! Kind-specific scalar functions for the modulus and power operators.
//!
//! The elementwise engine has no native operator for these two, so each
//! numeric element kind supplies its own definition here and the engine only
//! threads them through.
//!
//! - Integer `mod` is the truncated remainder: the result takes the sign of the
//!   dividend, and a zero divisor traps.
//! - Integer `power` multiplies with wraparound. A negative exponent yields the
//!   truncated reciprocal, which is only non-zero for bases `1` and `-1`.
//! - Real `mod` is the floating-point remainder (`fmod`), real `power` is `powf`.

/// A trait for element types that define the `mod` scalar function.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::support::ModVal;
/// assert_eq!(7i32.mod_val(3), 1);
/// assert_eq!((-7i32).mod_val(3), -1);
/// assert_eq!(7.5f32.mod_val(2.0), 1.5);
/// ```
pub trait ModVal: Sized {
    fn mod_val(self, v: Self) -> Self;
}

/// A trait for element types that define the `power` scalar function.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::support::PowVal;
/// assert_eq!(2i32.pow_val(10), 1024);
/// assert_eq!(2i32.pow_val(-1), 0);
/// assert_eq!(4.0f32.pow_val(0.5), 2.0);
/// ```
pub trait PowVal: Sized {
    fn pow_val(self, v: Self) -> Self;
}

impl ModVal for i32 {
    #[inline(always)]
    fn mod_val(self, v: Self) -> Self {
        self.wrapping_rem(v)
    }
}

impl PowVal for i32 {
    #[inline]
    fn pow_val(self, v: Self) -> Self {
        if v >= 0 {
            return self.wrapping_pow(v.unsigned_abs());
        }

        match self {
            0 => panic!("attempt to divide by zero"),
            1 => 1,
            -1 if v % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        }
    }
}

impl ModVal for f32 {
    #[inline(always)]
    fn mod_val(self, v: Self) -> Self {
        self % v
    }
}

impl PowVal for f32 {
    #[inline(always)]
    fn pow_val(self, v: Self) -> Self {
        self.powf(v)
    }
}
