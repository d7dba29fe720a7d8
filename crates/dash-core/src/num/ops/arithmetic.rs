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

//! By-value scalar arithmetic for the numeric element kinds.
//!
//! Generic operation bodies never use the primitive operators directly. They go
//! through these traits so that every kind fixes its own semantics once:
//! integers wrap on overflow and trap on division by zero, reals follow IEEE 754.

use super::support::{ModVal, PowVal};
use crate::num::kind::Element;

/// A trait for element types that support addition by value.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::arithmetic::AddVal;
/// assert_eq!(i32::MAX.add_val(1), i32::MIN); // Integers wrap
/// assert_eq!(1.5f32.add_val(2.0), 3.5);
/// ```
pub trait AddVal: Sized {
    fn add_val(self, v: Self) -> Self;
}

/// A trait for element types that support subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::arithmetic::SubVal;
/// assert_eq!(i32::MIN.sub_val(1), i32::MAX); // Integers wrap
/// ```
pub trait SubVal: Sized {
    fn sub_val(self, v: Self) -> Self;
}

/// A trait for element types that support multiplication by value.
pub trait MulVal: Sized {
    fn mul_val(self, v: Self) -> Self;
}

/// A trait for element types that support division by value.
///
/// Integer division truncates toward zero and panics if `v` is zero.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::arithmetic::DivVal;
/// assert_eq!((-7i32).div_val(2), -3);
/// assert!(1.0f32.div_val(0.0).is_infinite());
/// ```
pub trait DivVal: Sized {
    fn div_val(self, v: Self) -> Self;
}

/// A trait for element types that support negation by value.
///
/// # Examples
///
/// ```rust
/// # use dash_core::num::ops::arithmetic::NegVal;
/// assert_eq!(5i32.neg_val(), -5);
/// assert_eq!(i32::MIN.neg_val(), i32::MIN); // Integers wrap
/// ```
pub trait NegVal: Sized {
    fn neg_val(self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! operator_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                self $op v
            }
        }
    };
}

wrapping_impl_val!(AddVal, add_val, i32, wrapping_add);
wrapping_impl_val!(SubVal, sub_val, i32, wrapping_sub);
wrapping_impl_val!(MulVal, mul_val, i32, wrapping_mul);
// `wrapping_div` still panics on a zero divisor; only `MIN / -1` wraps.
wrapping_impl_val!(DivVal, div_val, i32, wrapping_div);

operator_impl_val!(AddVal, add_val, f32, +);
operator_impl_val!(SubVal, sub_val, f32, -);
operator_impl_val!(MulVal, mul_val, f32, *);
operator_impl_val!(DivVal, div_val, f32, /);

impl NegVal for i32 {
    #[inline(always)]
    fn neg_val(self) -> Self {
        self.wrapping_neg()
    }
}

impl NegVal for f32 {
    #[inline(always)]
    fn neg_val(self) -> Self {
        -self
    }
}

/// The element types the elementwise arithmetic engine is instantiated for.
///
/// Bundles the storage contract of `Element` with the five native operations
/// and the two kind-specific scalar functions `mod` and `power` supplied by the
/// numeric support module.
pub trait Arithmetic: Element + AddVal + SubVal + MulVal + DivVal + NegVal + ModVal + PowVal {}

impl<T> Arithmetic for T where T: Element + AddVal + SubVal + MulVal + DivVal + NegVal + ModVal + PowVal {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ops() {
        assert_eq!(7i32.add_val(5), 12);
        assert_eq!(7i32.sub_val(5), 2);
        assert_eq!(7i32.mul_val(5), 35);
        assert_eq!(7i32.div_val(5), 1);
        assert_eq!(7i32.neg_val(), -7);
    }

    #[test]
    fn test_integer_ops_wrap() {
        assert_eq!(i32::MAX.add_val(1), i32::MIN);
        assert_eq!(i32::MIN.sub_val(1), i32::MAX);
        assert_eq!(i32::MAX.mul_val(2), -2);
        assert_eq!(i32::MIN.div_val(-1), i32::MIN);
        assert_eq!(i32::MIN.neg_val(), i32::MIN);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_integer_division_by_zero_traps() {
        let _ = 1i32.div_val(0);
    }

    #[test]
    fn test_real_ops() {
        assert_eq!(1.5f32.add_val(2.25), 3.75);
        assert_eq!(1.5f32.sub_val(2.25), -0.75);
        assert_eq!(1.5f32.mul_val(2.0), 3.0);
        assert_eq!(3.0f32.div_val(2.0), 1.5);
        assert_eq!(3.0f32.neg_val(), -3.0);
    }

    #[test]
    fn test_real_division_by_zero_is_ieee() {
        assert_eq!(1.0f32.div_val(0.0), f32::INFINITY);
        assert_eq!((-1.0f32).div_val(0.0), f32::NEG_INFINITY);
        assert!(0.0f32.div_val(0.0).is_nan());
    }
}
