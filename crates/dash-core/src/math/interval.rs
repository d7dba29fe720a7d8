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

use crate::container::vector::Vector;
use crate::error::{Result, RuntimeError};
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// The integer types an `Interval` can be bounded by.
///
/// Bounds are signed primitive integers no wider than 64 bits. Addition,
/// subtraction, multiplication and negation of bounds wrap on overflow.
pub trait IntervalBound:
    PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + Into<i64>
{
}

impl<T> IntervalBound for T where
    T: PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + Into<i64>
{
}

/// A closed integer range `[lower, upper]`.
///
/// Construction does not require `lower <= upper`. Every operation is defined
/// for inverted intervals too, and some operations (notably `negate`) produce
/// them from proper ones. Use `is_proper` to tell the two apart.
///
/// # Examples
///
/// ```rust
/// # use dash_core::math::interval::Interval;
/// let a = Interval::new(-2, 3);
/// let b = Interval::new(-1, 4);
/// assert_eq!(a * b, Interval::new(-8, 12));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T = i32>
where
    T: IntervalBound,
{
    lower: T,
    upper: T,
}

#[inline(always)]
fn min4<T: Ord>(a: T, b: T, c: T, d: T) -> T {
    min(min(a, b), min(c, d))
}

#[inline(always)]
fn max4<T: Ord>(a: T, b: T, c: T, d: T) -> T {
    max(max(a, b), max(c, d))
}

// Truncating division that wraps `MIN / -1` instead of panicking. A zero
// divisor still panics.
#[inline(always)]
fn wrapping_div<T>(a: T, b: T) -> T
where
    T: IntervalBound,
{
    if b == -T::one() {
        a.wrapping_neg()
    } else {
        a / b
    }
}

impl<T> Interval<T>
where
    T: IntervalBound,
{
    /// Creates a new interval by assigning both bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// let iv = Interval::new(5, 1); // inverted intervals are allowed
    /// assert_eq!(iv.lower(), 5);
    /// assert_eq!(iv.upper(), 1);
    /// assert!(!iv.is_proper());
    /// ```
    #[inline]
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if `lower <= upper`.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.lower <= self.upper
    }

    /// Adds two intervals bound by bound: `[a + c, b + d]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// assert_eq!(Interval::new(1, 2).add(Interval::new(3, 4)), Interval::new(4, 6));
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(
            self.lower.wrapping_add(&rhs.lower),
            self.upper.wrapping_add(&rhs.upper),
        )
    }

    /// Subtracts with crossed bounds: `[a - d, b - c]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// assert_eq!(Interval::new(1, 5).subtract(Interval::new(2, 3)), Interval::new(-2, 3));
    /// ```
    #[inline]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::new(
            self.lower.wrapping_sub(&rhs.upper),
            self.upper.wrapping_sub(&rhs.lower),
        )
    }

    /// Multiplies by the four-corner rule.
    ///
    /// All four bound products `{ac, ad, bc, bd}` are formed and the result
    /// spans their minimum and maximum. The signs of the bounds decide which
    /// pairing is extremal, so no single fixed pairing is correct in general.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// // Corners: 2, -8, -3, 12
    /// assert_eq!(Interval::new(-2, 3).multiply(Interval::new(-1, 4)), Interval::new(-8, 12));
    /// ```
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.lower, self.upper, rhs.lower, rhs.upper);

        let ac = a.wrapping_mul(&c);
        let ad = a.wrapping_mul(&d);
        let bc = b.wrapping_mul(&c);
        let bd = b.wrapping_mul(&d);

        Self::new(min4(ac, ad, bc, bd), max4(ac, ad, bc, bd))
    }

    /// Divides by the four-corner rule, with truncating integer division.
    ///
    /// # Panics
    ///
    /// Panics if either bound of `rhs` is zero. A divisor interval that merely
    /// straddles zero is not special-cased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// // Corners: -5, -2, 10, 4
    /// assert_eq!(Interval::new(-10, 20).divide(Interval::new(2, 5)), Interval::new(-5, 10));
    /// ```
    #[inline]
    pub fn divide(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.lower, self.upper, rhs.lower, rhs.upper);

        let ac = wrapping_div(a, c);
        let ad = wrapping_div(a, d);
        let bc = wrapping_div(b, c);
        let bd = wrapping_div(b, d);

        Self::new(min4(ac, ad, bc, bd), max4(ac, ad, bc, bd))
    }

    /// Negates both bounds in place: `[-a, -b]`.
    ///
    /// The bounds are not swapped, so negating a proper interval with
    /// `a < b` yields an inverted one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// let iv = Interval::new(2, 5).negate();
    /// assert_eq!(iv, Interval::new(-2, -5));
    /// assert!(!iv.is_proper());
    /// ```
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(self.lower.wrapping_neg(), self.upper.wrapping_neg())
    }

    /// Returns `true` if both bounds are equal.
    #[inline]
    pub fn equals(&self, rhs: &Self) -> bool {
        self.lower == rhs.lower && self.upper == rhs.upper
    }

    /// Returns `true` if either bound differs. Always the complement of `equals`.
    #[inline]
    pub fn not_equals(&self, rhs: &Self) -> bool {
        !self.equals(rhs)
    }

    /// Returns the arithmetic progression `lower, lower + step, ...` that does
    /// not exceed `upper`.
    ///
    /// The number of elements is `ceil((upper - lower + 1) / step)`; an
    /// inverted interval yields an empty progression.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::InvalidStep` if `step < 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// let points: Vec<i32> = Interval::new(1, 10).by(3).unwrap().collect();
    /// assert_eq!(points, vec![1, 4, 7, 10]);
    /// assert!(Interval::new(1, 10).by(0).is_err());
    /// ```
    pub fn by(&self, step: T) -> Result<StepRange<T>> {
        if step < T::one() {
            return Err(RuntimeError::InvalidStep { step: step.into() });
        }
        Ok(StepRange::new(*self, step))
    }

    /// Returns an iterator over every integer of the interval, in ascending order.
    #[inline]
    pub fn iter(&self) -> StepRange<T> {
        StepRange::new(*self, T::one())
    }
}

impl Interval<i32> {
    /// Materializes `by(step)` into a freshly allocated integer vector.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::InvalidStep` if `step < 1`. Nothing is allocated
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use dash_core::math::interval::Interval;
    /// let v = Interval::new(5, 5).step_range(1).unwrap();
    /// assert_eq!(v.as_slice::<i32>().unwrap(), &[5]);
    /// ```
    pub fn step_range(&self, step: i32) -> Result<Vector> {
        let range = self.by(step)?;
        let mut values = Vec::with_capacity(range.len());
        values.extend(range);
        Ok(Vector::from_vec(values))
    }
}

/// An iterator over an arithmetic progression bounded by an `Interval`.
///
/// Created by `Interval::by` and `Interval::iter`. The element count is fixed
/// at creation, so the iterator is exact-size.
#[derive(Clone, Debug)]
pub struct StepRange<T>
where
    T: IntervalBound,
{
    current: T,
    step: T,
    remaining: usize,
}

impl<T> StepRange<T>
where
    T: IntervalBound,
{
    fn new(interval: Interval<T>, step: T) -> Self {
        debug_assert!(step >= T::one(), "StepRange: step must be positive");

        let lower: i64 = interval.lower.into();
        let upper: i64 = interval.upper.into();
        let step_i64: i64 = step.into();

        // ceil((upper - lower + 1) / step), in i128 so the span of any i64
        // bound pair is exact.
        let remaining = if upper < lower {
            0
        } else {
            ((i128::from(upper) - i128::from(lower)) / i128::from(step_i64) + 1) as usize
        };

        Self {
            current: interval.lower,
            step,
            remaining,
        }
    }
}

impl<T> Iterator for StepRange<T>
where
    T: IntervalBound,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = self.current + self.step;
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StepRange<T>
where
    T: IntervalBound,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for StepRange<T> where T: IntervalBound {}

impl<T> Add for Interval<T>
where
    T: IntervalBound,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Interval::add(self, rhs)
    }
}

impl<T> Sub for Interval<T>
where
    T: IntervalBound,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T> Mul for Interval<T>
where
    T: IntervalBound,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T> Div for Interval<T>
where
    T: IntervalBound,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T> Neg for Interval<T>
where
    T: IntervalBound,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T> Default for Interval<T>
where
    T: IntervalBound,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: IntervalBound + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: IntervalBound + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: IntervalBound,
{
    type Item = T;
    type IntoIter = StepRange<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Interval<T>
where
    T: IntervalBound,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl<T> From<(T, T)> for Interval<T>
where
    T: IntervalBound,
{
    #[inline]
    fn from((lower, upper): (T, T)) -> Self {
        Self::new(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lower: i32, upper: i32) -> Interval {
        Interval::new(lower, upper)
    }

    #[test]
    fn test_construction_does_not_reorder() {
        let a = iv(3, 7);
        assert_eq!((a.lower(), a.upper()), (3, 7));
        assert!(a.is_proper());

        let b = iv(7, 3);
        assert_eq!((b.lower(), b.upper()), (7, 3));
        assert!(!b.is_proper());

        assert!(iv(4, 4).is_proper());
    }

    #[test]
    fn test_default() {
        let a: Interval = Default::default();
        assert_eq!(a, iv(0, 0));
    }

    #[test]
    fn test_add() {
        assert_eq!(iv(1, 2).add(iv(3, 4)), iv(4, 6));
        assert_eq!(iv(1, 2) + iv(3, 4), iv(3, 4) + iv(1, 2));
        assert_eq!(iv(-5, -1) + iv(2, 2), iv(-3, 1));
    }

    #[test]
    fn test_add_is_associative() {
        let (a, b, c) = (iv(1, 2), iv(-3, 4), iv(10, 20));
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_subtract_crosses_bounds() {
        assert_eq!(iv(1, 5).subtract(iv(2, 3)), iv(-2, 3));
        assert_eq!(iv(1, 5) - iv(1, 5), iv(-4, 4));
    }

    #[test]
    fn test_multiply_four_corners() {
        // Corners: 2, -8, -3, 12
        assert_eq!(iv(-2, 3).multiply(iv(-1, 4)), iv(-8, 12));
        // Both negative: the extremes come from the crossed pairing.
        assert_eq!(iv(-3, -2) * iv(-5, -4), iv(8, 15));
        // Mixed signs.
        assert_eq!(iv(-3, -2) * iv(4, 5), iv(-15, -8));
        assert_eq!(iv(0, 0) * iv(-9, 9), iv(0, 0));
    }

    #[test]
    fn test_divide_four_corners() {
        // Corners: -5, -2, 10, 4
        assert_eq!(iv(-10, 20).divide(iv(2, 5)), iv(-5, 10));
        // Corners: 5, 2, -10, -4
        assert_eq!(iv(-10, 20) / iv(-5, -2), iv(-10, 5));
        // Truncating division.
        assert_eq!(iv(7, 7) / iv(2, 2), iv(3, 3));
        assert_eq!(iv(-7, -7) / iv(2, 2), iv(-3, -3));
    }

    #[test]
    fn test_divide_min_by_minus_one_wraps() {
        assert_eq!(iv(i32::MIN, i32::MIN) / iv(-1, -1), iv(i32::MIN, i32::MIN));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_divide_by_zero_bound_panics() {
        let _ = iv(1, 2) / iv(0, 3);
    }

    #[test]
    fn test_negate_does_not_swap_bounds() {
        let n = iv(2, 5).negate();
        assert_eq!(n, iv(-2, -5));
        assert!(!n.is_proper());
        assert_eq!(-n, iv(2, 5));
    }

    #[test]
    fn test_equality() {
        assert!(iv(2, 5).equals(&iv(2, 5)));
        assert!(!iv(2, 5).equals(&iv(2, 6)));
        assert!(!iv(2, 5).equals(&iv(1, 5)));
        for (a, b) in [(iv(2, 5), iv(2, 5)), (iv(2, 5), iv(2, 6)), (iv(0, 0), iv(9, 0))] {
            assert_eq!(a.not_equals(&b), !a.equals(&b));
            assert_eq!(a.equals(&b), a == b);
        }
    }

    #[test]
    fn test_by() {
        let points: Vec<i32> = iv(1, 10).by(3).unwrap().collect();
        assert_eq!(points, vec![1, 4, 7, 10]);

        let points: Vec<i32> = iv(1, 9).by(3).unwrap().collect();
        assert_eq!(points, vec![1, 4, 7]);

        let points: Vec<i32> = iv(-4, 4).by(4).unwrap().collect();
        assert_eq!(points, vec![-4, 0, 4]);

        let points: Vec<i32> = iv(0, 3).by(100).unwrap().collect();
        assert_eq!(points, vec![0]);
    }

    #[test]
    fn test_by_rejects_step_below_one() {
        assert_eq!(
            iv(1, 10).by(0).map(|r| r.len()),
            Err(RuntimeError::InvalidStep { step: 0 })
        );
        assert_eq!(
            iv(1, 10).by(-2).map(|r| r.len()),
            Err(RuntimeError::InvalidStep { step: -2 })
        );
    }

    #[test]
    fn test_by_inverted_interval_is_empty() {
        assert_eq!(iv(5, 3).by(1).unwrap().count(), 0);
        assert_eq!(iv(5, 4).by(1).unwrap().count(), 0);
    }

    #[test]
    fn test_by_is_exact_size_and_fused() {
        let mut range = iv(1, 10).by(3).unwrap();
        assert_eq!(range.len(), 4);
        range.next();
        assert_eq!(range.len(), 3);
        assert_eq!(range.by_ref().count(), 3);
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_by_near_upper_limit_does_not_overflow() {
        let points: Vec<i32> = iv(i32::MAX - 4, i32::MAX).by(2).unwrap().collect();
        assert_eq!(points, vec![i32::MAX - 4, i32::MAX - 2, i32::MAX]);

        assert_eq!(iv(i32::MIN, i32::MAX).by(i32::MAX).unwrap().len(), 3);
    }

    #[test]
    fn test_step_range() {
        let v = iv(1, 10).step_range(3).unwrap();
        assert_eq!(v.size(), 4);
        assert_eq!(v.as_slice::<i32>().unwrap(), &[1, 4, 7, 10]);

        let v = iv(5, 5).step_range(1).unwrap();
        assert_eq!(v.as_slice::<i32>().unwrap(), &[5]);

        assert_eq!(
            iv(1, 10).step_range(0),
            Err(RuntimeError::InvalidStep { step: 0 })
        );
    }

    #[test]
    fn test_iter_and_into_iter() {
        assert_eq!(iv(-1, 2).iter().collect::<Vec<_>>(), vec![-1, 0, 1, 2]);
        let mut total = 0;
        for x in iv(1, 4) {
            total += x;
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Interval::from(2..=9), iv(2, 9));
        assert_eq!(Interval::from((9, 2)), iv(9, 2));
    }

    #[test]
    fn test_wider_bounds() {
        let a: Interval<i64> = Interval::new(-3_000_000_000, 1);
        let b: Interval<i64> = Interval::new(2, 2);
        assert_eq!(a * b, Interval::new(-6_000_000_000, 2));
        assert_eq!(Interval::<i8>::new(0, 9).by(5).unwrap().collect::<Vec<_>>(), vec![0, 5]);
    }

    #[test]
    fn test_by_counts_wide_bounds_exactly() {
        let points: Vec<i64> = Interval::<i64>::new(0, (1 << 60) + 1)
            .by(1 << 60)
            .unwrap()
            .collect();
        assert_eq!(points, vec![0, 1 << 60]);

        let range = Interval::<i64>::new(i64::MAX - 2, i64::MAX).by(1).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.last(), Some(i64::MAX));

        assert_eq!(Interval::new(i32::MIN, i32::MAX).by(1).unwrap().len(), 1 << 32);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", iv(-2, 3)), "[-2, 3]");
        assert_eq!(format!("{:?}", iv(-2, 3)), "Interval { lower: -2, upper: 3 }");
    }
}
