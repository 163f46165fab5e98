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

use crate::num::RangeNumeric;
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// The error type for range construction.
///
/// Construction is the only place errors can occur; once built, a
/// `StepRange` can never become invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// The step was zero, so the progression could never advance.
    ZeroStep,
    /// The step points away from `stop`, or the difference `stop - start`
    /// is not representable in the element type, so the progression could
    /// never terminate.
    NonTerminating,
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "Range step argument must not be zero"),
            Self::NonTerminating => write!(f, "Range arguments must result in termination"),
        }
    }
}

impl std::error::Error for RangeError {}

/// A half-open stepped range `[start, stop)` over a numeric type.
///
/// This struct represents an arithmetic progression that starts at `start`
/// (inclusive), advances by repeated addition of `step`, and ends strictly
/// before crossing `stop` (exclusive). It is an immutable scalar value:
/// iterating it never mutates it, every iteration starts again at `start`,
/// and it may be copied and iterated from any number of places at once.
///
/// Floating-point ranges accumulate by repeated addition, matching the
/// rounding behavior of a native float loop. Values are never recomputed
/// as `start + i * step`. NaN bounds or steps are accepted at
/// construction and produce an empty sequence: the continuation test is
/// an ordered comparison against `stop`, which NaN never satisfies.
///
/// # Invariants
///
/// `step` is nonzero and points from `start` towards `stop`; both are
/// enforced at construction, so iteration always terminates.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::StepRange;
///
/// let r = StepRange::new(2, 10, 3).unwrap();
/// let values: Vec<_> = r.iter().collect();
/// assert_eq!(values, vec![2, 5, 8]);
///
/// let down = StepRange::new(10, 0, -1).unwrap();
/// assert_eq!(down.iter().collect::<Vec<_>>(), vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
///
/// let halves = StepRange::new(0.0, 5.0, 1.5).unwrap();
/// assert_eq!(halves.iter().collect::<Vec<_>>(), vec![0.0, 1.5, 3.0, 4.5]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange<T>
where
    T: RangeNumeric,
{
    start: T,
    stop: T,
    step: T,
}

/// An iterator over the values produced by a `StepRange`.
///
/// The iterator owns its own cursor state and is independent of the range
/// that spawned it. It is fused: once exhausted it returns `None` forever.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::StepRange;
///
/// let r = StepRange::until(5).unwrap();
/// let points: Vec<_> = r.iter().collect();
/// assert_eq!(points, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct StepRangeIter<T>
where
    T: RangeNumeric,
{
    current: T,
    stop: T,
    step: T,
}

impl<T> Iterator for StepRangeIter<T>
where
    T: RangeNumeric,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Continue only while the cursor is strictly on the start side of
        // `stop`. The comparison is deliberately asymmetric (`<`, not `!=`)
        // so a step that does not evenly divide the span still terminates,
        // and phrased positively so an unordered (NaN) comparison exhausts
        // the cursor instead of running forever.
        let keep_going = if self.step > T::ZERO {
            self.current < self.stop
        } else {
            self.current > self.stop
        };
        if !keep_going {
            None
        } else {
            let result = self.current;
            // If the advance would cross the type boundary, the boundary is
            // at or past `stop`; parking the cursor on `stop` keeps it
            // exhausted without wrapping.
            self.current = self
                .current
                .checked_add_val(self.step)
                .unwrap_or(self.stop);
            Some(result)
        }
    }
}

impl<T> FusedIterator for StepRangeIter<T> where T: RangeNumeric {}

impl<T> StepRange<T>
where
    T: RangeNumeric,
{
    /// Creates a new `StepRange` from `start` to `stop` advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] if `step` is zero, and
    /// [`RangeError::NonTerminating`] if `step` points away from `stop` or
    /// the difference `stop - start` wraps in a fixed-width integer type.
    /// A range with `start == stop` is valid and empty for any nonzero
    /// step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::{RangeError, StepRange};
    ///
    /// assert!(StepRange::new(0, 10, 2).is_ok());
    /// assert!(StepRange::new(5, 5, -1).is_ok()); // Empty, but valid
    /// assert_eq!(StepRange::new(0, 10, 0), Err(RangeError::ZeroStep));
    /// assert_eq!(StepRange::new(0, 10, -1), Err(RangeError::NonTerminating));
    /// ```
    pub fn new(start: T, stop: T, step: T) -> Result<Self, RangeError> {
        if step == T::ZERO {
            return Err(RangeError::ZeroStep);
        }
        // A wrapped difference would flip sign and pass the direction check
        // for ranges that can never terminate, so the subtraction must be
        // overflow-checked rather than native.
        let difference = stop
            .checked_sub_val(start)
            .ok_or(RangeError::NonTerminating)?;
        if (difference < T::ZERO && step > T::ZERO) || (difference > T::ZERO && step < T::ZERO) {
            return Err(RangeError::NonTerminating);
        }
        Ok(Self { start, stop, step })
    }

    /// Creates a `StepRange` from zero to `stop` with a step of one.
    ///
    /// Equivalent to `StepRange::new(T::ZERO, stop, T::ONE)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NonTerminating`] if `stop` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::until(5).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn until(stop: T) -> Result<Self, RangeError> {
        Self::new(T::ZERO, stop, T::ONE)
    }

    /// Creates a `StepRange` from `start` to `stop` with a step of one.
    ///
    /// Equivalent to `StepRange::new(start, stop, T::ONE)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NonTerminating`] if `stop` is below `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::between(3, 6).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// ```
    #[inline]
    pub fn between(start: T, stop: T) -> Result<Self, RangeError> {
        Self::new(start, stop, T::ONE)
    }

    /// Returns the inclusive start of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::new(2, 10, 3).unwrap();
    /// assert_eq!(r.start(), 2);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive stop of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::new(2, 10, 3).unwrap();
    /// assert_eq!(r.stop(), 10);
    /// ```
    #[inline]
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::new(2, 10, 3).unwrap();
    /// assert_eq!(r.step(), 3);
    /// ```
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns `true` if the range produces no values (`start == stop`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// assert!(StepRange::new(5, 5, 1).unwrap().is_empty());
    /// assert!(!StepRange::new(5, 6, 1).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Returns `true` if `value` lies within the span the range walks over.
    ///
    /// For an ascending range this is `start <= value < stop`; for a
    /// descending range it is `stop < value <= start`. This is a span
    /// membership test, not a test of whether `value` is one of the
    /// produced values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let up = StepRange::new(0, 10, 3).unwrap();
    /// assert!(up.contains(0));
    /// assert!(up.contains(4));
    /// assert!(!up.contains(10));
    ///
    /// let down = StepRange::new(10, 0, -1).unwrap();
    /// assert!(down.contains(10));
    /// assert!(!down.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        if self.step > T::ZERO {
            self.start <= value && value < self.stop
        } else {
            self.stop < value && value <= self.start
        }
    }

    /// Creates an iterator over the values of the range.
    ///
    /// Every call starts a fresh, independent cursor at `start`; the range
    /// itself is never mutated by iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// let r = StepRange::new(2, 10, 3).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), r.iter().collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn iter(&self) -> StepRangeIter<T> {
        StepRangeIter {
            current: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}

impl<T> StepRange<T>
where
    T: RangeNumeric + PrimInt,
{
    /// Returns the number of values the range produces.
    ///
    /// This is `ceil((stop - start) / step)`, computed without iterating.
    /// Only available for primitive integer element types; for
    /// floating-point ranges the count depends on accumulated rounding and
    /// must be observed by iterating.
    ///
    /// # Panics
    ///
    /// Panics if the count does not fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::StepRange;
    ///
    /// assert_eq!(StepRange::new(2, 10, 3).unwrap().len(), 3);
    /// assert_eq!(StepRange::new(10, 0, -1).unwrap().len(), 10);
    /// assert_eq!(StepRange::new(5, 5, 1).unwrap().len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        // No wrap possible: construction already verified the subtraction.
        let difference = self.stop - self.start;
        if difference == T::ZERO {
            return 0;
        }
        let count = if self.step > T::ZERO {
            (difference - T::ONE) / self.step + T::ONE
        } else {
            (difference + T::ONE) / self.step + T::ONE
        };
        count
            .to_usize()
            .expect("StepRange: length exceeds usize::MAX")
    }
}

impl<T> Default for StepRange<T>
where
    T: RangeNumeric,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::ZERO,
            stop: T::ZERO,
            step: T::ONE,
        }
    }
}

impl<T> std::fmt::Debug for StepRange<T>
where
    T: RangeNumeric + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRange")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for StepRange<T>
where
    T: RangeNumeric + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.start, self.stop, self.step)
    }
}

impl<T> IntoIterator for StepRange<T>
where
    T: RangeNumeric,
{
    type Item = T;
    type IntoIter = StepRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &StepRange<T>
where
    T: RangeNumeric,
{
    type Item = T;
    type IntoIter = StepRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
