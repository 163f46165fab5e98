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

//! # Range Numeric Trait
//!
//! Unified numeric bounds for range element types. `RangeNumeric` specifies
//! the capabilities a type needs to drive an arithmetic progression:
//! ordering comparison, addition and subtraction, representations of zero
//! and one, and by-value checked subtraction for the overflow-aware
//! direction check performed at construction time.
//!
//! ## Motivation
//!
//! Ranges should remain generic over both integer and floating-point types
//! while retaining predictable arithmetic semantics. This trait collects
//! the necessary bounds into a single alias, simplifying generic signatures
//! and keeping the construction-time validation honest on fixed-width
//! integers (where `stop - start` can wrap) and on floats (where it
//! cannot).
//!
//! ## Highlights
//!
//! - Requires `Copy + PartialOrd` plus by-value `Add`/`Sub`.
//! - Includes the `Zero` and `One` constant traits; `One` supplies the
//!   default step of the convenience constructors.
//! - Adds `CheckedSubVal` so the direction check can reject ranges whose
//!   difference is not representable, and `CheckedAddVal` so the cursor
//!   can detect when advancing would cross the type boundary.
//! - Blanket-implemented: satisfied by all primitive integers and floats.

use crate::num::{
    constants::{One, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal},
};
use std::ops::{Add, Sub};

pub mod constants;
pub mod ops;

/// A trait alias for numeric types that can be used as range elements.
/// This covers all primitive integer and floating-point types: anything
/// that is totally ordered under normal use, supports addition and
/// subtraction by value, and has zero and one constants.
pub trait RangeNumeric:
    Copy
    + PartialOrd
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Zero
    + One
    + CheckedAddVal
    + CheckedSubVal
{
}

impl<T> RangeNumeric for T where
    T: Copy
        + PartialOrd
        + Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Zero
        + One
        + CheckedAddVal
        + CheckedSubVal
{
}
