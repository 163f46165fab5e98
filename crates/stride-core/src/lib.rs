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

//! # Stride Core
//!
//! Generic, lazily evaluated numeric range primitives. This crate provides
//! a single reusable abstraction: an immutable `(start, stop, step)` triple
//! that produces an ascending or descending arithmetic progression without
//! materializing it, the way a native numeric loop would.
//!
//! ## Modules
//!
//! - `math`: The `StepRange` half-open stepped range `[start, stop)` with
//!   eager validation, direction-aware termination, fused forward-only
//!   iteration (`Iterator`, `FusedIterator`, `IntoIterator`), span
//!   membership queries, and an exact element count for integer types.
//! - `num`: Numeric building blocks backing the range: associated constant
//!   traits (`Zero`, `One`), a by-value checked subtraction trait covering
//!   both integer and floating-point types, and the `RangeNumeric` trait
//!   alias bundling everything a range element type must support.
//!
//! ## Purpose
//!
//! These primitives let callers iterate arithmetic progressions of any
//! primitive numeric type through one validated, restartable value, with
//! construction-time rejection of inputs that could never terminate
//! (including fixed-width integer wraparound in the direction check).
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
