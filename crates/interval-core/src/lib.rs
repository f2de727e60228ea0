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

//! # Interval Core Data Types
//!
//! This crate provides the fundamental span types used throughout the
//! workspace and the capability contract they all share.
//!
//! ## Key Concepts
//!
//! - **Capability**:
//!   - [`interval::Interval`]: the contract any bounded span must satisfy —
//!     bound accessors, ordering predicates, and the three span-transforming
//!     operations (`intersect`, `encompass`, `punch`).
//!
//! - **Time**:
//!   - [`timestamp::Timestamp`]: a specific point in time.
//!   - [`period::Period`]: a half-open portion of time `[start, end)`.
//!
//! - **Numbers**:
//!   - [`range::Range`]: a half-open span `[lower, upper)` over any numeric
//!     type, integer or floating point.
//!
//! New span kinds (a version range, say) are added by implementing the
//! capability trait; the set container in the sibling crate works with any
//! of them unchanged.

use num_traits::Zero;

pub mod interval;
pub mod period;
pub mod range;
pub mod timestamp;

/// Bound type accepted by [`range::Range`]: any copyable, partially ordered
/// value with a distinguished zero. All primitive integers and floats qualify.
pub trait Number: Copy + PartialOrd + Zero {}
impl<T> Number for T where T: Copy + PartialOrd + Zero {}
