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

//! IntervalSet: sorted set of disjoint, non-touching spans.
//!
//! Invariants (always held between public calls):
//!    - elements are sorted: each one is strictly before its successor
//!    - no two elements overlap or touch; insertion coalesces them
//!
//! Complexity:
//!    - add/sub: `O(log n)` to locate the affected run, `O(n)` to splice
//!    - overlaps, complement, iter_between: `O(log n + k)`
//!    - difference, equality: `O(n + m)`

use core::iter::FusedIterator;
use core::ops::Deref;
use interval_core::interval::Interval;

/// An ordered set of non-overlapping intervals.
///
/// Inserting coalesces any spans that overlap or touch the new one
/// ([`add`](IntervalSet::add)); removing splits partially covered spans
/// ([`sub`](IntervalSet::sub)). The order in which spans are inserted never
/// affects the resulting set, only the coverage does.
///
/// ## Invariants
///
/// 1. **Sorted**: elements are in ascending order of their minimum bound.
/// 2. **Disjoint**: no two elements overlap, and none touch — adjacent
///    spans are merged on insertion (`[1, 3)` then `[3, 5)` becomes
///    `[1, 5)`).
///
/// ## Thread safety
///
/// The set has no interior synchronization. `add` and `sub` mutate the
/// backing storage in place and must not run concurrently with any other
/// access to the same set; read-only operations may run concurrently with
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet<I> {
    intervals: Vec<I>,
}

impl<I: Interval> IntervalSet<I> {
    /// Creates a new, empty set.
    ///
    /// The underlying vector does not allocate until the first insertion.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new, empty set with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of disjoint spans in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Reports whether the set contains no spans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the spans as a slice, sorted and disjoint.
    #[inline]
    pub fn as_slice(&self) -> &[I] {
        &self.intervals
    }

    /// Consumes the set and returns the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<I> {
        self.intervals
    }

    /// Reports whether both sets hold pairwise equal spans.
    ///
    /// Because both sets are sorted and coalesced, length plus pairwise
    /// bound equality fully determines set equality.
    pub fn equal(&self, other: &Self) -> bool {
        self.intervals.len() == other.intervals.len()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(a, b)| a.equal(b))
    }

    /// Finds the index of the first span that is not strictly before `q`,
    /// i.e. the first one that could overlap `q` or lie beyond it.
    ///
    /// `before` is monotonic over the sorted array, which is what makes the
    /// binary search valid; everything at smaller indices is unaffected by
    /// any operation involving `q`.
    #[inline]
    fn find_first_not_before(&self, q: &I) -> usize {
        self.intervals.partition_point(|v| v.before(q))
    }

    /// Returns the half-open index range `[lo, hi)` of the spans that
    /// overlap `q` (touching included).
    ///
    /// `lo` is the first span not strictly before `q`; `hi` is the first
    /// span strictly after it.
    #[inline]
    fn range_of_overlap(&self, q: &I) -> (usize, usize) {
        let lo = self.find_first_not_before(q);
        let hi = self.intervals.partition_point(|v| !v.after(q));
        (lo, hi)
    }

    /// Inserts the given spans, merging each with every existing span it
    /// overlaps or touches, and returns the set for chaining.
    ///
    /// The order of the arguments does not affect the final set.
    pub fn add<It>(&mut self, intervals: It) -> &mut Self
    where
        It: IntoIterator<Item = I>,
    {
        for q in intervals {
            self.add_one(q);
        }
        self
    }

    fn add_one(&mut self, q: I) {
        if self.intervals.is_empty() {
            self.intervals.push(q);
            return;
        }

        let lo = self.find_first_not_before(&q);

        // Every existing span is strictly before q; it goes at the end.
        if lo == self.intervals.len() {
            self.intervals.push(q);
            return;
        }

        // Grow q over each overlapping span until one lies strictly after
        // the merged run. Sorted order guarantees everything past that span
        // is also strictly after, so it is kept verbatim.
        let mut tail: Vec<I> = Vec::with_capacity(self.intervals.len() - lo + 1);
        let mut merged = q;
        let mut scan = lo;
        loop {
            if scan == self.intervals.len() {
                tail.push(merged);
                break;
            }
            let cur = self.intervals[scan];
            if cur.after(&merged) {
                tail.push(merged);
                tail.extend_from_slice(&self.intervals[scan..]);
                break;
            }
            merged = merged.encompass(&cur);
            assert!(
                !merged.is_zero(),
                "encompassing two overlapping spans must not yield the empty sentinel"
            );
            scan += 1;
        }

        self.intervals.truncate(lo);
        self.intervals.extend(tail);
        debug_assert!(self.invariants_held());
    }

    /// Removes the given spans, splitting any existing span each one
    /// partially covers, and returns the set for chaining.
    ///
    /// Subtracting a span that overlaps nothing is a no-op.
    pub fn sub<It>(&mut self, intervals: It) -> &mut Self
    where
        It: IntoIterator<Item = I>,
    {
        for q in intervals {
            self.sub_one(q);
        }
        self
    }

    fn sub_one(&mut self, q: I) {
        if self.intervals.is_empty() {
            return;
        }

        let lo = self.find_first_not_before(&q);

        // Every existing span is strictly before q; nothing to remove.
        if lo == self.intervals.len() {
            return;
        }

        // Punch q out of each overlapping span; a span can contribute zero,
        // one, or two remainders. The first span strictly after q ends the
        // scan, everything from it onwards is kept verbatim.
        let mut tail: Vec<I> = Vec::with_capacity(self.intervals.len() - lo + 1);
        for scan in lo..self.intervals.len() {
            let cur = self.intervals[scan];
            if cur.after(&q) {
                tail.extend_from_slice(&self.intervals[scan..]);
                break;
            }
            let (left, right) = cur.punch(&q);
            if !left.is_zero() {
                tail.push(left);
            }
            if !right.is_zero() {
                tail.push(right);
            }
        }

        self.intervals.truncate(lo);
        self.intervals.extend(tail);
        debug_assert!(self.invariants_held());
    }

    /// Returns a new set holding the portions of the set's spans that
    /// overlap `q`.
    pub fn overlaps(&self, q: &I) -> Self {
        let (lo, hi) = self.range_of_overlap(q);

        let mut out = Self::with_capacity(hi - lo);
        for v in &self.intervals[lo..hi] {
            let shared = v.intersect(q);
            if !shared.is_zero() {
                out.add([shared]);
            }
        }
        out
    }

    /// Reports whether `other` is a subset of this set: every span of
    /// `other` must lie entirely within some span of this set.
    ///
    /// An empty `other` is vacuously a subset of anything.
    pub fn is_subset(&self, other: &Self) -> bool {
        other.intervals.iter().all(|q| {
            let (lo, hi) = self.range_of_overlap(q);
            self.intervals[lo..hi].iter().any(|v| v.contains(q))
        })
    }

    /// Returns the portion of `q` not covered by this set.
    pub fn complement(&self, q: &I) -> Self {
        let (lo, hi) = self.range_of_overlap(q);

        let mut out = Self::new();
        out.add([*q]).sub(self.intervals[lo..hi].iter().copied());
        out
    }

    /// Returns the portion of this set not covered by `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.len());
        out.add(self.intervals.iter().copied())
            .sub(other.intervals.iter().copied());
        out
    }

    /// Returns a lazy iterator over the spans overlapping `bound`, each
    /// clamped to its shared region with `bound`.
    ///
    /// Spans are yielded in ascending order; stopping early is simply a
    /// matter of not pulling the next element.
    pub fn iter_between(&self, bound: I) -> IterBetween<'_, I> {
        let (lo, hi) = self.range_of_overlap(&bound);
        IterBetween {
            inner: self.intervals[lo..hi].iter(),
            bound,
        }
    }

    /// Debug-only invariant check: each span strictly before its successor
    /// (sorted, disjoint, non-touching). Compiles away in release builds.
    #[inline]
    #[cfg(debug_assertions)]
    fn invariants_held(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].before(&w[1]))
    }

    #[inline]
    #[cfg(not(debug_assertions))]
    fn invariants_held(&self) -> bool {
        true
    }
}

/// Collects arbitrary spans into a set; overlapping and touching input is
/// coalesced exactly as by [`IntervalSet::add`].
impl<I: Interval> FromIterator<I> for IntervalSet<I> {
    #[inline]
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<I: Interval> From<Vec<I>> for IntervalSet<I> {
    #[inline]
    fn from(intervals: Vec<I>) -> Self {
        Self::from_iter(intervals)
    }
}

/// Allows an `IntervalSet` to be treated as a slice `&[I]`.
impl<I> Deref for IntervalSet<I> {
    type Target = [I];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.intervals
    }
}

/// Enables iteration via `for span in &my_set`.
impl<'a, I> IntoIterator for &'a IntervalSet<I> {
    type Item = &'a I;
    type IntoIter = core::slice::Iter<'a, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Iterator returned by [`IntervalSet::iter_between`]: spans overlapping a
/// bound, clamped element-wise to it.
#[derive(Debug, Clone)]
pub struct IterBetween<'a, I> {
    inner: core::slice::Iter<'a, I>,
    bound: I,
}

impl<'a, I: Interval> Iterator for IterBetween<'a, I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        for v in self.inner.by_ref() {
            let clamped = v.intersect(&self.bound);
            if !clamped.is_zero() {
                return Some(clamped);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, I: Interval> FusedIterator for IterBetween<'a, I> {}
