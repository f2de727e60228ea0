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

//! Set algebra across several interval sets, built on the instance
//! operations of [`IntervalSet`].

use crate::set::IntervalSet;
use interval_core::interval::Interval;

/// Returns a new set covering everything at least one of the given sets
/// covers.
///
/// Correctness follows directly from [`IntervalSet::add`]'s merge
/// semantics; the order of the inputs never changes the result.
pub fn union<'a, I, S>(sets: S) -> IntervalSet<I>
where
    I: Interval + 'a,
    S: IntoIterator<Item = &'a IntervalSet<I>>,
{
    let mut out = IntervalSet::new();
    for set in sets {
        out.add(set.iter().copied());
    }
    out
}

/// Returns a new set covering exactly the regions present in *every* one of
/// the given sets.
///
/// Each span of each set but the last is narrowed down by chaining
/// [`IntervalSet::overlaps`] across all the other sets; whatever survives
/// the whole chain is common to every input. Fewer than two sets, or sets
/// without any common region, yield the empty set.
pub fn intersection<'a, I, S>(sets: S) -> IntervalSet<I>
where
    I: Interval + 'a,
    S: IntoIterator<Item = &'a IntervalSet<I>>,
{
    let sets: Vec<&IntervalSet<I>> = sets.into_iter().collect();

    let mut out = IntervalSet::new();
    for (i, set) in sets.iter().enumerate() {
        // The last set's spans have already been compared against every
        // other set by the time we reach it.
        if i == sets.len() - 1 {
            continue;
        }

        for span in set.iter() {
            let mut common: Option<IntervalSet<I>> = None;
            for (j, other) in sets.iter().enumerate() {
                if j == i {
                    continue;
                }

                common = Some(match common {
                    None => other.overlaps(span),
                    Some(surviving) => {
                        let narrowed: Vec<IntervalSet<I>> = surviving
                            .iter()
                            .map(|piece| other.overlaps(piece))
                            .collect();
                        union(narrowed.iter())
                    }
                });
            }

            if let Some(common) = common {
                if !common.is_empty() {
                    out.add(common.iter().copied());
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use interval_core::range::Range;

    type SetR = IntervalSet<Range<i64>>;

    #[inline]
    fn rg(a: i64, b: i64) -> Range<i64> {
        Range::new(a, b)
    }

    fn set_of(spans: &[Range<i64>]) -> SetR {
        let mut s = SetR::new();
        s.add(spans.iter().copied());
        s
    }

    #[test]
    fn union_of_a_single_set_is_that_set() {
        let a = set_of(&[rg(1, 3), rg(5, 7)]);
        assert!(union([&a]).equal(&a));
    }

    #[test]
    fn union_merges_across_sets() {
        let a = set_of(&[rg(1, 3), rg(7, 9)]);
        let b = set_of(&[rg(2, 5), rg(9, 12)]);

        let u = union([&a, &b]);
        assert_eq!(u.as_slice(), &[rg(1, 5), rg(7, 12)]);
    }

    #[test]
    fn union_is_commutative_and_associative() {
        let a = set_of(&[rg(1, 4)]);
        let b = set_of(&[rg(3, 6), rg(10, 12)]);
        let c = set_of(&[rg(6, 8)]);

        let abc = union([&a, &b, &c]);
        let cba = union([&c, &b, &a]);
        assert!(abc.equal(&cba));

        let ab = union([&a, &b]);
        let ab_then_c = union([&ab, &c]);
        assert!(abc.equal(&ab_then_c));
        assert_eq!(abc.as_slice(), &[rg(1, 8), rg(10, 12)]);
    }

    #[test]
    fn union_of_no_sets_is_empty() {
        let u: SetR = union([]);
        assert!(u.is_empty());
    }

    #[test]
    fn intersection_of_identical_sets_is_the_set() {
        let a = set_of(&[rg(1, 5), rg(8, 10)]);
        let same = a.clone();
        assert!(intersection([&a, &same]).equal(&a));
    }

    #[test]
    fn intersection_keeps_only_shared_regions() {
        let a = set_of(&[rg(1, 5), rg(10, 15)]);
        let b = set_of(&[rg(3, 12)]);

        let i = intersection([&a, &b]);
        assert_eq!(i.as_slice(), &[rg(3, 5), rg(10, 12)]);
    }

    #[test]
    fn intersection_is_commutative() {
        let a = set_of(&[rg(0, 10), rg(20, 30)]);
        let b = set_of(&[rg(5, 25)]);

        assert!(intersection([&a, &b]).equal(&intersection([&b, &a])));
    }

    #[test]
    fn intersection_narrows_across_three_sets() {
        let a = set_of(&[rg(0, 10)]);
        let b = set_of(&[rg(5, 15)]);
        let c = set_of(&[rg(8, 20)]);

        let i = intersection([&a, &b, &c]);
        assert_eq!(i.as_slice(), &[rg(8, 10)]);
    }

    #[test]
    fn intersection_of_disjoint_sets_is_empty() {
        let a = set_of(&[rg(1, 3)]);
        let b = set_of(&[rg(5, 7)]);
        assert!(intersection([&a, &b]).is_empty());

        // touching spans share no region either
        let c = set_of(&[rg(3, 5)]);
        assert!(intersection([&a, &c]).is_empty());
    }
}
