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

use crate::{
    error::{RangeError, RangeResult},
    math::range::BoundedRange,
    num::{order::NaturalOrd, step::Steppable},
};
use std::{cmp::Ordering, iter::FusedIterator};

/// A forward-only iterator over the elements of a [`BoundedRange`].
///
/// The iterator starts at the range's `start` and advances with the same
/// successor the range uses everywhere else: the custom step function if one
/// is installed, the built-in rule otherwise. It stops once the current value
/// compares greater than `end` under the range's ordering, or when a value
/// has no successor. `end` is read from the range on every step.
///
/// The number of yielded elements equals [`BoundedRange::size`] under the
/// natural order. With a comparator that treats distinct values as equal to
/// `end`, the iterator keeps going past the values `size` counts.
///
/// # Examples
///
/// ```rust
/// # use steprange_core::math::range::BoundedRange;
/// let range = BoundedRange::new(1, 3);
/// let mut iter = range.iter();
/// assert!(iter.has_next());
/// assert_eq!(iter.try_next(), Ok(1));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub struct Iter<'a, T> {
    range: &'a BoundedRange<T>,
    current: Option<T>,
}

impl<'a, T> Iter<'a, T>
where
    T: NaturalOrd + Steppable + Clone,
{
    #[inline]
    pub(crate) fn new(range: &'a BoundedRange<T>) -> Self {
        Self {
            range,
            current: Some(range.start().clone()),
        }
    }

    /// Returns `true` if another element is available.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| self.range.compare(c, self.range.end()) != Ordering::Greater)
    }

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EndOfSequence`] once the iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::{math::range::BoundedRange, error::RangeError};
    /// let range = BoundedRange::new(5, 1);
    /// let mut iter = range.iter();
    /// assert!(!iter.has_next());
    /// assert_eq!(iter.try_next(), Err(RangeError::EndOfSequence));
    /// ```
    #[inline]
    pub fn try_next(&mut self) -> RangeResult<T> {
        self.next().ok_or(RangeError::EndOfSequence)
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: NaturalOrd + Steppable + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            self.current = None;
            return None;
        }
        let value = self.current.take()?;
        self.current = self.range.step_forward(&value);
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.has_next() { (1, None) } else { (0, Some(0)) }
    }
}

impl<T> FusedIterator for Iter<'_, T> where T: NaturalOrd + Steppable + Clone {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterator_yields_ascending_successors() {
        let r = BoundedRange::new(1, 5);
        let collected: Vec<i32> = r.iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iterator_single_element() {
        let r = BoundedRange::new(1, 1);
        let mut iter = r.iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterator_reversed_bounds() {
        let r = BoundedRange::new(5, 1);
        let mut iter = r.iter();
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(RangeError::EndOfSequence));
    }

    #[test]
    fn test_iterator_honors_custom_step() {
        let r = BoundedRange::with_step(1u64, 100, |x: &u64| x * 3);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 3, 9, 27, 81]);
    }

    #[test]
    fn test_iterator_honors_comparator() {
        // Pairs compare equal, so 11 still counts as "not past" 10
        let r = BoundedRange::with_comparator(0, 10, |a: &i32, b: &i32| (a / 2).cmp(&(b / 2)));
        assert_eq!(r.iter().collect::<Vec<_>>(), (0..=11).collect::<Vec<_>>());
        // size stops at the first value equal to the end
        assert_eq!(r.size(), 11);
    }

    #[test]
    fn test_iterator_stops_at_type_maximum() {
        let r = BoundedRange::new(253u8, 255);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![253, 254, 255]);
    }

    #[test]
    fn test_fused_iterator() {
        let r = BoundedRange::new(0, 0);
        let mut iter = r.iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.try_next(), Err(RangeError::EndOfSequence));

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_size_hint() {
        let r = BoundedRange::new(0, 3);
        let mut iter = r.iter();
        assert_eq!(iter.size_hint(), (1, None));
        iter.by_ref().for_each(drop);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iterator_matches_size() {
        for (a, b) in [(0, 0), (0, 9), (-4, 4), (3, 1)] {
            let r = BoundedRange::new(a, b);
            assert_eq!(r.iter().count(), r.size());
        }
    }
}
