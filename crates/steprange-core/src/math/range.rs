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
    math::{builder::RangeBuilder, iter::Iter, membership::Membership},
    num::{order::NaturalOrd, step::Steppable},
};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A boxed total order over range elements.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A boxed successor function over range elements.
pub type StepFn<T> = Box<dyn Fn(&T) -> T + Send + Sync>;

/// A closed interval `[start, end]` over an ordered, steppable element type.
///
/// The range behaves like a set holding `start`, every value reached by
/// repeatedly stepping from `start`, and `end` if the walk lands on it.
/// Stepping uses the custom step function when one is installed and the
/// built-in [`Steppable::successor`] otherwise. Predecessors always use
/// [`Steppable::predecessor`].
///
/// Traversal (`size`, `iter`, `clear`) compares elements with the configured
/// comparator, falling back to [`NaturalOrd`]. Membership and `add` always use
/// the natural order.
///
/// The range cannot represent gaps. Mutation only ever moves one of its two
/// boundaries.
///
/// # Invariants
///
/// Nothing forces `start <= end`. A range whose start lies past its end holds
/// no elements. Use [`BoundedRange::of`] to reject such bounds up front.
///
/// # Examples
///
/// ```rust
/// # use steprange_core::math::range::BoundedRange;
/// let mut range = BoundedRange::of(1, 5).unwrap();
/// assert_eq!(range.size(), 5);
/// assert!(range.contains(&3));
///
/// range.remove(&1).unwrap();
/// assert_eq!(range.to_vec(), vec![2, 3, 4, 5]);
/// ```
pub struct BoundedRange<T> {
    start: T,
    end: T,
    ordering: Option<Comparator<T>>,
    step: Option<StepFn<T>>,
}

impl<T> BoundedRange<T>
where
    T: NaturalOrd + Steppable + Clone,
{
    /// Creates a range with natural ordering and built-in stepping.
    ///
    /// The bounds are not validated: a range with `start > end` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// assert_eq!(BoundedRange::new('a', 'e').size(), 5);
    /// assert_eq!(BoundedRange::new(5, 1).size(), 0);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self::from_parts(start, end, None, None)
    }

    /// Creates a range whose traversal is ordered by `comparator`.
    ///
    /// The comparator drives `size`, iteration and `clear`. Membership tests
    /// keep using the natural order of `T`.
    pub fn with_comparator<F>(start: T, end: T, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_parts(start, end, Some(Box::new(comparator)), None)
    }

    /// Creates a range that steps forward with `step` instead of the
    /// built-in successor. Comparisons use the natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let evens = BoundedRange::with_step(0, 10, |x: &i32| x + 2);
    /// assert_eq!(evens.size(), 6);
    /// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8, 10]);
    /// ```
    pub fn with_step<F>(start: T, end: T, step: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::from_parts(start, end, None, Some(Box::new(step)))
    }

    /// Creates a range after checking that `start <= end` under the natural
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidArgument`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::{math::range::BoundedRange, error::RangeError};
    /// assert!(BoundedRange::of(1, 5).is_ok());
    /// assert!(matches!(BoundedRange::of(5, 1), Err(RangeError::InvalidArgument(_))));
    /// ```
    #[inline]
    pub fn of(start: T, end: T) -> RangeResult<Self> {
        Self::builder(start, end).validate_order(true).build()
    }

    /// Creates a stepped range without checking the order of the bounds.
    #[inline]
    pub fn of_stepped<F>(start: T, end: T, step: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::with_step(start, end, step)
    }

    /// Creates a range from bounds that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidArgument`] if either bound is `None`.
    pub fn from_options(start: Option<T>, end: Option<T>) -> RangeResult<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self::new(start, end)),
            _ => {
                log::debug!("rejected range construction with a missing bound");
                Err(RangeError::InvalidArgument("start and end must be present"))
            }
        }
    }

    /// Starts configuring a range over `[start, end]`.
    #[inline]
    pub fn builder(start: T, end: T) -> RangeBuilder<T> {
        RangeBuilder::new(start, end)
    }

    #[inline]
    pub(crate) fn from_parts(
        start: T,
        end: T,
        ordering: Option<Comparator<T>>,
        step: Option<StepFn<T>>,
    ) -> Self {
        Self {
            start,
            end,
            ordering,
            step,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Returns `true` if a custom step function replaces the built-in successor.
    #[inline]
    pub fn has_custom_step(&self) -> bool {
        self.step.is_some()
    }

    /// Returns `true` if a custom comparator orders the traversal.
    #[inline]
    pub fn has_custom_ordering(&self) -> bool {
        self.ordering.is_some()
    }

    /// Compares two elements with the configured comparator, or the natural
    /// order if there is none.
    #[inline]
    pub(crate) fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.ordering {
            Some(cmp) => cmp(a, b),
            None => a.natural_cmp(b),
        }
    }

    /// Applies the active successor.
    #[inline]
    pub(crate) fn step_forward(&self, value: &T) -> Option<T> {
        match &self.step {
            Some(step) => Some(step(value)),
            None => value.successor(),
        }
    }

    #[inline]
    fn successor_of(&self, value: &T) -> RangeResult<T> {
        self.step_forward(value)
            .ok_or(RangeError::UnsupportedOperation("value has no successor"))
    }

    #[inline]
    fn predecessor_of(value: &T) -> RangeResult<T> {
        value
            .predecessor()
            .ok_or(RangeError::IllegalState("value has no predecessor"))
    }

    /// Returns the number of elements produced by stepping from `start` up to
    /// and including `end`.
    ///
    /// A degenerate range (`start == end`) has size 1. The walk stops early
    /// when a value has no successor. A custom step function that never
    /// reaches `end` makes this loop forever.
    ///
    /// The walk counts values strictly below `end` plus `end` itself, while
    /// [`iter`](Self::iter) yields every value not past `end`. Under the
    /// natural order both agree. A comparator that treats distinct values as
    /// equal to `end` makes the iterator yield more elements than `size`
    /// reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// assert_eq!(BoundedRange::new(-2, 2).size(), 5);
    /// assert_eq!(BoundedRange::new(7, 7).size(), 1);
    /// assert_eq!(BoundedRange::with_step(0, 10, |x: &i32| x + 3).size(), 4);
    /// ```
    pub fn size(&self) -> usize {
        if self.start.natural_eq(&self.end) {
            return 1;
        }

        let mut count = 0;
        let mut current = self.start.clone();
        while self.compare(&current, &self.end) == Ordering::Less {
            count += 1;
            match self.step_forward(&current) {
                Some(next) => current = next,
                None => return count,
            }
        }
        if self.compare(&current, &self.end) == Ordering::Equal {
            count += 1;
        }
        count
    }

    /// Returns `true` if `start == end`.
    ///
    /// A degenerate range therefore reports empty even though its
    /// [`size`](Self::size) is 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.natural_eq(&self.end)
    }

    /// Returns `true` if `start <= value <= end` under the natural order.
    ///
    /// The configured comparator and step function are not consulted, so a
    /// stepped range contains values its iterator never yields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let range = BoundedRange::new(0, 10);
    /// assert!(range.contains(&0));
    /// assert!(range.contains(&10));
    /// assert!(!range.contains(&11));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        value.natural_cmp(&self.start) != Ordering::Less
            && value.natural_cmp(&self.end) != Ordering::Greater
    }

    /// Creates a forward iterator over the elements of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let range = BoundedRange::new('x', 'z');
    /// assert_eq!(range.iter().collect::<String>(), "xyz");
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Collects the elements into a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Copies the elements into `dest`, reusing it when it is large enough.
    ///
    /// If `dest` holds fewer slots than the range has elements, a new vector
    /// of exactly [`size`](Self::size) filled slots is returned. Otherwise the
    /// elements are written to the front of `dest` and, if slots remain, the
    /// one directly after the last element is set to `None`. Later slots are
    /// left as they were.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let range = BoundedRange::new(1, 2);
    /// let out = range.to_array_in(vec![Some(9); 4]);
    /// assert_eq!(out, vec![Some(1), Some(2), None, Some(9)]);
    ///
    /// let out = range.to_array_in(Vec::new());
    /// assert_eq!(out, vec![Some(1), Some(2)]);
    /// ```
    pub fn to_array_in(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>> {
        let size = self.size();
        if dest.len() < size {
            return self.iter().take(size).map(Some).collect();
        }

        let mut written = 0;
        for (slot, value) in dest.iter_mut().zip(self.iter().take(size)) {
            *slot = Some(value);
            written += 1;
        }
        if let Some(slot) = dest.get_mut(written) {
            *slot = None;
        }
        dest
    }

    /// Grows the range by one step if `value` lies within it.
    ///
    /// Returns `Ok(false)` and leaves the range untouched when `value` is
    /// outside `[start, end]`. A boundary value leaves the range as it is.
    /// Any interior value moves `end` to its successor: the range cannot
    /// hold gaps, so "adding" an element it already covers extends it at
    /// the right edge instead.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UnsupportedOperation`] if `end` has no successor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let mut range = BoundedRange::new(1, 5);
    /// assert_eq!(range.add(3), Ok(true));
    /// assert_eq!(*range.end(), 6);
    /// assert_eq!(range.add(42), Ok(false));
    /// ```
    pub fn add(&mut self, value: T) -> RangeResult<bool> {
        if !self.contains(&value) {
            return Ok(false);
        }

        if value.natural_eq(&self.start) {
            self.start = value;
        } else if value.natural_eq(&self.end) {
            self.end = value;
        } else {
            self.end = self.successor_of(&self.end).inspect_err(|e| {
                log::debug!("cannot extend range end: {e}");
            })?;
            log::trace!("range end advanced by one step");
        }
        Ok(true)
    }

    /// Removes a boundary element.
    ///
    /// Removing `start` moves it to its successor, removing `end` moves it to
    /// its predecessor. For any other value the predecessor is consulted:
    /// if there is none, nothing happens and `Ok(false)` is returned. If the
    /// value is its own predecessor (large floats, where stepping back rounds
    /// to the same value), it counts as sitting on the edge and `end` shrinks
    /// to the predecessor of that predecessor.
    ///
    /// # Errors
    ///
    /// - [`RangeError::UnsupportedOperation`] if `start` has no successor.
    /// - [`RangeError::IllegalState`] if a needed predecessor is missing, or
    ///   `value` is a genuine interior element. The range cannot represent
    ///   the gap that removing it would leave.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::{math::range::BoundedRange, error::RangeError};
    /// let mut range = BoundedRange::new(1, 5);
    /// assert_eq!(range.remove(&5), Ok(true));
    /// assert_eq!(range.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(matches!(range.remove(&2), Err(RangeError::IllegalState(_))));
    /// ```
    pub fn remove(&mut self, value: &T) -> RangeResult<bool> {
        if value.natural_eq(&self.start) {
            self.start = self.successor_of(&self.start)?;
            log::trace!("range start advanced by one step");
            return Ok(true);
        }

        if value.natural_eq(&self.end) {
            self.end = Self::predecessor_of(&self.end)?;
            log::trace!("range end retreated by one step");
            return Ok(true);
        }

        let Some(previous) = value.predecessor() else {
            return Ok(false);
        };

        if value.natural_eq(&previous) {
            self.end = Self::predecessor_of(&previous)?;
            log::trace!("range end collapsed onto a degenerate predecessor");
            return Ok(true);
        }

        log::debug!("refused to remove an interior range element");
        Err(RangeError::IllegalState(
            "only boundary elements can be removed",
        ))
    }

    /// Removes every element by advancing `start` past `end`.
    ///
    /// Afterwards [`size`](Self::size) is 0. If a reachable element has no
    /// successor, `end` is moved before it instead: to its predecessor, or,
    /// when stepping back does not move it either, the two boundaries are
    /// swapped. A range that already lies past its end is left untouched.
    ///
    /// The walk ends once `start` compares greater than `end` under the
    /// configured ordering. A comparator that never reports `Greater`, like a
    /// custom step that never passes `end`, keeps it going until the element
    /// type runs out of successors.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IllegalState`] if the last element can be
    /// stepped neither forward nor backward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let mut range = BoundedRange::new(250u8, 255);
    /// range.clear().unwrap();
    /// assert_eq!(range.size(), 0);
    /// ```
    pub fn clear(&mut self) -> RangeResult<()> {
        while self.compare(&self.start, &self.end) != Ordering::Greater {
            match self.step_forward(&self.start) {
                Some(next) => self.start = next,
                None => {
                    let previous = Self::predecessor_of(&self.start)?;
                    if self.compare(&previous, &self.start) == Ordering::Less {
                        self.end = previous;
                    } else if self.compare(&self.start, &self.end) == Ordering::Less {
                        std::mem::swap(&mut self.start, &mut self.end);
                    } else {
                        return Err(RangeError::IllegalState(
                            "last element cannot be stepped over",
                        ));
                    }
                    break;
                }
            }
        }
        log::trace!("range cleared");
        Ok(())
    }

    /// Returns `true` if every value satisfies [`contains`](Self::contains).
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values.into_iter().all(|v| self.contains(v.borrow()))
    }

    /// Calls [`add`](Self::add) for every value and returns how many were
    /// inside the range.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by `add`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let mut range = BoundedRange::new(1, 5);
    /// assert_eq!(range.add_all([0, 1, 3, 9]), Ok(2));
    /// assert_eq!(*range.end(), 6);
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> RangeResult<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = 0;
        for value in values {
            if self.add(value)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns `true` if every element of the range is a member of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange_core::math::range::BoundedRange;
    /// let range = BoundedRange::new(2, 4);
    /// assert!(range.is_subset_of(&[1, 2, 3, 4, 5][..]));
    /// assert!(!range.is_subset_of(&vec![2, 4]));
    /// ```
    pub fn is_subset_of<C>(&self, other: &C) -> bool
    where
        C: Membership<T> + ?Sized,
    {
        self.iter().filter(|v| other.has_member(v)).count() == self.size()
    }

    /// Returns `true` if no element of the range is a member of `other`.
    pub fn is_disjoint_from<C>(&self, other: &C) -> bool
    where
        C: Membership<T> + ?Sized,
    {
        !self.iter().any(|v| other.has_member(&v))
    }

    /// Set-shaped name for [`is_subset_of`](Self::is_subset_of).
    ///
    /// Nothing is retained or removed; the range is only queried.
    #[deprecated(note = "this is a read-only query, use `is_subset_of`")]
    pub fn retain_all<C>(&self, other: &C) -> bool
    where
        C: Membership<T> + ?Sized,
    {
        self.is_subset_of(other)
    }

    /// Set-shaped name for [`is_disjoint_from`](Self::is_disjoint_from).
    ///
    /// Nothing is removed; the range is only queried.
    #[deprecated(note = "this is a read-only query, use `is_disjoint_from`")]
    pub fn remove_all<C>(&self, other: &C) -> bool
    where
        C: Membership<T> + ?Sized,
    {
        self.is_disjoint_from(other)
    }
}

impl<T> std::fmt::Debug for BoundedRange<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("custom_ordering", &self.ordering.is_some())
            .field("custom_step", &self.step.is_some())
            .finish()
    }
}

impl<T> std::fmt::Display for BoundedRange<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> RangeBounds<T> for BoundedRange<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<'a, T> IntoIterator for &'a BoundedRange<T>
where
    T: NaturalOrd + Steppable + Clone,
{
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<RangeInclusive<T>> for BoundedRange<T>
where
    T: NaturalOrd + Steppable + Clone,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}
