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

//! Collections that can answer "is this value one of yours?".
//!
//! Bulk range queries such as [`BoundedRange::is_subset_of`] only need a
//! membership test from the other side, so they accept any `Membership<T>`
//! rather than one concrete collection type.

use crate::{
    math::range::BoundedRange,
    num::{order::NaturalOrd, step::Steppable},
};
use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// A collection that supports membership tests.
pub trait Membership<T> {
    /// Returns `true` if `value` belongs to the collection.
    fn has_member(&self, value: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T, S> Membership<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T> Membership<T> for BoundedRange<T>
where
    T: NaturalOrd + Steppable + Clone,
{
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}
