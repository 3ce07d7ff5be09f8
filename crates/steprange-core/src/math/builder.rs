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
    math::range::{BoundedRange, Comparator, StepFn},
    num::{order::NaturalOrd, step::Steppable},
};
use std::cmp::Ordering;

/// A builder for [`BoundedRange`] values.
///
/// The comparator and the step function are independent: either, both or
/// neither may be installed. Order validation is off by default, matching
/// [`BoundedRange::new`].
///
/// # Examples
///
/// ```rust
/// # use steprange_core::math::range::BoundedRange;
/// let range = BoundedRange::builder(0u32, 20)
///     .step(|x| x + 5)
///     .validate_order(true)
///     .build()
///     .unwrap();
/// assert_eq!(range.to_vec(), vec![0, 5, 10, 15, 20]);
/// ```
pub struct RangeBuilder<T> {
    start: T,
    end: T,
    ordering: Option<Comparator<T>>,
    step: Option<StepFn<T>>,
    validate_order: bool,
}

impl<T> RangeBuilder<T>
where
    T: NaturalOrd + Steppable + Clone,
{
    /// Creates a builder for a range over `[start, end]`.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            ordering: None,
            step: None,
            validate_order: false,
        }
    }

    /// Orders the traversal with `comparator` instead of the natural order.
    #[inline]
    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.ordering = Some(Box::new(comparator));
        self
    }

    /// Steps forward with `step` instead of the built-in successor.
    #[inline]
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.step = Some(Box::new(step));
        self
    }

    /// Rejects `start > end` (natural order) when building.
    #[inline]
    pub fn validate_order(mut self, validate: bool) -> Self {
        self.validate_order = validate;
        self
    }

    /// Builds the range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidArgument`] if order validation is enabled
    /// and `start > end`.
    pub fn build(self) -> RangeResult<BoundedRange<T>> {
        if self.validate_order && self.start.natural_cmp(&self.end) == Ordering::Greater {
            log::debug!("rejected range construction with start past end");
            return Err(RangeError::InvalidArgument(
                "start must be less than or equal to end",
            ));
        }
        Ok(BoundedRange::from_parts(
            self.start,
            self.end,
            self.ordering,
            self.step,
        ))
    }
}

impl<T> std::fmt::Debug for RangeBuilder<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeBuilder")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("custom_ordering", &self.ordering.is_some())
            .field("custom_step", &self.step.is_some())
            .field("validate_order", &self.validate_order)
            .finish()
    }
}
