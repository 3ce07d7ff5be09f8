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

use std::cmp::Ordering;

/// A total order that ranges use when no comparator is configured.
///
/// This plays the role `Ord` plays for most collections, but it can also be
/// implemented for floating point types, which are only `PartialOrd` in the
/// standard library.
///
/// # Examples
///
/// ```rust
/// # use steprange_core::num::order::NaturalOrd;
/// use std::cmp::Ordering;
///
/// assert_eq!(1i32.natural_cmp(&2), Ordering::Less);
/// assert_eq!((-0.0f64).natural_cmp(&0.0), Ordering::Less);
/// assert!('a'.natural_eq(&'a'));
/// ```
pub trait NaturalOrd {
    /// Compares `self` with `other` under the natural order of the type.
    fn natural_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` and `other` are equal under the natural order.
    #[inline]
    fn natural_eq(&self, other: &Self) -> bool {
        self.natural_cmp(other) == Ordering::Equal
    }
}

macro_rules! impl_natural_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrd for $t {
                #[inline(always)]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_natural_ord_via_total_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrd for $t {
                #[inline(always)]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_natural_ord_via_ord!(i8, i16, i32, i64, i128, isize);
impl_natural_ord_via_ord!(u8, u16, u32, u64, u128, usize);
impl_natural_ord_via_ord!(char);
impl_natural_ord_via_total_cmp!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_follow_ord() {
        assert_eq!(3i32.natural_cmp(&4), Ordering::Less);
        assert_eq!(4u64.natural_cmp(&4), Ordering::Equal);
        assert_eq!(i128::MAX.natural_cmp(&i128::MIN), Ordering::Greater);
    }

    #[test]
    fn test_char_follows_code_points() {
        assert_eq!('a'.natural_cmp(&'b'), Ordering::Less);
        assert!('z'.natural_eq(&'z'));
    }

    #[test]
    fn test_floats_are_totally_ordered() {
        assert_eq!(0.5f32.natural_cmp(&1.5), Ordering::Less);
        assert_eq!(f64::NAN.natural_cmp(&f64::NAN), Ordering::Equal);
        assert_eq!(f64::INFINITY.natural_cmp(&f64::NAN), Ordering::Less);
        // total_cmp separates the two zeros
        assert!(!(-0.0f32).natural_eq(&0.0));
    }
}
