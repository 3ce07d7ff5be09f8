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

use num_traits::PrimInt;

/// The fixed distance between neighbouring `f32` elements of a range.
pub const F32_STEP: f32 = 0.1;

/// The fixed distance between neighbouring `f64` elements of a range.
pub const F64_STEP: f64 = 0.1;

/// A type with built-in discrete successor and predecessor rules.
///
/// Ranges use these rules whenever no custom step function is installed,
/// and always for predecessors. `None` means the value has no neighbour in
/// that direction: integer overflow, the ends of the `char` space, a
/// non-finite float, a float too large for the fixed step to move it
/// forward, or a user type without a rule.
///
/// A float predecessor may round back to the value itself. Ranges treat
/// such a value as sitting on the edge when removing it.
///
/// # Examples
///
/// ```rust
/// # use steprange_core::num::step::Steppable;
/// assert_eq!(41u8.successor(), Some(42));
/// assert_eq!(u8::MAX.successor(), None);
/// assert_eq!('b'.predecessor(), Some('a'));
/// assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
/// ```
pub trait Steppable: Sized {
    /// Returns the next value, or `None` if there is none.
    fn successor(&self) -> Option<Self>;

    /// Returns the previous value, or `None` if there is none.
    fn predecessor(&self) -> Option<Self>;
}

#[inline(always)]
fn checked_successor<T: PrimInt>(value: T) -> Option<T> {
    value.checked_add(&T::one())
}

#[inline(always)]
fn checked_predecessor<T: PrimInt>(value: T) -> Option<T> {
    value.checked_sub(&T::one())
}

macro_rules! impl_steppable_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Steppable for $t {
                #[inline(always)]
                fn successor(&self) -> Option<Self> {
                    checked_successor(*self)
                }

                #[inline(always)]
                fn predecessor(&self) -> Option<Self> {
                    checked_predecessor(*self)
                }
            }
        )*
    };
}

macro_rules! impl_steppable_for_float {
    ($t:ty, $step:expr) => {
        impl Steppable for $t {
            #[inline(always)]
            fn successor(&self) -> Option<Self> {
                // Past a certain magnitude the step rounds away
                let next = *self + $step;
                (self.is_finite() && next > *self).then_some(next)
            }

            #[inline(always)]
            fn predecessor(&self) -> Option<Self> {
                let prev = *self - $step;
                self.is_finite().then_some(prev)
            }
        }
    };
}

impl_steppable_for_int!(i8, i16, i32, i64, i128, isize);
impl_steppable_for_int!(u8, u16, u32, u64, u128, usize);
impl_steppable_for_float!(f32, F32_STEP);
impl_steppable_for_float!(f64, F64_STEP);

/// Last scalar value before the surrogate block.
const SURROGATE_LOW_EDGE: char = '\u{D7FF}';
/// First scalar value after the surrogate block.
const SURROGATE_HIGH_EDGE: char = '\u{E000}';

impl Steppable for char {
    #[inline]
    fn successor(&self) -> Option<Self> {
        match *self {
            SURROGATE_LOW_EDGE => Some(SURROGATE_HIGH_EDGE),
            c => checked_successor(u32::from(c)).and_then(char::from_u32),
        }
    }

    #[inline]
    fn predecessor(&self) -> Option<Self> {
        match *self {
            SURROGATE_HIGH_EDGE => Some(SURROGATE_LOW_EDGE),
            c => checked_predecessor(u32::from(c)).and_then(char::from_u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_integers() {
        assert_eq!(0i32.successor(), Some(1));
        assert_eq!(0i32.predecessor(), Some(-1));
        assert_eq!((-5i64).successor(), Some(-4));
        assert_eq!(i8::MAX.successor(), None);
        assert_eq!(i8::MIN.predecessor(), None);
        assert_eq!(i128::MAX.predecessor(), Some(i128::MAX - 1));
    }

    #[test]
    fn test_unsigned_integers() {
        assert_eq!(0u32.predecessor(), None);
        assert_eq!(0usize.successor(), Some(1));
        assert_eq!(u64::MAX.successor(), None);
        assert_eq!(u16::MAX.predecessor(), Some(u16::MAX - 1));
    }

    #[test]
    fn test_char_steps_by_code_point() {
        assert_eq!('a'.successor(), Some('b'));
        assert_eq!('b'.predecessor(), Some('a'));
        assert_eq!('\0'.predecessor(), None);
        assert_eq!(char::MAX.successor(), None);
        assert_eq!(char::MAX.predecessor(), Some('\u{10FFFE}'));
    }

    #[test]
    fn test_char_skips_surrogates() {
        assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
        assert_eq!('\u{E000}'.predecessor(), Some('\u{D7FF}'));
    }

    #[test]
    fn test_float_steps_are_symmetric() {
        assert_eq!(1.0f32.successor(), Some(1.0 + F32_STEP));
        assert_eq!(1.0f32.predecessor(), Some(1.0 - F32_STEP));
        assert_eq!(2.0f64.successor(), Some(2.0 + F64_STEP));
        assert_eq!(2.0f64.predecessor(), Some(2.0 - F64_STEP));
    }

    #[test]
    fn test_non_finite_floats_have_no_neighbours() {
        assert_eq!(f32::INFINITY.successor(), None);
        assert_eq!(f64::NEG_INFINITY.predecessor(), None);
        assert!(f64::NAN.successor().is_none());
    }

    #[test]
    fn test_large_float_has_no_successor() {
        assert_eq!(4_000_000.0f32.successor(), None);
        assert_eq!(f32::MAX.successor(), None);
        assert_eq!(1.0e17f64.successor(), None);
        assert_eq!(2_097_151.0f32.successor(), Some(2_097_151.0 + F32_STEP));
    }

    #[test]
    fn test_large_float_predecessor_can_round_to_self() {
        let x = 1.0e9f32;
        assert_eq!(x.predecessor(), Some(x));
    }
}
