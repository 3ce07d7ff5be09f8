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

//! # Numeric Foundations
//!
//! Capability traits that describe how element types of a bounded range are
//! ordered and stepped. Both are resolved at compile time through generics,
//! so a range over `u8` and a range over `char` share all of their logic and
//! differ only in the trait impls selected for their element type.
//!
//! ## Submodules
//!
//! - `order`: `NaturalOrd`, the natural total order of an element type.
//!   Implemented for all core integer types, `char`, `f32` and `f64`
//!   (floats order by `total_cmp`).
//! - `step`: `Steppable`, the built-in successor and predecessor rules.
//!   Integers step by one with overflow checks, `char` steps by one code
//!   point skipping the surrogate block, floats step by a fixed `0.1`.
//!
//! ## Custom element types
//!
//! Any type can live in a range once it implements both traits. Returning
//! `None` from a `Steppable` method signals that the type has no rule for
//! that direction, which ranges surface as an error or as the end of a
//! traversal.

pub mod order;
pub mod step;
