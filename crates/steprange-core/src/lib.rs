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

//! # Steprange Core
//!
//! Bounded, ordered, stepped ranges with set-like semantics. A
//! `BoundedRange<T>` covers every element reachable from its `start` by
//! repeated stepping up to and including its `end`.
//!
//! ## Modules
//!
//! - `math`: `BoundedRange<T>` with construction and validation, traversal
//!   (`size`, `iter`), boundary mutation (`add`, `remove`, `clear`), bulk
//!   queries (`contains_all`, `add_all`, `is_subset_of`,
//!   `is_disjoint_from`), and its builder and iterator.
//! - `num`: the `NaturalOrd` and `Steppable` capability traits, with impls
//!   for all core integer types, `char`, `f32` and `f64`.
//! - `error`: `RangeError`, the single error type of the crate.
//!
//! ## Example
//!
//! ```rust
//! use steprange_core::{BoundedRange, RangeError};
//!
//! let mut range = BoundedRange::of('a', 'e')?;
//! assert_eq!(range.size(), 5);
//!
//! range.remove(&'a')?;
//! range.remove(&'e')?;
//! assert_eq!(range.iter().collect::<String>(), "bcd");
//! # Ok::<(), RangeError>(())
//! ```

pub mod error;
pub mod math;
pub mod num;

pub use error::{RangeError, RangeResult};
pub use math::range::BoundedRange;
