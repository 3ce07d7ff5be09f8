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

//! # Range Primitives
//!
//! Closed, stepped ranges over ordered element types and the pieces they are
//! made of.
//!
//! ## Submodules
//!
//! - `range`: `BoundedRange<T>`, a closed interval `[start, end]` with an
//!   optional comparator and step function. Supports size and membership
//!   queries, boundary mutation (`add`/`remove`/`clear`), bulk queries
//!   against other collections, and conversions to vectors.
//! - `iter`: the forward-only `Iter` cursor (`Iterator`, `FusedIterator`).
//! - `builder`: `RangeBuilder<T>` for configuring comparator, step function
//!   and order validation in one place.
//! - `membership`: the `Membership<T>` trait that bulk queries accept,
//!   implemented for slices, arrays, vectors, hash and B-tree sets, and
//!   ranges themselves.
//!
//! ## Motivation
//!
//! A range is a set that stores two values. It cannot hold gaps, so every
//! mutation moves one of its boundaries, and every traversal is a walk by
//! successor from `start`.

pub mod builder;
pub mod iter;
pub mod membership;
pub mod range;
