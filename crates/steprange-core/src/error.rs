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

//! Error type shared by every fallible range operation.

/// The error type for bounded range construction, traversal and mutation.
///
/// All variants describe contract violations by the caller. They are raised
/// at the offending call and never recovered from internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    /// A required argument was missing, or the bounds are out of order
    /// for a validating constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A successor was requested for a value that has none.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// A predecessor was requested for a value that has none, or an
    /// interior element was removed.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
    /// An exhausted iterator was advanced.
    #[error("end of sequence reached")]
    EndOfSequence,
}

/// Convenience alias for results carrying a [`RangeError`].
pub type RangeResult<T> = Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RangeError::InvalidArgument("start must be less than or equal to end").to_string(),
            "invalid argument: start must be less than or equal to end"
        );
        assert_eq!(
            RangeError::EndOfSequence.to_string(),
            "end of sequence reached"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(RangeError::IllegalState("x"));
    }
}
