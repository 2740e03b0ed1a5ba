//! Error types for cursor navigation.
//!
//! Running out of input is the only condition every caller sees. It is
//! ordinary loop termination, not a failure. Probing for a token that is
//! not there yields an empty slice instead of an error.

use thiserror::Error;

/// Error returned by the cursor's advance operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// An advance would move past the last byte of the buffer.
    #[error("end of input")]
    EndOfInput,
    /// A `*/` was seen outside any block comment.
    ///
    /// Only produced under [`UnmatchedClose::Reject`](crate::UnmatchedClose::Reject).
    #[error("unmatched `*/` at byte offset {pos}")]
    UnmatchedBlockClose { pos: usize },
}

impl ScanError {
    /// Returns `true` for [`ScanError::EndOfInput`].
    #[inline]
    pub fn is_end_of_input(self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// A `*/` arrived while no block comment was open.
///
/// Returned by [`CommentState::observe`](crate::CommentState::observe),
/// which knows nothing about positions. The cursor converts it into
/// [`ScanError::UnmatchedBlockClose`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("`*/` without a matching `/*`")]
pub struct StrayBlockClose;
