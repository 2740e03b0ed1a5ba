//! Scanner configuration.

/// What to do with a `*/` that closes no open block comment.
///
/// The nesting depth is unsigned, so neither policy can drive it below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnmatchedClose {
    /// Ignore the marker; the depth stays at zero.
    #[default]
    Clamp,
    /// Leave the state unchanged and report
    /// [`ScanError::UnmatchedBlockClose`](crate::ScanError::UnmatchedBlockClose)
    /// from the advance that observed the marker.
    Reject,
}

/// Options fixed at cursor construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Policy for stray block-comment terminators.
    pub unmatched_close: UnmatchedClose,
}

impl ScanOptions {
    /// Options with every field at its default.
    pub const fn new() -> Self {
        Self {
            unmatched_close: UnmatchedClose::Clamp,
        }
    }

    /// Set the policy for stray `*/` markers.
    #[must_use]
    pub const fn with_unmatched_close(mut self, policy: UnmatchedClose) -> Self {
        self.unmatched_close = policy;
        self
    }
}
