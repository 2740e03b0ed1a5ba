//! Block and line comment tracking.
//!
//! The state machine is fed comment-marker tokens, one per scan position,
//! and knows nothing about buffers or offsets. Three states are reachable:
//! outside any comment, inside a line comment, and inside `depth` nested
//! block comments.
//!
//! # Marker Rules
//!
//! | Token      | Honored when          | Effect             |
//! |------------|-----------------------|--------------------|
//! | `/*`       | not in a line comment | `depth += 1`       |
//! | `*/`       | not in a line comment | `depth -= 1`       |
//! | `#`, `//`  | `depth == 0`          | enter line comment |
//! | `\n`       | `depth == 0`          | leave line comment |
//!
//! Tokens are matched exactly: a marker run such as `/**` or `#//` is not
//! one of the five spellings and changes nothing.

use tracing::trace;

use crate::{StrayBlockClose, UnmatchedClose};

/// A recognized comment-marker token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentMarker {
    /// `/*`
    BlockOpen,
    /// `*/`
    BlockClose,
    /// `#` or `//`
    Line,
    /// `\n`
    Newline,
}

impl CommentMarker {
    /// Recognize a comment-marker token by exact match.
    ///
    /// Returns `None` for the empty token and for any run that is not one of
    /// the five marker spellings.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"/*" => Some(Self::BlockOpen),
            b"*/" => Some(Self::BlockClose),
            b"#" | b"//" => Some(Self::Line),
            b"\n" => Some(Self::Newline),
            _ => None,
        }
    }
}

/// Comment nesting state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentState {
    depth: u32,
    in_line: bool,
    unmatched_close: UnmatchedClose,
}

impl CommentState {
    /// Outside any comment, handling stray `*/` according to `unmatched_close`.
    pub const fn new(unmatched_close: UnmatchedClose) -> Self {
        Self {
            depth: 0,
            in_line: false,
            unmatched_close,
        }
    }

    /// Number of currently open block comments.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// `true` while inside a `#` or `//` comment.
    #[inline]
    pub fn in_line_comment(&self) -> bool {
        self.in_line
    }

    /// `true` inside a line comment or at least one block comment.
    #[inline]
    pub fn in_comment(&self) -> bool {
        self.in_line || self.depth > 0
    }

    /// Feed the comment-marker token found at the current scan position.
    ///
    /// Returns the updated [`in_comment`](Self::in_comment) value. Under
    /// [`UnmatchedClose::Reject`] a `*/` outside any block comment leaves
    /// the state unchanged and returns [`StrayBlockClose`].
    pub fn observe(&mut self, token: &[u8]) -> Result<bool, StrayBlockClose> {
        if let Some(marker) = CommentMarker::from_token(token) {
            self.apply(marker)?;
        }
        Ok(self.in_comment())
    }

    /// Apply one recognized marker.
    pub fn apply(&mut self, marker: CommentMarker) -> Result<(), StrayBlockClose> {
        match marker {
            CommentMarker::BlockOpen if !self.in_line => {
                self.depth = self.depth.saturating_add(1);
                trace!(depth = self.depth, "block comment opened");
            }
            CommentMarker::BlockClose if !self.in_line => {
                if self.depth > 0 {
                    self.depth -= 1;
                    trace!(depth = self.depth, "block comment closed");
                } else {
                    trace!(policy = ?self.unmatched_close, "unmatched block comment close");
                    if self.unmatched_close == UnmatchedClose::Reject {
                        return Err(StrayBlockClose);
                    }
                }
            }
            CommentMarker::Line if self.depth == 0 && !self.in_line => {
                self.in_line = true;
                trace!("line comment started");
            }
            CommentMarker::Newline if self.depth == 0 && self.in_line => {
                self.in_line = false;
                trace!("line comment ended");
            }
            _ => {}
        }
        Ok(())
    }
}
