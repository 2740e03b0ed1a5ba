//! Boundary-aware cursor over a configuration buffer.
//!
//! The cursor borrows an immutable byte buffer and walks it one byte at a
//! time. Tokens are never materialized ahead of time: the `current_*`
//! accessors probe the position the cursor sits on and return the token of
//! the requested class starting there, or an empty slice when the position
//! is not the start of such a token.
//!
//! # Boundaries
//!
//! A position is a boundary for a class when the byte there belongs to the
//! class and the byte before it (if any) does not. Extraction only succeeds
//! at boundaries, so probing the middle of a word yields nothing:
//!
//! ```
//! use cfgscan_core::Cursor;
//!
//! let mut cursor = Cursor::new(b"42\n");
//! assert_eq!(cursor.current_value(), b"42");
//! cursor.advance_one_byte()?;
//! assert!(cursor.current_value().is_empty());
//! # Ok::<(), cfgscan_core::ScanError>(())
//! ```
//!
//! # Comment Tracking
//!
//! Every single-byte advance feeds the comment-marker token at the new
//! position to the [`CommentState`] machine, so [`Cursor::in_comment`] is
//! always current for the byte under the cursor. Each position is observed
//! at most once. Offset 0 is observed by the first advance of any kind, or
//! earlier by an explicit [`Cursor::register_comment_marker`].

use memchr::memchr;
use tracing::trace;

use crate::class::{self, ByteClass};
use crate::comment::CommentState;
use crate::{ScanError, ScanOptions, StrayBlockClose};

/// Scan position plus comment state over a borrowed buffer.
///
/// The buffer is never modified, so any number of cursors may scan the same
/// bytes independently. Cloning a cursor snapshots its position and comment
/// state.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The scanned bytes.
    buf: &'a [u8],
    /// Current offset. `pos == buf.len()` once the buffer is exhausted.
    pos: usize,
    comments: CommentState,
    /// Last offset whose comment marker was fed to `comments`.
    observed: Option<usize>,
    /// Set until the cursor first moves. Navigation from a fresh cursor
    /// considers offset 0 before advancing.
    fresh: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0 with default [`ScanOptions`].
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, ScanOptions::default())
    }

    /// Create a cursor at offset 0.
    pub fn with_options(buf: &'a [u8], options: ScanOptions) -> Self {
        Self {
            buf,
            pos: 0,
            comments: CommentState::new(options.unmatched_close),
            observed: None,
            fresh: true,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Position
    // ─────────────────────────────────────────────────────────────────────────

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole buffer, independent of the position.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// `true` while the cursor sits on a byte of the buffer.
    #[inline]
    pub fn is_valid_position(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// The byte under the cursor, or `None` once exhausted.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    #[inline]
    fn previous_byte(&self) -> Option<u8> {
        let prev = self.pos.checked_sub(1)?;
        self.buf.get(prev).copied()
    }

    /// `true` if the byte under the cursor is `byte`.
    #[inline]
    pub fn is_at_byte(&self, byte: u8) -> bool {
        self.current_byte() == Some(byte)
    }

    /// `true` if the cursor is on a valid byte and the byte before it is `byte`.
    #[inline]
    pub fn is_after_byte(&self, byte: u8) -> bool {
        self.is_valid_position() && self.previous_byte() == Some(byte)
    }

    /// `true` at offset 0 or right after a newline.
    pub fn is_at_beginning_of_line(&self) -> bool {
        self.pos == 0 || self.is_after_byte(b'\n')
    }

    /// `true` on a newline or on the last byte of the buffer.
    pub fn is_at_end_of_line(&self) -> bool {
        self.pos + 1 == self.buf.len() || self.is_at_byte(b'\n')
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Extraction
    // ─────────────────────────────────────────────────────────────────────────

    /// Return the maximal run of `class` bytes starting at the cursor.
    ///
    /// Empty unless the cursor is on a boundary: the current byte must be
    /// in `class` and the previous byte, if any, must not be. Does not move
    /// the cursor.
    pub fn extract(&self, class: impl ByteClass) -> &'a [u8] {
        let rest = self.rest();
        match rest.first() {
            Some(&b) if class.contains(b) => {}
            _ => return &[],
        }
        if self.previous_byte().is_some_and(|b| class.contains(b)) {
            return &[];
        }
        let len = rest
            .iter()
            .position(|&b| !class.contains(b))
            .unwrap_or(rest.len());
        &rest[..len]
    }

    /// Unread bytes, starting at the cursor.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or_default()
    }

    /// The config word (no whitespace, quotes or brackets) at the cursor.
    pub fn current_word(&self) -> &'a [u8] {
        self.extract(class::is_config_byte)
    }

    /// The key at the cursor.
    pub fn current_key(&self) -> &'a [u8] {
        self.extract(class::is_key_byte)
    }

    /// The delimiter at the cursor.
    ///
    /// A run of two or more bytes is trimmed of surrounding blanks, so
    /// `"  :  "` yields `":"`. A single byte, including a lone space, is
    /// returned as is. A run made only of blanks trims to the empty slice.
    pub fn current_delimiter(&self) -> &'a [u8] {
        let delim = self.extract(class::is_delim_byte);
        if delim.len() < 2 {
            delim
        } else {
            delim.trim_ascii()
        }
    }

    /// The single-line value at the cursor.
    pub fn current_value(&self) -> &'a [u8] {
        self.extract(class::is_value_byte)
    }

    /// The value at the cursor running up to (excluding) `end`, or to the
    /// end of the buffer when `end` never occurs.
    ///
    /// Same result as `extract(class::multiline_until(end))`, found with a
    /// single `memchr` search.
    pub fn current_multiline_value(&self, end: u8) -> &'a [u8] {
        let until = class::multiline_until(end);
        let rest = self.rest();
        match rest.first() {
            Some(&b) if until.contains(b) => {}
            _ => return &[],
        }
        if self.previous_byte().is_some_and(|b| until.contains(b)) {
            return &[];
        }
        let len = memchr(until.terminator(), rest).unwrap_or(rest.len());
        &rest[..len]
    }

    /// The comment marker at the cursor: a run of `/`, `*` and `#` bytes,
    /// or a single newline.
    ///
    /// Newlines are reported one at a time and without a boundary check, so
    /// each line end is seen even in a run of blank lines.
    pub fn current_comment_marker(&self) -> &'a [u8] {
        let rest = self.rest();
        if rest.first() == Some(&b'\n') {
            &rest[..1]
        } else {
            self.extract(class::is_comment_marker_byte)
        }
    }

    /// The run of newlines at the cursor.
    pub fn current_eol(&self) -> &'a [u8] {
        self.extract(class::is_eol)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comment State
    // ─────────────────────────────────────────────────────────────────────────

    /// `true` inside a line comment or any block comment.
    #[inline]
    pub fn in_comment(&self) -> bool {
        self.comments.in_comment()
    }

    /// `true` inside a `#` or `//` comment.
    #[inline]
    pub fn at_single_line_comment(&self) -> bool {
        self.comments.in_line_comment()
    }

    /// Number of currently open block comments.
    #[inline]
    pub fn comment_nesting_depth(&self) -> u32 {
        self.comments.depth()
    }

    /// Feed the comment marker at the cursor to the comment state and
    /// return the updated [`in_comment`](Self::in_comment).
    ///
    /// A position is observed once; calling this again without moving is a
    /// no-op. Exhausted cursors have nothing to observe.
    pub fn register_comment_marker(&mut self) -> Result<bool, ScanError> {
        if self.is_valid_position() && self.observed != Some(self.pos) {
            self.observed = Some(self.pos);
            let pos = self.pos;
            let token = self.current_comment_marker();
            self.comments
                .observe(token)
                .map_err(|StrayBlockClose| ScanError::UnmatchedBlockClose { pos })?;
        }
        Ok(self.in_comment())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Move one byte forward and update the comment state.
    ///
    /// On a cursor that has never moved, the marker at offset 0 is observed
    /// before moving. Returns [`ScanError::EndOfInput`] when this reaches the
    /// end of the buffer. The position never moves past `len`.
    pub fn advance_one_byte(&mut self) -> Result<(), ScanError> {
        if std::mem::take(&mut self.fresh) {
            self.register_comment_marker()?;
        }
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
        if !self.is_valid_position() {
            trace!(pos = self.pos, "end of input");
            return Err(ScanError::EndOfInput);
        }
        self.register_comment_marker()?;
        Ok(())
    }

    /// Advance until the cursor sits on a boundary of `class`.
    ///
    /// Moves at least one byte, except on a cursor that has never moved:
    /// there offset 0 is observed and checked first, so the first token of
    /// the buffer is not skipped. Returns [`ScanError::EndOfInput`] if the
    /// buffer runs out first, or if it was already exhausted.
    pub fn advance_to_next_match<C: ByteClass + Copy>(
        &mut self,
        class: C,
    ) -> Result<(), ScanError> {
        self.advance_until(|cursor| !cursor.extract(class).is_empty())
    }

    /// Skip loop shared by all navigation: advance one byte at a time until
    /// `found` holds at the new position.
    fn advance_until(&mut self, found: impl Fn(&Self) -> bool) -> Result<(), ScanError> {
        if !self.is_valid_position() {
            return Err(ScanError::EndOfInput);
        }
        if std::mem::take(&mut self.fresh) {
            self.register_comment_marker()?;
            if found(&*self) {
                return Ok(());
            }
        }
        loop {
            self.advance_one_byte()?;
            if found(&*self) {
                trace!(pos = self.pos, "advanced to match");
                return Ok(());
            }
        }
    }

    /// [`advance_to_next_match`](Self::advance_to_next_match) followed by a
    /// comment-state refresh at wherever the cursor stopped.
    fn advance_and_refresh<C: ByteClass + Copy>(
        &mut self,
        class: C,
    ) -> Result<(), ScanError> {
        let advanced = self.advance_to_next_match(class);
        self.register_comment_marker()?;
        advanced
    }

    /// Advance to the start of the next key.
    pub fn advance_to_next_key(&mut self) -> Result<(), ScanError> {
        self.advance_and_refresh(class::is_key_byte)
    }

    /// Advance to the start of the next delimiter run.
    ///
    /// Stops on any delimiter boundary, including blank-only runs for which
    /// [`current_delimiter`](Self::current_delimiter) is empty.
    pub fn advance_to_next_delimiter(&mut self) -> Result<(), ScanError> {
        self.advance_and_refresh(class::is_delim_byte)
    }

    /// Advance to the start of the next value.
    pub fn advance_to_next_value(&mut self) -> Result<(), ScanError> {
        self.advance_and_refresh(class::is_value_byte)
    }

    /// Advance to the next comment marker: the start of a `/ * #` run, or
    /// any newline.
    pub fn advance_to_next_comment_marker(&mut self) -> Result<(), ScanError> {
        let advanced =
            self.advance_until(|cursor| !cursor.current_comment_marker().is_empty());
        self.register_comment_marker()?;
        advanced
    }

    /// Advance to the start of the next run of newlines.
    pub fn advance_to_eol(&mut self) -> Result<(), ScanError> {
        self.advance_and_refresh(class::is_eol)
    }
}
