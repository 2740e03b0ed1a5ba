//! Byte classes for configuration text.
//!
//! Every token the cursor extracts is a maximal run of bytes belonging to
//! one class. The base classes are plain `const fn` predicates. The key and
//! value classes are derived from them with the [`ByteClass::and`] and
//! [`ByteClass::negate`] combinators, so the exclusions between classes
//! hold by construction: a byte is never both a key byte and a delimiter
//! byte.
//!
//! Classes are byte-oriented. Multi-byte UTF-8 sequences pass
//! through as runs of non-ASCII bytes, which every class except the comment
//! and end-of-line classes accepts (`0x85` and `0xA0` excepted, see
//! [`is_space`]).

/// A predicate over a single byte.
///
/// Implemented for every `Fn(u8) -> bool`, so plain functions and closures
/// are classes, and for the combinator types in this module.
pub trait ByteClass {
    /// Returns `true` if `byte` belongs to this class.
    fn contains(&self, byte: u8) -> bool;

    /// Intersection: bytes in both `self` and `other`.
    fn and<C: ByteClass>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Complement: bytes not in `self`.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F: Fn(u8) -> bool> ByteClass for F {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        self(byte)
    }
}

/// Intersection of two classes. Built by [`ByteClass::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(A, B);

impl<A: ByteClass, B: ByteClass> ByteClass for And<A, B> {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        self.0.contains(byte) && self.1.contains(byte)
    }
}

/// Complement of a class. Built by [`ByteClass::negate`].
#[derive(Clone, Copy, Debug)]
pub struct Not<A>(A);

impl<A: ByteClass> ByteClass for Not<A> {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        !self.0.contains(byte)
    }
}

/// Every byte except a terminator. Built by [`multiline_until`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Until(u8);

impl Until {
    /// The byte this class excludes.
    #[inline]
    pub fn terminator(self) -> u8 {
        self.0
    }
}

impl ByteClass for Until {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        byte != self.0
    }
}

/// Class for values that run up to an explicit closing byte, possibly
/// across several lines (for example `}` ending a block value).
pub const fn multiline_until(end: u8) -> Until {
    Until(end)
}

/// Whitespace as seen by the scanner.
///
/// ASCII whitespace (`\t \n \v \f \r` and space) plus the two Latin-1
/// space characters, NEL (`0x85`) and NBSP (`0xA0`).
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ' | 0x85 | 0xA0)
}

/// Quote and grouping bytes that never belong to a config word.
#[inline]
const fn is_reserved(b: u8) -> bool {
    matches!(
        b,
        b'`' | b'\'' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b'"'
    )
}

/// Bytes that may appear anywhere in a key, delimiter or value.
///
/// Anything except whitespace and the quote and grouping bytes
/// `` ` ' ( ) [ ] { } " ``.
#[inline]
pub const fn is_config_byte(b: u8) -> bool {
    !is_space(b) && !is_reserved(b)
}

/// Bytes that make up multi-byte comment markers: `/`, `*` and `#`.
///
/// The newline is also a comment marker but never part of a run: the
/// cursor reports every newline as a one-byte marker of its own, so
/// `*/\n` reads as `*/` followed by a line end.
#[inline]
pub const fn is_comment_marker_byte(b: u8) -> bool {
    !is_space(b) && matches!(b, b'/' | b'*' | b'#' | b'\n')
}

/// Bytes that separate a key from its value: `= < > :`, space and tab.
#[inline]
pub const fn is_delim_byte(b: u8) -> bool {
    matches!(b, b'=' | b'<' | b'>' | b':' | b' ' | b'\t') && !is_eol(b)
}

/// The end-of-line byte.
#[inline]
pub const fn is_eol(b: u8) -> bool {
    b == b'\n'
}

/// Bytes of a key: config bytes that are neither delimiters nor line ends.
#[inline]
pub fn is_key_byte(b: u8) -> bool {
    is_config_byte
        .and(is_delim_byte.negate())
        .and(is_eol.negate())
        .contains(b)
}

/// Bytes of a single-line value: not whitespace, not a delimiter, and not
/// `;` or a newline.
#[inline]
pub fn is_value_byte(b: u8) -> bool {
    is_space
        .negate()
        .and(is_delim_byte.negate())
        .and(|b: u8| !matches!(b, b';' | b'\n'))
        .contains(b)
}

#[cfg(test)]
mod tests;
