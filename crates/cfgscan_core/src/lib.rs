//! Boundary-aware byte cursor for configuration-style text.
//!
//! `cfgscan_core` segments an immutable byte buffer into keys, delimiters,
//! values, comment markers and line ends. It does not build a document:
//! callers drive a [`Cursor`] and assemble entries themselves.
//!
//! # Modules
//!
//! - [`class`]: pure byte predicates and the combinators used to derive
//!   the key, delimiter and value classes from one another.
//! - [`comment`]: the block/line comment state machine, independent of
//!   any buffer position.
//! - [`Cursor`]: word extraction at boundaries, navigation, and the glue
//!   that feeds comment markers to the state machine on every advance.
//!
//! # Example
//!
//! ```
//! use cfgscan_core::Cursor;
//!
//! let mut cursor = Cursor::new(b"a_1 = 1\n");
//! assert_eq!(cursor.current_key(), b"a_1");
//! cursor.advance_to_next_delimiter()?;
//! assert_eq!(cursor.current_delimiter(), b"=");
//! cursor.advance_to_next_value()?;
//! assert_eq!(cursor.current_value(), b"1");
//! # Ok::<(), cfgscan_core::ScanError>(())
//! ```

pub mod class;
pub mod comment;
mod cursor;
mod error;
mod options;

pub use class::ByteClass;
pub use comment::{CommentMarker, CommentState};
pub use cursor::Cursor;
pub use error::{ScanError, StrayBlockClose};
pub use options::{ScanOptions, UnmatchedClose};
