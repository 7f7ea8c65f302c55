//! Offset-tagged error produced by decoding and validation.
//!
//! A [`DecodeError`] pairs a byte offset into the decoded input with a
//! human-readable message. The empty message is reserved for "no error", so a
//! constructed error must always carry text.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{decode_error, DecodeError};
//!
//! let err = DecodeError::new(10, "bad byte");
//! assert!(err.has_error());
//! assert_eq!(err.offset(), 10);
//! assert_eq!(err.to_string(), "bad byte @+10");
//!
//! let opcode = 0xfe;
//! let err = decode_error!(3, "invalid opcode 0x{:x}", opcode);
//! assert_eq!(err.message(), "invalid opcode 0xfe");
//!
//! assert!(DecodeError::default().is_empty());
//! ```
use crate::types::alloc_type::String;
use core::fmt::{self, Display, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A byte offset plus message, or the empty "no error" value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecodeError {
    offset: u32,
    message: String,
}

impl DecodeError {
    /// Creates an error at `offset`.
    ///
    /// `message` must not be empty, otherwise the value would read as "no error".
    #[inline]
    pub fn new<S: Into<String>>(offset: u32, message: S) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "DecodeError message must not be empty");
        Self { offset, message }
    }

    /// Creates an error at `offset` from pre-checked format arguments.
    ///
    /// Prefer the [`decode_error!`](crate::decode_error) macro, which builds the
    /// arguments for you.
    #[inline]
    pub fn format(offset: u32, args: fmt::Arguments<'_>) -> Self {
        Self::new(offset, format_message(args))
    }

    /// The "no error" value.
    #[must_use]
    #[inline]
    pub const fn none() -> Self {
        Self {
            offset: 0,
            message: String::new(),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.message.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and hands back its message buffer without copying.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @+{}", self.message, self.offset)
    }
}

impl core::error::Error for DecodeError {}

/// Renders format arguments into an owned string, skipping the formatter for
/// plain literals.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => String::from(literal),
        None => {
            let mut buf = String::new();
            // Writing into a String only fails if a Display impl itself errors.
            let _ = buf.write_fmt(args);
            buf
        }
    }
}
