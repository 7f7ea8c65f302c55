//! Lifting foreign results into [`DecodeResult`].
//!
//! Helpers borrowed from other crates (integer parsers, UTF-8 validation) report
//! failures in their own error types. [`IntoDecodeResult`] pins such a failure
//! to a byte offset so it can travel through the pipeline like any other decode
//! error.
//!
//! # Examples
//!
//! ```
//! use decode_rail::traits::IntoDecodeResult;
//!
//! let name = core::str::from_utf8(&[0x66, 0x6f, 0x6f]).at_offset(12);
//! assert_eq!(name.into_value(), "foo");
//!
//! let bad = core::str::from_utf8(&[0xff]).at_offset(12);
//! assert!(bad.failed());
//! assert_eq!(bad.error().offset(), 12);
//! ```
use crate::types::decode_error::format_message;
use crate::types::{DecodeError, DecodeResult};
use core::fmt::Display;

/// Converts a value into a [`DecodeResult`], placing any failure at a byte offset.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a DecodeResult",
    label = "this type does not implement `IntoDecodeResult`",
    note = "`Result<T, E>` converts when `E: Display`"
)]
pub trait IntoDecodeResult<T> {
    /// Converts `self`, attributing a failure to `offset`.
    fn at_offset(self, offset: u32) -> DecodeResult<T>;
}

impl<T, E: Display> IntoDecodeResult<T> for Result<T, E> {
    #[inline]
    fn at_offset(self, offset: u32) -> DecodeResult<T> {
        match self {
            Ok(value) => DecodeResult::new(value),
            Err(error) => {
                let mut message = format_message(format_args!("{error}"));
                if message.is_empty() {
                    message.push_str("decoding failed");
                }
                DecodeResult::from_error(DecodeError::new(offset, message))
            }
        }
    }
}

impl<T> IntoDecodeResult<T> for DecodeResult<T> {
    /// Identity conversion; the offset of an existing error is kept.
    #[inline]
    fn at_offset(self, _offset: u32) -> DecodeResult<T> {
        self
    }
}
