//! Formatting shorthands for building decode failures.
//!
//! - [`macro@crate::decode_error`] - Builds a [`DecodeError`](crate::DecodeError) from an
//!   offset and `format!`-style arguments.
//! - [`macro@crate::decode_fail`] - Same, wrapped in a failed
//!   [`DecodeResult`](crate::DecodeResult) ready to be returned.
//!
//! Arguments are checked against the format string at compile time.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{decode_fail, DecodeResult};
//!
//! fn section_id(byte: u8, pos: u32) -> DecodeResult<u8> {
//!     if byte > 12 {
//!         return decode_fail!(pos, "unknown section code #0x{:02x}", byte);
//!     }
//!     DecodeResult::new(byte)
//! }
//!
//! let err = section_id(0x2a, 8).into_error();
//! assert_eq!(err.message(), "unknown section code #0x2a");
//! assert_eq!(err.offset(), 8);
//! ```

/// Builds a [`DecodeError`](crate::DecodeError) at an offset from a format string.
///
/// # Examples
///
/// ```
/// use decode_rail::decode_error;
///
/// let err = decode_error!(4, "expected {} bytes, got {}", 8, 3);
/// assert_eq!(err.message(), "expected 8 bytes, got 3");
/// assert_eq!(err.offset(), 4);
/// ```
#[macro_export]
macro_rules! decode_error {
    ($offset:expr, $($arg:tt)+) => {
        $crate::DecodeError::format($offset, format_args!($($arg)+))
    };
}

/// Builds a failed [`DecodeResult`](crate::DecodeResult) at an offset from a format string.
///
/// The result type is inferred from the surrounding context.
///
/// # Examples
///
/// ```
/// use decode_rail::{decode_fail, DecodeResult};
///
/// let result: DecodeResult<u32> = decode_fail!(0, "length overflow");
/// assert!(result.failed());
/// ```
#[macro_export]
macro_rules! decode_fail {
    ($offset:expr, $($arg:tt)+) => {
        $crate::DecodeResult::from_error($crate::decode_error!($offset, $($arg)+))
    };
}
