//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use decode_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`decode_error!`], [`decode_fail!`]
//! - **Types**: [`DecodeError`], [`DecodeResult`], [`VoidResult`], [`ErrorKind`],
//!   [`ErrorAccumulator`], [`ScopedErrorAccumulator`]
//! - **Traits**: [`HostRuntime`], [`IntoDecodeResult`]
//!
//! # Examples
//!
//! ```
//! use decode_rail::prelude::*;
//!
//! fn read_magic(bytes: &[u8]) -> VoidResult {
//!     if bytes.starts_with(b"\0asm") {
//!         DecodeResult::new(())
//!     } else {
//!         decode_fail!(0, "expected magic word 00 61 73 6d")
//!     }
//! }
//!
//! assert!(read_magic(b"\0asm\x01\0\0\0").ok());
//! assert!(read_magic(b"\x7fELF").failed());
//! ```

// Macros
pub use crate::{decode_error, decode_fail};

// Core types
pub use crate::accumulator::{ErrorAccumulator, ScopedErrorAccumulator};
pub use crate::types::{DecodeError, DecodeResult, ErrorKind, VoidResult};

// Traits
pub use crate::traits::{HostRuntime, IntoDecodeResult};
