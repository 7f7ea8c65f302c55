//! Error propagation for bytecode decoding pipelines.
//!
//! The crate has two halves:
//!
//! - **Data side**: decoders return [`DecodeResult<T>`], which carries either a
//!   value or a [`DecodeError`] (a byte offset plus message). Building,
//!   converting and chaining these values never has side effects.
//! - **Boundary side**: an API entry point owns one [`ErrorAccumulator`] (or
//!   [`ScopedErrorAccumulator`]) that classifies the failure by [`ErrorKind`]
//!   and turns it into exactly one host exception through [`HostRuntime`].
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```
//! use decode_rail::{decode_fail, DecodeResult};
//!
//! fn read_leb_u32(bytes: &[u8]) -> DecodeResult<u32> {
//!     let mut value = 0u32;
//!     for (i, byte) in bytes.iter().take(5).enumerate() {
//!         value |= u32::from(byte & 0x7f) << (7 * i);
//!         if byte & 0x80 == 0 {
//!             return DecodeResult::new(value);
//!         }
//!     }
//!     decode_fail!(0, "invalid LEB128 encoding")
//! }
//!
//! assert_eq!(read_leb_u32(&[0xe5, 0x8e, 0x26]).into_value(), 624_485);
//! assert!(read_leb_u32(&[0x80]).failed());
//! ```
//!
//! ## Reporting at a boundary
//!
//! ```
//! use decode_rail::{DecodeError, ErrorKind, HostRuntime, ScopedErrorAccumulator};
//!
//! #[derive(Default)]
//! struct Host {
//!     scheduled: Vec<(ErrorKind, String)>,
//! }
//!
//! impl HostRuntime for Host {
//!     type Exception = (ErrorKind, String);
//!
//!     fn new_exception(&mut self, kind: ErrorKind, message: &str) -> Self::Exception {
//!         (kind, message.to_owned())
//!     }
//!
//!     fn schedule_exception(&mut self, exception: Self::Exception) {
//!         self.scheduled.push(exception);
//!     }
//! }
//!
//! let mut host = Host::default();
//! {
//!     let mut errors = ScopedErrorAccumulator::new(&mut host, "compile()");
//!     errors.compile_failed(&DecodeError::new(10, "bad byte"));
//! }
//! assert_eq!(host.scheduled, [(ErrorKind::CompileError, "compile(): bad byte @+10".to_owned())]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Boundary accumulators that turn pending errors into host exceptions
pub mod accumulator;
/// Conversions between `Result`, `DecodeResult` and rebased offsets
pub mod convert;
/// Formatting macros for decode failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Host runtime seam and result-lifting traits
pub mod traits;
/// DecodeError, DecodeResult and ErrorKind
pub mod types;

pub use accumulator::{ErrorAccumulator, PendingError, ScopedErrorAccumulator};
pub use convert::*;
pub use traits::*;
pub use types::{DecodeError, DecodeResult, ErrorKind, ErrorTier, ErrorVec, VoidResult};
