//! Data-side error types: offsets, results and categories.
//!
//! Everything in this module is side-effect free. Decoders build and return
//! these values; only the [`accumulator`](crate::accumulator) module turns them
//! into host exceptions.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{decode_fail, DecodeResult};
//!
//! fn read_u8(bytes: &[u8], pos: usize) -> DecodeResult<u8> {
//!     match bytes.get(pos) {
//!         Some(byte) => DecodeResult::new(*byte),
//!         None => decode_fail!(
//!             u32::try_from(pos).unwrap_or(u32::MAX),
//!             "expected 1 byte, fell off end"
//!         ),
//!     }
//! }
//!
//! assert!(read_u8(&[1, 2], 1).ok());
//! assert_eq!(read_u8(&[], 0).error().message(), "expected 1 byte, fell off end");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod decode_error;
pub mod decode_result;
pub mod error_kind;

pub use decode_error::*;
pub use decode_result::*;
pub use error_kind::*;

/// SmallVec-backed collection used for error histories.
///
/// Holds one element inline, since a boundary call rarely overwrites more than
/// a single earlier error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
