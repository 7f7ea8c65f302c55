//! Seams between this crate and the code around it.
//!
//! - [`HostRuntime`]: the exception sink an accumulator reports into
//! - [`IntoDecodeResult`]: lifts foreign results into [`DecodeResult`](crate::DecodeResult)

pub mod host_runtime;
pub mod into_decode_result;

pub use host_runtime::HostRuntime;
pub use into_decode_result::IntoDecodeResult;
