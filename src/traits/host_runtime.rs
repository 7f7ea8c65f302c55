//! The host runtime seen from the error layer.
//!
//! The accumulators never inspect host objects. They only ask the host to build
//! an exception for a category and message, and to put that exception on its
//! deferred ("scheduled") reporting channel.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{ErrorKind, HostRuntime};
//!
//! #[derive(Default)]
//! struct Console {
//!     scheduled: Vec<String>,
//! }
//!
//! impl HostRuntime for Console {
//!     type Exception = String;
//!
//!     fn new_exception(&mut self, kind: ErrorKind, message: &str) -> String {
//!         format!("{kind}: {message}")
//!     }
//!
//!     fn schedule_exception(&mut self, exception: String) {
//!         self.scheduled.push(exception);
//!     }
//! }
//!
//! let mut console = Console::default();
//! let exception = console.new_exception(ErrorKind::TypeError, "not a buffer");
//! console.schedule_exception(exception);
//! assert_eq!(console.scheduled, ["TypeError: not a buffer"]);
//! ```

use crate::types::ErrorKind;

/// Exception sink provided by the embedding runtime.
///
/// The two channels must never both be set at once: a host either has an
/// exception actively propagating (pending) or one deferred for later delivery
/// (scheduled).
pub trait HostRuntime {
    /// Host-side exception object.
    type Exception;

    /// Builds an exception object whose constructor matches `kind`.
    fn new_exception(&mut self, kind: ErrorKind, message: &str) -> Self::Exception;

    /// Defers `exception` until control returns to the host.
    fn schedule_exception(&mut self, exception: Self::Exception);

    /// Whether an exception is currently propagating.
    fn has_pending_exception(&self) -> bool {
        false
    }

    /// Whether an exception is already waiting on the scheduled channel.
    fn has_scheduled_exception(&self) -> bool {
        false
    }

    /// Moves the pending exception onto the scheduled channel.
    fn reschedule_pending_exception(&mut self) {}
}
