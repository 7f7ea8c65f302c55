//! Boundary-side error accumulation.
//!
//! An [`ErrorAccumulator`] lives for exactly one API boundary call. Code inside
//! the call classifies a failure by calling one of the category setters; the
//! boundary then either [`reify`](ErrorAccumulator::reify)s the pending error
//! into a host exception or [`reset`](ErrorAccumulator::reset)s it.
//!
//! The accumulator holds a mutable borrow of the host for its whole life, so it
//! cannot be stored anywhere that outlives the call that created it.
//!
//! Only one error is kept. A later setter call replaces the pending error; the
//! replaced one is moved to [`superseded`](ErrorAccumulator::superseded) for
//! diagnostics.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{DecodeError, ErrorAccumulator, ErrorKind, HostRuntime};
//!
//! struct Host;
//!
//! impl HostRuntime for Host {
//!     type Exception = (ErrorKind, String);
//!
//!     fn new_exception(&mut self, kind: ErrorKind, message: &str) -> Self::Exception {
//!         (kind, message.to_string())
//!     }
//!
//!     fn schedule_exception(&mut self, _exception: Self::Exception) {}
//! }
//!
//! let mut host = Host;
//! let mut errors = ErrorAccumulator::new(&mut host, "Module.validate()");
//! errors.compile_failed(&DecodeError::new(10, "bad byte"));
//!
//! assert!(errors.wasm_error());
//! assert_eq!(errors.error_msg(), "Module.validate(): bad byte @+10");
//!
//! let (kind, message) = errors.reify();
//! assert_eq!(kind, ErrorKind::CompileError);
//! assert!(message.ends_with("bad byte @+10"));
//! ```
use crate::traits::HostRuntime;
use crate::types::alloc_type::{Cow, String};
use crate::types::{DecodeError, DecodeResult, ErrorKind, ErrorVec};
use core::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod scoped;

pub use scoped::ScopedErrorAccumulator;

/// An error that was pending on an accumulator before a later setter replaced it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Classifies and stores a single pending error for one boundary call.
///
/// Dropping an `ErrorAccumulator` has no side effect; an error that was never
/// reified is discarded. Use [`ScopedErrorAccumulator`] to have it reported to
/// the host automatically.
pub struct ErrorAccumulator<'h, H: HostRuntime + ?Sized> {
    host: &'h mut H,
    context: Cow<'static, str>,
    kind: Option<ErrorKind>,
    message: String,
    reified: bool,
    superseded: ErrorVec<PendingError>,
}

impl<'h, H: HostRuntime + ?Sized> ErrorAccumulator<'h, H> {
    /// Creates an accumulator with no pending error.
    ///
    /// `context` names the failing operation; when non-empty it prefixes every
    /// message as `"<context>: "`.
    #[inline]
    pub fn new<C>(host: &'h mut H, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self {
            host,
            context: context.into(),
            kind: None,
            message: String::new(),
            reified: false,
            superseded: ErrorVec::new(),
        }
    }

    pub fn type_error(&mut self, args: fmt::Arguments<'_>) {
        self.set(ErrorKind::TypeError, args);
    }

    pub fn range_error(&mut self, args: fmt::Arguments<'_>) {
        self.set(ErrorKind::RangeError, args);
    }

    pub fn compile_error(&mut self, args: fmt::Arguments<'_>) {
        self.set(ErrorKind::CompileError, args);
    }

    pub fn link_error(&mut self, args: fmt::Arguments<'_>) {
        self.set(ErrorKind::LinkError, args);
    }

    pub fn runtime_error(&mut self, args: fmt::Arguments<'_>) {
        self.set(ErrorKind::RuntimeError, args);
    }

    /// Records a decoder failure as a compile error, rendered as
    /// `"<message> @+<offset>"`.
    pub fn compile_failed(&mut self, error: &DecodeError) {
        debug_assert!(error.has_error(), "compile_failed() called with an empty error");
        self.compile_error(format_args!("{} @+{}", error.message(), error.offset()));
    }

    /// Unpacks a decode result, recording a failure as a compile error.
    ///
    /// Returns the value on success and `None` after recording the failure.
    pub fn compile_result<T>(&mut self, result: DecodeResult<T>) -> Option<T> {
        match result.into_std() {
            Ok(value) => Some(value),
            Err(error) => {
                self.compile_failed(&error);
                None
            }
        }
    }

    /// Returns `true` if an error is pending.
    #[must_use]
    #[inline]
    pub fn error(&self) -> bool {
        self.kind.is_some()
    }

    /// Returns `true` if the pending error is a compile, link or runtime error.
    #[must_use]
    #[inline]
    pub fn wasm_error(&self) -> bool {
        self.kind.is_some_and(ErrorKind::is_domain)
    }

    #[must_use]
    #[inline]
    pub fn error_msg(&self) -> &str {
        &self.message
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    #[must_use]
    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Errors replaced by later setter calls, oldest first.
    #[must_use]
    #[inline]
    pub fn superseded(&self) -> &[PendingError] {
        &self.superseded
    }

    /// Whether the pending error has already been turned into a host exception.
    #[must_use]
    #[inline]
    pub fn is_reified(&self) -> bool {
        self.reified
    }

    #[inline]
    pub fn host(&self) -> &H {
        &*self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    /// Builds the host exception for the pending error.
    ///
    /// The pending category and message are left in place, but the error is
    /// marked as reported so a scoped accumulator will not report it again.
    ///
    /// # Panics
    ///
    /// Panics if no error is pending.
    #[must_use = "the reified exception must be thrown or scheduled"]
    #[track_caller]
    pub fn reify(&mut self) -> H::Exception {
        let Some(kind) = self.kind else {
            panic!("reify() called on an accumulator with no pending error");
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            context = %self.context,
            %kind,
            error = %self.message,
            "reifying boundary error"
        );

        self.reified = true;
        self.host.new_exception(kind, &self.message)
    }

    /// Discards the pending error without reporting it.
    pub fn reset(&mut self) {
        self.kind = None;
        self.message.clear();
        self.reified = false;
        self.superseded.clear();
    }

    fn set(&mut self, kind: ErrorKind, args: fmt::Arguments<'_>) {
        let mut message = String::new();
        if !self.context.is_empty() {
            message.push_str(&self.context);
            message.push_str(": ");
        }
        // Writing into a String only fails if a Display impl itself errors.
        let _ = message.write_fmt(args);

        let previous = core::mem::replace(&mut self.message, message);
        if let Some(previous_kind) = self.kind.replace(kind) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                context = %self.context,
                previous_kind = %previous_kind,
                previous = %previous,
                %kind,
                "pending boundary error overwritten"
            );

            self.superseded.push(PendingError {
                kind: previous_kind,
                message: previous,
            });
        }
        self.reified = false;
    }
}

impl<H: HostRuntime + ?Sized> fmt::Debug for ErrorAccumulator<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAccumulator")
            .field("context", &self.context)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("reified", &self.reified)
            .field("superseded", &self.superseded)
            .finish_non_exhaustive()
    }
}
