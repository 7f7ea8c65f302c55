//! Self-flushing accumulator for API entry points.
//!
//! A [`ScopedErrorAccumulator`] behaves exactly like an [`ErrorAccumulator`]
//! while it is alive. When it goes out of scope, on a normal return, an early
//! return or while unwinding, it hands whatever is pending to the host's
//! scheduled-exception channel. Each scope therefore surfaces at most one
//! failure.
//!
//! Exceptions the host already carries take precedence over the accumulator's
//! own error:
//!
//! | Host state at drop | Effect |
//! |--------------------|--------|
//! | scheduled exception set | own error discarded |
//! | pending exception set | own error discarded, pending exception rescheduled |
//! | neither, error pending and not reified | error reified and scheduled |
//! | otherwise | nothing |
//!
//! # Examples
//!
//! ```
//! use decode_rail::{ErrorKind, HostRuntime, ScopedErrorAccumulator};
//!
//! #[derive(Default)]
//! struct Host {
//!     scheduled: Vec<String>,
//! }
//!
//! impl HostRuntime for Host {
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
//! fn instantiate(host: &mut Host, imports_ok: bool) {
//!     let mut errors = ScopedErrorAccumulator::new(host, "Instance()");
//!     if !imports_ok {
//!         errors.link_error(format_args!("import #{} is not a function", 0));
//!         return;
//!     }
//! }
//!
//! let mut host = Host::default();
//! instantiate(&mut host, true);
//! instantiate(&mut host, false);
//! assert_eq!(host.scheduled, ["LinkError: Instance(): import #0 is not a function"]);
//! ```
use super::ErrorAccumulator;
use crate::traits::HostRuntime;
use crate::types::alloc_type::Cow;
use core::fmt;
use core::ops::{Deref, DerefMut};

/// An [`ErrorAccumulator`] that schedules its pending error on the host when dropped.
///
/// The host must never be left with both a pending and a scheduled exception
/// while one of these is alive.
pub struct ScopedErrorAccumulator<'h, H: HostRuntime + ?Sized> {
    inner: ErrorAccumulator<'h, H>,
}

impl<'h, H: HostRuntime + ?Sized> ScopedErrorAccumulator<'h, H> {
    /// Creates a scoped accumulator with no pending error.
    #[inline]
    pub fn new<C>(host: &'h mut H, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self {
            inner: ErrorAccumulator::new(host, context),
        }
    }
}

impl<'h, H: HostRuntime + ?Sized> Deref for ScopedErrorAccumulator<'h, H> {
    type Target = ErrorAccumulator<'h, H>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<H: HostRuntime + ?Sized> DerefMut for ScopedErrorAccumulator<'_, H> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<H: HostRuntime + ?Sized> Drop for ScopedErrorAccumulator<'_, H> {
    fn drop(&mut self) {
        let errors = &mut self.inner;
        let has_pending = errors.host().has_pending_exception();
        let has_scheduled = errors.host().has_scheduled_exception();
        debug_assert!(
            !(has_pending && has_scheduled),
            "host has both a pending and a scheduled exception"
        );

        if has_scheduled {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                context = %errors.context(),
                discarded = errors.error(),
                "host exception already scheduled"
            );
            errors.reset();
        } else if has_pending {
            #[cfg(feature = "tracing")]
            tracing::debug!(context = %errors.context(), "rescheduling pending host exception");
            errors.reset();
            errors.host_mut().reschedule_pending_exception();
        } else if errors.error() && !errors.is_reified() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                context = %errors.context(),
                error = %errors.error_msg(),
                "scheduling boundary error"
            );
            let exception = errors.reify();
            errors.host_mut().schedule_exception(exception);
        }
    }
}

impl<H: HostRuntime + ?Sized> fmt::Debug for ScopedErrorAccumulator<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopedErrorAccumulator").field(&self.inner).finish()
    }
}
