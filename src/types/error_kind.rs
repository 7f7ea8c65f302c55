//! Classification of errors reported at an API boundary.
//!
//! Categories are ordered by severity. The general tier ([`ErrorKind::TypeError`],
//! [`ErrorKind::RangeError`]) signals host-level argument problems; everything from
//! [`ErrorKind::FIRST_DOMAIN`] upward signals a failure of the pipeline's own input.
//!
//! "No error" is modelled as `Option::<ErrorKind>::None`, which orders below every
//! variant.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{ErrorKind, ErrorTier};
//!
//! assert!(ErrorKind::LinkError.is_domain());
//! assert_eq!(ErrorKind::RangeError.tier(), ErrorTier::General);
//! assert!(None < Some(ErrorKind::TypeError));
//! ```
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a pending boundary error, in ascending order of severity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    TypeError,
    RangeError,
    CompileError,
    LinkError,
    RuntimeError,
}

/// Which side of the general/domain split an [`ErrorKind`] falls on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorTier {
    General,
    Domain,
}

impl ErrorKind {
    /// First category of the domain tier.
    pub const FIRST_DOMAIN: ErrorKind = ErrorKind::CompileError;

    /// All categories in ascending order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::TypeError,
        ErrorKind::RangeError,
        ErrorKind::CompileError,
        ErrorKind::LinkError,
        ErrorKind::RuntimeError,
    ];

    /// Returns `true` for compile, link and runtime errors.
    #[must_use]
    #[inline]
    pub fn is_domain(self) -> bool {
        self >= Self::FIRST_DOMAIN
    }

    #[must_use]
    #[inline]
    pub fn tier(self) -> ErrorTier {
        if self.is_domain() {
            ErrorTier::Domain
        } else {
            ErrorTier::General
        }
    }

    /// Name of the host exception constructor matching this category.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::CompileError => "CompileError",
            ErrorKind::LinkError => "LinkError",
            ErrorKind::RuntimeError => "RuntimeError",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
