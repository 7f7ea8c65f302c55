//! Value-or-error container returned by fallible pipeline stages.
//!
//! [`DecodeResult`] is move-only: it deliberately does not implement `Clone`, so
//! payloads that own resources (boxed function bodies, module handles) are never
//! duplicated by accident. Values and errors are extracted by consuming the
//! result.
//!
//! # Examples
//!
//! ```
//! use decode_rail::{DecodeError, DecodeResult};
//!
//! let ok = DecodeResult::<i32>::new(5);
//! assert!(ok.ok());
//! assert_eq!(*ok.value(), 5);
//!
//! let failed = DecodeResult::<i32>::from_error(DecodeError::new(10, "bad byte"));
//! assert!(failed.failed());
//! assert_eq!(failed.error().offset(), 10);
//! assert_eq!(failed.error().message(), "bad byte");
//!
//! // A helper returning a narrower type can be forwarded without unwrapping.
//! fn section_size() -> DecodeResult<u32> {
//!     DecodeResult::new(64u32)
//! }
//! fn total_size() -> DecodeResult<u64> {
//!     section_size().convert()
//! }
//! assert_eq!(total_size().into_value(), 64u64);
//! ```
use crate::types::DecodeError;

#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

static NO_ERROR: DecodeError = DecodeError::none();

/// Either a decoded value of type `T` or the [`DecodeError`] that prevented it.
///
/// A failed result always carries a non-empty error, so `failed()` and
/// `error().has_error()` agree for every value of this type.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct DecodeResult<T> {
    inner: Result<T, DecodeError>,
}

/// Result of an operation that only reports success or failure.
pub type VoidResult = DecodeResult<()>;

impl<T> DecodeResult<T> {
    /// Creates a successful result from anything convertible into `T`.
    #[inline]
    pub fn new<V: Into<T>>(value: V) -> Self {
        Self {
            inner: Ok(value.into()),
        }
    }

    /// Creates a failed result.
    ///
    /// # Panics
    ///
    /// Panics if `error` is empty. A failed result must hold something to
    /// report.
    #[track_caller]
    #[inline]
    pub fn from_error(error: DecodeError) -> Self {
        assert!(error.has_error(), "DecodeResult built from an empty error");
        Self { inner: Err(error) }
    }

    #[must_use]
    #[inline]
    pub fn ok(&self) -> bool {
        self.inner.is_ok()
    }

    #[must_use]
    #[inline]
    pub fn failed(&self) -> bool {
        !self.ok()
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the result failed. Reading the value of a failed result is a
    /// bug in the caller, not a recoverable condition.
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(error) => panic!("value() called on a failed DecodeResult: {error}"),
        }
    }

    /// Consumes the result and moves the value out.
    ///
    /// # Panics
    ///
    /// Panics if the result failed.
    #[track_caller]
    #[inline]
    pub fn into_value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(error) => panic!("into_value() called on a failed DecodeResult: {error}"),
        }
    }

    /// Returns the held error, or the empty "no error" value if the result is ok.
    #[must_use]
    #[inline]
    pub fn error(&self) -> &DecodeError {
        match &self.inner {
            Ok(_) => &NO_ERROR,
            Err(error) => error,
        }
    }

    /// Consumes the result and moves the error out.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> DecodeError {
        match self.inner {
            Ok(_) => DecodeError::none(),
            Err(error) => error,
        }
    }

    /// Re-types the result, converting the value with [`Into`] and carrying a
    /// failure across unchanged.
    #[inline]
    pub fn convert<U>(self) -> DecodeResult<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> DecodeResult<U>
    where
        F: FnOnce(T) -> U,
    {
        DecodeResult {
            inner: self.inner.map(f),
        }
    }

    /// Chains another fallible stage, invoking `f` only on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> DecodeResult<U>
    where
        F: FnOnce(T) -> DecodeResult<U>,
    {
        match self.inner {
            Ok(value) => f(value),
            Err(error) => DecodeResult { inner: Err(error) },
        }
    }

    /// Rewrites the error, e.g. to rebase its offset onto an enclosing section.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an empty error.
    #[track_caller]
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(DecodeError) -> DecodeError,
    {
        match self.inner {
            Ok(value) => Self { inner: Ok(value) },
            Err(error) => Self::from_error(f(error)),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> DecodeResult<&T> {
        DecodeResult {
            inner: self.inner.as_ref().map_err(Clone::clone),
        }
    }

    /// Converts into a standard [`Result`] so `?` can be used on it.
    #[inline]
    pub fn into_std(self) -> Result<T, DecodeError> {
        self.inner
    }
}

impl<T: Default> Default for DecodeResult<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<DecodeError> for DecodeResult<T> {
    #[inline]
    fn from(error: DecodeError) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Result<T, DecodeError>> for DecodeResult<T> {
    /// # Panics
    ///
    /// Panics on `Err` holding an empty error.
    #[track_caller]
    #[inline]
    fn from(result: Result<T, DecodeError>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<DecodeResult<T>> for Result<T, DecodeError> {
    #[inline]
    fn from(result: DecodeResult<T>) -> Self {
        result.into_std()
    }
}

/// Serialized with the same `{"Ok": ..}` / `{"Err": ..}` shape as [`Result`].
#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for DecodeResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

/// Rejects an `Err` whose error is empty instead of building a failed result
/// with nothing to report.
#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for DecodeResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Result::<T, DecodeError>::deserialize(deserializer)? {
            Ok(value) => Ok(Self::new(value)),
            Err(error) if error.is_empty() => {
                Err(D::Error::custom("failed DecodeResult carries an empty error"))
            }
            Err(error) => Ok(Self::from_error(error)),
        }
    }
}
