//! Conversion helpers between `Result`, `DecodeResult` and section-relative errors.
//!
//! These adapters let decoders that were written against plain `Result` plug
//! into the pipeline, and let nested decoders report offsets relative to the
//! whole module rather than to the section they were handed.
//!
//! # Examples
//!
//! ```
//! use decode_rail::convert::*;
//! use decode_rail::{DecodeError, DecodeResult};
//!
//! let result: Result<u32, DecodeError> = Ok(7);
//! let decoded = std_to_decode_result(result);
//! assert!(decoded.ok());
//!
//! // An error found 3 bytes into a section that starts at byte 100.
//! let nested = DecodeResult::<u32>::from_error(DecodeError::new(3, "bad type"));
//! assert_eq!(rebase_offset(nested, 100).error().offset(), 103);
//! ```

use crate::types::{DecodeError, DecodeResult};

/// Converts a `DecodeResult` into a standard `Result`.
///
/// # Examples
///
/// ```
/// use decode_rail::convert::decode_result_to_std;
/// use decode_rail::DecodeResult;
///
/// assert_eq!(decode_result_to_std(DecodeResult::<u8>::new(1u8)), Ok(1));
/// ```
#[inline]
pub fn decode_result_to_std<T>(result: DecodeResult<T>) -> Result<T, DecodeError> {
    result.into_std()
}

/// Converts a standard `Result` into a `DecodeResult`.
#[inline]
pub fn std_to_decode_result<T>(result: Result<T, DecodeError>) -> DecodeResult<T> {
    result.into()
}

/// Shifts the offset of a failure by `base`, saturating at `u32::MAX`.
///
/// Successful results pass through untouched.
///
/// # Examples
///
/// ```
/// use decode_rail::convert::rebase_offset;
/// use decode_rail::{DecodeError, DecodeResult};
///
/// let err = DecodeResult::<()>::from_error(DecodeError::new(u32::MAX - 1, "too far"));
/// assert_eq!(rebase_offset(err, 10).error().offset(), u32::MAX);
/// ```
#[inline]
pub fn rebase_offset<T>(result: DecodeResult<T>, base: u32) -> DecodeResult<T> {
    result.map_error(|error| {
        let offset = error.offset().saturating_add(base);
        DecodeError::new(offset, error.into_message())
    })
}

/// Collects an iterator of results, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use decode_rail::{DecodeError, DecodeResult};
///
/// let entries = vec![DecodeResult::<u8>::new(1u8), DecodeResult::new(2u8)];
/// let all: DecodeResult<Vec<u8>> = entries.into_iter().collect();
/// assert_eq!(all.into_value(), vec![1, 2]);
///
/// let entries = vec![
///     DecodeResult::<u8>::new(1u8),
///     DecodeResult::from_error(DecodeError::new(5, "truncated entry")),
///     DecodeResult::from_error(DecodeError::new(9, "never reached")),
/// ];
/// let all: DecodeResult<Vec<u8>> = entries.into_iter().collect();
/// assert_eq!(all.error().offset(), 5);
/// ```
impl<T, C> FromIterator<DecodeResult<T>> for DecodeResult<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = DecodeResult<T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|result| match result.into_std() {
                Ok(value) => Some(value),
                Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => DecodeResult::from_error(error),
            None => DecodeResult::new(collected),
        }
    }
}
