use std::alloc;
use std::error::Error;

use super::error::ReserveError;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait ReserveResultExtension<T> {
    /// Unwraps the result of a storage request for the infallible half of the API. Allocation
    /// failures are routed to [`alloc::handle_alloc_error`], as recommended, rather than unwinding.
    ///
    /// # Panics
    /// Panics if the request overflowed the maximum capacity.
    fn handle_alloc(self) -> T;
}

impl<T> ReserveResultExtension<T> for Result<T, ReserveError> {
    fn handle_alloc(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => raise_reserve_error(error),
        }
    }
}

/// Diverges on a failed storage request: allocation failures go to [`alloc::handle_alloc_error`],
/// capacity overflows panic with their message.
///
/// # Panics
/// Panics if the request overflowed the maximum capacity.
pub(crate) fn raise_reserve_error(error: ReserveError) -> ! {
    match error {
        ReserveError::AllocError(error) => alloc::handle_alloc_error(error.layout),
        error => panic!("{}", error),
    }
}
