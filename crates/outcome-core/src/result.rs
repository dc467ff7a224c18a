//! Result type aliases for outcome chains.

use crate::Outcome;

/// The return type of fallible step callbacks and use case bodies.
///
/// An `Err` here is the boundary equivalent of a thrown exception: it is
/// intercepted by [`Outcome::and_then`] and [`UseCase::call`](crate::UseCase::call)
/// and normalized into an `UNEXPECTED_ERROR` outcome, never propagated.
pub type OutcomeResult<T> = std::result::Result<Outcome<T>, anyhow::Error>;

/// A boxed future resolving to an [`Outcome`].
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Outcome<T>> + Send + 'a>>;
