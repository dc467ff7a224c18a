//! Fluent wrapper over a pending outcome.

use crate::error::ErrorPayload;
use crate::outcome::{Outcome, OutcomeKind};
use crate::result::{BoxFuture, OutcomeResult};
use std::future::{Future, IntoFuture};

/// A not-yet-resolved [`Outcome`].
///
/// A transient adapter created fresh for every pending computation: it lets
/// callers keep chaining steps and hooks before the underlying outcome has
/// settled, without forcing intermediate resolution. Awaiting the wrapper
/// (it implements [`IntoFuture`]) or calling [`PendingOutcome::resolve`]
/// yields the durable [`Outcome`].
pub struct PendingOutcome<T> {
    inner: BoxFuture<'static, T>,
}

impl<T: Send + 'static> PendingOutcome<T> {
    /// Wraps a future resolving to an outcome.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T>> + Send + 'static,
    {
        Self {
            inner: Box::pin(future),
        }
    }

    /// Wraps an already-settled outcome.
    #[must_use]
    pub fn resolved(outcome: Outcome<T>) -> Self {
        Self::new(std::future::ready(outcome))
    }

    /// Chains a fallible step onto the pending outcome.
    ///
    /// The step runs once the current outcome resolves, with
    /// [`Outcome::and_then`] semantics: failures short-circuit, contexts
    /// merge, and step errors are intercepted.
    #[must_use]
    pub fn and_then<U, F, Fut>(self, f: F) -> PendingOutcome<U>
    where
        T: Clone,
        U: Send + 'static,
        F: FnOnce(T, Outcome<T>) -> Fut + Send + 'static,
        Fut: Future<Output = OutcomeResult<U>> + Send + 'static,
    {
        PendingOutcome::new(async move { self.inner.await.and_then(f).await })
    }

    /// Schedules a success hook to run once the outcome resolves.
    ///
    /// Returns the re-wrapped pending outcome immediately, so further fluent
    /// calls can be made before resolution.
    #[must_use]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T, &Outcome<T>) + Send + 'static,
    {
        Self::new(async move { self.inner.await.on_success(f) })
    }

    /// Schedules a failure hook matching the default `FAILURE` tag.
    #[must_use]
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorPayload, &Outcome<T>) + Send + 'static,
    {
        Self::new(async move { self.inner.await.on_failure(f) })
    }

    /// Schedules a failure hook matching a caller-chosen tag.
    #[must_use]
    pub fn on_failure_of<F>(self, kind: impl Into<OutcomeKind>, f: F) -> Self
    where
        F: FnOnce(&ErrorPayload, &Outcome<T>) + Send + 'static,
    {
        let kind = kind.into();
        Self::new(async move { self.inner.await.on_failure_of(kind, f) })
    }

    /// Awaits and returns the underlying outcome.
    pub async fn resolve(self) -> Outcome<T> {
        self.inner.await
    }
}

impl<T> IntoFuture for PendingOutcome<T> {
    type Output = Outcome<T>;
    type IntoFuture = BoxFuture<'static, T>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}
