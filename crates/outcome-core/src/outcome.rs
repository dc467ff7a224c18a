//! The discriminated outcome value and its chaining protocol.

use crate::error::ErrorPayload;
use crate::result::OutcomeResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::future::Future;
use tracing::warn;

/// Context key under which an intercepted error's rendered value is stored.
pub const RAW_ERROR_KEY: &str = "rawError";

/// Open string-keyed metadata attached to an outcome.
///
/// Later keys override earlier ones on merge; insertion order is irrelevant.
pub type ContextMap = serde_json::Map<String, Value>;

/// A strongly-typed wrapper for outcome discriminator tags.
///
/// The three built-in tags cover the library's own taxonomy; arbitrary
/// caller-defined tags are supported through [`OutcomeKind::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeKind(Cow<'static, str>);

impl OutcomeKind {
    /// Tag carried by every success outcome.
    pub const SUCCESS: Self = Self(Cow::Borrowed("SUCCESS"));

    /// Default tag for expected failures.
    pub const FAILURE: Self = Self(Cow::Borrowed("FAILURE"));

    /// Reserved tag for errors intercepted by the library itself.
    pub const UNEXPECTED_ERROR: Self = Self(Cow::Borrowed("UNEXPECTED_ERROR"));

    /// Creates a caller-defined tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Returns the tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for OutcomeKind {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for OutcomeKind {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

/// An immutable success/failure outcome with attached metadata.
///
/// Exactly one of the success or failure semantics holds per instance. Once
/// constructed an outcome is never mutated; the `with_*` builders consume and
/// rebuild.
///
/// The value payload of a failure is absent (`None`); the error payload of a
/// success is the empty [`ErrorPayload`] sentinel, never an option. Valueless
/// successes are expressed as `Outcome<()>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    kind: OutcomeKind,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(skip_serializing_if = "ErrorPayload::is_empty")]
    error: ErrorPayload,
    #[serde(skip_serializing_if = "ContextMap::is_empty")]
    context: ContextMap,
    #[serde(skip_serializing_if = "String::is_empty")]
    use_case: String,
}

impl<T> Outcome<T> {
    /// Creates a success outcome carrying `value`.
    #[must_use]
    pub fn success(value: T) -> Self {
        Self {
            kind: OutcomeKind::SUCCESS,
            success: true,
            value: Some(value),
            error: ErrorPayload::default(),
            context: ContextMap::new(),
            use_case: String::new(),
        }
    }

    /// Creates a failure outcome with the default `FAILURE` tag.
    #[must_use]
    pub fn failure(error: impl Into<ErrorPayload>) -> Self {
        Self::failure_with_kind(error, OutcomeKind::FAILURE)
    }

    /// Creates a failure outcome with a caller-chosen tag.
    #[must_use]
    pub fn failure_with_kind(error: impl Into<ErrorPayload>, kind: impl Into<OutcomeKind>) -> Self {
        Self {
            kind: kind.into(),
            success: false,
            value: None,
            error: error.into(),
            context: ContextMap::new(),
            use_case: String::new(),
        }
    }

    /// Converts a standard result into an outcome.
    #[must_use]
    pub fn from_result<E: Into<ErrorPayload>>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Replaces the context map.
    #[must_use]
    pub fn with_context(mut self, context: ContextMap) -> Self {
        self.context = context;
        self
    }

    /// Replaces the use case label.
    #[must_use]
    pub fn with_use_case(mut self, label: impl Into<String>) -> Self {
        self.use_case = label.into();
        self
    }

    /// Returns the discriminator tag.
    #[must_use]
    pub fn kind(&self) -> &OutcomeKind {
        &self.kind
    }

    /// Returns true if this outcome carries success semantics.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns true if this outcome carries failure semantics.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Returns the value payload, absent on failures.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome and returns the value payload.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns the error payload.
    ///
    /// On success instances this is the empty sentinel payload, not an
    /// absent one; see [`ErrorPayload::is_empty`].
    #[must_use]
    pub fn error(&self) -> &ErrorPayload {
        &self.error
    }

    /// Returns the context map.
    #[must_use]
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    /// Returns the label of the producing use case, empty if none.
    #[must_use]
    pub fn use_case(&self) -> &str {
        &self.use_case
    }

    /// Splits a success outcome into its value, or returns the outcome
    /// unchanged when there is no value to take.
    pub fn try_into_value(mut self) -> std::result::Result<T, Self> {
        if self.success {
            if let Some(value) = self.value.take() {
                return Ok(value);
            }
        }
        Err(self)
    }

    /// Converts into a standard result, losing context and label.
    pub fn into_result(self) -> std::result::Result<T, ErrorPayload> {
        match self.try_into_value() {
            Ok(value) => Ok(value),
            Err(other) => Err(other.error),
        }
    }

    /// Re-types this outcome for a failure branch, dropping any value.
    fn recast<U>(self) -> Outcome<U> {
        Outcome {
            kind: self.kind,
            success: self.success,
            value: None,
            error: self.error,
            context: self.context,
            use_case: self.use_case,
        }
    }

    /// Chains a fallible step onto a success outcome.
    ///
    /// On a failure the callback is never invoked and the failure propagates
    /// unchanged (error, tag, context and label preserved). On a success the
    /// callback receives the value and a snapshot of this outcome; its result
    /// becomes the chain's outcome, with this outcome's context shallow-merged
    /// underneath the new one (new keys win).
    ///
    /// A callback returning `Err` is intercepted and normalized into an
    /// `UNEXPECTED_ERROR` failure carrying the rendered error under the
    /// [`RAW_ERROR_KEY`] context key. It is never rethrown.
    pub async fn and_then<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        T: Clone,
        F: FnOnce(T, Outcome<T>) -> Fut,
        Fut: Future<Output = OutcomeResult<U>>,
    {
        if !self.success {
            return self.recast();
        }
        let Some(value) = self.value.clone() else {
            return self.recast();
        };

        match f(value, self.clone()).await {
            Ok(next) => {
                let Outcome {
                    kind,
                    success,
                    value,
                    error,
                    context: next_context,
                    use_case,
                } = next;
                let mut context = self.context;
                for (key, val) in next_context {
                    context.insert(key, val);
                }
                Outcome {
                    kind,
                    success,
                    value,
                    error,
                    context,
                    use_case,
                }
            }
            Err(err) => {
                warn!(use_case = %self.use_case, error = %err, "chained step failed unexpectedly");
                let rendered = err.to_string();
                let mut context = self.context;
                context.insert(RAW_ERROR_KEY.to_string(), Value::String(rendered));
                Outcome {
                    kind: OutcomeKind::UNEXPECTED_ERROR,
                    success: false,
                    value: None,
                    error: ErrorPayload::from(err),
                    context,
                    use_case: self.use_case,
                }
            }
        }
    }

    /// Chains a fallible step onto a success outcome.
    #[deprecated(note = "use `and_then` instead")]
    pub async fn exec_use_case<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        T: Clone,
        F: FnOnce(T, Outcome<T>) -> Fut,
        Fut: Future<Output = OutcomeResult<U>>,
    {
        self.and_then(f).await
    }

    /// Runs `f` for side effects if this outcome is a success.
    ///
    /// Always returns the outcome unchanged, whichever branch was taken.
    /// Unlike [`Outcome::and_then`], errors raised by the callback are the
    /// caller's responsibility.
    #[must_use]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T, &Self),
    {
        if self.success {
            if let Some(value) = &self.value {
                f(value, &self);
            }
        }
        self
    }

    /// Runs `f` for side effects if this outcome is a `FAILURE`-tagged failure.
    #[must_use]
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorPayload, &Self),
    {
        self.on_failure_of(OutcomeKind::FAILURE, f)
    }

    /// Runs `f` for side effects if this outcome is a failure with the given tag.
    #[must_use]
    pub fn on_failure_of<F>(self, kind: impl Into<OutcomeKind>, f: F) -> Self
    where
        F: FnOnce(&ErrorPayload, &Self),
    {
        if !self.success && self.kind == kind.into() {
            f(&self.error, &self);
        }
        self
    }
}

impl Outcome<()> {
    /// Creates a success outcome with no value payload.
    #[must_use]
    pub fn success_empty() -> Self {
        Self::success(())
    }
}
