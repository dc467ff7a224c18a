//! The use case abstraction and its orchestration.

use crate::context::Context;
use crate::error::ErrorPayload;
use crate::outcome::{ContextMap, Outcome, OutcomeKind, RAW_ERROR_KEY};
use crate::result::OutcomeResult;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

/// A single unit of business logic with a uniformly captured outcome.
///
/// Implementors supply [`UseCase::execute`]; callers go through
/// [`UseCase::call`], which never raises: expected failures come back as
/// failure outcomes labeled with the operation's name, and unexpected errors
/// are intercepted into `UNEXPECTED_ERROR` outcomes.
#[async_trait]
pub trait UseCase: Send + Sync {
    /// The operation's input.
    type Input: Serialize + Clone + Send + Sync + 'static;

    /// The operation's output.
    type Output: Serialize + Clone + Send + Sync + 'static;

    /// Label identifying this operation in outcomes and context snapshots.
    ///
    /// Defaults to the implementing type's short name.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// Runs the business logic.
    ///
    /// Expected failures are returned as failure outcomes; an `Err` is
    /// reserved for errors the logic did not anticipate and is intercepted
    /// by [`UseCase::call`].
    async fn execute(&self, input: Self::Input) -> OutcomeResult<Self::Output>;

    /// Runs [`UseCase::execute`] and captures its outcome uniformly.
    ///
    /// On success, the outcome's context is replaced by a single-entry map
    /// holding a [`Context`] snapshot of this invocation's input and output,
    /// keyed by [`UseCase::name`]. On failure the error, tag and context are
    /// preserved. Either way the outcome is labeled with this operation's
    /// name, and `Err` returns are normalized into `UNEXPECTED_ERROR`
    /// failures carrying the rendered error under the `rawError` context key.
    async fn call(&self, input: Self::Input) -> Outcome<Self::Output> {
        let name = self.name();
        debug!(use_case = name, "executing use case");

        match self.execute(input.clone()).await {
            Ok(outcome) if outcome.is_success() => match outcome.try_into_value() {
                Ok(value) => {
                    let snapshot = Context::new(input, value.clone());
                    let mut context = ContextMap::new();
                    context.insert(
                        name.to_string(),
                        serde_json::to_value(&snapshot).unwrap_or(Value::Null),
                    );
                    Outcome::success(value)
                        .with_context(context)
                        .with_use_case(name)
                }
                Err(other) => other.with_use_case(name),
            },
            Ok(outcome) => {
                warn!(
                    use_case = name,
                    kind = %outcome.kind(),
                    error = %outcome.error(),
                    "use case failed"
                );
                outcome.with_use_case(name)
            }
            Err(err) => {
                error!(use_case = name, error = %err, "use case raised an unexpected error");
                let rendered = err.to_string();
                let mut context = ContextMap::new();
                context.insert(RAW_ERROR_KEY.to_string(), Value::String(rendered));
                Outcome::failure_with_kind(ErrorPayload::from(err), OutcomeKind::UNEXPECTED_ERROR)
                    .with_context(context)
                    .with_use_case(name)
            }
        }
    }
}

/// Instantiates `U` with [`Default`] and runs it through [`UseCase::call`].
///
/// The static-dispatch companion to implementing [`UseCase`] on a unit or
/// `Default` type.
pub async fn dispatch<U>(input: U::Input) -> Outcome<U::Output>
where
    U: UseCase + Default,
{
    U::default().call(input).await
}

/// Strips the module path from a type name.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
