//! # Outcome Core
//!
//! Functional outcome handling for application code that wants explicit,
//! composable error propagation instead of raised errors: a discriminated
//! [`Outcome`] wrapper for success/failure results, a [`Context`] snapshot
//! recording a use case's input and output, and a [`UseCase`] abstraction
//! that runs a unit of business logic and captures its outcome uniformly.
//!
//! Expected failures travel as data and short-circuit [`Outcome::and_then`]
//! chains; unexpected errors are intercepted at the chaining boundary and
//! normalized into `UNEXPECTED_ERROR` outcomes, never propagated.
//!
//! ```
//! use outcome_core::Outcome;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = Outcome::success(21)
//!     .and_then(|value, _| async move { Ok(Outcome::success(value * 2)) })
//!     .await
//!     .on_success(|value, _| println!("got {value}"));
//!
//! assert_eq!(outcome.value(), Some(&42));
//! # }
//! ```

pub mod context;
pub mod error;
pub mod outcome;
pub mod promise;
pub mod result;
pub mod telemetry;
pub mod usecase;

pub use context::*;
pub use error::*;
pub use outcome::*;
pub use promise::*;
pub use result::*;
pub use telemetry::*;
pub use usecase::*;
