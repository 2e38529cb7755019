//! `Try<T>`: the outcome of a fallible computation held as a value.
//!
//! A [`Try`] is either `Success(value)` or `Failure(error)`. Chains of [`Try::map`],
//! [`Try::flat_map`] and [`Try::filter`] short-circuit on the first failure, so expected failure
//! flows through ordinary return values instead of unwinding.
//!
//! Caller-supplied closures may still panic. Every boundary that runs caller logic inside a `Try`
//! (`fallible`, `attempt`, `map`, `flat_map`, `or_else`) asks a [`RecoveryPolicy`] whether the
//! payload is recoverable. Recoverable panics are captured as [`Error`]s; fatal ones, by default
//! any [`FatalCondition`], keep unwinding and are never observed as a `Failure`.
//!
//! Capturing needs unwinding: under `panic = "abort"`, and for the runtime's own allocation
//! failure and stack overflow handling, the process ends instead.
//!
//! A captured panic has still gone through the process panic hook, so the default hook prints its
//! "thread '..' panicked at" line to stderr even though the caller only sees a `Failure`. Install
//! a quieter hook if that output is unwanted:
//!
//! ```rust
//! use attempt::Try;
//!
//! let previous = std::panic::take_hook();
//! std::panic::set_hook(Box::new(|_| {}));
//! let out = Try::<u32>::fallible(|| panic!("quiet"));
//! std::panic::set_hook(previous);
//!
//! assert!(out.is_failure());
//! ```
pub mod classification;
pub mod error;
pub mod fatal;
mod guard;
pub mod iter;
pub mod policy;
pub mod result_ext;
pub mod try_value;

// public exports
pub use classification::Classification;
pub use error::{Error, SharedError, SharedPayload};
pub use fatal::FatalCondition;
pub use policy::{CombinedPolicy, NonFatal, RecoveryPolicy, is_recoverable};
pub use result_ext::{IterTryExt, ResultExt};
pub use try_value::Try;
