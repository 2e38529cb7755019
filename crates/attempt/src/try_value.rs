use std::fmt;

use crate::guard::guard;
use crate::iter::{IntoIter, Iter};
use crate::{Error, NonFatal, RecoveryPolicy};

/// The outcome of a computation that may fail: a value, or the error that stopped it.
///
/// Failures short-circuit: once a chain reaches `Failure`, every later `map`, `flat_map` and
/// `filter` hands the same failure along without calling its closure.
///
/// ```rust
/// use attempt::Try;
///
/// let bad = Try::attempt(|| "foo".parse::<i32>()).map(|i| i + 3);
/// assert!(bad.is_failure());
///
/// let good = Try::attempt(|| "123".parse::<i32>()).map(|i| i + 3);
/// assert_eq!(good, Try::success(126));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "a Try may hold a failure that should be handled"]
pub enum Try<T> {
    Success(T),
    Failure(Error),
}

impl<T> Try<T> {
    /// Run `f` and capture its outcome. A recoverable panic becomes a `Failure`; a fatal one
    /// (see [`NonFatal`]) keeps unwinding.
    pub fn fallible<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::fallible_with(&NonFatal, f)
    }

    /// [`fallible`](Self::fallible) with an explicit policy deciding which panics to capture.
    pub fn fallible_with<P, F>(policy: &P, f: F) -> Self
    where
        P: RecoveryPolicy + ?Sized,
        F: FnOnce() -> T,
    {
        guard(policy, || Try::Success(f()))
    }

    /// Like [`fallible`](Self::fallible) for computations that report failure through
    /// `Result`: an `Err(e)` becomes `Failure(Error::new(e))`.
    pub fn attempt<E, F>(f: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        Self::attempt_with(&NonFatal, f)
    }

    /// [`attempt`](Self::attempt) with an explicit policy guarding `f`.
    pub fn attempt_with<P, E, F>(policy: &P, f: F) -> Self
    where
        P: RecoveryPolicy + ?Sized,
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        guard(policy, || Try::from(f()))
    }

    /// Wrap `value` as a success. Nothing is run, so no policy is involved.
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Wrap `error` as a failure, unclassified.
    pub fn failure(error: Error) -> Self {
        Try::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    /// The held error, if this is a failure.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Try::Success(_) => None,
            Try::Failure(error) => Some(error),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }

    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Try::Success(value) = self {
            action(value);
        }
    }

    pub fn if_success_or_else<F, G>(&self, action: F, fallback: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Try::Success(value) => action(value),
            Try::Failure(_) => fallback(),
        }
    }

    /// Keep a success only if `predicate` holds for it.
    ///
    /// A rejected value is rendered with `Debug` in the error, so strings appear quoted:
    /// `predicate not satisfied for "abc"`.
    ///
    /// The predicate runs outside any guard; a panic inside it unwinds to the caller.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        T: fmt::Debug,
        P: FnOnce(&T) -> bool,
    {
        match self {
            Try::Success(value) => {
                if predicate(&value) {
                    Try::Success(value)
                } else {
                    Try::Failure(Error::PredicateNotSatisfied {
                        value: format!("{value:?}"),
                    })
                }
            }
            failure @ Try::Failure(_) => failure,
        }
    }

    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map_with(&NonFatal, f)
    }

    /// [`map`](Self::map) with an explicit policy guarding `f`.
    pub fn map_with<U, P, F>(self, policy: &P, f: F) -> Try<U>
    where
        P: RecoveryPolicy + ?Sized,
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => Try::fallible_with(policy, move || f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        self.flat_map_with(&NonFatal, f)
    }

    /// [`flat_map`](Self::flat_map) with an explicit policy guarding `f`.
    pub fn flat_map_with<U, P, F>(self, policy: &P, f: F) -> Try<U>
    where
        P: RecoveryPolicy + ?Sized,
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => guard(policy, move || f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_option().into_iter(),
        }
    }

    /// The success value, or whatever `fallback` returns for a failure.
    ///
    /// Unlike [`or_else`](Self::or_else), `fallback` is not guarded: if it panics, the panic
    /// reaches the caller whatever its payload.
    pub fn or_else_get<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => fallback(),
        }
    }

    /// Replace a failure with the outcome of `fallback`. A recoverable panic inside `fallback`
    /// becomes a new failure.
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Try<T>,
    {
        self.or_else_with(&NonFatal, fallback)
    }

    /// [`or_else`](Self::or_else) with an explicit policy guarding `fallback`.
    pub fn or_else_with<P, F>(self, policy: &P, fallback: F) -> Self
    where
        P: RecoveryPolicy + ?Sized,
        F: FnOnce() -> Try<T>,
    {
        match self {
            success @ Try::Success(_) => success,
            Try::Failure(_) => guard(policy, fallback),
        }
    }

    /// Expose the held error as a value. Inverting a success is a usage error and yields
    /// `Failure(Error::InversionOfSuccess)`.
    pub fn invert(self) -> Try<Error> {
        match self {
            Try::Success(_) => Try::Failure(Error::InversionOfSuccess),
            Try::Failure(error) => Try::Success(error),
        }
    }
}

impl<T> Try<Option<T>> {
    /// Present only for a success holding `Some`. Both `Success(None)` and any failure give
    /// `None`; use [`is_success`](Try::is_success) to tell them apart.
    pub fn into_flat_option(self) -> Option<T> {
        self.into_option().flatten()
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(Error::new(error)),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Error> {
    fn from(value: Try<T>) -> Self {
        value.into_result()
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => write!(f, "Success[{value}]"),
            Try::Failure(error) => write!(f, "Failure[{error}]"),
        }
    }
}
