use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, PoisonError};

use crate::FatalCondition;

type DynError = dyn std::error::Error + Send + Sync + 'static;

/// A recoverable error condition, carried as data by [`Try::Failure`](crate::Try::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    Panicked { message: String },

    #[error("predicate not satisfied for {value}")]
    PredicateNotSatisfied { value: String },

    #[error("inversion of a success is unsupported")]
    InversionOfSuccess,

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Raised(SharedError),

    #[error("panicked with a non-string payload")]
    Payload(SharedPayload),
}

impl Error {
    /// Wrap any error. An `Error` passed in is returned as-is rather than nested.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let boxed: Box<DynError> = Box::new(error);
        match boxed.downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Error::Raised(SharedError(Arc::from(other))),
        }
    }

    pub fn msg(message: impl fmt::Display) -> Self {
        Error::Message(message.to_string())
    }

    /// Unwind the current thread with `self` as the payload.
    ///
    /// A guarded boundary classifies the payload as recoverable and recovers this exact error
    /// as its `Failure`.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }

    /// Recover an error from a panic payload that a policy judged recoverable.
    ///
    /// A lenient policy may capture a [`FatalCondition`]; its message is kept.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(condition) = payload.downcast_ref::<FatalCondition>() {
            condition.to_string()
        } else {
            return Error::Payload(SharedPayload(Arc::new(Mutex::new(payload))));
        };
        Error::Panicked { message }
    }

    /// Whether this was captured from an unwind rather than built directly.
    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panicked { .. } | Error::Payload(_))
    }

    /// The wrapped error, when this is [`Error::Raised`].
    pub fn raised(&self) -> Option<&DynError> {
        match self {
            Error::Raised(shared) => Some(shared.as_dyn()),
            _ => None,
        }
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Panicked { .. } => "panicked",
            Error::PredicateNotSatisfied { .. } => "predicate_not_satisfied",
            Error::InversionOfSuccess => "inversion_of_success",
            Error::Message(_) => "message",
            Error::Raised(_) => "raised",
            Error::Payload(_) => "payload",
        }
    }
}

/// A caller-supplied error shared behind an `Arc`.
///
/// Two `SharedError`s are equal only when they are the same allocation: clones of one raised
/// error compare equal, two separately raised errors never do, whatever their contents.
#[derive(Clone)]
pub struct SharedError(Arc<DynError>);

impl SharedError {
    pub fn as_dyn(&self) -> &DynError {
        &*self.0
    }

    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for SharedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl PartialEq for SharedError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SharedError {}

impl Hash for SharedError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

/// A panic payload of a type `Error` has no other variant for, kept as raised.
///
/// Equality is by identity, as for [`SharedError`]. The payload is only `Send`, so access goes
/// through a lock and the typed accessors hand out clones or closure-scoped borrows.
#[derive(Clone)]
pub struct SharedPayload(Arc<Mutex<Box<dyn Any + Send>>>);

impl SharedPayload {
    pub fn is<P: Any>(&self) -> bool {
        self.with(|payload| payload.is::<P>())
    }

    /// Run `f` on the payload if it is a `P`.
    pub fn downcast_with<P: Any, R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        self.with(|payload| payload.downcast_ref::<P>().map(f))
    }

    pub fn downcast_cloned<P: Any + Clone>(&self) -> Option<P> {
        self.downcast_with(P::clone)
    }

    fn with<R>(&self, f: impl FnOnce(&(dyn Any + Send)) -> R) -> R {
        // A poisoned lock only means another reader panicked; the payload is never mutated.
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&**guard)
    }
}

impl fmt::Debug for SharedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedPayload(..)")
    }
}

impl PartialEq for SharedPayload {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SharedPayload {}

impl Hash for SharedPayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
