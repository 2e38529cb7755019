/// Conditions that must never be captured as a [`Failure`](crate::Try::Failure).
///
/// Raising one of these unwinds with the condition itself as the panic payload. The default
/// [`NonFatal`](crate::NonFatal) policy recognises that payload and lets it escape every guarded
/// boundary untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FatalCondition {
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Thread terminated: {0}")]
    ThreadTerminated(String),

    #[error("Failed to link or load dependency: {0}")]
    LinkFailure(String),
}

impl FatalCondition {
    /// Unwind the current thread with `self` as the payload.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}
