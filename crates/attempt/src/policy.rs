//! Deciding whether an escaping panic payload is captured as data or allowed to crash.
//!
//! Every guarded boundary in [`Try`](crate::Try) consults a [`RecoveryPolicy`]. The default is
//! [`NonFatal`]; callers whose platform has a different notion of an unrecoverable condition can
//! pass their own policy to the `*_with` variants.
//!
//! Example
//! ```rust
//! use std::any::Any;
//! use attempt::{Classification, Try};
//!
//! // Treat every panic as fatal: only `Err` results become failures.
//! let strict = |_: &(dyn Any + Send)| Classification::Fatal;
//! let parsed = Try::attempt_with(&strict, || "12".parse::<u8>());
//! assert_eq!(parsed, Try::success(12));
//! ```
use std::any::Any;

use crate::{Classification, FatalCondition};

pub trait RecoveryPolicy: Send + Sync {
    /// Classify a panic payload that escaped caller-supplied logic.
    fn classify(&self, payload: &(dyn Any + Send)) -> Classification;

    fn is_recoverable(&self, payload: &(dyn Any + Send)) -> bool {
        self.classify(payload).is_recoverable()
    }
}

/// The default policy: a [`FatalCondition`] payload is fatal, anything else is recoverable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonFatal;

impl RecoveryPolicy for NonFatal {
    fn classify(&self, payload: &(dyn Any + Send)) -> Classification {
        if payload.is::<FatalCondition>() {
            Classification::Fatal
        } else {
            Classification::Recoverable
        }
    }
}

impl<F> RecoveryPolicy for F
where
    F: Fn(&(dyn Any + Send)) -> Classification + Send + Sync,
{
    fn classify(&self, payload: &(dyn Any + Send)) -> Classification {
        self(payload)
    }
}

/// Classify `payload` with the default [`NonFatal`] policy.
pub fn is_recoverable(payload: &(dyn Any + Send)) -> bool {
    NonFatal.is_recoverable(payload)
}

/// A policy that delegates to several others.
///
/// Behavior
/// - classify: fatal as soon as any inner policy says fatal; with no inner policies, falls back
///   to [`NonFatal`].
///
/// ```rust
/// use std::any::Any;
/// use attempt::{Classification, CombinedPolicy, NonFatal, RecoveryPolicy};
///
/// struct Timeout;
/// let policy = CombinedPolicy::new()
///     .push(NonFatal)
///     .push(|p: &(dyn Any + Send)| {
///         if p.is::<Timeout>() { Classification::Fatal } else { Classification::Recoverable }
///     });
/// assert!(!policy.is_recoverable(&Timeout));
/// assert!(policy.is_recoverable(&"plain panic"));
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn RecoveryPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self { policies: Vec::new() }
    }

    /// Pre-allocate room for `capacity` inner policies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            policies: Vec::with_capacity(capacity),
        }
    }

    /// Build from policies that are already boxed, consulted in order.
    pub fn from_vec(policies: Vec<Box<dyn RecoveryPolicy>>) -> Self {
        Self { policies }
    }

    /// Append `policy`, boxing it.
    pub fn push<P: RecoveryPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    /// Append a policy that is already boxed.
    pub fn add_boxed(mut self, policy: Box<dyn RecoveryPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl RecoveryPolicy for CombinedPolicy {
    fn classify(&self, payload: &(dyn Any + Send)) -> Classification {
        if self.policies.is_empty() {
            return NonFatal.classify(payload);
        }
        let any_fatal = self
            .policies
            .iter()
            .any(|p| p.classify(payload) == Classification::Fatal);
        if any_fatal {
            Classification::Fatal
        } else {
            Classification::Recoverable
        }
    }
}

impl std::fmt::Debug for CombinedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedPolicy")
            .field("policies", &self.policies.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn payload<T: Any + Send>(value: T) -> Box<dyn Any + Send> {
        Box::new(value)
    }

    #[test]
    fn non_fatal_rejects_every_fatal_condition() {
        for condition in [
            FatalCondition::ResourceExhausted("heap".into()),
            FatalCondition::ThreadTerminated("worker-3".into()),
            FatalCondition::LinkFailure("libssl".into()),
        ] {
            assert!(!is_recoverable(&*payload(condition)));
        }
    }

    #[test]
    fn non_fatal_accepts_ordinary_payloads() {
        assert!(is_recoverable(&*payload("index out of bounds")));
        assert!(is_recoverable(&*payload(String::from("bad input"))));
        assert!(is_recoverable(&*payload(Error::msg("business rule"))));
        assert!(is_recoverable(&*payload(7_i32)));
    }

    #[test]
    fn closures_are_policies() {
        let everything_fatal = |_: &(dyn Any + Send)| Classification::Fatal;
        assert!(!everything_fatal.is_recoverable(&*payload("anything")));
    }

    #[test]
    fn empty_combined_policy_behaves_like_non_fatal() {
        let policy = CombinedPolicy::new();
        assert!(policy.is_empty());
        assert!(policy.is_recoverable(&*payload("boom")));
        assert!(!policy.is_recoverable(&*payload(FatalCondition::LinkFailure("x".into()))));
    }

    #[test]
    fn combined_policy_is_fatal_when_any_member_is() {
        let strings_are_fatal = |p: &(dyn Any + Send)| {
            if p.is::<String>() {
                Classification::Fatal
            } else {
                Classification::Recoverable
            }
        };
        let policy = CombinedPolicy::with_capacity(2)
            .push(NonFatal)
            .add_boxed(Box::new(strings_are_fatal));

        assert_eq!(policy.len(), 2);
        assert!(!policy.is_recoverable(&*payload(String::from("owned"))));
        assert!(!policy.is_recoverable(&*payload(FatalCondition::ThreadTerminated("t".into()))));
        assert!(policy.is_recoverable(&*payload("static")));
    }

    #[test]
    fn combined_policy_from_boxed_policies() {
        let link_only = |p: &(dyn Any + Send)| {
            if let Some(FatalCondition::LinkFailure(_)) = p.downcast_ref::<FatalCondition>() {
                Classification::Fatal
            } else {
                Classification::Recoverable
            }
        };
        let boxed: Box<dyn RecoveryPolicy> = Box::new(link_only);
        let policy = CombinedPolicy::from_vec(vec![boxed]);

        assert_eq!(policy.len(), 1);
        assert!(!policy.is_recoverable(&*payload(FatalCondition::LinkFailure("x".into()))));
        // The only member decides: other fatal conditions pass as recoverable.
        assert!(policy.is_recoverable(&*payload(FatalCondition::ThreadTerminated("t".into()))));
    }
}
