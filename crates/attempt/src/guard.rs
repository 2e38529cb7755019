use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::{Error, RecoveryPolicy, Try};

/// Run `f`, turning a recoverable panic into a `Failure` and re-raising a fatal one unchanged.
///
/// This is the only place the crate catches an unwind. `f` is wrapped in `AssertUnwindSafe`:
/// on a captured panic nothing `f` touched is observed again through the returned `Try`.
pub(crate) fn guard<T, P, F>(policy: &P, f: F) -> Try<T>
where
    P: RecoveryPolicy + ?Sized,
    F: FnOnce() -> Try<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => {
            if policy.is_recoverable(&*payload) {
                let error = Error::from_panic(payload);
                debug!(error = %error, kind = error.kind(), "captured recoverable panic");
                Try::Failure(error)
            } else {
                warn!("fatal condition escaping guarded boundary");
                panic::resume_unwind(payload)
            }
        }
    }
}
