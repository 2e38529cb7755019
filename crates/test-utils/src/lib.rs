//! Shared scaffolding for the `attempt` test suites.
use std::cell::Cell;
use std::num::ParseIntError;

use attempt::{Error, FatalCondition};

/**
Install a basic tracing subscriber if none is set yet. Honors RUST_LOG-like env filters.
Returns true if a subscriber was installed by this call, false if one already existed.
*/
pub fn init_tracing_once() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok()
}

/// Counts how many times a closure under test was invoked.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

/// Parse an `i32`, raising the parse error by unwinding on bad input.
pub fn parse_int(input: &str) -> i32 {
    match input.parse::<i32>() {
        Ok(n) => n,
        Err(e) => raise_parse_error(e),
    }
}

fn raise_parse_error(e: ParseIntError) -> ! {
    tracing::trace!(error = %e, "raising parse error");
    Error::new(e).raise()
}

pub fn raise_resource_exhausted() -> ! {
    FatalCondition::ResourceExhausted("execution engine out of memory".into()).raise()
}

pub fn raise_thread_terminated() -> ! {
    FatalCondition::ThreadTerminated("forced stop".into()).raise()
}

pub fn raise_link_failure() -> ! {
    FatalCondition::LinkFailure("libmissing.so".into()).raise()
}

/// Every fatal raiser, for tests that sweep all of them.
pub const FATAL_RAISERS: [fn() -> !; 3] = [
    raise_resource_exhausted,
    raise_thread_terminated,
    raise_link_failure,
];

/// Run `f` and return the fatal condition it unwound with.
///
/// Panics if `f` returned normally or unwound with any other payload.
pub fn expect_fatal<R>(f: impl FnOnce() -> R) -> FatalCondition {
    let payload = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a fatal condition to escape, but the call returned"),
        Err(payload) => payload,
    };
    match payload.downcast::<FatalCondition>() {
        Ok(condition) => *condition,
        Err(_) => panic!("unwound with a payload that is not a FatalCondition"),
    }
}

/// Run `f` and return the panic message of any non-fatal unwind.
pub fn expect_panic_message<R>(f: impl FnOnce() -> R) -> String {
    let payload = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the call to unwind"),
        Err(payload) => payload,
    };
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        panic!("unwound with a non-string payload")
    }
}
