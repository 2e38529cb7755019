use crate::{Error, Try};

/// Bridge a `Result` into a [`Try`].
///
/// ```rust
/// use attempt::{ResultExt, Try};
///
/// let port = "8080".parse::<u16>().into_try().filter(|p| *p >= 1024);
/// assert_eq!(port, Try::success(8080));
/// ```
pub trait ResultExt<T> {
    fn into_try(self) -> Try<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_try(self) -> Try<T> {
        Try::from(self)
    }
}

/// Iterator helpers over `Try` to reduce boilerplate at boundaries.
///
/// - `collect_successes`: eagerly collects success values, stopping at the first failure
/// - `first_failure`: scans and returns the first failure's error without allocation
pub trait IterTryExt<T>: Sized {
    fn collect_successes(self) -> Try<Vec<T>>;
    fn first_failure(self) -> Option<Error>;
}

impl<I, T> IterTryExt<T> for I
where
    I: IntoIterator<Item = Try<T>>,
{
    fn collect_successes(self) -> Try<Vec<T>> {
        let mut out = Vec::new();
        for t in self {
            match t {
                Try::Success(value) => out.push(value),
                Try::Failure(error) => return Try::Failure(error),
            }
        }
        Try::Success(out)
    }

    fn first_failure(self) -> Option<Error> {
        self.into_iter().find_map(|t| t.error().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_successes_stops_at_first_failure() {
        let first = Error::msg("first");
        let items = vec![
            Try::success(1),
            Try::failure(first.clone()),
            Try::failure(Error::msg("second")),
        ];
        assert_eq!(items.clone().collect_successes(), Try::failure(first.clone()));
        assert_eq!(items.first_failure(), Some(first));
    }

    #[test]
    fn collect_successes_gathers_all_values() {
        let items = ["1", "2", "3"].map(|s| s.parse::<u32>().into_try());
        assert_eq!(items.collect_successes(), Try::success(vec![1, 2, 3]));
    }

    #[test]
    fn first_failure_is_none_for_all_successes() {
        assert_eq!(vec![Try::success(()), Try::success(())].first_failure(), None);
    }
}
