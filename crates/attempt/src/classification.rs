//! Verdict of a [`RecoveryPolicy`](crate::RecoveryPolicy) on an escaping panic payload.
//!
//! - Recoverable: captured and carried as the payload of a `Failure`
//! - Fatal: re-raised unchanged, never observable as a `Failure`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Recoverable,
    Fatal,
}

impl Classification {
    pub fn is_recoverable(self) -> bool {
        matches!(self, Classification::Recoverable)
    }
}
