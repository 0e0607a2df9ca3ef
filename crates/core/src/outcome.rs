//! Tagged result of a provider call.
//!
//! Adapters never fail outright. A failed call still carries a value the
//! analyzer can use, plus the message explaining why it is a fallback.

/// Outcome of one provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome<T> {
    /// The provider answered and the answer was mapped.
    Success(T),
    /// The call failed; `fallback` is the safe default to report instead.
    Degraded { error: String, fallback: T },
}

impl<T> ProviderOutcome<T> {
    pub fn degraded(error: impl Into<String>, fallback: T) -> Self {
        Self::Degraded {
            error: error.into(),
            fallback,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Degraded { error, .. } => Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
