//! Errors returned by the MIS computation.

use thiserror::Error;

/// Edge list that is always accepted, shown to the user next to every format error.
pub const USAGE_EXAMPLE: &str = "1-2,2-3,3-1";

/// Why a single edge token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatCause {
    #[error("edge '{token}' has no '-' separator")]
    MissingSeparator { token: String },

    #[error("edge '{token}' splits into {parts} labels, expected 2")]
    TooManySeparators { token: String, parts: usize },

    #[error("edge '{token}' has an empty vertex label")]
    EmptyLabel { token: String },
}

impl FormatCause {
    /// The offending token, trimmed.
    pub fn token(&self) -> &str {
        match self {
            FormatCause::MissingSeparator { token }
            | FormatCause::TooManySeparators { token, .. }
            | FormatCause::EmptyLabel { token } => token,
        }
    }
}

/// Unified error of [`crate::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MisError {
    /// The edge list could not be parsed or turned into a graph.
    #[error("format error: {cause}. Valid example: '{}'", USAGE_EXAMPLE)]
    Format { cause: FormatCause },

    /// A solver was asked to handle a graph outside of its contract.
    /// Only produced when [`crate::config::CyclePolicy::Strict`] is in effect.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),
}

impl From<FormatCause> for MisError {
    fn from(cause: FormatCause) -> Self {
        MisError::Format { cause }
    }
}
