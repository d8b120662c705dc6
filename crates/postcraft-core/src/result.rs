use std::fmt::{self, Display};

use serde::Serialize;

use crate::error::Result;

/// Outcome of exactly one generation call.
///
/// Failures are ordinary values: the message is already phrased for an end
/// user and can be printed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    Success { text: String },
    Failure { message: String },
}

impl GenerationResult {
    /// Leading phrase of every failure message.
    pub const FAILURE_PREFIX: &'static str = "Error generating content";

    pub fn failure(cause: impl Display) -> Self {
        GenerationResult::Failure {
            message: format!("{}: {cause}", Self::FAILURE_PREFIX),
        }
    }

    pub fn from_outcome(outcome: Result<String>) -> Self {
        match outcome {
            Ok(text) => GenerationResult::Success { text },
            Err(err) => Self::failure(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }

    /// Generated text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { text } => Some(text),
            GenerationResult::Failure { .. } => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<String, String> {
        match self {
            GenerationResult::Success { text } => Ok(text),
            GenerationResult::Failure { message } => Err(message),
        }
    }
}

impl Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationResult::Success { text } => f.write_str(text),
            GenerationResult::Failure { message } => f.write_str(message),
        }
    }
}
