//! Generic message and role types used by the *postcraft-core* crate.
//!
//! They mirror the concepts exposed by most chat APIs ("system", "user",
//! "assistant") and convert into provider-specific structs via plain
//! `From`/`Into`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message independent of any specific LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs.
    ///
    /// ```rust
    /// use postcraft_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.".into(),
    ///                               GenericRole::System);
    /// assert_eq!(sys.role.to_string(), "system");
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
            name: None,
        }
    }
}

/// High-level chat roles recognised by most LLM providers.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Instruction preamble defining behaviour and style.
    System,
    /// Messages produced by the model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug)]
pub struct GenericChatCompletionResponse<T> {
    pub content: T,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
