//! A minimal fragment that injects a fixed string into the prompt.
//!
//! ```rust
//! use postcraft_types::fragments::StaticFragment;
//! use postcraft_core::{generic::GenericRole, template::IntoPrompt};
//!
//! let messages = StaticFragment::new("Write a haiku.", GenericRole::User).into_prompt();
//! assert_eq!(messages[0].content.as_deref(), Some("Write a haiku."));
//! ```
//!
//! `From<&str>` defaults to `GenericRole::User`: composed prompts are the
//! most common static fragment here.

use postcraft_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with a chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::User))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.0.0.to_string(), self.0.1)]
    }
}
