//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](postcraft_core::template::IntoPrompt).
//!
//! ```text
//! ┌───────────────┐    IntoPrompt     ┌────────────────┐
//! │ Preamble      │ ─────────────────►│ Vec<Message>   │
//! ├───────────────┤                   ├────────────────┤
//! │ StaticFragment│ ─────────────────►│ Vec<Message>   │
//! └───────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! ```rust
//! use postcraft_prompt::chain::PromptChain;
//! use postcraft_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("You are a helpful bot.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Write a haiku.".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role, GenericRole::System);
//! ```
use postcraft_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors, in order.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
