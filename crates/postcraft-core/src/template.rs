//! Turning values into chat messages.
//!
//! Fragments (a preamble, a composed user prompt, …) implement [`IntoPrompt`]
//! so they can be lined up with `postcraft_prompt::chain::PromptChain` and
//! handed to the [`GenerationClient`](crate::GenerationClient) as one ordered
//! message list.

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`GenericMessage`](crate::generic::GenericMessage) can be passed
/// anywhere a prompt is expected.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
