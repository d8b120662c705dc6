use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
};

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider and parses the chat response.
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One method** – `chat_complete`, a *single* non-streaming round-trip.
///
/// The returned future must not borrow `self`; implementations clone whatever
/// shared handle they need (usually an `Arc`) into it.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
