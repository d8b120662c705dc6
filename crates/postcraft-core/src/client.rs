//! The generation boundary: one call to a backend, every outcome a value.
//!
//! [`GenerationClient`] is **generic over the backend type `B`**. The backend
//! is constructed once (credentials and all) and injected, so the client never
//! reads the environment and can be exercised in tests with any in-memory
//! [`ChatCompletionProvider`].
//!
//! ```rust
//! use postcraft_core::GenerationSettings;
//!
//! let settings = GenerationSettings::new(1500, 0.8);
//! assert_eq!(settings.max_output_tokens, 1500);
//! ```
use std::{sync::Arc, time::Duration};

use crate::{
    error::{PostcraftError, Result},
    generic::{GenericMessage, GenericRole},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    result::GenerationResult,
};

/// Sampling parameters passed through to the provider untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: Model,
    pub max_output_tokens: u32,
    /// Sampling temperature, `0.0..=2.0`.
    pub creativity: f64,
    /// Caller-supplied upper bound for the round trip. `None` waits for the
    /// provider.
    pub timeout: Option<Duration>,
}

impl GenerationSettings {
    pub const MAX_CREATIVITY: f64 = 2.0;

    pub fn new(max_output_tokens: u32, creativity: f64) -> Self {
        Self {
            model: Model::default(),
            max_output_tokens,
            creativity,
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=Self::MAX_CREATIVITY).contains(&self.creativity) {
            return Err(PostcraftError::InvalidRequest(format!(
                "creativity must be within 0.0..={}, got {}",
                Self::MAX_CREATIVITY,
                self.creativity
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(PostcraftError::InvalidRequest(
                "max_output_tokens must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct GenerationClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for GenerationClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> GenerationClient<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    pub fn from_shared(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `preamble` as the system message and `prompt` as the user message.
    ///
    /// Never fails: network, authentication, quota and format problems all
    /// come back as [`GenerationResult::Failure`].
    pub async fn generate(
        &self,
        preamble: &str,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> GenerationResult {
        let messages = vec![
            GenericMessage::new(preamble.to_owned(), GenericRole::System),
            GenericMessage::new(prompt.to_owned(), GenericRole::User),
        ];
        self.generate_messages(messages, settings).await
    }

    /// Like [`Self::generate`], for an already assembled message list.
    pub async fn generate_messages(
        &self,
        messages: Vec<GenericMessage>,
        settings: &GenerationSettings,
    ) -> GenerationResult {
        let outcome = match settings.timeout {
            Some(limit) => tokio::time::timeout(limit, self.complete(messages, settings))
                .await
                .unwrap_or(Err(PostcraftError::Timeout(limit))),
            None => self.complete(messages, settings).await,
        };

        #[cfg(feature = "tracing")]
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "generation failed");
        }

        GenerationResult::from_outcome(outcome)
    }

    async fn complete(
        &self,
        messages: Vec<GenericMessage>,
        settings: &GenerationSettings,
    ) -> Result<String> {
        settings.validate()?;

        let params = ChatCompleteParameters::new(messages, settings.model.clone())
            .with_temperature(settings.creativity)
            .with_max_tokens(settings.max_output_tokens);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            model = ?settings.model,
            max_tokens = settings.max_output_tokens,
            temperature = settings.creativity,
            "sending generation request"
        );

        let response = self.backend.chat_complete(params).await?;

        #[cfg(feature = "tracing")]
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "generation finished"
            );
        }

        response
            .content
            .content
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .ok_or(PostcraftError::EmptyResponse)
    }
}
