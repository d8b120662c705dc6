//! One facade for every generation use case.
//!
//! Each use case has a fixed preamble and fixed sampling settings:
//!
//! | Use case  | Preamble           | Max tokens | Creativity |
//! |-----------|--------------------|-----------:|-----------:|
//! | General   | content assistant  | 1000       | 0.7        |
//! | Reddit    | Reddit specialist  | 1500       | 0.8        |
//! | Comment   | Reddit commenter   | 200        | 0.7        |
use std::time::Duration;

use postcraft_core::{
    GenerationClient, GenerationResult, GenerationSettings,
    generic::GenericMessage,
    model::Model,
    provider::ChatCompletionProvider,
};
use postcraft_prompt::chain::PromptChain;
use postcraft_types::{
    PromptComposer, RequestDescriptor,
    context::{ContentContext, compose_with_context},
    fragments::{Preamble, StaticFragment},
    reply::{ReplyDescriptor, compose_reply},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    General,
    Reddit,
    Comment,
}

impl UseCase {
    pub fn preamble(&self) -> Preamble {
        match self {
            UseCase::General => Preamble::ContentAssistant,
            UseCase::Reddit => Preamble::RedditSpecialist,
            UseCase::Comment => Preamble::RedditCommenter,
        }
    }

    pub fn max_output_tokens(&self) -> u32 {
        match self {
            UseCase::General => 1000,
            UseCase::Reddit => 1500,
            UseCase::Comment => 200,
        }
    }

    pub fn creativity(&self) -> f64 {
        match self {
            UseCase::General | UseCase::Comment => 0.7,
            UseCase::Reddit => 0.8,
        }
    }
}

/// Composer, client and canonical settings in one value.
///
/// Cheap to clone; every call is independent and holds no session state.
#[derive(Debug)]
pub struct ContentAgent<B> {
    client: GenerationClient<B>,
    model: Model,
    timeout: Option<Duration>,
}

impl<B> Clone for ContentAgent<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            model: self.model.clone(),
            timeout: self.timeout,
        }
    }
}

impl<B> ContentAgent<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self::from_client(GenerationClient::new(backend))
    }

    pub fn from_client(client: GenerationClient<B>) -> Self {
        Self {
            client,
            model: Model::default(),
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

    pub fn client(&self) -> &GenerationClient<B> {
        &self.client
    }

    pub fn settings(&self, use_case: UseCase) -> GenerationSettings {
        let settings = GenerationSettings::new(use_case.max_output_tokens(), use_case.creativity())
            .with_model(self.model.clone());
        match self.timeout {
            Some(timeout) => settings.with_timeout(timeout),
            None => settings,
        }
    }

    /// Free-text prompt with the general content preamble.
    pub async fn generate_content(&self, prompt: &str) -> GenerationResult {
        self.run(UseCase::General, prompt).await
    }

    pub async fn generate_with_context(
        &self,
        prompt: &str,
        context: Option<&ContentContext>,
    ) -> GenerationResult {
        self.run(UseCase::General, &compose_with_context(prompt, context))
            .await
    }

    pub async fn generate_reddit_content(&self, request: &RequestDescriptor) -> GenerationResult {
        self.run(UseCase::Reddit, &PromptComposer::compose(request))
            .await
    }

    pub async fn generate_comment(&self, reply: &ReplyDescriptor) -> GenerationResult {
        self.run(UseCase::Comment, &compose_reply(reply)).await
    }

    async fn run(&self, use_case: UseCase, prompt: &str) -> GenerationResult {
        let messages = PromptChain::new()
            .with(use_case.preamble())
            .with(StaticFragment::from(prompt))
            .build();

        self.client
            .generate_messages(messages, &self.settings(use_case))
            .await
    }
}
