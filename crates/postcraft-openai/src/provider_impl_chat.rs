use std::{future::Future, pin::Pin, sync::Arc};

use postcraft_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let mut response = client.chat_completion(request).await?;

            let usage_report = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: i64::from(usage.prompt_tokens),
                completion_tokens: i64::from(usage.completion_tokens),
                total_tokens: i64::from(usage.total_tokens),
            });

            if response.choices.is_empty() {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            }
            let first_choice = response.choices.swap_remove(0);

            match &first_choice.finish_reason {
                // `length` still carries usable, if truncated, text.
                None | Some(FinishReason::Stop) | Some(FinishReason::Length) => {
                    Ok(GenericChatCompletionResponse {
                        content: first_choice.message.into(),
                        usage: usage_report,
                    })
                }
                Some(FinishReason::ContentFilter) => Err(OpenAiError::Format(format!(
                    "response withheld by content filter{}",
                    first_choice
                        .message
                        .refusal
                        .map(|refusal| format!(": {refusal}"))
                        .unwrap_or_default()
                ))
                .into()),
                Some(other) => Err(OpenAiError::Format(format!(
                    "unhandled finish reason on API: {other:?}"
                ))
                .into()),
            }
        })
    }
}
