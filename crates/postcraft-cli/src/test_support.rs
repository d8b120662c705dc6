use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use postcraft::{
    error::{PostcraftError, Result},
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

pub type Seen = Arc<Mutex<Vec<ChatCompleteParameters<GenericMessage>>>>;

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Text(&'static str),
    Fail(&'static str),
}

/// Records every request and answers each one with the same [`Reply`].
pub struct ScriptedProvider {
    reply: Reply,
    seen: Seen,
}

impl ScriptedProvider {
    pub fn new(reply: Reply) -> (Self, Seen) {
        let seen = Seen::default();
        (
            Self {
                reply,
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl ChatCompletionProvider for ScriptedProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let ChatCompleteParameters {
            messages,
            model,
            temperature,
            max_tokens,
        } = params;
        self.seen.lock().unwrap().push(ChatCompleteParameters {
            messages: messages.into_iter().map(Into::into).collect(),
            model,
            temperature,
            max_tokens,
        });

        let reply = self.reply;
        Box::pin(async move {
            match reply {
                Reply::Text(text) => Ok(GenericChatCompletionResponse {
                    content: GenericMessage::new(text.into(), GenericRole::Assistant),
                    usage: None,
                }),
                Reply::Fail(cause) => Err(PostcraftError::Backend(cause.into())),
            }
        })
    }
}
