mod chat_complete;

pub use chat_complete::{ChatCompleteParameters, ChatCompletionProvider};
