use std::borrow::Cow;

use postcraft_core::model::{Model, OpenAiModel};

pub const GPT4: &str = "gpt-4";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT35_TURBO: &str = "gpt-3.5-turbo";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(Cow::Owned(custom.trim().to_owned())),
        Model::OpenAi(openai_model) => Some(Cow::Borrowed(match openai_model {
            OpenAiModel::Gpt4 => GPT4,
            OpenAiModel::Gpt4o => GPT4_O,
            OpenAiModel::Gpt4oMini => GPT4_O_MINI,
            OpenAiModel::Gpt35Turbo => GPT35_TURBO,
        })),
    }
}
