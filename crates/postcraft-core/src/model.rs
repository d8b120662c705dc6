//! Model identifiers.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"gpt-4"`; each provider crate maps the variants onto its own
//! naming scheme (`postcraft-openai::model_map`).
//!
//! ```rust
//! use postcraft_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4),
//!            Model::OpenAi(OpenAiModel::Gpt4));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – models the OpenAI backend knows by name.
/// * `Custom` – any other model name, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(String),
}

impl Default for Model {
    fn default() -> Self {
        Model::OpenAi(OpenAiModel::Gpt4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4,
    Gpt4o,
    Gpt4oMini,
    Gpt35Turbo,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
