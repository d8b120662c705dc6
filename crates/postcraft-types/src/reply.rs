//! Prompts for replying to an existing Reddit post.
use std::{fmt, str::FromStr};

use postcraft_prompt::builder::PromptBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest excerpt of the original post quoted in a reply prompt, in chars.
pub const MAX_QUOTED_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    Helpful,
    Supportive,
    Humorous,
    Insightful,
}

impl ResponseType {
    pub const ALL: [ResponseType; 4] = [
        ResponseType::Helpful,
        ResponseType::Supportive,
        ResponseType::Humorous,
        ResponseType::Insightful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Helpful => "helpful",
            ResponseType::Supportive => "supportive",
            ResponseType::Humorous => "humorous",
            ResponseType::Insightful => "insightful",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            ResponseType::Helpful => "Provide constructive, actionable advice",
            ResponseType::Supportive => "Offer encouragement and emotional support",
            ResponseType::Humorous => "Use appropriate humor while being helpful",
            ResponseType::Insightful => "Share valuable insights or perspectives",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown response type `{0}` (expected one of helpful, supportive, humorous, insightful)")]
pub struct ParseResponseTypeError(pub String);

impl FromStr for ResponseType {
    type Err = ParseResponseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ResponseType::ALL
            .into_iter()
            .find(|response_type| response_type.as_str() == wanted)
            .ok_or_else(|| ParseResponseTypeError(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDescriptor {
    pub original_post: String,
    #[serde(default)]
    pub response_type: ResponseType,
    #[serde(default = "ReplyDescriptor::default_max_words")]
    pub max_words: u32,
}

impl ReplyDescriptor {
    pub const DEFAULT_MAX_WORDS: u32 = 15;

    fn default_max_words() -> u32 {
        Self::DEFAULT_MAX_WORDS
    }

    pub fn new(original_post: impl Into<String>) -> Self {
        Self {
            original_post: original_post.into(),
            response_type: ResponseType::default(),
            max_words: Self::DEFAULT_MAX_WORDS,
        }
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn with_max_words(mut self, max_words: u32) -> Self {
        self.max_words = max_words;
        self
    }
}

pub fn compose_reply(reply: &ReplyDescriptor) -> String {
    PromptBuilder::new()
        .add_section("Respond to this Reddit post:")
        .add_section(format!("\"{}\"", excerpt(reply.original_post.trim())))
        .add_section(format!("Response Type: {}", reply.response_type.guidance()))
        .add_section(format!(
            "Requirements:\n\
             - Keep response to {} words maximum\n\
             - Be authentic and add genuine value\n\
             - Use minimal Reddit formatting (one **bold** word max)\n\
             - End with engaging element (question, insight, or call to action)\n\
             - Match the energy and tone of the original post",
            reply.max_words
        ))
        .add_section("Your response:")
        .finalize()
}

fn excerpt(post: &str) -> String {
    match post.char_indices().nth(MAX_QUOTED_CHARS) {
        Some((cut, _)) => format!("{}...", &post[..cut]),
        None => post.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_prompt_layout() {
        let reply = ReplyDescriptor::new("Haven't left my apartment in 5 days.")
            .with_response_type(ResponseType::Humorous)
            .with_max_words(12);

        let prompt = compose_reply(&reply);

        assert!(prompt.starts_with(
            "Respond to this Reddit post:\n\n\"Haven't left my apartment in 5 days.\"\n\nResponse Type: Use appropriate humor while being helpful\n\nRequirements:\n- Keep response to 12 words maximum\n"
        ));
        assert!(prompt.ends_with("\n\nYour response:"));
    }

    #[test]
    fn long_posts_are_cut_on_char_boundary() {
        let post = "é".repeat(MAX_QUOTED_CHARS + 20);
        let prompt = compose_reply(&ReplyDescriptor::new(post));

        let quoted = format!("\"{}...\"", "é".repeat(MAX_QUOTED_CHARS));
        assert!(prompt.contains(&quoted));
    }

    #[test]
    fn response_type_parses_case_insensitively() {
        assert_eq!("Supportive".parse::<ResponseType>(), Ok(ResponseType::Supportive));
        assert!("snarky".parse::<ResponseType>().is_err());
    }
}
