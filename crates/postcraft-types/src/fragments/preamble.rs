//! Fixed role preambles sent as the system message.
//!
//! The texts live in `data/role/*.md` and are embedded at compile time.
//!
//! ```rust
//! use postcraft_types::fragments::Preamble;
//! use postcraft_core::{generic::GenericRole, template::IntoPrompt};
//!
//! let messages = Preamble::RedditSpecialist.into_prompt();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].role, GenericRole::System);
//! ```
use postcraft_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

const CONTENT_ASSISTANT: &str = include_str!("../../data/role/content_assistant.md");
const REDDIT_SPECIALIST: &str = include_str!("../../data/role/reddit_specialist.md");
const REDDIT_COMMENTER: &str = include_str!("../../data/role/reddit_commenter.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preamble {
    /// General content-creation assistant (posts, captions, copy).
    ContentAssistant,
    /// Reddit virality specialist used for composed Reddit prompts.
    RedditSpecialist,
    /// One-liner commenter used for replies.
    RedditCommenter,
}

impl Preamble {
    pub fn text(&self) -> &'static str {
        match self {
            Preamble::ContentAssistant => CONTENT_ASSISTANT,
            Preamble::RedditSpecialist => REDDIT_SPECIALIST,
            Preamble::RedditCommenter => REDDIT_COMMENTER,
        }
        .trim()
    }
}

impl IntoPrompt for Preamble {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.text().to_owned(), GenericRole::System)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preambles_are_distinct_and_trimmed() {
        let texts = [
            Preamble::ContentAssistant.text(),
            Preamble::RedditSpecialist.text(),
            Preamble::RedditCommenter.text(),
        ];
        for text in texts {
            assert!(!text.is_empty());
            assert_eq!(text, text.trim());
        }
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert!(texts[1].starts_with("You are a Reddit content creation expert"));
    }
}
