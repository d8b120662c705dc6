//! Typed request descriptor for Reddit content.
//!
//! Every preference field is individually optional. An absent or blank field
//! is simply left out of the composed prompt; no combination of fields is an
//! error.
//!
//! ```rust
//! use postcraft_types::request::{PersonaPreferences, PostType, RequestDescriptor};
//!
//! let request = RequestDescriptor::new("budgeting tips", "personalfinance")
//!     .with_post_type(PostType::FirstPost)
//!     .with_persona(PersonaPreferences::new().with_kind("everyman"));
//!
//! assert_eq!(request.post_type.as_str(), "first_post");
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of Reddit content to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    #[default]
    FirstPost,
    Comment,
    TextPost,
    Story,
    Advice,
    Question,
}

impl PostType {
    pub const ALL: [PostType; 6] = [
        PostType::FirstPost,
        PostType::Comment,
        PostType::TextPost,
        PostType::Story,
        PostType::Advice,
        PostType::Question,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::FirstPost => "first_post",
            PostType::Comment => "comment",
            PostType::TextPost => "text_post",
            PostType::Story => "story",
            PostType::Advice => "advice",
            PostType::Question => "question",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown post type `{0}` (expected one of first_post, comment, text_post, story, advice, question)")]
pub struct ParsePostTypeError(pub String);

impl FromStr for PostType {
    type Err = ParsePostTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PostType::ALL
            .into_iter()
            .find(|post_type| post_type.as_str() == wanted)
            .ok_or_else(|| ParsePostTypeError(s.to_owned()))
    }
}

/// Who the post should sound like it was written by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaPreferences {
    /// expert, everyman, helper, storyteller, …
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub credentials: Option<String>,
    pub tone: Option<String>,
    pub expertise_area: Option<String>,
}

impl PersonaPreferences {
    /// Tone used by interactive callers when the user leaves it blank.
    pub const DEFAULT_TONE: &'static str = "professional_but_relatable";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_credentials(mut self, credentials: impl Into<String>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    /// Set `tone`, falling back to [`Self::DEFAULT_TONE`] when it is blank.
    pub fn with_tone_or_default(self, tone: &str) -> Self {
        match tone.trim() {
            "" => self.with_tone(Self::DEFAULT_TONE),
            tone => self.with_tone(tone),
        }
    }

    pub fn with_expertise_area(mut self, expertise_area: impl Into<String>) -> Self {
        self.expertise_area = Some(expertise_area.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStrategyPreferences {
    pub content_type: Option<String>,
    pub viral_hook: Option<String>,
    pub emotional_trigger: Option<String>,
    pub story_arc: Option<String>,
    pub value_type: Option<String>,
}

impl ContentStrategyPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_viral_hook(mut self, viral_hook: impl Into<String>) -> Self {
        self.viral_hook = Some(viral_hook.into());
        self
    }

    pub fn with_emotional_trigger(mut self, emotional_trigger: impl Into<String>) -> Self {
        self.emotional_trigger = Some(emotional_trigger.into());
        self
    }

    pub fn with_story_arc(mut self, story_arc: impl Into<String>) -> Self {
        self.story_arc = Some(story_arc.into());
        self
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStrategy {
    pub hook_type: Option<String>,
    pub include_credibility: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStructure {
    pub include_tl_dr: bool,
    pub use_bullet_points: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationPreferences {
    pub title_strategy: Option<TitleStrategy>,
    pub content_structure: Option<ContentStructure>,
}

impl OptimizationPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_strategy(mut self, title_strategy: TitleStrategy) -> Self {
        self.title_strategy = Some(title_strategy);
        self
    }

    pub fn with_content_structure(mut self, content_structure: ContentStructure) -> Self {
        self.content_structure = Some(content_structure);
        self
    }
}

/// Everything needed to compose one Reddit prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub topic: String,
    /// Community name, with or without a leading `r/`.
    pub venue: String,
    #[serde(default)]
    pub post_type: PostType,
    #[serde(default)]
    pub persona: Option<PersonaPreferences>,
    #[serde(default)]
    pub content_strategy: Option<ContentStrategyPreferences>,
    #[serde(default)]
    pub optimization: Option<OptimizationPreferences>,
}

impl RequestDescriptor {
    pub fn new(topic: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            venue: venue.into(),
            post_type: PostType::default(),
            persona: None,
            content_strategy: None,
            optimization: None,
        }
    }

    pub fn with_post_type(mut self, post_type: PostType) -> Self {
        self.post_type = post_type;
        self
    }

    pub fn with_persona(mut self, persona: PersonaPreferences) -> Self {
        self.persona = Some(persona);
        self
    }

    pub fn with_content_strategy(mut self, content_strategy: ContentStrategyPreferences) -> Self {
        self.content_strategy = Some(content_strategy);
        self
    }

    pub fn with_optimization(mut self, optimization: OptimizationPreferences) -> Self {
        self.optimization = Some(optimization);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_type_round_trips_through_text() {
        for post_type in PostType::ALL {
            assert_eq!(post_type.as_str().parse::<PostType>(), Ok(post_type));
        }
        assert_eq!(" Story ".parse::<PostType>(), Ok(PostType::Story));
    }

    #[test]
    fn unknown_post_type_is_rejected() {
        let err = "meme".parse::<PostType>().unwrap_err();
        assert_eq!(err, ParsePostTypeError("meme".into()));
        assert!(err.to_string().contains("first_post"));
    }

    #[test]
    fn blank_tone_falls_back() {
        let persona = PersonaPreferences::new().with_tone_or_default("  ");
        assert_eq!(persona.tone.as_deref(), Some(PersonaPreferences::DEFAULT_TONE));

        let persona = PersonaPreferences::new().with_tone_or_default("casual");
        assert_eq!(persona.tone.as_deref(), Some("casual"));
    }

    #[test]
    fn deserializes_partial_json() {
        let request: RequestDescriptor = serde_json::from_value(serde_json::json!({
            "topic": "weight loss plateau",
            "venue": "fitness",
            "persona": { "type": "expert" },
            "optimization": { "content_structure": { "include_tl_dr": true } }
        }))
        .expect("valid descriptor");

        assert_eq!(request.post_type, PostType::FirstPost);
        assert_eq!(
            request.persona,
            Some(PersonaPreferences::new().with_kind("expert"))
        );
        assert_eq!(
            request.optimization,
            Some(OptimizationPreferences::new().with_content_structure(ContentStructure {
                include_tl_dr: true,
                use_bullet_points: false,
            }))
        );
        assert_eq!(request.content_strategy, None);
    }
}
