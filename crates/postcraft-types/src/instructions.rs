//! Venue and post-type instructions appended to every Reddit prompt.
//!
//! The table is evaluated top to bottom and every matching row contributes,
//! so a venue such as `FitnessFinance` receives both keyword families.
use postcraft_prompt::rules::{InstructionRules, Matcher, Rule};

use crate::request::PostType;

/// What a row of [`REDDIT_INSTRUCTIONS`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    PostType,
    Venue,
}

pub const FINANCE_KEYWORDS: &[&str] = &["finance", "invest"];
pub const FITNESS_KEYWORDS: &[&str] = &["fitness", "workout"];

pub static REDDIT_INSTRUCTIONS: InstructionRules<Subject> = InstructionRules::new(&[
    Rule::always(&[
        "Use Reddit formatting (bold, bullet points, TL;DR)",
        "End with a question to encourage engagement",
        "Keep paragraphs short and readable",
    ]),
    Rule::when(
        Subject::PostType,
        Matcher::Equals("first_post"),
        &[
            "Make the title compelling and specific",
            "Hook readers in the first sentence",
        ],
    ),
    Rule::when(
        Subject::PostType,
        Matcher::Equals("comment"),
        &[
            "Be helpful and add value to the discussion",
            "Keep it concise but informative",
        ],
    ),
    Rule::when(
        Subject::Venue,
        Matcher::ContainsAnyIgnoreCase(FINANCE_KEYWORDS),
        &[
            "Include specific numbers and data when relevant",
            "Focus on actionable financial advice",
        ],
    ),
    Rule::when(
        Subject::Venue,
        Matcher::ContainsAnyIgnoreCase(FITNESS_KEYWORDS),
        &[
            "Include before/after details if applicable",
            "Focus on practical fitness advice",
        ],
    ),
]);

/// Instruction fragments for `venue` and `post_type`, in table order.
pub fn reddit_instructions(venue: &str, post_type: PostType) -> Vec<&'static str> {
    REDDIT_INSTRUCTIONS.select(|subject| match subject {
        Subject::PostType => post_type.as_str(),
        Subject::Venue => venue,
    })
}
