//! Deterministic rendering of a [`RequestDescriptor`] into one instruction
//! string.
//!
//! The prompt is a sequence of sections separated by a blank line, always in
//! this order:
//!
//! 1. header – always present,
//! 2. `Persona:` – when at least one persona field is set,
//! 3. `Content Strategy:` – when at least one strategy field is set,
//! 4. `Optimization:` – when the title or structure sub-block renders,
//! 5. `Reddit Instructions:` – always present.
//!
//! ```rust
//! use postcraft_types::{PromptComposer, RequestDescriptor};
//!
//! let prompt = PromptComposer::compose(&RequestDescriptor::new("budgeting tips", "personalfinance"));
//! assert!(prompt.starts_with(r#"Create a Reddit first_post about "budgeting tips" for r/personalfinance"#));
//! ```
use postcraft_prompt::builder::{Fragments, PromptBuilder};

use crate::{
    instructions::reddit_instructions,
    request::{
        ContentStrategyPreferences, OptimizationPreferences, PersonaPreferences, RequestDescriptor,
    },
};

/// Community marker placed in front of the venue name.
pub const VENUE_PREFIX: &str = "r/";

/// Renders Reddit request descriptors. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn compose(request: &RequestDescriptor) -> String {
        PromptBuilder::new()
            .add_section(Self::header(request))
            .add_labeled_section(
                "Persona",
                &request.persona.as_ref().map(Self::persona).unwrap_or_default(),
            )
            .add_labeled_section(
                "Content Strategy",
                &request
                    .content_strategy
                    .as_ref()
                    .map(Self::content_strategy)
                    .unwrap_or_default(),
            )
            .add_labeled_section(
                "Optimization",
                &request
                    .optimization
                    .as_ref()
                    .map(Self::optimization)
                    .unwrap_or_default(),
            )
            .add_section(Self::instructions(request))
            .finalize()
    }

    fn header(request: &RequestDescriptor) -> String {
        format!(
            "Create a Reddit {} about \"{}\" for {VENUE_PREFIX}{}",
            request.post_type,
            request.topic.trim(),
            venue_name(&request.venue)
        )
    }

    pub fn persona(persona: &PersonaPreferences) -> Fragments {
        let mut fragments = Fragments::new();
        fragments.push_labeled("Type", persona.kind.as_deref());
        fragments.push_labeled("Credentials", persona.credentials.as_deref());
        fragments.push_labeled("Tone", persona.tone.as_deref());
        fragments.push_labeled("Expertise", persona.expertise_area.as_deref());
        fragments
    }

    pub fn content_strategy(strategy: &ContentStrategyPreferences) -> Fragments {
        let mut fragments = Fragments::new();
        fragments.push_labeled("Content Type", strategy.content_type.as_deref());
        fragments.push_labeled("Viral Hook", strategy.viral_hook.as_deref());
        fragments.push_labeled("Emotional Trigger", strategy.emotional_trigger.as_deref());
        fragments.push_labeled("Story Arc", strategy.story_arc.as_deref());
        fragments.push_labeled("Value Type", strategy.value_type.as_deref());
        fragments
    }

    pub fn optimization(optimization: &OptimizationPreferences) -> Fragments {
        let mut title = Fragments::new();
        if let Some(strategy) = &optimization.title_strategy {
            title.push_labeled("Hook", strategy.hook_type.as_deref());
            title.push_flag(strategy.include_credibility, "Include credibility");
        }

        let mut structure = Fragments::new();
        if let Some(layout) = &optimization.content_structure {
            structure.push_flag(layout.include_tl_dr, "Include TL;DR");
            structure.push_flag(layout.use_bullet_points, "Use bullet points");
        }

        let mut fragments = Fragments::new();
        fragments.push_labeled("Title", title.joined().as_deref());
        fragments.push_labeled("Structure", structure.joined().as_deref());
        fragments
    }

    fn instructions(request: &RequestDescriptor) -> String {
        let fragments: Fragments = reddit_instructions(&request.venue, request.post_type)
            .into_iter()
            .collect();
        format!(
            "Reddit Instructions: {}",
            fragments.joined().unwrap_or_default()
        )
    }
}

/// Venue without surrounding whitespace or an already present `r/` marker,
/// whatever its case.
fn venue_name(venue: &str) -> &str {
    let venue = venue.trim();
    let unrooted = venue.strip_prefix('/').unwrap_or(venue);
    match unrooted.get(..VENUE_PREFIX.len()) {
        Some(marker) if marker.eq_ignore_ascii_case(VENUE_PREFIX) => {
            &unrooted[VENUE_PREFIX.len()..]
        }
        _ => venue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ContentStructure, PostType, TitleStrategy};

    const FINANCE_INSTRUCTIONS: &str = "Reddit Instructions: Use Reddit formatting (bold, bullet points, TL;DR); End with a question to encourage engagement; Keep paragraphs short and readable; Make the title compelling and specific; Hook readers in the first sentence; Include specific numbers and data when relevant; Focus on actionable financial advice";

    fn base() -> RequestDescriptor {
        RequestDescriptor::new("budgeting tips", "personalfinance")
    }

    #[test]
    fn bare_request_is_header_plus_instructions() {
        let prompt = PromptComposer::compose(&base());

        assert_eq!(
            prompt,
            format!(
                "Create a Reddit first_post about \"budgeting tips\" for r/personalfinance\n\n{FINANCE_INSTRUCTIONS}"
            )
        );
    }

    #[test]
    fn composing_twice_is_byte_identical() {
        let request = base()
            .with_persona(PersonaPreferences::new().with_kind("expert").with_tone("dry"))
            .with_content_strategy(ContentStrategyPreferences::new().with_viral_hook("secret"));

        assert_eq!(PromptComposer::compose(&request), PromptComposer::compose(&request));
    }

    #[test]
    fn empty_preference_objects_render_nothing() {
        let request = base()
            .with_persona(PersonaPreferences {
                kind: Some(String::new()),
                credentials: None,
                tone: Some("  ".into()),
                expertise_area: None,
            })
            .with_content_strategy(ContentStrategyPreferences::new())
            .with_optimization(OptimizationPreferences::new());

        assert_eq!(PromptComposer::compose(&request), PromptComposer::compose(&base()));
        assert!(!PromptComposer::compose(&request).contains("Persona"));
    }

    #[test]
    fn all_false_optimization_is_omitted() {
        let request = base().with_optimization(
            OptimizationPreferences::new().with_content_structure(ContentStructure::default()),
        );

        assert!(!PromptComposer::compose(&request).contains("Optimization"));

        let request = base().with_optimization(
            OptimizationPreferences::new()
                .with_title_strategy(TitleStrategy::default())
                .with_content_structure(ContentStructure::default()),
        );

        assert!(!PromptComposer::compose(&request).contains("Optimization"));
    }

    #[test]
    fn full_request_renders_sections_in_order() {
        let request = RequestDescriptor::new("student loan forgiveness success", "personalfinance")
            .with_persona(
                PersonaPreferences::new()
                    .with_kind("everyman")
                    .with_tone("relatable")
                    .with_expertise_area("personal_finance"),
            )
            .with_content_strategy(
                ContentStrategyPreferences::new()
                    .with_content_type("personal_story")
                    .with_viral_hook("transformation")
                    .with_emotional_trigger("inspiration")
                    .with_story_arc("struggle_to_success"),
            )
            .with_optimization(
                OptimizationPreferences::new()
                    .with_title_strategy(TitleStrategy {
                        hook_type: Some("specific_number".into()),
                        include_credibility: true,
                    })
                    .with_content_structure(ContentStructure {
                        include_tl_dr: true,
                        use_bullet_points: true,
                    }),
            );

        let sections: Vec<String> = PromptComposer::compose(&request)
            .split("\n\n")
            .map(str::to_owned)
            .collect();

        assert_eq!(
            sections,
            vec![
                "Create a Reddit first_post about \"student loan forgiveness success\" for r/personalfinance".to_owned(),
                "Persona: Type: everyman; Tone: relatable; Expertise: personal_finance".to_owned(),
                "Content Strategy: Content Type: personal_story; Viral Hook: transformation; Emotional Trigger: inspiration; Story Arc: struggle_to_success".to_owned(),
                "Optimization: Title: Hook: specific_number; Include credibility; Structure: Include TL;DR; Use bullet points".to_owned(),
                FINANCE_INSTRUCTIONS.to_owned(),
            ]
        );
    }

    #[test]
    fn structure_only_optimization() {
        let request = base().with_optimization(OptimizationPreferences::new().with_content_structure(
            ContentStructure {
                include_tl_dr: false,
                use_bullet_points: true,
            },
        ));

        assert!(
            PromptComposer::compose(&request)
                .contains("\n\nOptimization: Structure: Use bullet points\n\n")
        );
    }

    #[test]
    fn venue_marker_is_not_doubled() {
        for venue in ["r/fitness", "/r/fitness", "R/fitness", "/R/fitness", " fitness "] {
            let request = RequestDescriptor::new("plateaus", venue).with_post_type(PostType::Advice);
            assert!(
                PromptComposer::compose(&request)
                    .starts_with("Create a Reddit advice about \"plateaus\" for r/fitness\n\n"),
                "{venue}"
            );
        }
    }

    #[test]
    fn composing_does_not_touch_the_request() {
        let persona = PersonaPreferences::new()
            .with_kind("expert")
            .with_credentials("certified_personal_trainer");
        let request = base().with_persona(persona.clone());

        let first = PromptComposer::compose(&request);
        let second = PromptComposer::compose(&request);

        assert_eq!(request.persona.as_ref(), Some(&persona));
        assert_eq!(first, second);
        assert!(first.contains("Persona: Type: expert; Credentials: certified_personal_trainer"));
    }
}
