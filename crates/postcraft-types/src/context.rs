//! Free-text prompts enriched with optional audience context.
use postcraft_prompt::builder::PromptBuilder;
use serde::{Deserialize, Serialize};

/// Optional hints appended to a free-text prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl ContentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    fn lines(&self) -> Vec<String> {
        [
            ("Platform", &self.platform),
            ("Target audience", &self.audience),
            ("Tone", &self.tone),
            ("Length", &self.length),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{label}: {v}"))
        })
        .collect()
    }
}

/// `prompt`, followed by an `Additional context:` block when `context` has
/// at least one non-blank field.
pub fn compose_with_context(prompt: &str, context: Option<&ContentContext>) -> String {
    let lines = context.map(ContentContext::lines).unwrap_or_default();
    if lines.is_empty() {
        return prompt.to_owned();
    }

    PromptBuilder::new()
        .add_section(prompt)
        .add_section(format!("Additional context:\n{}", lines.join("\n")))
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_context_prompt_is_unchanged() {
        assert_eq!(compose_with_context("Write a tagline", None), "Write a tagline");
        assert_eq!(
            compose_with_context("Write a tagline", Some(&ContentContext::new().with_tone(" "))),
            "Write a tagline"
        );
    }

    #[test]
    fn context_lines_keep_field_order() {
        let context = ContentContext::new()
            .with_length("short")
            .with_platform("LinkedIn")
            .with_audience("engineers");

        assert_eq!(
            compose_with_context("Write about work-life balance", Some(&context)),
            "Write about work-life balance\n\nAdditional context:\nPlatform: LinkedIn\nTarget audience: engineers\nLength: short"
        );
    }

    #[test]
    fn serializes_only_present_fields() {
        let context = ContentContext::new().with_platform("Instagram");

        assert_eq!(
            serde_json::to_value(&context).expect("serializable"),
            serde_json::json!({ "platform": "Instagram" })
        );
        assert_eq!(
            serde_json::to_value(ContentContext::new()).expect("serializable"),
            serde_json::json!({})
        );
    }
}
