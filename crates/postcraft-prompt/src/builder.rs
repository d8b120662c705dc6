//! Builder-style helpers for assembling **plain-text prompts** out of
//! independently optional parts.
//!
//! Two levels exist:
//!
//! * [`Fragments`] collects short `Label: value` pieces on one line, joined
//!   with `; `. Absent or blank values are skipped, never rendered as
//!   `Label: `.
//! * [`PromptBuilder`] collects whole sections and joins them with a blank
//!   line. Empty sections are skipped.
//!
//! ```rust
//! use postcraft_prompt::builder::{Fragments, PromptBuilder};
//!
//! let mut persona = Fragments::new();
//! persona.push_labeled("Type", Some("expert"));
//! persona.push_labeled("Credentials", None);
//! persona.push_labeled("Tone", Some("casual"));
//!
//! let prompt = PromptBuilder::new()
//!     .add_section("Create a post")
//!     .add_labeled_section("Persona", &persona)
//!     .add_labeled_section("Strategy", &Fragments::new())
//!     .finalize();
//!
//! assert_eq!(prompt, "Create a post\n\nPersona: Type: expert; Tone: casual");
//! ```

use std::fmt::Display;

/// Separator between sections of a composed prompt.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Separator between fragments inside one section.
pub const FRAGMENT_SEPARATOR: &str = "; ";

/// Ordered, single-line list of prompt fragments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragments(Vec<String>);

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `Label: value` when `value` is present and not blank.
    pub fn push_labeled(&mut self, label: &str, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.0.push(format!("{label}: {value}"));
        }
    }

    /// Append a fixed phrase when `condition` holds.
    pub fn push_flag(&mut self, condition: bool, phrase: &str) {
        if condition {
            self.0.push(phrase.to_owned());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `None` if nothing was collected, otherwise the fragments joined with
    /// [`FRAGMENT_SEPARATOR`].
    pub fn joined(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.0.join(FRAGMENT_SEPARATOR))
    }
}

impl<S: Display> Extend<S> for Fragments {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|s| s.to_string()));
    }
}

impl<S: Display> FromIterator<S> for Fragments {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut fragments = Fragments::new();
        fragments.extend(iter);
        fragments
    }
}

/// Fluent helper that joins prompt sections with a blank line.
///
/// Every method returns `self`, enabling call-chaining. Output is emitted
/// exactly as requested; the builder does no smart formatting.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    sections: Vec<String>,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section unconditionally (unless it is empty).
    pub fn add_section(mut self, section: impl Display) -> Self {
        let section = section.to_string();
        if !section.is_empty() {
            self.sections.push(section);
        }
        self
    }

    /// Add a section only if one was produced.
    pub fn add_optional_section(self, section: Option<impl Display>) -> Self {
        match section {
            Some(section) => self.add_section(section),
            None => self,
        }
    }

    /// Add `Label: f1; f2; …`, or nothing when `fragments` is empty.
    pub fn add_labeled_section(self, label: &str, fragments: &Fragments) -> Self {
        self.add_optional_section(
            fragments
                .joined()
                .map(|joined| format!("{label}: {joined}")),
        )
    }

    /// Retrieve the assembled prompt and consume the builder.
    pub fn finalize(self) -> String {
        self.sections.join(SECTION_SEPARATOR)
    }
}
