//! Ordered `(predicate, fragments)` tables.
//!
//! A table is a `static` slice of [`Rule`]s evaluated top to bottom. Every
//! rule whose predicate holds contributes its fragments, in table order; no
//! rule short-circuits another. A rule inspects one *subject* of the request
//! (selected by the key type `K`) through a [`Matcher`].
//!
//! ```rust
//! use postcraft_prompt::rules::{InstructionRules, Matcher, Rule};
//!
//! #[derive(Clone, Copy)]
//! enum Subject { Kind, Venue }
//!
//! static RULES: InstructionRules<Subject> = InstructionRules::new(&[
//!     Rule::always(&["Be kind"]),
//!     Rule::when(Subject::Kind, Matcher::Equals("comment"), &["Be brief"]),
//!     Rule::when(Subject::Venue, Matcher::ContainsAnyIgnoreCase(&["cook"]), &["Mention recipes"]),
//! ]);
//!
//! let picked = RULES.select(|subject| match subject {
//!     Subject::Kind => "comment",
//!     Subject::Venue => "HomeCooking",
//! });
//! assert_eq!(picked, vec!["Be kind", "Be brief", "Mention recipes"]);
//! ```

/// How a rule tests its subject text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Exact, case-sensitive equality.
    Equals(&'static str),
    /// Any keyword occurs as a substring, ignoring ASCII and Unicode case.
    ContainsAnyIgnoreCase(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Matcher::Equals(expected) => subject == *expected,
            Matcher::ContainsAnyIgnoreCase(keywords) => {
                let subject = subject.to_lowercase();
                keywords
                    .iter()
                    .any(|keyword| subject.contains(&keyword.to_lowercase()))
            }
        }
    }
}

/// One row of an instruction table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<K: 'static> {
    /// `None` applies unconditionally.
    pub condition: Option<(K, Matcher)>,
    pub fragments: &'static [&'static str],
}

impl<K: 'static> Rule<K> {
    pub const fn always(fragments: &'static [&'static str]) -> Self {
        Self {
            condition: None,
            fragments,
        }
    }

    pub const fn when(subject: K, matcher: Matcher, fragments: &'static [&'static str]) -> Self {
        Self {
            condition: Some((subject, matcher)),
            fragments,
        }
    }

    fn applies<'s>(&self, subject: &impl Fn(&K) -> &'s str) -> bool {
        match &self.condition {
            None => true,
            Some((key, matcher)) => matcher.matches(subject(key)),
        }
    }
}

/// A fixed, ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct InstructionRules<K: 'static> {
    rules: &'static [Rule<K>],
}

impl<K: 'static> InstructionRules<K> {
    pub const fn new(rules: &'static [Rule<K>]) -> Self {
        Self { rules }
    }

    /// Collect the fragments of every matching rule, in table order.
    ///
    /// `subject` resolves a rule key to the text that rule inspects.
    pub fn select<'s>(&self, subject: impl Fn(&K) -> &'s str) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.applies(&subject))
            .flat_map(|rule| rule.fragments.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Key {
        Word,
    }

    static TABLE: InstructionRules<Key> = InstructionRules::new(&[
        Rule::when(Key::Word, Matcher::ContainsAnyIgnoreCase(&["b"]), &["has b"]),
        Rule::always(&["always"]),
        Rule::when(Key::Word, Matcher::Equals("abc"), &["is abc", "really"]),
        Rule::when(Key::Word, Matcher::ContainsAnyIgnoreCase(&["x", "C"]), &["has c or x"]),
    ]);

    #[test]
    fn keeps_table_order_and_applies_every_match() {
        assert_eq!(
            TABLE.select(|_| "abc"),
            vec!["has b", "always", "is abc", "really", "has c or x"]
        );
    }

    #[test]
    fn no_match_leaves_only_unconditional_rules() {
        assert_eq!(TABLE.select(|_| "zzz"), vec!["always"]);
    }

    #[test]
    fn equality_is_case_sensitive() {
        assert!(!Matcher::Equals("abc").matches("ABC"));
    }

    #[test]
    fn containment_ignores_case() {
        let matcher = Matcher::ContainsAnyIgnoreCase(&["finance"]);
        assert!(matcher.matches("PersonalFinance"));
        assert!(matcher.matches("personalfinance"));
        assert!(matcher.matches("myPersonalFinanceTips"));
        assert!(!matcher.matches("fitness"));
    }
}
