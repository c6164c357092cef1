use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Phrase,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Phrase => "phrase",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Connotation {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Connotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Connotation::Positive => "positive",
            Connotation::Negative => "negative",
            Connotation::Neutral => "neutral",
        };
        write!(f, "{label}")
    }
}

/// One vocabulary entry. Reference data: loaded once, never mutated.
/// Identity is the exact `word` string (case-sensitive).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
    #[serde(rename = "type")]
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub antonym: Option<String>,
    #[serde(default)]
    pub collocation: Option<String>,
    #[serde(default)]
    pub connotation: Option<Connotation>,
    #[serde(default)]
    pub forms: BTreeMap<PartOfSpeech, String>,
    #[serde(default)]
    pub form_examples: BTreeMap<PartOfSpeech, String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            pos,
            example: None,
            antonym: None,
            collocation: None,
            connotation: None,
            forms: BTreeMap::new(),
            form_examples: BTreeMap::new(),
        }
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn antonym(&self) -> Option<&str> {
        self.antonym.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn collocation(&self) -> Option<&str> {
        self.collocation.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Populated surface forms, empty strings skipped.
    pub fn populated_forms(&self) -> Vec<(PartOfSpeech, &str)> {
        self.forms
            .iter()
            .filter(|(_, form)| !form.trim().is_empty())
            .map(|(pos, form)| (*pos, form.as_str()))
            .collect()
    }

    /// Whether the entry carries enough forms for a morphology question.
    pub fn has_forms(&self) -> bool {
        self.populated_forms().len() >= 2
    }

    pub fn form_example(&self, pos: PartOfSpeech) -> Option<&str> {
        self.form_examples
            .get(&pos)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_from_camel_case_json() {
        let json = r#"{
            "word": "resilient",
            "meaning": "able to recover quickly",
            "type": "adjective",
            "antonym": "fragile",
            "forms": {"noun": "resilience", "adjective": "resilient"},
            "formExamples": {"noun": "Her _______ surprised everyone."}
        }"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.pos, PartOfSpeech::Adjective);
        assert_eq!(entry.antonym(), Some("fragile"));
        assert!(entry.has_forms());
        assert!(entry.form_example(PartOfSpeech::Noun).is_some());
        assert!(entry.form_example(PartOfSpeech::Verb).is_none());
        assert!(entry.example().is_none());
    }

    #[test]
    fn blank_optional_fields_do_not_count_as_capabilities() {
        let mut entry = WordEntry::new("steady", "stable", PartOfSpeech::Adjective);
        entry.antonym = Some("  ".to_string());
        entry.forms.insert(PartOfSpeech::Adverb, String::new());
        assert_eq!(entry.antonym(), None);
        assert!(!entry.has_forms());
    }
}
