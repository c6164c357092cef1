use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::word::{Connotation, PartOfSpeech};

/// Substitution pools for collocation distractors, keyed by the target's
/// part of speech. Verbs distinguish a partner before the target (an
/// adverb modifier) from one after it (a noun object). Best-effort
/// heuristic tables, not a contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PartnerPools {
    pub noun: Vec<String>,
    pub verb_before: Vec<String>,
    pub verb_after: Vec<String>,
    pub adjective: Vec<String>,
    pub adverb: Vec<String>,
    pub phrase: Vec<String>,
}

impl Default for PartnerPools {
    fn default() -> Self {
        Self {
            noun: strings(&[
                "gain", "lose", "build", "create", "seek", "avoid", "challenge", "damage",
                "restore", "maintain", "undermine", "exacerbate",
            ]),
            verb_before: strings(&[
                "rapidly", "gradually", "significantly", "completely", "consistently",
                "severely", "steadily", "dramatically",
            ]),
            verb_after: strings(&[
                "growth", "progress", "decline", "situation", "problem", "solution", "record",
                "pattern", "system", "process",
            ]),
            adjective: strings(&[
                "growth", "progress", "decline", "situation", "shift", "response", "outcome",
                "pressure", "demand", "behaviour", "capacity",
            ]),
            adverb: strings(&[
                "act", "respond", "behave", "operate", "perform", "react", "engage", "proceed",
                "function", "develop", "approach",
            ]),
            phrase: strings(&[
                "gain", "lose", "build", "seek", "avoid", "challenge", "damage", "restore",
                "maintain", "undermine",
            ]),
        }
    }
}

/// The fixed keyword tables the generators consult. External, swappable
/// configuration: `Default` carries the built-ins, `Deserialize` lets a
/// caller load a replacement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Lexicon {
    /// Function words skipped when hunting for a collocation partner.
    pub stop_words: HashSet<String>,
    pub partner_pools: PartnerPools,
    pub negative_cues: Vec<String>,
    pub positive_cues: Vec<String>,
    /// Per-part-of-speech blank sentences for word-form questions.
    pub form_templates: BTreeMap<PartOfSpeech, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let stop_words = ["the", "a", "an", "of", "to", "in", "for", "on", "at", "with", "by", "from"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let negative_cues = strings(&[
            "harmful", "dangerous", "damaging", "destructive", "bad", "worse", "decline",
            "loss", "collapse", "suppress", "neglect", "deplete", "unfair", "cruel", "exploit",
            "disease", "illness", "disadvantaged", "biased", "negative", "devastating",
            "shrink", "stagnate", "orphaned",
        ]);
        let positive_cues = strings(&[
            "beneficial", "good", "fulfilling", "supportive", "encouraging", "wise",
            "flourish", "satisfying", "generous", "vivid", "breakthrough", "proficient",
            "reaffirm", "harmless", "benign", "flexible", "virtuous", "achievement",
            "positive", "thriving",
        ]);

        let mut form_templates = BTreeMap::new();
        form_templates.insert(
            PartOfSpeech::Noun,
            "The _______ became a major topic of debate among scholars.".to_string(),
        );
        form_templates.insert(
            PartOfSpeech::Verb,
            "Governments need to _______ this issue before it worsens.".to_string(),
        );
        form_templates.insert(
            PartOfSpeech::Adjective,
            "The _______ approach led to unexpected improvements.".to_string(),
        );
        form_templates.insert(
            PartOfSpeech::Adverb,
            "She handled the situation _______, avoiding unnecessary conflict.".to_string(),
        );

        Self {
            stop_words,
            partner_pools: PartnerPools::default(),
            negative_cues,
            positive_cues,
            form_templates,
        }
    }
}

impl Lexicon {
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Pool to draw partner substitutions from. `partner_after` only
    /// matters for verbs; unknown combinations fall back to the noun pool.
    pub fn partner_pool(&self, pos: PartOfSpeech, partner_after: bool) -> &[String] {
        match pos {
            PartOfSpeech::Noun => &self.partner_pools.noun,
            PartOfSpeech::Verb if partner_after => &self.partner_pools.verb_after,
            PartOfSpeech::Verb => &self.partner_pools.verb_before,
            PartOfSpeech::Adjective => &self.partner_pools.adjective,
            PartOfSpeech::Adverb => &self.partner_pools.adverb,
            PartOfSpeech::Phrase => &self.partner_pools.phrase,
        }
    }

    /// Keyword classification over meaning/antonym text: exact whole-token
    /// membership (never substring), negative cues checked first,
    /// unmatched text is neutral.
    pub fn classify(&self, text: &str) -> Connotation {
        let lowered = text.to_lowercase();
        let tokens: HashSet<&str> = lowered
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '/' | '(' | ')'))
            .filter(|t| !t.is_empty())
            .collect();
        let hit = |cues: &[String]| cues.iter().any(|cue| tokens.contains(cue.to_lowercase().as_str()));
        if hit(&self.negative_cues) {
            Connotation::Negative
        } else if hit(&self.positive_cues) {
            Connotation::Positive
        } else {
            Connotation::Neutral
        }
    }

    pub fn form_template(&self, pos: PartOfSpeech) -> Option<&str> {
        self.form_templates.get(&pos).map(String::as_str)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
