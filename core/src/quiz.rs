use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::word::{Connotation, WordEntry};

const BLANK: &str = "________";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Flashcard,
    MeaningToWord,
    Antonym,
    Collocation,
    FillIn,
    Connotation,
    WordForm,
}

/// Session flavor, deciding which question variants are in play and how
/// heavily each is weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// First exposure: recognition-heavy, no contrast questions.
    Exposure,
    /// Review: production-heavy (recall, collocation, antonym).
    Production,
    /// Flashcards only.
    DefinitionOnly,
}

/// A rendered question. Transient: built per display, discarded once
/// answered. `options` is empty for flashcards, which are resolved by a
/// self-reported knew/forgot instead of an option match.
#[derive(Debug, Clone)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub word: String,
}

/// Self-rated recall card. Always applicable; `prompt` carries the
/// example sentence when one exists and `answer` is the reveal text.
pub fn flashcard(target: &WordEntry) -> Question {
    Question {
        kind: QuestionKind::Flashcard,
        prompt: target.example().unwrap_or_default().to_string(),
        options: Vec::new(),
        answer: target.meaning.clone(),
        word: target.word.clone(),
    }
}

/// Given the meaning, pick the word. None if fewer than 3 distractor
/// words exist even after falling back past the same-pos preference.
pub fn meaning_to_word(
    target: &WordEntry,
    pool: &[WordEntry],
    rng: &mut impl Rng,
) -> Option<Question> {
    let distractors = pick_distractor_words(target, pool, rng)?;
    Some(Question {
        kind: QuestionKind::MeaningToWord,
        prompt: format!("Which word means: \"{}\"?", target.meaning),
        options: assemble(target.word.clone(), distractors, rng),
        answer: target.word.clone(),
        word: target.word.clone(),
    })
}

/// Pick the opposite of the target. Distractors are other words'
/// antonyms, same-pos preferred; the option set is deduplicated because
/// antonyms can collide across words.
pub fn antonym(target: &WordEntry, pool: &[WordEntry], rng: &mut impl Rng) -> Option<Question> {
    let answer = target.antonym()?.to_string();
    let with_antonym: Vec<&WordEntry> = pool
        .iter()
        .filter(|w| w.word != target.word && w.antonym().is_some())
        .collect();
    let same_pos: Vec<&WordEntry> = with_antonym
        .iter()
        .copied()
        .filter(|w| w.pos == target.pos)
        .collect();
    let candidates = if same_pos.len() >= 3 { same_pos } else { with_antonym };
    if candidates.len() < 3 {
        return None;
    }

    let mut options = vec![answer.clone()];
    for entry in candidates.choose_multiple(rng, 3) {
        if let Some(ant) = entry.antonym() {
            if !options.iter().any(|o| o == ant) {
                options.push(ant.to_string());
            }
        }
    }
    if options.len() < 4 {
        return None;
    }
    options.shuffle(rng);

    Some(Question {
        kind: QuestionKind::Antonym,
        prompt: format!("Which word is the opposite of \"{}\"?", target.word),
        options,
        answer,
        word: target.word.clone(),
    })
}

/// Every option contains the target span; only the nearest content word
/// around it (the partner) is swapped, using the lexicon's pos-keyed
/// substitution pools. None if fewer than 2 valid substitutions exist.
pub fn collocation(
    target: &WordEntry,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Option<Question> {
    let phrase = target.collocation()?;
    let phrase_lower = phrase.to_lowercase();
    let tokens: Vec<&str> = phrase_lower.split_whitespace().collect();
    let target_lower = target.word.to_lowercase();
    let target_tokens: Vec<&str> = target_lower.split_whitespace().collect();
    if target_tokens.is_empty() || tokens.len() < target_tokens.len() {
        return None;
    }

    // Locate the contiguous target span inside the phrase.
    let span_start = (0..=tokens.len() - target_tokens.len())
        .find(|&i| target_tokens.iter().enumerate().all(|(j, t)| tokens[i + j] == *t))?;
    let span_end = span_start + target_tokens.len() - 1;

    // Nearest content word outside the span: backward first, then forward.
    let backward = (0..span_start).rev().find(|&i| !lexicon.is_stop_word(tokens[i]));
    let partner_idx = backward
        .or_else(|| (span_end + 1..tokens.len()).find(|&i| !lexicon.is_stop_word(tokens[i])))?;

    let partner = tokens[partner_idx];
    let pool = lexicon.partner_pool(target.pos, partner_idx > span_end);
    let substitutes: Vec<&String> = pool
        .iter()
        .filter(|cand| cand.as_str() != partner && !phrase_lower.contains(cand.as_str()))
        .take(3)
        .collect();
    if substitutes.len() < 2 {
        return None;
    }

    let original_tokens: Vec<&str> = phrase.split_whitespace().collect();
    let distractors = substitutes
        .iter()
        .map(|sub| {
            let mut swapped: Vec<&str> = original_tokens.clone();
            swapped[partner_idx] = sub;
            swapped.join(" ")
        })
        .collect();

    Some(Question {
        kind: QuestionKind::Collocation,
        prompt: format!("Which phrase correctly uses \"{}\"?", target.word),
        options: assemble(phrase.to_string(), distractors, rng),
        answer: phrase.to_string(),
        word: target.word.clone(),
    })
}

/// Blank the target out of its example sentence (case-insensitive
/// whole-word match) and offer same-pos distractors.
pub fn fill_in(target: &WordEntry, pool: &[WordEntry], rng: &mut impl Rng) -> Option<Question> {
    let example = target.example()?;
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&target.word))).ok()?;
    if !pattern.is_match(example) {
        return None;
    }
    let blanked = pattern.replace(example, BLANK).into_owned();
    let distractors = pick_distractor_words(target, pool, rng)?;

    Some(Question {
        kind: QuestionKind::FillIn,
        prompt: format!("Complete the sentence: \"{blanked}\""),
        options: assemble(target.word.clone(), distractors, rng),
        answer: target.word.clone(),
        word: target.word.clone(),
    })
}

/// Judge the word's connotation. The explicit tag wins; otherwise the
/// lexicon classifies the meaning plus antonym text. Always the same
/// three options.
pub fn connotation(
    target: &WordEntry,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Option<Question> {
    let example = target.example()?;
    let verdict = target.connotation.unwrap_or_else(|| {
        let mut text = target.meaning.clone();
        if let Some(ant) = target.antonym() {
            text.push(' ');
            text.push_str(ant);
        }
        lexicon.classify(&text)
    });

    let mut options: Vec<String> = [Connotation::Positive, Connotation::Negative, Connotation::Neutral]
        .iter()
        .map(ToString::to_string)
        .collect();
    options.shuffle(rng);

    Some(Question {
        kind: QuestionKind::Connotation,
        prompt: format!(
            "What is the connotation of \"{}\"? \"{example}\"",
            target.word
        ),
        options,
        answer: verdict.to_string(),
        word: target.word.clone(),
    })
}

/// Morphology: one of the target's surface forms is the answer, the rest
/// of its forms plus other words' forms fill the distractor slots.
pub fn word_form(
    target: &WordEntry,
    pool: &[WordEntry],
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Option<Question> {
    let forms = target.populated_forms();
    if forms.len() < 2 {
        return None;
    }
    let (answer_pos, answer_form) = *forms.choose(rng)?;

    let mut candidates: Vec<String> = forms
        .iter()
        .filter(|(pos, form)| *pos != answer_pos && *form != answer_form)
        .map(|(_, form)| form.to_string())
        .collect();
    for entry in pool.iter().filter(|w| w.word != target.word) {
        for (_, form) in entry.populated_forms() {
            if form != answer_form && !candidates.iter().any(|c| c == form) {
                candidates.push(form.to_string());
            }
        }
    }
    if candidates.len() < 3 {
        return None;
    }
    let distractors: Vec<String> = candidates.choose_multiple(rng, 3).cloned().collect();

    let sentence = target
        .form_example(answer_pos)
        .map(str::to_string)
        .or_else(|| lexicon.form_template(answer_pos).map(str::to_string))
        .unwrap_or_else(|| format!("Choose the correct form: {BLANK} ({answer_pos})"));

    Some(Question {
        kind: QuestionKind::WordForm,
        prompt: format!("Which {answer_pos} form fits the blank? \"{sentence}\""),
        options: assemble(answer_form.to_string(), distractors, rng),
        answer: answer_form.to_string(),
        word: target.word.clone(),
    })
}

/// Produce one question for the target word. Variants that lack data drop
/// out of the weighted pool; an empty pool falls back to a flashcard, so
/// a question always comes back.
pub fn generate(
    target: &WordEntry,
    pool: &[WordEntry],
    mode: QuizMode,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Question {
    let mut weighted: Vec<Question> = Vec::new();
    match mode {
        QuizMode::DefinitionOnly => return flashcard(target),
        QuizMode::Exposure => {
            add(&mut weighted, Some(flashcard(target)), 2);
            add(&mut weighted, fill_in(target, pool, rng), 2);
            add(&mut weighted, connotation(target, lexicon, rng), 2);
            add(&mut weighted, meaning_to_word(target, pool, rng), 1);
            add(&mut weighted, word_form(target, pool, lexicon, rng), 1);
        }
        QuizMode::Production => {
            add(&mut weighted, meaning_to_word(target, pool, rng), 2);
            add(&mut weighted, collocation(target, lexicon, rng), 2);
            add(&mut weighted, antonym(target, pool, rng), 2);
            add(&mut weighted, Some(flashcard(target)), 1);
            add(&mut weighted, fill_in(target, pool, rng), 1);
            add(&mut weighted, connotation(target, lexicon, rng), 1);
            add(&mut weighted, word_form(target, pool, lexicon, rng), 1);
        }
    }
    weighted
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| flashcard(target))
}

fn add(pool: &mut Vec<Question>, question: Option<Question>, weight: usize) {
    if let Some(question) = question {
        for _ in 0..weight {
            pool.push(question.clone());
        }
    }
}

/// Same-pos distractors when at least 3 exist, any pos otherwise.
/// None if the pool stays under 3 after the fallback.
fn pick_distractor_words(
    target: &WordEntry,
    pool: &[WordEntry],
    rng: &mut impl Rng,
) -> Option<Vec<String>> {
    let others: Vec<&WordEntry> = pool.iter().filter(|w| w.word != target.word).collect();
    let same_pos: Vec<&WordEntry> = others
        .iter()
        .copied()
        .filter(|w| w.pos == target.pos)
        .collect();
    let candidates = if same_pos.len() >= 3 { same_pos } else { others };
    if candidates.len() < 3 {
        return None;
    }
    Some(
        candidates
            .choose_multiple(rng, 3)
            .map(|w| w.word.clone())
            .collect(),
    )
}

fn assemble(answer: String, distractors: Vec<String>, rng: &mut impl Rng) -> Vec<String> {
    let mut options = distractors;
    options.push(answer);
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::PartOfSpeech;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn entry(word: &str, meaning: &str, pos: PartOfSpeech) -> WordEntry {
        WordEntry::new(word, meaning, pos)
    }

    fn noun_pool() -> Vec<WordEntry> {
        vec![
            entry("growth", "increase in size", PartOfSpeech::Noun),
            entry("decline", "a gradual decrease", PartOfSpeech::Noun),
            entry("pattern", "a repeated arrangement", PartOfSpeech::Noun),
            entry("outcome", "the final result", PartOfSpeech::Noun),
            entry("pressure", "continuous force", PartOfSpeech::Noun),
        ]
    }

    #[test]
    fn meaning_to_word_yields_four_unique_options() {
        let pool = noun_pool();
        let mut rng = rng();
        let q = meaning_to_word(&pool[0], &pool, &mut rng).unwrap();
        assert_eq!(q.kind, QuestionKind::MeaningToWord);
        assert_eq!(q.options.len(), 4);
        let unique: HashSet<&String> = q.options.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(q.options.contains(&q.answer));
        assert_eq!(q.answer, "growth");
    }

    #[test]
    fn meaning_to_word_needs_three_distractors() {
        let pool = noun_pool()[..3].to_vec();
        let mut rng = rng();
        assert!(meaning_to_word(&pool[0], &pool, &mut rng).is_none());
    }

    #[test]
    fn meaning_to_word_falls_back_past_the_pos_preference() {
        let mut pool = noun_pool()[..2].to_vec();
        pool.push(entry("expand", "to grow larger", PartOfSpeech::Verb));
        pool.push(entry("shrink", "to grow smaller", PartOfSpeech::Verb));
        let mut rng = rng();
        // Only 1 same-pos candidate, but 3 overall.
        let q = meaning_to_word(&pool[0], &pool, &mut rng).unwrap();
        assert_eq!(q.options.len(), 4);
    }

    #[test]
    fn fill_in_blanks_the_whole_word_case_insensitively() {
        let mut pool = noun_pool();
        pool[0].example = Some("Growth of this kind rarely lasts a decade.".to_string());
        let mut rng = rng();
        let q = fill_in(&pool[0], &pool, &mut rng).unwrap();
        assert!(q.prompt.contains(BLANK));
        assert!(!q.prompt.to_lowercase().contains("growth"));
        let unique: HashSet<&String> = q.options.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(q.options.contains(&"growth".to_string()));
    }

    #[test]
    fn fill_in_rejects_substring_matches() {
        let mut pool = noun_pool();
        // "growths" contains the target but is not a whole-word match.
        pool[0].example = Some("Several growths were recorded.".to_string());
        let mut rng = rng();
        assert!(fill_in(&pool[0], &pool, &mut rng).is_none());
    }

    #[test]
    fn collocation_swaps_only_the_partner_token() {
        let mut target = entry("economic growth", "tăng trưởng kinh tế", PartOfSpeech::Noun);
        target.collocation = Some("sustained economic growth".to_string());
        let lexicon = Lexicon::default();
        let mut rng = rng();
        let q = collocation(&target, &lexicon, &mut rng).unwrap();

        assert_eq!(q.answer, "sustained economic growth");
        assert_eq!(q.options.len(), 4);
        for option in &q.options {
            assert!(option.ends_with("economic growth"), "kept span in {option:?}");
        }
        // Exactly one option keeps the real partner.
        let originals = q.options.iter().filter(|o| o.starts_with("sustained")).count();
        assert_eq!(originals, 1);
    }

    #[test]
    fn collocation_partner_scan_skips_function_words() {
        let mut target = entry("momentum", "đà phát triển", PartOfSpeech::Noun);
        target.collocation = Some("the momentum of reform".to_string());
        let lexicon = Lexicon::default();
        let mut rng = rng();
        // Backward scan hits only "the"; partner comes from the forward
        // scan ("of" skipped, "reform" chosen).
        let q = collocation(&target, &lexicon, &mut rng).unwrap();
        for option in &q.options {
            assert!(option.starts_with("the momentum of"));
        }
    }

    #[test]
    fn collocation_requires_a_phrase_containing_the_target() {
        let mut target = entry("growth", "increase", PartOfSpeech::Noun);
        target.collocation = Some("sustained economic expansion".to_string());
        let lexicon = Lexicon::default();
        assert!(collocation(&target, &lexicon, &mut rng()).is_none());
    }

    #[test]
    fn connotation_classifies_harmful_meanings_as_negative() {
        let mut target = entry("detrimental", "harmful to progress", PartOfSpeech::Adjective);
        target.example = Some("Smoking is detrimental to health.".to_string());
        let lexicon = Lexicon::default();
        let q = connotation(&target, &lexicon, &mut rng()).unwrap();
        assert_eq!(q.answer, "negative");
        assert_eq!(q.options.len(), 3);
    }

    #[test]
    fn connotation_prefers_the_explicit_tag() {
        let mut target = entry("ambitious", "harmful wording aside", PartOfSpeech::Adjective);
        target.example = Some("An ambitious plan.".to_string());
        target.connotation = Some(Connotation::Positive);
        let lexicon = Lexicon::default();
        let q = connotation(&target, &lexicon, &mut rng()).unwrap();
        assert_eq!(q.answer, "positive");
    }

    #[test]
    fn connotation_requires_an_example() {
        let target = entry("neutral", "plain", PartOfSpeech::Adjective);
        let lexicon = Lexicon::default();
        assert!(connotation(&target, &lexicon, &mut rng()).is_none());
    }

    #[test]
    fn antonym_deduplicates_colliding_options() {
        let mut pool = noun_pool();
        for entry in pool.iter_mut() {
            // Every candidate shares one antonym: dedupe leaves < 4.
            entry.antonym = Some("stagnation".to_string());
        }
        pool[0].antonym = Some("shrinkage".to_string());
        let mut rng = rng();
        assert!(antonym(&pool[0], &pool, &mut rng).is_none());
    }

    #[test]
    fn antonym_offers_four_unique_options() {
        let mut pool = noun_pool();
        let antonyms = ["stagnation", "surge", "chaos", "failure", "relief"];
        for (entry, ant) in pool.iter_mut().zip(antonyms) {
            entry.antonym = Some(ant.to_string());
        }
        let mut rng = rng();
        let q = antonym(&pool[0], &pool, &mut rng).unwrap();
        assert_eq!(q.options.len(), 4);
        assert!(q.options.contains(&"stagnation".to_string()));
        assert_eq!(q.answer, "stagnation");
    }

    #[test]
    fn word_form_draws_distractors_from_own_forms_first() {
        let mut target = entry("decide", "to make a choice", PartOfSpeech::Verb);
        target.forms.insert(PartOfSpeech::Verb, "decide".to_string());
        target.forms.insert(PartOfSpeech::Noun, "decision".to_string());
        target.forms.insert(PartOfSpeech::Adjective, "decisive".to_string());
        target.forms.insert(PartOfSpeech::Adverb, "decisively".to_string());

        let lexicon = Lexicon::default();
        let mut rng = rng();
        let q = word_form(&target, &[], &lexicon, &mut rng).unwrap();
        assert_eq!(q.options.len(), 4);
        assert!(q.options.contains(&q.answer));
        assert!(q.prompt.contains(BLANK));
        let all_forms: HashSet<&str> =
            ["decide", "decision", "decisive", "decisively"].into_iter().collect();
        for option in &q.options {
            assert!(all_forms.contains(option.as_str()));
        }
    }

    #[test]
    fn word_form_needs_two_populated_forms() {
        let mut target = entry("decide", "to make a choice", PartOfSpeech::Verb);
        target.forms.insert(PartOfSpeech::Verb, "decide".to_string());
        let lexicon = Lexicon::default();
        assert!(word_form(&target, &[], &lexicon, &mut rng()).is_none());
    }

    #[test]
    fn word_form_uses_the_custom_sentence_when_supplied() {
        let mut target = entry("decide", "to make a choice", PartOfSpeech::Verb);
        target.forms.insert(PartOfSpeech::Noun, "decision".to_string());
        target.forms.insert(PartOfSpeech::Verb, "decide".to_string());
        target.forms.insert(PartOfSpeech::Adjective, "decisive".to_string());
        target.forms.insert(PartOfSpeech::Adverb, "decisively".to_string());
        for pos in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
        ] {
            target
                .form_examples
                .insert(pos, format!("Custom {pos} sentence with a {BLANK}."));
        }
        let lexicon = Lexicon::default();
        let q = word_form(&target, &[], &lexicon, &mut rng()).unwrap();
        assert!(q.prompt.contains("Custom"));
    }

    #[test]
    fn tiny_pool_always_falls_back_to_flashcard() {
        // Three bare words: meaning-to-word, antonym and fill-in are all
        // inapplicable, and nothing else has data either.
        let pool = noun_pool()[..3].to_vec();
        let lexicon = Lexicon::default();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate(&pool[0], &pool, QuizMode::Production, &lexicon, &mut rng);
            assert_eq!(q.kind, QuestionKind::Flashcard);
        }
    }

    #[test]
    fn definition_only_mode_is_flashcards_regardless_of_data() {
        let mut pool = noun_pool();
        pool[0].example = Some("Strong growth continued all year.".to_string());
        pool[0].antonym = Some("stagnation".to_string());
        let lexicon = Lexicon::default();
        let q = generate(&pool[0], &pool, QuizMode::DefinitionOnly, &lexicon, &mut rng());
        assert_eq!(q.kind, QuestionKind::Flashcard);
        assert_eq!(q.answer, pool[0].meaning);
    }

    #[test]
    fn exposure_mode_never_emits_contrast_questions() {
        let mut pool = noun_pool();
        let antonyms = ["stagnation", "surge", "chaos", "failure", "relief"];
        for (entry, ant) in pool.iter_mut().zip(antonyms) {
            entry.antonym = Some(ant.to_string());
            entry.collocation = Some(format!("sustained {}", entry.word));
        }
        pool[0].example = Some("Strong growth continued all year.".to_string());
        let lexicon = Lexicon::default();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate(&pool[0], &pool, QuizMode::Exposure, &lexicon, &mut rng);
            assert!(!matches!(q.kind, QuestionKind::Antonym | QuestionKind::Collocation));
        }
    }
}
