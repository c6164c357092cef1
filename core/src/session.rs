use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::quiz::QuizMode;
use crate::srs::WordStatus;
use crate::word::WordEntry;

/// How a finished session went, banded by accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 85% and up.
    Strong,
    /// 60% and up.
    Decent,
    /// Below 60%: drill the missed words again.
    NeedsRetry,
}

/// One drilling session over a fixed word list. An explicit value, not
/// ambient state: callers can run several sessions side by side.
///
/// The queue holds indices into the word list the session was built
/// from, ordered due words first, then new, then already-learned, each
/// group shuffled.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub mode: QuizMode,
    queue: Vec<usize>,
    pos: usize,
    correct: u32,
    wrong: u32,
    wrong_words: Vec<String>,
}

impl Session {
    pub fn new(
        words: &[WordEntry],
        statuses: &[WordStatus],
        mode: QuizMode,
        rng: &mut impl Rng,
    ) -> Self {
        debug_assert_eq!(words.len(), statuses.len());
        let mut group = |wanted: WordStatus| -> Vec<usize> {
            let mut indices: Vec<usize> = statuses
                .iter()
                .enumerate()
                .filter(|(_, status)| **status == wanted)
                .map(|(i, _)| i)
                .collect();
            indices.shuffle(rng);
            indices
        };

        let mut queue = group(WordStatus::Due);
        queue.extend(group(WordStatus::New));
        queue.extend(group(WordStatus::Ok));

        Self {
            id: Uuid::new_v4(),
            mode,
            queue,
            pos: 0,
            correct: 0,
            wrong: 0,
            wrong_words: Vec::new(),
        }
    }

    /// Cap the session length, keeping the front of the queue (due words
    /// survive first).
    pub fn limit(&mut self, max_words: usize) {
        self.queue.truncate(max_words);
    }

    /// Index of the word currently being drilled.
    pub fn current(&self) -> Option<usize> {
        self.queue.get(self.pos).copied()
    }

    /// Tally one answer. Missed words are collected once each for the
    /// retry list.
    pub fn record(&mut self, word: &str, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
            if !self.wrong_words.iter().any(|w| w == word) {
                self.wrong_words.push(word.to_string());
            }
        }
    }

    pub fn advance(&mut self) {
        if self.pos < self.queue.len() {
            self.pos += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.pos >= self.queue.len()
    }

    /// (answered, total).
    pub fn progress(&self) -> (usize, usize) {
        (self.pos, self.queue.len())
    }

    pub fn tally(&self) -> (u32, u32) {
        (self.correct, self.wrong)
    }

    pub fn wrong_words(&self) -> &[String] {
        &self.wrong_words
    }

    /// Percent correct; an unanswered session counts as 100.
    pub fn accuracy(&self) -> u32 {
        let total = self.correct + self.wrong;
        if total == 0 {
            return 100;
        }
        (self.correct * 100 + total / 2) / total
    }

    pub fn verdict(&self) -> Verdict {
        match self.accuracy() {
            85..=100 => Verdict::Strong,
            60..=84 => Verdict::Decent,
            _ => Verdict::NeedsRetry,
        }
    }
}
