//! Phrase matcher — finds vocabulary skills in free text.
//!
//! Every canonical name and synonym is compiled into a token sequence and indexed
//! by its first token. Matching walks the text's tokens once; at each position the
//! candidate patterns for that token are compared against the following tokens.
//! Each hit contributes its canonical skill, so overlapping patterns are reported
//! independently and repeated hits collapse into one entry.

use std::collections::{BTreeSet, HashMap};

use crate::skills::tokenizer::tokenize;
use crate::skills::vocabulary::SkillVocabulary;

#[derive(Debug, Clone)]
struct Pattern {
    tokens: Vec<String>,
    skill: usize,
}

/// Compiled, read-only matcher over a `SkillVocabulary`.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
    by_first_token: HashMap<String, Vec<Pattern>>,
    pattern_count: usize,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        let mut by_first_token: HashMap<String, Vec<Pattern>> = HashMap::new();
        let mut pattern_count = 0;

        for (skill, entry) in vocabulary.entries().iter().enumerate() {
            let phrases = std::iter::once(&entry.name).chain(entry.synonyms.iter());
            for phrase in phrases {
                let tokens = tokenize(phrase);
                let Some(first) = tokens.first().cloned() else {
                    continue;
                };
                by_first_token
                    .entry(first)
                    .or_default()
                    .push(Pattern { tokens, skill });
                pattern_count += 1;
            }
        }

        Self {
            vocabulary,
            by_first_token,
            pattern_count,
        }
    }

    /// Returns the canonical names of every skill found in `text`, deduplicated,
    /// in vocabulary order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let mut found = BTreeSet::new();

        for (start, token) in tokens.iter().enumerate() {
            let Some(candidates) = self.by_first_token.get(token) else {
                continue;
            };
            for pattern in candidates {
                let end = start + pattern.tokens.len();
                if end <= tokens.len() && tokens[start..end] == pattern.tokens[..] {
                    found.insert(pattern.skill);
                }
            }
        }

        let entries = self.vocabulary.entries();
        found.into_iter().map(|i| entries[i].name.clone()).collect()
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(SkillVocabulary::builtin())
    }
}
