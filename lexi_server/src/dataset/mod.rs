//! Static vocabulary and grammar datasets.
//!
//! Both datasets are JSON arrays loaded once at startup and held in
//! memory. Item identity is positional: a word's id is its index in the
//! vocabulary array.

mod query;

pub use query::{GrammarQuery, Page, Pagination, VocabularyQuery};

use anyhow::{Context, Result};
use lexi_core::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single vocabulary entry. Field names mirror the dataset columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "Base Word")]
    pub base_word: String,
    #[serde(rename = "Guideword", default)]
    pub guideword: String,
    #[serde(rename = "Level", default)]
    pub level: String,
    #[serde(rename = "Part of Speech", default)]
    pub part_of_speech: String,
    #[serde(rename = "Topic", default)]
    pub topic: String,
}

impl WordEntry {
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::Unknown)
    }
}

/// A single grammar point from the grammar dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarPoint {
    #[serde(rename = "Level", default)]
    pub level: String,
    #[serde(rename = "SuperCategory", default)]
    pub super_category: String,
    #[serde(rename = "SubCategory", default)]
    pub sub_category: String,
    #[serde(rename = "Guideword", default)]
    pub guideword: String,
    #[serde(rename = "Can-do statement", default)]
    pub can_do: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total_words: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_part_of_speech: BTreeMap<String, usize>,
    pub by_topic: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarStats {
    pub total_points: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_super_category: BTreeMap<String, usize>,
}

pub struct Dataset {
    words: Vec<WordEntry>,
    grammar: Vec<GrammarPoint>,
}

impl Dataset {
    pub fn new(words: Vec<WordEntry>, grammar: Vec<GrammarPoint>) -> Self {
        Self { words, grammar }
    }

    pub fn load(vocabulary_path: &Path, grammar_path: &Path) -> Result<Self> {
        let words = std::fs::read_to_string(vocabulary_path).with_context(|| {
            format!("Failed to read vocabulary dataset {}", vocabulary_path.display())
        })?;
        let words: Vec<WordEntry> =
            serde_json::from_str(&words).context("Failed to parse vocabulary dataset")?;

        let grammar = std::fs::read_to_string(grammar_path).with_context(|| {
            format!("Failed to read grammar dataset {}", grammar_path.display())
        })?;
        let grammar: Vec<GrammarPoint> =
            serde_json::from_str(&grammar).context("Failed to parse grammar dataset")?;

        log::info!(
            "Loaded {} vocabulary entries and {} grammar points",
            words.len(),
            grammar.len()
        );
        Ok(Self { words, grammar })
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn grammar(&self) -> &[GrammarPoint] {
        &self.grammar
    }

    /// Look up a word by its positional id.
    pub fn word(&self, id: usize) -> Option<&WordEntry> {
        self.words.get(id)
    }

    /// Find a word by its base form, case insensitive.
    pub fn word_by_base(&self, base: &str) -> Option<&WordEntry> {
        self.words
            .iter()
            .find(|w| w.base_word.eq_ignore_ascii_case(base))
    }

    pub fn filter_words(&self, query: &VocabularyQuery) -> Vec<&WordEntry> {
        self.words
            .iter()
            .filter(|w| query.matches(w))
            .collect()
    }

    pub fn filter_grammar(&self, query: &GrammarQuery) -> Vec<&GrammarPoint> {
        self.grammar
            .iter()
            .filter(|g| query.matches(g))
            .collect()
    }

    /// A random sample of words, optionally restricted to one level.
    pub fn random_words<R: rand::Rng + ?Sized>(
        &self,
        level: Option<&str>,
        count: usize,
        rng: &mut R,
    ) -> Vec<&WordEntry> {
        use rand::seq::SliceRandom;

        let mut pool: Vec<&WordEntry> = match level {
            Some(level) => self
                .words
                .iter()
                .filter(|w| w.level.eq_ignore_ascii_case(level))
                .collect(),
            None => self.words.iter().collect(),
        };
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }

    /// Topic counts, largest first, ties broken alphabetically. Entries
    /// without a topic are skipped.
    pub fn topics(&self, level: Option<&str>) -> Vec<TopicCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for word in &self.words {
            if word.topic.is_empty() {
                continue;
            }
            if let Some(level) = level
                && !word.level.eq_ignore_ascii_case(level)
            {
                continue;
            }
            *counts.entry(word.topic.as_str()).or_default() += 1;
        }
        let mut topics: Vec<TopicCount> = counts
            .into_iter()
            .map(|(topic, count)| TopicCount {
                topic: topic.to_string(),
                count,
            })
            .collect();
        topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
        topics
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        let mut by_level = BTreeMap::new();
        let mut by_pos = BTreeMap::new();
        let mut by_topic = BTreeMap::new();
        for word in &self.words {
            *by_level.entry(word.level.clone()).or_default() += 1;
            let pos = if word.part_of_speech.is_empty() {
                "unknown".to_string()
            } else {
                word.part_of_speech.clone()
            };
            *by_pos.entry(pos).or_default() += 1;
            if !word.topic.is_empty() {
                *by_topic.entry(word.topic.clone()).or_default() += 1;
            }
        }
        VocabularyStats {
            total_words: self.words.len(),
            by_level,
            by_part_of_speech: by_pos,
            by_topic,
        }
    }

    pub fn grammar_stats(&self) -> GrammarStats {
        let mut by_level = BTreeMap::new();
        let mut by_super = BTreeMap::new();
        for point in &self.grammar {
            *by_level.entry(point.level.clone()).or_default() += 1;
            *by_super.entry(point.super_category.clone()).or_default() += 1;
        }
        GrammarStats {
            total_points: self.grammar.len(),
            by_level,
            by_super_category: by_super,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_test_utils::{sample_grammar_json, sample_vocabulary_json};

    fn sample() -> Dataset {
        let words = serde_json::from_str(&sample_vocabulary_json()).unwrap();
        let grammar = serde_json::from_str(&sample_grammar_json()).unwrap();
        Dataset::new(words, grammar)
    }

    #[test]
    fn test_word_id_is_positional() {
        let dataset = sample();
        let first = dataset.word(0).unwrap();
        assert_eq!(first.base_word, dataset.words()[0].base_word);
        assert!(dataset.word(dataset.words().len()).is_none());
    }

    #[test]
    fn test_word_level_parses_label() {
        let dataset = sample();
        for word in dataset.words() {
            // Sample data only uses the six CEFR labels.
            assert_ne!(word.level(), Level::Unknown);
        }
    }

    #[test]
    fn test_topics_sorted_by_count_then_name() {
        let dataset = sample();
        let topics = dataset.topics(None);
        for pair in topics.windows(2) {
            assert!(
                pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].topic < pair[1].topic)
            );
        }
    }

    #[test]
    fn test_random_words_respects_level_and_count() {
        let dataset = sample();
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let picked = dataset.random_words(Some("A1"), 2, &mut rng);
        assert!(picked.len() <= 2);
        for word in picked {
            assert_eq!(word.level, "A1");
        }
    }

    #[test]
    fn test_vocabulary_stats_totals() {
        let dataset = sample();
        let stats = dataset.vocabulary_stats();
        assert_eq!(stats.total_words, dataset.words().len());
        let level_sum: usize = stats.by_level.values().sum();
        assert_eq!(level_sum, stats.total_words);
    }

    #[test]
    fn test_grammar_stats_group_by_super_category() {
        let dataset = sample();
        let stats = dataset.grammar_stats();
        assert_eq!(stats.total_points, dataset.grammar().len());
        let sum: usize = stats.by_super_category.values().sum();
        assert_eq!(sum, stats.total_points);
    }
}
