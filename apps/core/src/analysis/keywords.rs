//! Topic keyword table and fallback topic guessing.
//!
//! Topics are matched by plain substring search against the lower-cased
//! question, in table order. Questions that match no topic get a label built
//! from their first meaningful words.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Ordered topic table. The first topic with a matching keyword wins.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("Deadlock", &["deadlock", "circular wait", "starvation"]),
    ("Process Management", &["process", "thread", "pcb"]),
    (
        "CPU Scheduling",
        &["cpu scheduling", "scheduling", "scheduler"],
    ),
    (
        "Memory Management",
        &["memory", "paging", "segmentation", "virtual memory"],
    ),
    (
        "Synchronization",
        &["semaphore", "mutex", "critical section"],
    ),
];

/// Words ignored when synthesizing a topic label
const STOPWORDS: &[&str] = &[
    "explain", "define", "discuss", "what", "which", "describe", "short", "note", "how", "methods",
];

/// Label used when nothing meaningful survives filtering
pub const FALLBACK_TOPIC: &str = "General";

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{4,}").expect("Invalid regex: word pattern"));

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Resolves a question to a topic label
pub struct TopicMatcher {
    stopwords: HashSet<&'static str>,
}

impl Default for TopicMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicMatcher {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Find the first table topic whose keyword list matches the text
    pub fn match_topic(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();

        for (topic, keywords) in TOPIC_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return Some(*topic);
            }
        }

        None
    }

    /// Build a label from the first one or two non-stopword words (4+ letters)
    pub fn guess_topic(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let words: Vec<&str> = WORD_PATTERN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|w| !self.stopwords.contains(*w))
            .take(2)
            .collect();

        match words.as_slice() {
            [] => FALLBACK_TOPIC.to_string(),
            [only] => title_case(only),
            [first, second, ..] => format!("{} {}", title_case(first), title_case(second)),
        }
    }

    /// Table match first, synthesized label otherwise
    pub fn resolve(&self, text: &str) -> String {
        self.match_topic(text)
            .map(str::to_string)
            .unwrap_or_else(|| self.guess_topic(text))
    }
}
