//! Question segmentation and keyword classification.
//!
//! Difficulty, question type and command verb are each detected by substring
//! lookups over small marker lists, checked in priority order.

use serde::Serialize;
use std::fmt;

use super::keywords::{title_case, TopicMatcher};

/// Segments shorter than this (in characters, after trimming) are noise
pub const MIN_QUESTION_CHARS: usize = 10;

const HARD_MARKERS: &[&str] = &["compare", "analyze", "design", "evaluate"];
const MEDIUM_MARKERS: &[&str] = &["explain", "describe", "discuss"];
const EASY_MARKERS: &[&str] = &["define", "what is", "list"];

const NUMERICAL_MARKERS: &[&str] = &["calculate", "find", "solve"];
const CONCEPTUAL_MARKERS: &[&str] = &["compare", "analyze", "justify"];

/// Command verbs, in detection order
const VERBS: &[&str] = &[
    "explain", "describe", "define", "compare", "analyze", "discuss", "evaluate", "design",
];

/// Label used when no command verb is present
pub const DEFAULT_VERB: &str = "General";

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestionType {
    Numerical,
    Conceptual,
    Theory,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Numerical => "Numerical",
            QuestionType::Conceptual => "Conceptual",
            QuestionType::Theory => "Theory",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub verb: String,
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

/// Split raw text on `?`, `.` and newlines, keeping trimmed segments of at
/// least [`MIN_QUESTION_CHARS`] characters in their original order.
pub fn split_questions(text: &str) -> Vec<&str> {
    text.split(['?', '.', '\n'])
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_QUESTION_CHARS)
        .collect()
}

pub fn detect_difficulty(question: &str) -> Difficulty {
    let q = question.to_lowercase();

    if contains_any(&q, HARD_MARKERS) {
        Difficulty::Hard
    } else if contains_any(&q, MEDIUM_MARKERS) {
        Difficulty::Medium
    } else if contains_any(&q, EASY_MARKERS) {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

pub fn detect_question_type(question: &str) -> QuestionType {
    let q = question.to_lowercase();

    if contains_any(&q, NUMERICAL_MARKERS) {
        QuestionType::Numerical
    } else if contains_any(&q, CONCEPTUAL_MARKERS) {
        QuestionType::Conceptual
    } else {
        QuestionType::Theory
    }
}

/// First command verb found, title-cased
pub fn detect_verb(question: &str) -> String {
    let q = question.to_lowercase();

    VERBS
        .iter()
        .find(|verb| q.contains(*verb))
        .map(|verb| title_case(verb))
        .unwrap_or_else(|| DEFAULT_VERB.to_string())
}

/// Classifier combining topic, difficulty, type and verb detection
pub struct QuestionClassifier {
    topics: TopicMatcher,
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionClassifier {
    pub fn new() -> Self {
        Self {
            topics: TopicMatcher::new(),
        }
    }

    pub fn classify(&self, question: &str) -> Classification {
        Classification {
            topic: self.topics.resolve(question),
            difficulty: detect_difficulty(question),
            question_type: detect_question_type(question),
            verb: detect_verb(question),
        }
    }
}
