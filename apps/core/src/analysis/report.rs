//! Report - Output structures of an analysis run.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

use super::classifier::{Classification, Difficulty, QuestionType};
use super::mcq::Mcq;

/// A classified question
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub text: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub verb: String,
    pub mcqs: Vec<Mcq>,
}

impl QuestionRecord {
    pub fn new(text: &str, classification: Classification, mcqs: Vec<Mcq>) -> Self {
        Self {
            text: text.to_string(),
            topic: classification.topic,
            difficulty: classification.difficulty,
            question_type: classification.question_type,
            verb: classification.verb,
            mcqs,
        }
    }

    pub fn pattern(&self) -> DnaPattern {
        DnaPattern {
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            question_type: self.question_type,
            verb: self.verb.clone(),
        }
    }
}

/// Question "DNA": the (topic, difficulty, type, verb) signature.
///
/// Serializes as `topic|difficulty|type|verb` so it can key a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnaPattern {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub verb: String,
}

impl fmt::Display for DnaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.topic, self.difficulty, self.question_type, self.verb
        )
    }
}

impl Serialize for DnaPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Topic → count, in first-seen order
pub type TopicFrequency = IndexMap<String, usize>;

/// Pattern → count, in first-seen order
pub type DnaTable = IndexMap<DnaPattern, usize>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyPlanEntry {
    pub topic: String,
    pub recommended_hours: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub question: String,
    /// 0 - 100
    pub confidence: u8,
}

/// Headline facts about the topic distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub most_repeated_topic: Option<String>,
    pub total_topics: usize,
    pub focus_recommendation: Option<String>,
}

/// Complete result of analyzing one block of exam text
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_questions: usize,
    pub questions: Vec<QuestionRecord>,
    pub topic_weightage: TopicFrequency,
    pub dna_patterns: DnaTable,
    pub study_plan: Vec<StudyPlanEntry>,
    pub predictions: Vec<Prediction>,
    pub insights: Insights,
}

impl AnalysisReport {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Questions: {}, Topics: {}, Patterns: {}, Predictions: {}",
            self.total_questions,
            self.topic_weightage.len(),
            self.dna_patterns.len(),
            self.predictions.len()
        )
    }
}
