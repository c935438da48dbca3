//! Exam Analyzer - Main orchestrator for the analysis module.
//!
//! Splits raw text into questions, classifies each one, attaches MCQs and
//! folds the results into the aggregate study aids.

use std::time::Instant;
use tracing::info;

use super::aggregate;
use super::classifier::{split_questions, QuestionClassifier};
use super::mcq::{generate_mcqs, Mcq};
use super::report::{AnalysisReport, QuestionRecord};

/// Stateless analyzer, shared across requests
pub struct ExamAnalyzer {
    classifier: QuestionClassifier,
}

impl Default for ExamAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamAnalyzer {
    pub fn new() -> Self {
        Self {
            classifier: QuestionClassifier::new(),
        }
    }

    /// Classify a single question segment
    pub fn classify_question(&self, question: &str) -> QuestionRecord {
        let classification = self.classifier.classify(question);
        let mcqs = generate_mcqs(&classification.topic, classification.difficulty);
        debug_assert!(mcqs.iter().all(Mcq::is_consistent));
        QuestionRecord::new(question, classification, mcqs)
    }

    /// Analyze a block of exam text and produce the full report
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();

        let questions: Vec<QuestionRecord> = split_questions(text)
            .into_iter()
            .map(|q| self.classify_question(q))
            .collect();

        let topic_weightage = aggregate::topic_frequency(&questions);
        let dna_patterns = aggregate::dna_patterns(&questions);
        let study_plan = aggregate::study_plan(&topic_weightage, &questions);
        let predictions = aggregate::predictions(&topic_weightage);
        let insights = aggregate::insights(&topic_weightage);

        let report = AnalysisReport {
            total_questions: questions.len(),
            questions,
            topic_weightage,
            dna_patterns,
            study_plan,
            predictions,
            insights,
        };

        info!(
            "Analysis complete in {}ms: {}",
            start.elapsed().as_millis(),
            report.summary()
        );

        report
    }
}
