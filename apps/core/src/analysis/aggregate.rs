//! Aggregation of classified questions into study aids.
//!
//! Every function here is total: an empty frequency table yields empty
//! output instead of dividing by a zero maximum.

use super::classifier::Difficulty;
use super::report::{
    DnaTable, Insights, Prediction, QuestionRecord, StudyPlanEntry, TopicFrequency,
};

/// Share of the top count at or above which a topic is "high frequency"
const HIGH_FREQUENCY_RATIO: f64 = 0.7;
/// Share of the top count at or above which a topic is "moderate frequency"
const MODERATE_FREQUENCY_RATIO: f64 = 0.4;

const HOURS_HIGH_WITH_HARD: f64 = 2.5;
const HOURS_HIGH: f64 = 2.0;
const HOURS_MODERATE: f64 = 1.5;
const HOURS_LOW: f64 = 1.0;

const REASON_HIGH: &str = "High exam frequency";
const REASON_MODERATE: &str = "Moderate exam frequency";

pub const MAX_PREDICTIONS: usize = 8;

pub fn topic_frequency(records: &[QuestionRecord]) -> TopicFrequency {
    let mut freq = TopicFrequency::new();
    for record in records {
        *freq.entry(record.topic.clone()).or_insert(0) += 1;
    }
    freq
}

pub fn dna_patterns(records: &[QuestionRecord]) -> DnaTable {
    let mut table = DnaTable::new();
    for record in records {
        *table.entry(record.pattern()).or_insert(0) += 1;
    }
    table
}

fn max_count(freq: &TopicFrequency) -> Option<usize> {
    freq.values().copied().max().filter(|&max| max > 0)
}

/// Topics ordered by descending count; ties keep first-seen order
fn ranked_topics(freq: &TopicFrequency) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = freq.iter().map(|(t, &c)| (t.as_str(), c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Allocate revision hours per topic, most hours first.
///
/// The reason text only distinguishes high from not-high frequency, even for
/// topics in the 1.5h tier.
pub fn study_plan(freq: &TopicFrequency, records: &[QuestionRecord]) -> Vec<StudyPlanEntry> {
    let Some(max) = max_count(freq) else {
        return vec![];
    };
    let max = max as f64;

    let mut plan: Vec<StudyPlanEntry> = freq
        .iter()
        .map(|(topic, &count)| {
            let count = count as f64;
            let has_hard = records
                .iter()
                .any(|r| &r.topic == topic && r.difficulty == Difficulty::Hard);
            let high = count >= HIGH_FREQUENCY_RATIO * max;

            let recommended_hours = if high {
                if has_hard {
                    HOURS_HIGH_WITH_HARD
                } else {
                    HOURS_HIGH
                }
            } else if count >= MODERATE_FREQUENCY_RATIO * max {
                HOURS_MODERATE
            } else {
                HOURS_LOW
            };

            StudyPlanEntry {
                topic: topic.clone(),
                recommended_hours,
                reason: (if high { REASON_HIGH } else { REASON_MODERATE }).to_string(),
            }
        })
        .collect();

    plan.sort_by(|a, b| {
        b.recommended_hours
            .partial_cmp(&a.recommended_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    plan
}

/// Predict likely exam questions from the most frequent topics
pub fn predictions(freq: &TopicFrequency) -> Vec<Prediction> {
    let Some(max) = max_count(freq) else {
        return vec![];
    };

    let mut predictions = Vec::new();

    for (topic, count) in ranked_topics(freq) {
        // round half to even, as Python's round() does
        let confidence = (count as f64 / max as f64 * 100.0).round_ties_even() as u8;

        let questions = match count {
            0 => vec![],
            1 => vec![format!("What is {}?", topic)],
            2 => vec![format!("Describe {}", topic)],
            _ => vec![
                format!("Explain {}", topic),
                format!("Discuss challenges in {}", topic),
            ],
        };

        predictions.extend(
            questions
                .into_iter()
                .map(|question| Prediction { question, confidence }),
        );

        if predictions.len() >= MAX_PREDICTIONS {
            break;
        }
    }

    predictions.truncate(MAX_PREDICTIONS);
    predictions
}

pub fn insights(freq: &TopicFrequency) -> Insights {
    let top = ranked_topics(freq).first().map(|(topic, _)| topic.to_string());

    Insights {
        focus_recommendation: top.as_ref().map(|t| format!("Revise {} first", t)),
        most_repeated_topic: top,
        total_topics: freq.len(),
    }
}
