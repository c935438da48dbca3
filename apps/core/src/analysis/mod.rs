//! # Analysis Module
//!
//! Keyword-driven analysis of exam question text.
//!
//! ## Components
//! - `keywords`: topic keyword table and fallback topic guessing
//! - `classifier`: segmentation plus difficulty, type and verb detection
//! - `mcq`: canned and templated multiple-choice questions
//! - `aggregate`: topic weightage, DNA patterns, study plan, predictions
//! - `report`: output data structures
//! - `analyzer`: main orchestrator

pub mod aggregate;
pub mod analyzer;
pub mod classifier;
pub mod keywords;
pub mod mcq;
pub mod report;

// Re-export main types for convenience
pub use analyzer::ExamAnalyzer;
pub use report::AnalysisReport;
