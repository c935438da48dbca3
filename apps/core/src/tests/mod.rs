//! Test Module
//!
//! Cross-module test suite for the analyzer backend.
//!
//! ## Test Categories
//! - `analysis_tests`: pipeline properties over realistic question papers
//! - `text_extract_tests`: extraction limits, timeouts and failures
//! - `api_tests`: HTTP endpoints, driven through the router

mod text_extract_tests;
