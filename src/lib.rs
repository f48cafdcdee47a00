//! Resume screener library
//!
//! [`scoring::analyze`] compares resume text with job description text;
//! [`ResumeAnalyzer`] adds document reading, candidate profiles, hiring
//! recommendations and result storage on top.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod profile;
pub mod scoring;
pub mod sink;

pub use analyzer::ResumeAnalyzer;
pub use config::Config;
pub use error::{Result, ResumeScreenerError};
pub use output::ExtendedResult;
pub use scoring::{analyze, AnalysisResult, MatchLevel};
