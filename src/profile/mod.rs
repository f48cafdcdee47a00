//! Candidate and job metadata extraction
//!
//! Independent of scoring. Every extractor is a heuristic and returns a
//! placeholder (`"Unknown"`, `"Not found"`, ...) instead of failing.

pub mod contact;
pub mod job;
pub mod name;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use contact::{extract_email, extract_phone, NOT_FOUND};
pub use job::{extract_company, extract_job_title};
pub use name::{extract_candidate_name, name_from_filename, UNKNOWN_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
}

impl CandidateProfile {
    pub fn from_text(text: &str) -> Self {
        Self {
            candidate_name: extract_candidate_name(text),
            email: extract_email(text),
            phone: extract_phone(text),
        }
    }

    /// Like `from_text`, falling back to the file name when no name is
    /// found in the text.
    pub fn from_document(text: &str, path: &Path) -> Self {
        let mut profile = Self::from_text(text);
        if profile.candidate_name == UNKNOWN_NAME {
            profile.candidate_name = name_from_filename(path);
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_text() {
        let profile = CandidateProfile::from_text("Jane Doe\njane@doe.dev | 555.123.4567\n");
        assert_eq!(profile.candidate_name, "Jane Doe");
        assert_eq!(profile.email, "jane@doe.dev");
        assert_eq!(profile.phone, "555.123.4567");
    }

    #[test]
    fn test_filename_fallback_when_text_has_no_name() {
        let profile = CandidateProfile::from_document("summary of skills", Path::new("john_smith_resume.pdf"));
        assert_eq!(profile.candidate_name, "John Smith");
        assert_eq!(profile.email, NOT_FOUND);
        assert_eq!(profile.phone, NOT_FOUND);
    }
}
