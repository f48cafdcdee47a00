//! Text processing: normalization and signal extraction
//!
//! Every extractor here is a pure function over text backed by immutable
//! static tables, so documents can be processed from any number of threads.

pub mod phrases;
pub mod signals;
pub mod skills;
pub mod text_processor;

pub use phrases::{extract_phrases, PhraseSet};
pub use signals::{assess_seniority, extract_years_experience, has_job_history};
pub use skills::{extract_skills, SkillSet};
pub use text_processor::{extract_keywords, normalize_text, KeywordFrequency};
