//! Experience and seniority fit score

use crate::processing::{assess_seniority, extract_years_experience, has_job_history};

pub const EXPERIENCE_FLOOR: f64 = 35.0;
const BASE_SCORE: f64 = 65.0;

/// Experience-related signals of one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceSignals {
    /// 0 means no figure was found.
    pub years: u32,
    pub seniority: f64,
    pub job_history: bool,
}

impl ExperienceSignals {
    pub fn from_text(raw: &str) -> Self {
        Self {
            years: extract_years_experience(raw),
            seniority: assess_seniority(raw),
            job_history: has_job_history(raw),
        }
    }
}

/// Job states neither years nor seniority: judge the resume on its own.
fn unguided_score(resume: &ExperienceSignals) -> f64 {
    match resume.years {
        y if y >= 5 => 88.0,
        y if y >= 3 => 84.0,
        y if y > 0 => 78.0,
        _ if resume.seniority > 2.0 => 82.0,
        _ if resume.job_history => 75.0,
        _ => 68.0,
    }
}

fn years_score(resume: &ExperienceSignals, job_years: u32) -> f64 {
    if resume.years == 0 {
        return if resume.job_history { 60.0 } else { 40.0 };
    }

    let resume_years = resume.years as f64;
    let job_years = job_years as f64;

    if resume_years >= job_years {
        if resume_years >= job_years * 1.8 {
            99.0
        } else if resume_years >= job_years * 1.3 {
            92.0 + ((resume_years - job_years) * 1.5).min(7.0)
        } else {
            let excess_ratio = (resume_years - job_years) / job_years;
            85.0 + (excess_ratio * 35.0).min(14.0)
        }
    } else {
        let ratio = resume_years / job_years;
        if ratio >= 0.8 {
            78.0 + (ratio - 0.8) * 85.0
        } else if ratio >= 0.6 {
            68.0 + (ratio - 0.6) * 50.0
        } else if ratio >= 0.4 {
            52.0 + (ratio - 0.4) * 80.0
        } else {
            (40.0 + ratio * 50.0).max(EXPERIENCE_FLOOR)
        }
    }
}

fn seniority_adjusted(score: f64, resume_seniority: f64, job_seniority: f64) -> f64 {
    if job_seniority > 0.0 && resume_seniority > 0.0 {
        let ratio = resume_seniority / job_seniority;
        if ratio >= 1.2 {
            (score * 1.20).min(100.0)
        } else if ratio >= 1.0 {
            (score * 1.18).min(100.0)
        } else if ratio >= 0.7 {
            score * (1.0 + ratio * 0.12)
        } else {
            score * (0.92 + ratio * 0.15)
        }
    } else if resume_seniority > 0.0 {
        (score + resume_seniority * 4.0).min(100.0)
    } else {
        score
    }
}

pub fn score_signals(resume: &ExperienceSignals, job: &ExperienceSignals) -> f64 {
    if job.years == 0 && job.seniority == 0.0 {
        return unguided_score(resume);
    }

    let mut score = BASE_SCORE;
    if job.years > 0 {
        score = years_score(resume, job.years);
    }
    score = seniority_adjusted(score, resume.seniority, job.seniority);

    score.max(EXPERIENCE_FLOOR).min(100.0)
}

/// Score in [35, 100] from raw resume and job text.
pub fn experience_score(resume_raw: &str, job_raw: &str) -> f64 {
    score_signals(
        &ExperienceSignals::from_text(resume_raw),
        &ExperienceSignals::from_text(job_raw),
    )
}
