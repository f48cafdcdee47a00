//! Required-skill coverage score

use crate::processing::SkillSet;
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const NO_SKILLS_SCORE: f64 = 75.0;
pub const SKILL_FLOOR: f64 = 25.0;
const RELEVANT_ONLY_SCORE: f64 = 35.0;
const CRITICAL_SKILL_BONUS: f64 = 5.0;

static GENERALLY_RELEVANT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["python", "sql", "data", "analysis", "pandas", "numpy", "excel", "powerbi", "tableau"]
        .into_iter()
        .collect()
});

static CRITICAL_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "python", "django", "flask", "java", "javascript", "react", "angular",
        "aws", "azure", "docker", "kubernetes", "postgresql", "mongodb", "sql",
        "machinelearning", "datascience", "microservices", "restapi", "git",
        "powerbi", "tableau", "excel", "pandas", "numpy", "analytics",
    ]
    .into_iter()
    .collect()
});

/// Piecewise coverage curve; the segments meet at 45/65/82/96.
pub fn coverage_base(ratio: f64) -> f64 {
    if ratio >= 0.85 {
        96.0 + (ratio - 0.85) * 26.67
    } else if ratio >= 0.65 {
        82.0 + (ratio - 0.65) * 70.0
    } else if ratio >= 0.45 {
        65.0 + (ratio - 0.45) * 85.0
    } else if ratio >= 0.25 {
        45.0 + (ratio - 0.25) * 100.0
    } else {
        30.0 + ratio * 60.0
    }
}

fn breadth_bonus(resume_count: usize, job_count: usize) -> f64 {
    let breadth = resume_count as f64 / job_count.max(1) as f64;
    if breadth >= 1.8 {
        18.0
    } else if breadth >= 1.3 {
        14.0
    } else if breadth >= 1.0 {
        10.0
    } else {
        breadth * 9.0
    }
}

/// Score in [25, 100]; 75 when the job names no recognised skills.
pub fn skill_score(resume: &SkillSet, job: &SkillSet) -> f64 {
    if job.is_empty() {
        return NO_SKILLS_SCORE;
    }

    let matched: Vec<&String> = resume.intersection(job).collect();

    // A resume with generally relevant skills never scores below the
    // no-match default it would earn on those skills alone.
    let floor = if resume.iter().any(|skill| GENERALLY_RELEVANT.contains(skill.as_str())) {
        RELEVANT_ONLY_SCORE
    } else {
        SKILL_FLOOR
    };

    if matched.is_empty() {
        return floor;
    }

    let ratio = matched.len() as f64 / job.len() as f64;
    let base = coverage_base(ratio);
    let breadth = breadth_bonus(resume.len(), job.len());
    let critical = matched
        .iter()
        .filter(|skill| CRITICAL_SKILLS.contains(skill.as_str()))
        .count() as f64
        * CRITICAL_SKILL_BONUS;

    (base + breadth + critical).min(100.0).max(floor)
}

/// Job skills the resume lacks, alphabetically.
pub fn missing_skills<'a>(resume: &'a SkillSet, job: &'a SkillSet) -> Vec<&'a str> {
    job.difference(resume).map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_job_default() {
        assert_eq!(skill_score(&set(&["python"]), &SkillSet::new()), 75.0);
    }

    #[test]
    fn test_no_match_with_and_without_relevant_skills() {
        let job = set(&["kubernetes", "terraform"]);
        assert_eq!(skill_score(&set(&["python", "excel"]), &job), 35.0);
        assert_eq!(skill_score(&set(&["ruby"]), &job), 25.0);
        assert_eq!(skill_score(&SkillSet::new(), &job), 25.0);
    }

    #[test]
    fn test_breakpoints_are_continuous() {
        let below = |r: f64| coverage_base(r - 1e-9);
        for (breakpoint, value) in [(0.25, 45.0), (0.45, 65.0), (0.65, 82.0), (0.85, 96.0)] {
            assert!((coverage_base(breakpoint) - value).abs() < 1e-9);
            assert!((below(breakpoint) - value).abs() < 1e-6, "jump at {}", breakpoint);
        }
        assert!((coverage_base(1.0) - 100.0005).abs() < 1e-9);
        assert_eq!(coverage_base(0.0), 30.0);
    }

    #[test]
    fn test_breadth_tiers() {
        assert_eq!(breadth_bonus(9, 5), 18.0);
        assert_eq!(breadth_bonus(7, 5), 14.0);
        assert_eq!(breadth_bonus(5, 5), 10.0);
        assert!((breadth_bonus(2, 4) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_match_is_capped() {
        let job = set(&["python", "django", "flask", "machinelearning"]);
        let resume = set(&["python", "django", "flask", "machinelearning", "aws"]);
        assert_eq!(skill_score(&resume, &job), 100.0);
    }

    #[test]
    fn test_partial_match_value() {
        // 1 of 4 matched (non critical): base 45, breadth 1/4*9, no critical bonus
        let job = set(&["rust", "go", "scala", "kotlin"]);
        let resume = set(&["rust"]);
        assert!((skill_score(&resume, &job) - 47.25).abs() < 1e-9);
    }

    #[test]
    fn test_adding_required_skills_never_lowers_score() {
        let job = set(&["python", "django", "flask", "machinelearning"]);
        let mut resume = SkillSet::new();
        let mut previous = skill_score(&resume, &job);

        for skill in ["python", "django", "flask", "machinelearning"] {
            resume.insert(skill.to_string());
            let current = skill_score(&resume, &job);
            assert!(current >= previous, "{} dropped score {} -> {}", skill, previous, current);
            previous = current;
        }
    }

    #[test]
    fn test_first_match_keeps_relevant_skill_floor() {
        let job = set(&[
            "rust", "go", "scala", "kotlin", "ruby", "swift", "php", "vue", "express",
            "laravel", "redis", "cassandra", "terraform", "ansible", "jenkins", "graphql",
            "kafka", "linux",
        ]);
        let mut resume = set(&["pandas"]);
        let mut previous = skill_score(&resume, &job);
        assert_eq!(previous, 35.0);

        // 30 + 60/18 + (2/18)*9 = 34.33 before the floor
        resume.insert("rust".to_string());
        assert_eq!(skill_score(&resume, &job), 35.0);

        for skill in job.iter() {
            resume.insert(skill.clone());
            let current = skill_score(&resume, &job);
            assert!(current >= previous, "{} dropped score {} -> {}", skill, previous, current);
            previous = current;
        }
    }

    #[test]
    fn test_missing_skills_sorted() {
        let job = set(&["kubernetes", "docker", "python"]);
        let resume = set(&["python"]);
        assert_eq!(missing_skills(&resume, &job), vec!["docker", "kubernetes"]);
    }
}
