//! Output formatters for single analyses and batch summaries

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ExtendedResult;
use crate::scoring::aggregate::{CONTEXT_WEIGHT, EXPERIENCE_WEIGHT, KEYWORD_WEIGHT, SKILL_WEIGHT};
use crate::scoring::{Decision, MatchLevel};
use colored::{Color, Colorize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const NAME_COLUMN_WIDTH: usize = 24;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    fn format_report(&self, result: &ExtendedResult) -> Result<String>;
    fn format_batch(&self, results: &[ExtendedResult]) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Results ordered by overall score, highest first. Ties keep input order.
pub fn rank_results(results: &[ExtendedResult]) -> Vec<&ExtendedResult> {
    let mut ranked: Vec<&ExtendedResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));
    ranked
}

/// Shorten to `max` grapheme clusters, marking the cut with an ellipsis.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let mut out = graphemes[..max.saturating_sub(1)].concat();
    out.push('…');
    out
}

fn pad_graphemes(text: &str, width: usize) -> String {
    let text = truncate_graphemes(text, width);
    let len = text.graphemes(true).count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn component_rows(result: &ExtendedResult) -> [(&'static str, f64, f64); 4] {
    let c = &result.detailed_results.scoring_details.component_scores;
    [
        ("Keywords", c.keyword_match, KEYWORD_WEIGHT),
        ("Skills", c.skill_match, SKILL_WEIGHT),
        ("Context", c.context_match, CONTEXT_WEIGHT),
        ("Experience", c.experience_match, EXPERIENCE_WEIGHT),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn level_color(level: MatchLevel) -> Color {
        match level {
            MatchLevel::Excellent => Color::Green,
            MatchLevel::Good => Color::BrightGreen,
            MatchLevel::Fair => Color::Yellow,
            MatchLevel::Poor => Color::Red,
            MatchLevel::Error => Color::BrightRed,
        }
    }

    fn decision_color(decision: Decision) -> Color {
        match decision {
            Decision::Hire => Color::Green,
            Decision::Interview => Color::BrightGreen,
            Decision::Maybe => Color::Yellow,
            Decision::Reject | Decision::Error => Color::Red,
        }
    }

    fn format_level_badge(&self, level: MatchLevel) -> String {
        let badge = level.as_str().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(Self::level_color(level)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn push_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, result: &ExtendedResult) -> Result<String> {
        let mut output = String::new();
        let meta = &result.metadata;

        output.push_str(&self.format_header("📊 RESUME SCREENING ANALYSIS", 1));
        output.push_str(&format!("Resume: {} | Job: {}\n", meta.resume_filename, meta.job_description_filename));
        output.push_str(&format!("Analyzed: {}", meta.timestamp));
        if let Some(seconds) = meta.processing_time {
            output.push_str(&format!(" | Processing time: {:.0}ms", seconds * 1000.0));
        }
        output.push('\n');

        if let Some(error) = &meta.error {
            output.push_str(&self.format_header("Analysis Failed", 2));
            output.push_str(&format!("{}\n", self.colorize(error, Color::Red)));
            for step in &result.hiring_recommendation.next_steps {
                output.push_str(&format!("  • {}\n", step));
            }
            return Ok(output);
        }

        if let (Some(resume), Some(job)) = (&result.resume_data, &result.job_data) {
            output.push_str(&self.format_header("Candidate", 2));
            output.push_str(&format!("Name: {}\n", self.colorize(&resume.candidate_name, Color::Cyan)));
            output.push_str(&format!("Email: {} | Phone: {}\n", resume.email, resume.phone));
            output.push_str(&format!("Position: {} | {}\n", job.title, job.company));
        }

        let summary = &result.analysis_results;
        let hiring = &result.hiring_recommendation;
        output.push_str(&self.format_header("Executive Summary", 2));
        output.push_str(&format!(
            "Overall Score: {:.1}% {}\n",
            summary.overall_score,
            self.format_level_badge(summary.match_level)
        ));
        let decision = if self.use_colors {
            hiring.decision.as_str().color(Self::decision_color(hiring.decision)).bold().to_string()
        } else {
            hiring.decision.as_str().to_string()
        };
        output.push_str(&format!(
            "Decision: {} (confidence: {}, success probability: {:.0}%)\n",
            decision, hiring.confidence, hiring.success_probability
        ));
        output.push_str(&format!("Reasoning: {}\n", hiring.reasoning));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for (label, score, weight) in component_rows(result) {
            output.push_str(&format!("  {:<11} {:>6.1}% (weight: {:.0}%)\n", label, score, weight * 100.0));
        }

        let gaps = &result.detailed_results.llm_analysis.gap_analysis;
        self.push_list(&mut output, "✅ Strengths", &gaps.strengths, Color::Green);
        self.push_list(&mut output, "🎯 Weaknesses", &gaps.weaknesses, Color::Yellow);
        self.push_list(&mut output, "🚨 Risk Factors", &summary.risk_factors, Color::Red);

        output.push_str(&self.format_header("📋 Recommendations", 2));
        for (i, rec) in summary.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Detailed Analysis", 2));
            output.push_str(&format!("{}\n", summary.explanation));
            output.push_str(&format!("Score confidence: {:.1}%\n", summary.confidence));

            if let (Some(resume), Some(job)) = (&result.resume_data, &result.job_data) {
                output.push_str(&format!("Experience: {} years\n", resume.experience_years));
                output.push_str(&format!("Resume skills: {}\n", resume.skills.join(", ")));
                output.push_str(&format!("Required skills: {}\n", job.required_skills.join(", ")));
                let missing: Vec<&str> = job
                    .required_skills
                    .iter()
                    .filter(|s| !resume.skills.contains(s))
                    .map(String::as_str)
                    .collect();
                if !missing.is_empty() {
                    output.push_str(&format!("Missing skills: {}\n", self.colorize(&missing.join(", "), Color::Yellow)));
                }
            }
        }

        if let Some(id) = &meta.record_id {
            output.push_str(&format!("\n{} Stored as record {}\n", self.colorize("ℹ️", Color::Blue), id));
        }

        Ok(output)
    }

    fn format_batch(&self, results: &[ExtendedResult]) -> Result<String> {
        let mut output = self.format_header(&format!("📊 BATCH SCREENING ({} resumes)", results.len()), 1);

        output.push_str(&format!(
            "{:>4}  {}  {:>7}  {:<9}  {}\n",
            "Rank",
            pad_graphemes("Candidate", NAME_COLUMN_WIDTH),
            "Score",
            "Level",
            "Decision"
        ));

        for (rank, result) in rank_results(results).into_iter().enumerate() {
            let level = result.analysis_results.match_level;
            let line = format!(
                "{:>4}  {}  {:>6.1}%  {:<9}  {}",
                rank + 1,
                pad_graphemes(result.candidate_label(), NAME_COLUMN_WIDTH),
                result.overall_score(),
                level.as_str(),
                result.hiring_recommendation.decision
            );
            output.push_str(&self.colorize(&line, Self::level_color(level)));
            output.push('\n');
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        if failed > 0 {
            output.push_str(&format!("\n{} analyses failed\n", self.colorize(&failed.to_string(), Color::Red)));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, result: &ExtendedResult) -> Result<String> {
        self.to_json(result)
    }

    fn format_batch(&self, results: &[ExtendedResult]) -> Result<String> {
        self.to_json(&rank_results(results))
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_level_badge(level: MatchLevel) -> &'static str {
        match level {
            MatchLevel::Excellent => "🟢 Excellent",
            MatchLevel::Good => "🟡 Good",
            MatchLevel::Fair => "🟠 Fair",
            MatchLevel::Poor => "🔴 Poor",
            MatchLevel::Error => "⚠️ Error",
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, result: &ExtendedResult) -> Result<String> {
        let mut output = String::from("# 📊 Resume Screening Report\n\n");
        let meta = &result.metadata;

        if self.include_metadata {
            output.push_str(&format!("**Analyzed:** {}", meta.timestamp));
            if let Some(seconds) = meta.processing_time {
                output.push_str(&format!(" | **Processing Time:** {:.0}ms", seconds * 1000.0));
            }
            output.push('\n');
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                meta.resume_filename, meta.job_description_filename
            ));
        }

        if let Some(error) = &meta.error {
            output.push_str(&format!("## ⚠️ Analysis Failed\n\n{}\n\n", error));
            return Ok(output);
        }

        if let (Some(resume), Some(job)) = (&result.resume_data, &result.job_data) {
            output.push_str("## Candidate\n\n");
            output.push_str(&format!("- **Name:** {}\n", resume.candidate_name));
            output.push_str(&format!("- **Email:** {}\n", resume.email));
            output.push_str(&format!("- **Phone:** {}\n", resume.phone));
            output.push_str(&format!("- **Experience:** {} years\n", resume.experience_years));
            output.push_str(&format!("- **Position:** {} ({})\n\n", job.title, job.company));
        }

        let summary = &result.analysis_results;
        let hiring = &result.hiring_recommendation;
        output.push_str("## Executive Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {:.1}% {}\n\n",
            summary.overall_score,
            Self::markdown_level_badge(summary.match_level)
        ));
        output.push_str(&format!(
            "**Decision:** {} ({} confidence, {:.0}% success probability)\n\n",
            hiring.decision, hiring.confidence, hiring.success_probability
        ));
        output.push_str(&format!("> {}\n\n", summary.explanation));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        for (label, score, weight) in component_rows(result) {
            output.push_str(&format!("| {} | {:.1}% | {:.0}% |\n", label, score, weight * 100.0));
        }
        output.push('\n');

        let gaps = &result.detailed_results.llm_analysis.gap_analysis;
        Self::push_list(&mut output, "✅ Strengths", &gaps.strengths);
        Self::push_list(&mut output, "🎯 Weaknesses", &gaps.weaknesses);
        Self::push_list(&mut output, "🚨 Risk Factors", &summary.risk_factors);

        output.push_str("## 📋 Recommendations\n\n");
        for (i, rec) in summary.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }
        output.push('\n');

        if let (Some(resume), Some(job)) = (&result.resume_data, &result.job_data) {
            output.push_str("## Skills\n\n");
            output.push_str(&format!("**Resume:** `{}`\n\n", resume.skills.join("`, `")));
            output.push_str(&format!("**Required:** `{}`\n\n", job.required_skills.join("`, `")));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-screener v{}*\n", env!("CARGO_PKG_VERSION")));
        }

        Ok(output)
    }

    fn format_batch(&self, results: &[ExtendedResult]) -> Result<String> {
        let mut output = format!("# 📊 Batch Screening Report ({} resumes)\n\n", results.len());
        output.push_str("| Rank | Candidate | File | Score | Level | Decision |\n");
        output.push_str("|------|-----------|------|-------|-------|----------|\n");

        for (rank, result) in rank_results(results).into_iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | `{}` | {:.1}% | {} | {} |\n",
                rank + 1,
                result.candidate_label().replace('|', "\\|"),
                result.metadata.resume_filename,
                result.overall_score(),
                Self::markdown_level_badge(result.analysis_results.match_level),
                result.hiring_recommendation.decision
            ));
        }
        output.push('\n');

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, result: &ExtendedResult, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_report(result)
    }

    pub fn generate_batch_summary(&self, results: &[ExtendedResult], format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_batch(results)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{JobData, ResultMetadata, ResumeData, ANALYZER_TYPE};
    use crate::scoring::analyze;

    fn metadata(filename: &str) -> ResultMetadata {
        ResultMetadata {
            success: true,
            timestamp: "2025-03-01T10:00:00+00:00".to_string(),
            analyzer_type: ANALYZER_TYPE.to_string(),
            processing_time: Some(0.004),
            resume_file: format!("/in/{}", filename),
            job_description_file: "/in/jd.txt".to_string(),
            resume_filename: filename.to_string(),
            job_description_filename: "jd.txt".to_string(),
            record_id: None,
            error: None,
        }
    }

    fn success(name: &str, resume: &str) -> ExtendedResult {
        let job = "Python Developer Django Flask required 3+ years machine learning";
        let resume_data = ResumeData {
            candidate_name: name.to_string(),
            email: "Not found".to_string(),
            phone: "Not found".to_string(),
            skills: vec!["django".to_string(), "python".to_string()],
            experience_years: 5,
            filename: format!("{}.txt", name),
        };
        let job_data = JobData {
            title: "Python Developer Django Flask required 3+ years machine learning".to_string(),
            company: "Company not specified".to_string(),
            required_skills: vec!["django".to_string(), "flask".to_string(), "python".to_string()],
            filename: "jd.txt".to_string(),
        };
        ExtendedResult::from_analysis(metadata(&format!("{}.txt", name)), resume_data, job_data, &analyze(resume, job))
    }

    #[test]
    fn test_console_report_plain() {
        let result = success("Jane Doe", "Python Django Flask AWS Machine Learning 5 years experience");
        let text = ConsoleFormatter::new(false, true).format_report(&result).unwrap();

        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Overall Score: 92.9% [EXCELLENT]"));
        assert!(text.contains("Decision: HIRE"));
        assert!(text.contains("Missing skills: flask"));
        assert!(!text.contains("\u{1b}["), "no ANSI codes without colors");
    }

    #[test]
    fn test_console_failed_report() {
        let failed = ExtendedResult::failed(metadata("x.txt"), "File does not exist");
        let text = ConsoleFormatter::new(false, false).format_report(&failed).unwrap();
        assert!(text.contains("Analysis Failed"));
        assert!(text.contains("Fix the error and retry analysis"));
    }

    #[test]
    fn test_markdown_report() {
        let result = success("Jane Doe", "Python Django Flask AWS Machine Learning 5 years experience");
        let text = MarkdownFormatter::new(true).format_report(&result).unwrap();
        assert!(text.contains("| Skills | 100.0% | 40% |"));
        assert!(text.contains("**Decision:** HIRE"));
        assert!(text.contains("*Generated by resume-screener v"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let result = success("Jane Doe", "Python Django Flask");
        let json = JsonFormatter::new(true).format_report(&result).unwrap();
        let parsed: ExtendedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_batch_ranked_by_score() {
        let results = vec![
            success("Weak Candidate", "Excel PowerBI analyst business data, no programming"),
            ExtendedResult::failed(metadata("broken.pdf"), "unreadable"),
            success("Strong Candidate", "Python Django Flask AWS Machine Learning 5 years experience"),
        ];

        let ranked = rank_results(&results);
        assert_eq!(ranked[0].candidate_label(), "Strong Candidate");
        assert_eq!(ranked[1].candidate_label(), "Weak Candidate");
        assert_eq!(ranked[2].candidate_label(), "broken.pdf");

        let table = ConsoleFormatter::new(false, false).format_batch(&results).unwrap();
        let strong = table.find("Strong Candidate").unwrap();
        let weak = table.find("Weak Candidate").unwrap();
        assert!(strong < weak);
        assert!(table.contains("1 analyses failed"));

        let markdown = MarkdownFormatter::new(false).format_batch(&results).unwrap();
        assert!(markdown.contains("| 1 | Strong Candidate |"));
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("short", 10), "short");
        assert_eq!(truncate_graphemes("Alexandria Ocasio", 8), "Alexand…");
        assert_eq!(truncate_graphemes("José Gonzále\u{301}z", 12), "José Gonzál…");
        assert_eq!(pad_graphemes("ab", 4), "ab  ");
    }
}
