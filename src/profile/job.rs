//! Job description metadata

const TITLE_SCAN_LINES: usize = 10;
const COMPANY_SCAN_LINES: usize = 15;
const MAX_FIELD_CHARS: usize = 100;

pub const TITLE_NOT_SPECIFIED: &str = "Position not specified";
pub const COMPANY_NOT_SPECIFIED: &str = "Company not specified";

const TITLE_MARKERS: &[&str] = &["developer", "engineer", "analyst", "manager", "position", "role"];
const COMPANY_MARKERS: &[&str] = &["company", "organization"];

fn first_line_with(text: &str, scan: usize, markers: &[&str]) -> Option<String> {
    text.split('\n')
        .take(scan)
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            !line.is_empty() && markers.iter().any(|m| lower.contains(m))
        })
        .map(|line| line.chars().take(MAX_FIELD_CHARS).collect())
}

pub fn extract_job_title(text: &str) -> String {
    first_line_with(text, TITLE_SCAN_LINES, TITLE_MARKERS).unwrap_or_else(|| TITLE_NOT_SPECIFIED.to_string())
}

pub fn extract_company(text: &str) -> String {
    first_line_with(text, COMPANY_SCAN_LINES, COMPANY_MARKERS).unwrap_or_else(|| COMPANY_NOT_SPECIFIED.to_string())
}
