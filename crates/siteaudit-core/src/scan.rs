//! Scan result model
//!
//! A [`ScanResult`] is produced once per completed scan. The summary counts
//! are drawn from the fixed ranges below; the issue list is currently the
//! static [`sample_issues()`] set and does not depend on the target URL.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Range of the simulated error count.
pub const ERRORS_RANGE: RangeInclusive<u32> = 1..=10;
/// Range of the simulated warning count.
pub const WARNINGS_RANGE: RangeInclusive<u32> = 5..=19;
/// Range of the simulated passed-check count.
pub const PASSED_RANGE: RangeInclusive<u32> = 15..=34;
/// Range of the simulated overall score.
pub const SCORE_RANGE: RangeInclusive<u32> = 60..=99;

/// Whether a finding is a hard failure or advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
        }
    }
}

/// Severity tier attached to a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "Critical",
            Impact::Serious => "Serious",
            Impact::Moderate => "Moderate",
            Impact::Minor => "Minor",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accessibility finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Stable rule identifier, e.g. `color-contrast`
    pub rule: String,
    pub description: String,
    pub impact: Impact,
    /// Remediation guidance
    pub help: String,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        rule: impl Into<String>,
        description: impl Into<String>,
        impact: Impact,
        help: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            rule: rule.into(),
            description: description.into(),
            impact,
            help: help.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }
}

/// Summary counts for a scan.
///
/// `score` is drawn independently of the three counts, so a high score can
/// sit next to many errors. Nothing here derives one from the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub errors: u32,
    pub warnings: u32,
    pub passed: u32,
    pub score: u32,
}

impl ScanSummary {
    /// True when every field lies inside its simulated range.
    pub fn is_within_ranges(&self) -> bool {
        ERRORS_RANGE.contains(&self.errors)
            && WARNINGS_RANGE.contains(&self.warnings)
            && PASSED_RANGE.contains(&self.passed)
            && SCORE_RANGE.contains(&self.score)
    }
}

/// Outcome of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Normalized, scheme-qualified target URL
    pub url: String,
    pub summary: ScanSummary,
    pub issues: Vec<Issue>,
}

impl ScanResult {
    pub fn new(url: impl Into<String>, summary: ScanSummary, issues: Vec<Issue>) -> Self {
        Self {
            url: url.into(),
            summary,
            issues,
        }
    }

    /// Iterate over findings of one kind, preserving order
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }
}

/// The fixed issue list reported for every scan.
pub fn sample_issues() -> Vec<Issue> {
    vec![
        Issue::new(
            IssueKind::Error,
            "color-contrast",
            "Insufficient color contrast ratio detected",
            Impact::Serious,
            "Ensure text has a contrast ratio of at least 4.5:1",
        ),
        Issue::new(
            IssueKind::Error,
            "alt-text-missing",
            "Images missing alternative text",
            Impact::Critical,
            "Add descriptive alt attributes to all images",
        ),
        Issue::new(
            IssueKind::Warning,
            "heading-structure",
            "Heading levels skip from H1 to H3",
            Impact::Moderate,
            "Use headings in sequential order (H1, H2, H3, etc.)",
        ),
        Issue::new(
            IssueKind::Warning,
            "form-labels",
            "Form inputs without associated labels",
            Impact::Moderate,
            "Associate form controls with descriptive labels",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(errors: u32, warnings: u32, passed: u32, score: u32) -> ScanSummary {
        ScanSummary {
            errors,
            warnings,
            passed,
            score,
        }
    }

    #[test]
    fn test_sample_issues_fixed_list() {
        let issues = sample_issues();
        assert_eq!(issues.len(), 4);
        let rules: Vec<&str> = issues.iter().map(|i| i.rule.as_str()).collect();
        assert_eq!(
            rules,
            [
                "color-contrast",
                "alt-text-missing",
                "heading-structure",
                "form-labels"
            ]
        );
        assert!(issues.iter().all(|i| i.impact != Impact::Minor));
    }

    #[test]
    fn test_sample_issues_identical_across_calls() {
        assert_eq!(sample_issues(), sample_issues());
    }

    #[test]
    fn test_summary_range_boundaries() {
        assert!(summary(1, 5, 15, 60).is_within_ranges());
        assert!(summary(10, 19, 34, 99).is_within_ranges());
        assert!(!summary(0, 5, 15, 60).is_within_ranges());
        assert!(!summary(1, 20, 15, 60).is_within_ranges());
        assert!(!summary(1, 5, 35, 60).is_within_ranges());
        assert!(!summary(1, 5, 15, 100).is_within_ranges());
    }

    #[test]
    fn test_issues_of_kind() {
        let result = ScanResult::new("https://example.com", summary(1, 5, 15, 60), sample_issues());
        assert_eq!(result.issues_of(IssueKind::Error).count(), 2);
        assert_eq!(result.issues_of(IssueKind::Warning).count(), 2);
        assert!(result.issues_of(IssueKind::Error).all(Issue::is_error));
    }

    #[test]
    fn test_issue_json_field_names() {
        let issue = &sample_issues()[1];
        let json = serde_json::to_value(issue).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["rule"], "alt-text-missing");
        assert_eq!(json["impact"], "Critical");
    }

    #[test]
    fn test_scan_result_json_shape() {
        let result = ScanResult::new("https://example.com", summary(3, 7, 20, 88), sample_issues());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["summary"]["score"], 88);
        assert_eq!(json["issues"].as_array().map(Vec::len), Some(4));
    }
}
