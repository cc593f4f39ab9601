//! Print-readiness scoring: one shared report shape, two rule tables.
//!
//! Both rule tables start from 100, deduct per detected issue, and clamp the
//! final score into `[0, 100]`. The pixel-driven table ([`pixel_rules`]) and
//! the metadata-driven table ([`metadata_rules`]) use different deductions and
//! wording for overlapping concerns and are kept separate.

pub mod metadata_rules;
pub mod pixel_rules;

use serde::Serialize;

use crate::model::Issue;

pub const MAX_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    /// Bands: >=90 Excellent, >=70 Good, >=50 Fair, else Poor.
    pub fn from_score(score: i32) -> Self {
        if score >= 90 {
            Rating::Excellent
        } else if score >= 70 {
            Rating::Good
        } else if score >= 50 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }
}

/// Composite scorer output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub score: u8,
    pub rating: Rating,
    /// Detection order, never re-sorted.
    pub issues: Vec<Issue>,
    /// Pixel-driven reports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Running score for one rule-table application.
#[derive(Debug)]
pub(crate) struct ScoreSheet {
    score: i32,
    issues: Vec<Issue>,
}

impl ScoreSheet {
    pub(crate) fn new() -> Self {
        ScoreSheet {
            score: MAX_SCORE,
            issues: Vec::new(),
        }
    }

    pub(crate) fn deduct(&mut self, points: i32, issue: Issue) {
        self.score -= points;
        self.issues.push(issue);
    }

    pub(crate) fn raw_score(&self) -> i32 {
        self.score
    }

    pub(crate) fn finish(self, recommendation: Option<String>) -> ReadinessReport {
        ReadinessReport {
            score: clamp_score(self.score),
            rating: Rating::from_score(self.score),
            issues: self.issues,
            recommendation,
        }
    }
}

/// Clamp a raw score into `[0, 100]`.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, MAX_SCORE) as u8
}
