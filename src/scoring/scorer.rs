//! Keyword-based CV scoring

use crate::config::ScoringConfig;
use crate::error::{CvAnalyzerError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Points awarded when the experience keyword is present.
pub const EXPERIENCE_POINTS: u32 = 5;
/// Points awarded per distinct skill found.
pub const SKILL_POINTS: u32 = 3;
/// Points awarded per certification keyword occurrence.
pub const CERTIFICATION_POINTS: u32 = 2;

/// The four component scores for one extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience: u32,
    pub skills: u32,
    pub certifications: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Passed,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => write!(f, "Passed"),
            Status::Rejected => write!(f, "Rejected"),
        }
    }
}

/// One scored candidate. Immutable once created; a new analysis run
/// replaces the previous records entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub file_name: String,
    pub experience_score: u32,
    pub skill_score: u32,
    pub certification_score: u32,
    pub total_score: u32,
    pub status: Status,
}

/// Scores extracted CV text against the configured keyword rules.
pub struct Scorer {
    skill_matcher: AhoCorasick,
    certification_matcher: AhoCorasick,
    experience_keyword: String,
    threshold: u32,
}

impl Scorer {
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        // Skills are matched case-sensitively, certifications are not.
        let skill_matcher = AhoCorasick::new(&config.skills).map_err(|e| {
            CvAnalyzerError::Configuration(format!("Failed to build skill matcher: {}", e))
        })?;

        let certification_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build([config.certification_keyword.as_str()])
            .map_err(|e| {
                CvAnalyzerError::Configuration(format!(
                    "Failed to build certification matcher: {}",
                    e
                ))
            })?;

        Ok(Self {
            skill_matcher,
            certification_matcher,
            experience_keyword: config.experience_keyword.clone(),
            threshold: config.threshold,
        })
    }

    /// Compute the four component scores for one text.
    pub fn score(&self, text: &str) -> ScoreBreakdown {
        let experience = if text.contains(&self.experience_keyword) {
            EXPERIENCE_POINTS
        } else {
            0
        };

        // Each skill counts once no matter how often it repeats.
        let mut skills_found: HashSet<usize> = HashSet::new();
        for skill_match in self.skill_matcher.find_iter(text) {
            skills_found.insert(skill_match.pattern().as_usize());
        }
        let skills = SKILL_POINTS * skills_found.len() as u32;

        // Non-overlapping occurrences, ASCII case-insensitive.
        let cert_occurrences = self.certification_matcher.find_iter(text).count() as u32;
        let certifications = CERTIFICATION_POINTS * cert_occurrences;

        ScoreBreakdown {
            experience,
            skills,
            certifications,
            total: experience + skills + certifications,
        }
    }

    /// Score a text and derive the pass/reject status for the record.
    pub fn evaluate(&self, file_name: &str, text: &str) -> CandidateRecord {
        let breakdown = self.score(text);
        let status = if breakdown.total >= self.threshold {
            Status::Passed
        } else {
            Status::Rejected
        };

        CandidateRecord {
            file_name: file_name.to_string(),
            experience_score: breakdown.experience,
            skill_score: breakdown.skills,
            certification_score: breakdown.certifications,
            total_score: breakdown.total,
            status,
        }
    }
}
