//! Two-candidate comparison and result building

use crate::scoring::scorer::CandidateRecord;
use serde::{Deserialize, Serialize};

/// Comparison outcome for a pair of scored candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    BothBelowThreshold,
    Tie,
    Winner { file_name: String },
}

impl Outcome {
    /// User-facing message for the outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::BothBelowThreshold => {
                "Both candidates are below the required threshold.".to_string()
            }
            Outcome::Tie => "Both candidates have the same score.".to_string(),
            Outcome::Winner { file_name } => format!("Best Candidate: {}", file_name),
        }
    }
}

/// One analysis run: the ordered pair of records plus the derived outcome.
/// Built after both records are scored, consumed by the exporters, and
/// discarded on the next run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub records: [CandidateRecord; 2],
    pub outcome: Outcome,
}

impl AnalysisResult {
    /// Derive the three-way outcome. The first branch keys off a zero
    /// minimum, not the pass threshold: one candidate scoring zero labels
    /// the whole pair below threshold even if the other passed. Known
    /// inconsistency with the per-record status, kept intact.
    pub fn from_records(records: [CandidateRecord; 2]) -> Self {
        let min_total = records[0].total_score.min(records[1].total_score);

        let outcome = if min_total == 0 {
            Outcome::BothBelowThreshold
        } else if records[0].total_score == records[1].total_score {
            Outcome::Tie
        } else {
            let winner = if records[0].total_score > records[1].total_score {
                &records[0]
            } else {
                &records[1]
            };
            Outcome::Winner {
                file_name: winner.file_name.clone(),
            }
        };

        Self { records, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::scorer::Status;

    fn record(file_name: &str, total: u32) -> CandidateRecord {
        // Component split is irrelevant to the comparator; park the total
        // in the certification score to keep the invariant intact.
        CandidateRecord {
            file_name: file_name.to_string(),
            experience_score: 0,
            skill_score: 0,
            certification_score: total,
            total_score: total,
            status: if total >= 10 {
                Status::Passed
            } else {
                Status::Rejected
            },
        }
    }

    #[test]
    fn test_zero_minimum_is_below_threshold() {
        let result = AnalysisResult::from_records([record("a.pdf", 0), record("b.pdf", 7)]);
        assert_eq!(result.outcome, Outcome::BothBelowThreshold);
    }

    #[test]
    fn test_zero_minimum_overrides_a_passing_record() {
        // b.pdf passed on its own, the outcome still reports both below.
        let result = AnalysisResult::from_records([record("a.pdf", 0), record("b.pdf", 12)]);
        assert_eq!(result.outcome, Outcome::BothBelowThreshold);
    }

    #[test]
    fn test_equal_totals_tie() {
        let result = AnalysisResult::from_records([record("a.pdf", 12), record("b.pdf", 12)]);
        assert_eq!(result.outcome, Outcome::Tie);
    }

    #[test]
    fn test_winner_is_max_total() {
        let result = AnalysisResult::from_records([record("a.pdf", 8), record("b.pdf", 15)]);
        assert_eq!(
            result.outcome,
            Outcome::Winner {
                file_name: "b.pdf".to_string()
            }
        );

        let result = AnalysisResult::from_records([record("a.pdf", 15), record("b.pdf", 8)]);
        assert_eq!(
            result.outcome,
            Outcome::Winner {
                file_name: "a.pdf".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Outcome::BothBelowThreshold.message(),
            "Both candidates are below the required threshold."
        );
        assert_eq!(Outcome::Tie.message(), "Both candidates have the same score.");
        assert_eq!(
            Outcome::Winner {
                file_name: "cv.pdf".to_string()
            }
            .message(),
            "Best Candidate: cv.pdf"
        );
    }
}
